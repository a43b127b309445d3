use std::path::PathBuf;
use std::time::Duration;

use chrono::Local;
use rconfig::{AppConfig, ConfigWatcher, ConfigWatcherHandle};
use rlog::{info, warn, LevelHandle};
use tokio::net::TcpListener;

use produtos_service::server::{self, AppState};
use produtos_service::{app, db, store, ServerError};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let started_at = Local::now();

    // .env 先于环境变量读取
    let builder = AppConfig::new().add_dotenv();
    let env = std::env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());
    let base = PathBuf::from(std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config".to_string()))
        .join("application");

    let builder = builder
        .add_default(&base)
        .add_environment_file(&env, &base)
        .add_environment();
    let app_config = builder.build()?;

    let log = rlog::init(&app_config.logging)?;
    info!(env = %env, version = %app_config.version, "Configuration loaded");

    // 连接数据库
    info!("Connecting to database...");
    let pool = rdatabase::create_pool(&app_config.database).await?;
    rdatabase::check_connection(&pool).await?;
    db::init_schema(&pool).await?;

    let stores = store::Container::new(pool.clone());
    let apps = app::Container::new(&stores, app_config.version.clone(), started_at);
    let router = server::create_app(AppState::new(apps));

    let watcher = app_config
        .watch
        .enabled
        .then(|| start_watcher(builder, app_config.clone(), log.level_handle()));

    // 启动服务器
    let addr = app_config.server.addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("🚀 Microservice started on: {}", &addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    if let Some(watcher) = watcher {
        watcher.stop().await?;
    }
    pool.close().await;
    info!("Microservice stopped");

    Ok(())
}

// 配置变化时同步日志级别
fn start_watcher(builder: rconfig::AppConfigBuilder, initial: AppConfig, level: LevelHandle) -> ConfigWatcherHandle {
    let interval = Duration::from_secs(initial.watch.interval_secs);
    let handle = ConfigWatcher::new(builder, initial).with_interval(interval).start();

    let mut rx = handle.subscribe();
    tokio::spawn(async move {
        let mut current = rx.borrow().logging.level.clone();
        while rx.changed().await.is_ok() {
            let next = rx.borrow_and_update().logging.level.clone();
            if next == current {
                continue;
            }
            match level.set_level(&next) {
                Ok(()) => current = next,
                Err(e) => warn!(error = %e, level = %next, "Ignoring invalid log level from reloaded config"),
            }
        }
    });

    handle
}
