//! 配置文件热更新
//!
//! 后台任务定期检查配置文件的修改时间，发生变化时用同一个构建器重新加载，
//! 并通过 `tokio::sync::watch` 发布新的配置快照。重新加载失败时保留旧快照。

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;

use crate::{AppConfig, AppConfigBuilder, ConfigError};

// tokio 的 interval 不接受零周期
const MIN_INTERVAL: Duration = Duration::from_millis(1);

pub struct ConfigWatcher {
    initial: AppConfig,
    builder: AppConfigBuilder,
    file_paths: Vec<PathBuf>,
    check_interval: Duration,
}

impl ConfigWatcher {
    /// 默认监听构建器中已加入的全部配置文件
    pub fn new(builder: AppConfigBuilder, initial: AppConfig) -> Self {
        let file_paths = builder.files().to_vec();
        Self {
            initial,
            builder,
            file_paths,
            check_interval: Duration::from_secs(30),
        }
    }

    pub fn watch_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path_buf = path.as_ref().to_path_buf();
        if !self.file_paths.contains(&path_buf) {
            self.file_paths.push(path_buf);
        }
        self
    }

    /// 检查间隔，小于 1ms 时按 1ms 处理
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.check_interval = interval.max(MIN_INTERVAL);
        self
    }

    // 启动监控任务，需要在 tokio 运行时内调用
    // 修改时间基线在返回前取得，之后的文件改动都会被检测到
    pub fn start(self) -> ConfigWatcherHandle {
        let (tx, rx) = watch::channel(Arc::new(self.initial));
        let (stop_tx, stop_rx) = oneshot::channel();
        let baseline = read_mtimes(&self.file_paths);

        let task = tokio::spawn(watch_loop(
            self.builder,
            self.file_paths,
            baseline,
            self.check_interval,
            tx,
            stop_rx,
        ));

        ConfigWatcherHandle { rx, stop_signal: stop_tx, task }
    }
}

async fn watch_loop(
    builder: AppConfigBuilder,
    file_paths: Vec<PathBuf>,
    mut mtimes: HashMap<PathBuf, Option<SystemTime>>,
    check_interval: Duration,
    tx: watch::Sender<Arc<AppConfig>>,
    mut stop_rx: oneshot::Receiver<()>,
) {
    let mut ticker = tokio::time::interval(check_interval);
    // 第一次 tick 立即返回
    ticker.tick().await;

    tracing::info!(files = ?file_paths, interval = ?check_interval, "Config watcher started");

    loop {
        tokio::select! {
            // 收到停止信号或句柄被丢弃
            _ = &mut stop_rx => break,
            _ = ticker.tick() => {}
        }

        let current = read_mtimes(&file_paths);
        if current == mtimes {
            continue;
        }
        mtimes = current;

        match builder.build() {
            Ok(new_config) => {
                tx.send_replace(Arc::new(new_config));
                tracing::info!("Configuration reloaded successfully");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to reload configuration, keeping previous snapshot");
            }
        }
    }

    tracing::info!("Config watcher stopped");
}

fn read_mtimes(paths: &[PathBuf]) -> HashMap<PathBuf, Option<SystemTime>> {
    let mut mtimes = HashMap::with_capacity(paths.len());
    for path in paths {
        let mtime = match std::fs::metadata(path) {
            Ok(metadata) => metadata.modified().ok(),
            Err(_) => None,
        };
        mtimes.insert(path.clone(), mtime);
    }
    mtimes
}

// 提供对监控器的控制
pub struct ConfigWatcherHandle {
    rx: watch::Receiver<Arc<AppConfig>>,
    stop_signal: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl ConfigWatcherHandle {
    /// 订阅配置变化
    pub fn subscribe(&self) -> watch::Receiver<Arc<AppConfig>> {
        self.rx.clone()
    }

    /// 当前配置快照
    pub fn current(&self) -> Arc<AppConfig> {
        self.rx.borrow().clone()
    }

    // 停止监控并等待任务结束
    pub async fn stop(self) -> Result<(), ConfigError> {
        let _ = self.stop_signal.send(());
        self.task
            .await
            .map_err(|e| ConfigError::WatcherError(e.to_string()))
    }
}
