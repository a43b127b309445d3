//! rlog - 基于 tracing 的日志组件
//!
//! 根据 [`LogConfig`] 初始化全局订阅器，支持控制台和按天滚动的文件输出，
//! 日志级别可以在运行时通过 [`LogHandle::set_level`] 调整。

use std::path::Path;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::{Layered, SubscriberExt},
    reload,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

pub use rconfig::presets::logging::{LogConfig, LogFormat};
pub use tracing::{debug, error, info, trace, warn};

#[derive(Error, Debug)]
pub enum LogError {
    #[error("日志系统已初始化: {0}")]
    AlreadyInitialized(String),

    #[error("无效的日志过滤指令: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("日志文件错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("日志订阅器错误: {0}")]
    Subscriber(String),
}

pub type Result<T> = std::result::Result<T, LogError>;

type Base = Layered<reload::Layer<EnvFilter, Registry>, Registry>;
type BoxedLayer = Box<dyn Layer<Base> + Send + Sync + 'static>;

/// 解析过滤指令，例如 `info` 或 `produtos_service=debug,sqlx=warn`
pub fn build_filter(directives: &str) -> Result<EnvFilter> {
    Ok(EnvFilter::try_new(directives)?)
}

/// 初始化日志系统
///
/// `RUST_LOG` 存在时优先于配置中的 `level`。
/// 返回的 [`LogHandle`] 持有文件写入线程的 guard，需要保持到进程退出。
pub fn init(config: &LogConfig) -> Result<LogHandle> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(&config.level)?,
    };
    let (filter, reload_handle) = reload::Layer::new(filter);

    let mut layers: Vec<BoxedLayer> = Vec::new();
    // 保存 WorkerGuard 实例
    let mut guards = Vec::new();

    if config.to_console {
        layers.push(format_layer(config, std::io::stdout, true));
    }

    if config.to_file {
        let (writer, guard) = file_writer(Path::new(&config.file_path))?;
        layers.push(format_layer(config, writer, false));
        guards.push(guard);
    }

    Registry::default()
        .with(filter)
        .with(layers)
        .try_init()
        .map_err(|e| LogError::AlreadyInitialized(e.to_string()))?;

    Ok(LogHandle {
        level: LevelHandle { inner: reload_handle },
        _guards: guards,
    })
}

fn format_layer<W>(config: &LogConfig, writer: W, ansi: bool) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_file(config.show_source_location)
        .with_line_number(config.show_source_location);

    match config.format {
        LogFormat::Json => layer.json().with_current_span(true).boxed(),
        LogFormat::Pretty => layer.pretty().boxed(),
        LogFormat::Text => layer.boxed(),
    }
}

fn file_writer(file_path: &Path) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let dir = file_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = file_path.file_name().ok_or_else(|| {
        LogError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("日志文件路径缺少文件名: {}", file_path.display()),
        ))
    })?;

    // 确保目录存在
    std::fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::daily(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}

/// 初始化后返回的句柄
pub struct LogHandle {
    level: LevelHandle,
    _guards: Vec<WorkerGuard>, // 保持 guards 存活，确保日志正确写入
}

impl LogHandle {
    pub fn set_level(&self, directives: &str) -> Result<()> {
        self.level.set_level(directives)
    }

    /// 可克隆的级别句柄，交给配置热更新任务使用
    pub fn level_handle(&self) -> LevelHandle {
        self.level.clone()
    }
}

#[derive(Clone)]
pub struct LevelHandle {
    inner: reload::Handle<EnvFilter, Registry>,
}

impl LevelHandle {
    /// 替换当前过滤器
    pub fn set_level(&self, directives: &str) -> Result<()> {
        let filter = build_filter(directives)?;
        self.inner
            .reload(filter)
            .map_err(|e| LogError::Subscriber(e.to_string()))?;
        tracing::info!(level = directives, "Log level changed");
        Ok(())
    }

    pub fn current_level(&self) -> Option<String> {
        self.inner.with_current(|filter| filter.to_string()).ok()
    }
}
