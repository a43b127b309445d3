//! 时间工具模块

use chrono::{DateTime, Local, NaiveDateTime, SubsecRound};

/// 常用日期时间格式常量
pub mod formats {
    /// 对外JSON使用的格式: DD-MM-YYYYThh:mm:ss
    pub const PRODUTO: &str = "%d-%m-%YT%H:%M:%S";
    /// ISO 日期时间格式: YYYY-MM-DDThh:mm:ss
    pub const ISO_DATETIME: &str = "%Y-%m-%dT%H:%M:%S";
    /// 标准日期时间格式: YYYY-MM-DD HH:MM:SS
    pub const DATETIME: &str = "%Y-%m-%d %H:%M:%S";

    /// 反序列化支持的格式列表
    pub const ACCEPTED_FORMATS: &[&str] = &[
        PRODUTO,      // 对外格式
        ISO_DATETIME, // ISO格式
        DATETIME,     // 标准格式
    ];
}

/// 时间工具类
pub struct TimeUtil;

impl TimeUtil {
    /// 获取当前本地时间
    pub fn now() -> DateTime<Local> {
        Local::now()
    }

    /// 当前本地时间，精确到秒（与 DATETIME 列一致）
    pub fn now_naive() -> NaiveDateTime {
        Self::now().naive_local().trunc_subsecs(0)
    }

    /// 两个时间点之间的秒数，不会为负
    pub fn seconds_since(start: DateTime<Local>) -> u64 {
        (Self::now() - start).num_seconds().max(0) as u64
    }
}
