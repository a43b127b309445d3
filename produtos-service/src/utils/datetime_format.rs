//! 提供 NaiveDateTime 的自定义序列化和反序列化功能
//! 使用格式化日期时间字符串: DD-MM-YYYYThh:mm:ss

use chrono::NaiveDateTime;
use serde::{self, Deserialize, Deserializer, Serializer};

use super::datetime::formats;

/// 将 NaiveDateTime 序列化为对外格式字符串
pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let s = date.format(formats::PRODUTO).to_string();
    serializer.serialize_str(&s)
}

/// 从多种可能的格式解析日期时间字符串
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse(&s).map_err(serde::de::Error::custom)
}

fn parse(s: &str) -> Result<NaiveDateTime, String> {
    formats::ACCEPTED_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .ok_or_else(|| format!("data/hora '{}' em formato inválido, esperado DD-MM-YYYYThh:mm:ss", s))
}

/// 可选日期时间序列化（处理Option<NaiveDateTime>）
pub mod opt {
    use super::*;

    pub fn serialize<S>(opt_date: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match opt_date {
            Some(date) => super::serialize(date, serializer),
            None => serializer.serialize_none(),
        }
    }

    /// null 与空字符串都视为未设置
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt_str = Option::<String>::deserialize(deserializer)?;

        match opt_str {
            Some(s) if s.is_empty() => Ok(None),
            Some(s) => parse(&s).map(Some).map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
