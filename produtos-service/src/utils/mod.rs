pub mod datetime;
pub mod datetime_format;
pub mod id;
