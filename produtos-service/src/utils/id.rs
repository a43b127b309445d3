//! 产品编码生成
//!
//! 128 位随机值按 5 位一组编码为 26 个字符，字母表避开易混淆字符。

use uuid::Uuid;

const ALPHABET: &[u8; 32] = b"ybndrfg8ejkmcpqxot1uwisza345h769";

/// 编码长度
pub const ID_LEN: usize = 26;

/// 生成新的产品编码
pub fn new_id() -> String {
    encode(Uuid::new_v4().as_u128())
}

// 高位在前，最后一组只有 3 位有效，低位补 0
fn encode(value: u128) -> String {
    (0..ID_LEN)
        .map(|i| {
            let shift = 128 - (i as i32 * 5 + 5);
            let index = if shift >= 0 {
                (value >> shift) & 0x1f
            } else {
                (value << -shift) & 0x1f
            };
            ALPHABET[index as usize] as char
        })
        .collect()
}
