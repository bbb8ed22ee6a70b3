//! # 文本编码模块
//!
//! 隐写格式按单字节逐字符存储文本：每个字符写入其码位值 (Latin-1)。
//! 码位大于 255 的字符无法表示，在这里显式拒绝，而不是在嵌入时被悄悄截断。

use crate::constants::TERMINATOR;
use crate::error::TextError;

/// 将文本按每字符一个字节编码。
///
/// # Errors
///
/// 遇到码位超过 `U+00FF` 的字符时返回 [`TextError::Unencodable`]，
/// `position` 为该字符在文本中的字符序号。
pub fn encode(text: &str) -> Result<Vec<u8>, TextError> {
    text.chars()
        .enumerate()
        .map(|(position, character)| {
            u8::try_from(character).map_err(|_| TextError::Unencodable {
                character,
                position,
            })
        })
        .collect()
}

/// 将字节按码位还原为文本，任何字节序列都能解码。
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// 负载中是否含有与结束标记相同的字节，提取时消息会在该处被截断。
pub fn contains_terminator(bytes: &[u8]) -> bool {
    bytes.contains(&TERMINATOR)
}
