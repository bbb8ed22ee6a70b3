//! # 错误类型模块
//!
//! 编解码核心返回的所有错误都是普通值，由调用者决定如何向用户报告。

use thiserror::Error;

/// 容量规划失败：载体中没有足够的采样来容纳负载和结束标记。
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityError {
    #[error("payload needs {required} carrier samples but only {available} are available")]
    PayloadTooLarge { required: usize, available: usize },
}

/// 从载体中提取负载失败。
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    /// 扫描完所有采样也没有遇到结束标记，图像中没有隐藏消息或消息已损坏。
    #[error("no terminator found after scanning {scanned} samples")]
    NoTerminatorFound { scanned: usize },

    /// 结束标记之前的比特数不是 8 的倍数。
    #[error("recovered bitstream of {bits} bits is not byte aligned")]
    MalformedBitstream { bits: usize },
}

/// 文本无法按单字节编码。
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextError {
    #[error("character {character:?} at position {position} cannot be encoded in a single byte")]
    Unencodable { character: char, position: usize },
}
