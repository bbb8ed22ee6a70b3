//! # 比特分组模块
//!
//! 字节与比特序列之间的互相转换，与图像的采样顺序无关。
//! 所有转换都按最高有效位在前 (MSB-first) 的顺序进行。

use crate::constants::{BITS_PER_BYTE, TERMINATOR};
use crate::error::ExtractError;

/// 将字节序列展开为比特序列，每个字节按 MSB-first 产生 8 个比特。
pub fn to_bits(bytes: &[u8]) -> impl Iterator<Item = bool> + '_ {
    bytes
        .iter()
        .flat_map(|&byte| (0..BITS_PER_BYTE).rev().map(move |shift| (byte >> shift) & 1 == 1))
}

/// 构建写入载体的完整比特流：负载比特后跟结束标记的 8 个比特。
///
/// 产生的比特数恒为 `8 * (payload.len() + 1)`。
pub fn bitstream(payload: &[u8]) -> impl Iterator<Item = bool> + '_ {
    to_bits(payload).chain(to_bits(&[TERMINATOR]))
}

/// 将比特序列按 MSB-first 重新组合为字节。
///
/// # Errors
///
/// 比特数不是 8 的倍数时返回 [`ExtractError::MalformedBitstream`]。
pub fn from_bits(bits: &[bool]) -> Result<Vec<u8>, ExtractError> {
    if bits.len() % BITS_PER_BYTE != 0 {
        return Err(ExtractError::MalformedBitstream { bits: bits.len() });
    }

    Ok(bits
        .chunks_exact(BITS_PER_BYTE)
        .map(|group| group.iter().fold(0u8, |byte, &bit| (byte << 1) | bit as u8))
        .collect())
}
