use crate::bits::{bitstream, from_bits};
use crate::capacity::plan_capacity;
use crate::constants::{BITS_PER_BYTE, LSB_CLEAR_MASK, LSB_MASK, TERMINATOR};
use crate::error::{CapacityError, ExtractError};

/// 将 `payload` 隐藏进 `buffer` 的副本并返回该副本，`buffer` 本身保持不变。
///
/// 输出与输入长度相同，只有前 `8 * (payload.len() + 1)` 个采样的最低位可能不同。
///
/// # Errors
///
/// 载体容量不足时返回 [`CapacityError::PayloadTooLarge`]。
pub fn embed(buffer: &[u8], payload: &[u8]) -> Result<Vec<u8>, CapacityError> {
    plan_capacity(payload.len(), buffer.len())?;

    let mut output = buffer.to_vec();
    embed_in_place(&mut output, payload)?;
    Ok(output)
}

/// 直接在 `buffer` 上写入负载，返回消耗的采样数。
///
/// 容量检查在第一次写入之前完成，失败时 `buffer` 不会被修改。
///
/// # Errors
///
/// 载体容量不足时返回 [`CapacityError::PayloadTooLarge`]。
pub fn embed_in_place(buffer: &mut [u8], payload: &[u8]) -> Result<usize, CapacityError> {
    let required = plan_capacity(payload.len(), buffer.len())?;

    for (sample, bit) in buffer[..required].iter_mut().zip(bitstream(payload)) {
        *sample = (*sample & LSB_CLEAR_MASK) | bit as u8;
    }

    Ok(required)
}

/// 从 `buffer` 的采样最低位中恢复负载。
///
/// 按顺序累积比特，每凑满一个字节就检查它是否为结束标记。
/// 只保留当前字节的比特，已完成的字节直接进入负载。
/// 全零缓冲区会立刻遇到结束标记，得到空负载。
///
/// # Errors
///
/// * 扫描完缓冲区仍未遇到结束标记时返回 [`ExtractError::NoTerminatorFound`]。
/// * 比特未按字节对齐时返回 [`ExtractError::MalformedBitstream`]。
pub fn extract(buffer: &[u8]) -> Result<Vec<u8>, ExtractError> {
    let mut payload = Vec::new();
    let mut group = Vec::with_capacity(BITS_PER_BYTE);

    for &sample in buffer {
        group.push(sample & LSB_MASK == LSB_MASK);

        if group.len() == BITS_PER_BYTE {
            let byte = from_bits(&group)?[0];
            if byte == TERMINATOR {
                return Ok(payload);
            }
            payload.push(byte);
            group.clear();
        }
    }

    Err(ExtractError::NoTerminatorFound {
        scanned: buffer.len(),
    })
}
