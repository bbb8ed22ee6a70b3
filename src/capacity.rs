use crate::constants::BITS_PER_BYTE;
use crate::error::CapacityError;

/// 计算嵌入 `payload_len` 字节所需的载体采样数，并检查载体是否足够。
///
/// 所需采样数为 `8 * (payload_len + 1)`，多出的一个字节是结束标记。
/// 计算溢出时同样视为载体容量不足。
///
/// # Errors
///
/// 所需采样数超过 `buffer_len` 时返回 [`CapacityError::PayloadTooLarge`]。
pub fn plan_capacity(payload_len: usize, buffer_len: usize) -> Result<usize, CapacityError> {
    let required = payload_len
        .checked_add(1)
        .and_then(|bytes| bytes.checked_mul(BITS_PER_BYTE));

    match required {
        Some(required) if required <= buffer_len => Ok(required),
        _ => Err(CapacityError::PayloadTooLarge {
            required: required.unwrap_or(usize::MAX),
            available: buffer_len,
        }),
    }
}

/// 长度为 `buffer_len` 的载体最多能容纳的负载字节数。
pub fn max_payload_len(buffer_len: usize) -> usize {
    (buffer_len / BITS_PER_BYTE).saturating_sub(1)
}
