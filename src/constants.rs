/// 负载结束标记。
/// 提取时遇到的第一个全零字节即视为消息结束，因此负载中不能包含字面量 `0x00`。
pub const TERMINATOR: u8 = 0x00;

/// 每个字节展开后的比特数。每个比特占用一个像素采样的最低位。
pub const BITS_PER_BYTE: usize = 8;

/// 取出采样最低有效位的掩码。
pub const LSB_MASK: u8 = 0x01;

/// 清除采样最低有效位的掩码。
pub const LSB_CLEAR_MASK: u8 = 0xFE;

/// 载体图像展平后每个像素的通道数 (R, G, B)。
pub const RGB_CHANNELS: usize = 3;

/// 未指定输出路径时，隐写图像文件名的前缀。
pub const HIDE_PREFIX: &str = "doctored_";

/// 未指定输出路径时，恢复文本文件名的前缀。
pub const RECOVER_PREFIX: &str = "recovered_";

/// 恢复文本文件的默认扩展名。
pub const RECOVER_EXTENSION: &str = "txt";
