//! # lsb_text 库
//!
//! 本库包含 LSB 文本隐写工具的核心逻辑。
//!
//! 编解码核心 ([`steganography`]、[`capacity`]、[`bits`]) 是无状态的纯函数，
//! 只操作内存中的展平像素缓冲区和字节负载；图像文件读写、文本编码和命令行交互
//! 分别由 [`carrier`]、[`text`]、[`handler`] 负责。
//!
//! 隐写格式：每个采样的最低位携带一个比特，字节按 MSB-first 展开，
//! 负载之后紧跟一个 `0x00` 结束标记，没有长度前缀。

pub mod bits;
pub mod capacity;
pub mod carrier;
pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod steganography;
pub mod text;

pub use capacity::plan_capacity;
pub use error::{CapacityError, ExtractError, TextError};
pub use steganography::{embed, embed_in_place, extract};
