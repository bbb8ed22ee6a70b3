//! # 载体图像模块
//!
//! 负责图像文件与展平像素缓冲区之间的转换。
//! 所有图像都会被转换为 RGB8，缓冲区按行优先、通道次之排列 (R,G,B,R,G,B,…)。

use crate::constants::RGB_CHANNELS;
use anyhow::{Context, Result};
use image::RgbImage;
use std::path::Path;

/// 一张已解码的载体图像。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carrier {
    pub width: u32,
    pub height: u32,
    pub samples: Vec<u8>,
}

impl Carrier {
    /// 打开并解码图像文件，转换为 RGB8。
    ///
    /// # Errors
    ///
    /// 文件无法读取或格式不受支持时返回错误。
    pub fn open(path: &Path) -> Result<Self> {
        let image = image::open(path)
            .with_context(|| format!("Unable to decode image: {}", path.display()))?
            .to_rgb8();
        let (width, height) = image.dimensions();

        Ok(Self {
            width,
            height,
            samples: image.into_raw(),
        })
    }

    /// 由展平的采样缓冲区构建载体。
    ///
    /// # Errors
    ///
    /// 缓冲区长度不等于 `width * height * 3` 时返回错误。
    pub fn from_samples(width: u32, height: u32, samples: Vec<u8>) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(RGB_CHANNELS));

        anyhow::ensure!(
            expected == Some(samples.len()),
            "Pixel buffer of {} samples does not match a {}x{} RGB image",
            samples.len(),
            width,
            height
        );

        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// 按目标路径的扩展名重新编码并写入图像文件。
    ///
    /// 隐写数据只能在无损格式中保留，例如 PNG 和 BMP。
    pub fn save(&self, path: &Path) -> Result<()> {
        let image = RgbImage::from_raw(self.width, self.height, self.samples.clone())
            .context("Pixel buffer does not match the image dimensions")?;

        image
            .save(path)
            .with_context(|| format!("Unable to encode image: {}", path.display()))
    }
}
