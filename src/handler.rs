//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::capacity::max_payload_len;
use crate::carrier::Carrier;
use crate::cli::{CapacityArgs, HideArgs, RecoverArgs};
use crate::constants::{HIDE_PREFIX, RECOVER_EXTENSION, RECOVER_PREFIX};
use crate::error::{CapacityError, ExtractError};
use crate::steganography::{embed_in_place, extract};
use crate::text;
use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// 根据输入文件生成默认输出路径：与输入同目录，文件名加上 `prefix`。
///
/// `extension` 为 `None` 时沿用输入文件的扩展名。
fn default_output_path(input: &Path, prefix: &str, extension: Option<&str>) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let extension = extension
        .map(str::to_owned)
        .or_else(|| input.extension().map(|ext| ext.to_string_lossy().into_owned()));

    match extension {
        Some(ext) => input.with_file_name(format!("{prefix}{stem}.{ext}")),
        None => input.with_file_name(format!("{prefix}{stem}")),
    }
}

/// 输出文件已存在且未指定 `--force` 时拒绝继续。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {} \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 处理 'Hide' 命令的执行逻辑。
///
/// 读取载体图像和文本，将文本按单字节编码后写入像素的最低位，
/// 最后将结果保存为新的图像文件。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输出文件已存在且未指定 `--force`。
/// * 无法读取输入的图像或文本文件，或文本为空。
/// * 文本中含有无法用单字节表示的字符。
/// * 图像没有足够的空间来隐藏文本。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let dest = args
        .dest
        .unwrap_or_else(|| default_output_path(&args.image, HIDE_PREFIX, None));
    ensure_writable(&dest, args.force)?;

    let message = match (&args.message, &args.text) {
        (Some(message), _) => message.clone(),
        (None, Some(path)) => {
            let raw = fs::read(path).with_context(|| {
                format!(
                    "Unable to read text file: {}",
                    path.to_string_lossy().red().bold()
                )
            })?;
            // 非 UTF-8 的文本文件按单字节 (Latin-1) 解读。
            String::from_utf8(raw).unwrap_or_else(|err| {
                debug!("text file is not UTF-8, reading it as Latin-1");
                text::decode(err.as_bytes())
            })
        }
        (None, None) => anyhow::bail!("No text given. Use --text or --message."),
    };

    anyhow::ensure!(
        !message.is_empty(),
        "No text to hide. Please provide a non-empty message."
    );

    let payload = text::encode(&message).context(
        "The text contains characters outside the single-byte range (U+0000..U+00FF).",
    )?;
    if text::contains_terminator(&payload) {
        warn!("payload contains a NUL byte; recovery will stop at the first one");
    }

    let mut carrier = Carrier::open(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;
    debug!(
        "carrier {}x{} with {} samples",
        carrier.width,
        carrier.height,
        carrier.samples.len()
    );

    let consumed = match embed_in_place(&mut carrier.samples, &payload) {
        Ok(consumed) => consumed,
        Err(CapacityError::PayloadTooLarge {
            required,
            available,
        }) => anyhow::bail!(
            "Not enough space in the image to hide the text. \nRequired: {}, Available: {} (at most {} bytes)",
            required.to_string().red().bold(),
            available.to_string().green().bold(),
            max_payload_len(available).to_string().green().bold()
        ),
    };
    info!(
        "embedded {} bytes into {} samples",
        payload.len(),
        consumed
    );

    carrier.save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 读取经过隐写的图像，从像素最低位中恢复文本，写入目标文本文件并打印出来。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输出文件已存在且未指定 `--force`。
/// * 无法读取输入的图像文件。
/// * 图像中没有隐藏消息，或消息已损坏。
/// * 无法写入到目标文本文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let dest = args.text.unwrap_or_else(|| {
        default_output_path(&args.image, RECOVER_PREFIX, Some(RECOVER_EXTENSION))
    });
    ensure_writable(&dest, args.force)?;

    let carrier = Carrier::open(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let payload = extract(&carrier.samples).map_err(|err| match err {
        ExtractError::NoTerminatorFound { scanned } => anyhow!(
            "No hidden message found in '{}' after scanning {} samples.",
            args.image.to_string_lossy().red().bold(),
            scanned
        ),
        other => anyhow::Error::new(other).context(format!(
            "The hidden message in '{}' is corrupted.",
            args.image.to_string_lossy().red().bold()
        )),
    })?;
    info!("recovered {} bytes", payload.len());

    let recovered = text::decode(&payload);

    fs::write(&dest, &recovered).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully recovered and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    println!("{}", recovered);

    Ok(())
}

/// 处理 'Capacity' 命令：报告图像的尺寸以及最多能隐藏的字节数。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let carrier = Carrier::open(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "{}: {}x{} pixels, {} samples, room for {} bytes of text",
        args.image.to_string_lossy().bold(),
        carrier.width,
        carrier.height,
        carrier.samples.len(),
        max_payload_len(carrier.samples.len()).to_string().green().bold()
    );

    Ok(())
}
