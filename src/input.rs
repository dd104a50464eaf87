// 该文件是 Guying （骨影） 项目的一部分。
// src/input.rs - 图像文件输入
//
// 本文件根据 Apache 许可证第 2.0 版（以下简称“许可证”）授权使用；
// 除非遵守该许可证条款，否则您不得使用本文件。
// 您可通过以下网址获取许可证副本：
// http://www.apache.org/licenses/LICENSE-2.0
// 除非适用法律要求或书面同意，根据本许可协议分发的软件均按“原样”提供，
// 不附带任何形式的明示或暗示的保证或条件。
// 有关许可权限与限制的具体条款，请参阅本许可协议。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, Wareless Group

use std::path::Path;

use image::{ImageReader, RgbImage};
use thiserror::Error;
use tracing::error;

/// 图像加载错误
///
/// 整条流水线的唯一入口错误：路径不存在、文件不可读或数据无法解码。
/// 不做重试，直接返回给调用方展示。
#[derive(Error, Debug)]
pub enum ImageLoadError {
  #[error("I/O 错误: {0}")]
  IoError(std::io::Error),
  #[error("图像解码错误: {0}")]
  DecodeError(image::ImageError),
}

impl From<std::io::Error> for ImageLoadError {
  fn from(err: std::io::Error) -> Self {
    ImageLoadError::IoError(err)
  }
}

impl From<image::ImageError> for ImageLoadError {
  fn from(err: image::ImageError) -> Self {
    ImageLoadError::DecodeError(err)
  }
}

/// 从文件路径加载 RGB 图像（支持 JPEG 与 PNG）
pub fn load_image(path: &Path) -> Result<RgbImage, ImageLoadError> {
  let reader = ImageReader::open(path).map_err(|err| {
    error!("无法打开图像文件 {}: {}", path.display(), err);
    ImageLoadError::from(err)
  })?;

  let image = reader.decode().map_err(|err| {
    error!("无法解码图像文件 {}: {}", path.display(), err);
    ImageLoadError::from(err)
  })?;

  Ok(image.to_rgb8())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_file_is_io_error() {
    let err = load_image(Path::new("/no/such/radiograph.png")).unwrap_err();
    assert!(matches!(err, ImageLoadError::IoError(_)));
  }

  #[test]
  fn undecodable_file_is_decode_error() {
    let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
    std::io::Write::write_all(&mut file, b"not a png at all").unwrap();
    let err = load_image(file.path()).unwrap_err();
    assert!(matches!(err, ImageLoadError::DecodeError(_)));
  }
}
