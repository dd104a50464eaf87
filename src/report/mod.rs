// 该文件是 Guying （骨影） 项目的一部分。
// src/report/mod.rs - 报告模块
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

pub mod layout;
mod overlay;
mod pdf;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use image::Rgb;
use thiserror::Error;
use tracing::info;

use crate::classifier::ClassificationResult;
use crate::detector::Contour;
use crate::input::{self, ImageLoadError};

/// 患者信息：四个固定的自由文本字段，不做任何校验，仅原样写入报告
#[derive(Debug, Clone, Default)]
pub struct PatientRecord {
  pub name: String,
  pub age: String,
  pub gender: String,
  pub technician: String,
}

/// 报告数据（纯数据结构，排版逻辑可脱离磁盘 I/O 测试）
#[derive(Debug, Clone)]
pub struct Report {
  /// 生成时刻：同时决定扫描时间行与输出文件名
  pub generated_at: DateTime<Local>,
  pub patient: PatientRecord,
  pub classification: ClassificationResult,
  pub summary: String,
}

impl Report {
  /// 输出文件名，秒级粒度内不冲突
  pub fn file_name(&self) -> String {
    format!(
      "fracture_report_{}.pdf",
      self.generated_at.format("%Y%m%d_%H%M%S")
    )
  }
}

/// 报告生成错误
#[derive(Error, Debug)]
pub enum ReportError {
  #[error("图像加载错误: {0}")]
  ImageLoad(#[from] ImageLoadError),
  #[error("图像编码错误: {0}")]
  ImageEncode(#[from] image::ImageError),
  #[error("嵌入图像解码错误: {0}")]
  EmbedDecode(#[from] printpdf::image_crate::ImageError),
  #[error("I/O 错误: {0}")]
  Io(#[from] std::io::Error),
  #[error("PDF 生成错误: {0}")]
  Pdf(#[from] printpdf::Error),
}

/// 报告排版器
///
/// 单页 US Letter 版式：标题、署名、扫描时间、患者信息、分类结果、
/// 结论文本，以及页面下方固定区域内的轮廓叠加图。
pub struct ReportComposer {
  /// 轮廓高亮颜色
  highlight: Rgb<u8>,
}

impl Default for ReportComposer {
  fn default() -> Self {
    Self::new()
  }
}

impl ReportComposer {
  /// 创建一个新的报告排版器
  pub fn new() -> Self {
    Self {
      highlight: overlay::HIGHLIGHT_COLOR,
    }
  }

  /// 组装报告数据结构（纯函数部分，不触碰磁盘）
  pub fn build(
    &self,
    patient: PatientRecord,
    classification: ClassificationResult,
    summary: String,
  ) -> Report {
    Report {
      generated_at: Local::now(),
      patient,
      classification,
      summary,
    }
  }

  /// 渲染报告为 PDF 字节流
  ///
  /// 叠加图会先落为临时 PNG 文件再嵌入；该临时文件在函数返回时
  /// （无论成功或失败）随作用域删除。
  pub fn render(
    &self,
    image_path: &Path,
    report: &Report,
    contours: &[Contour],
  ) -> Result<Vec<u8>, ReportError> {
    let mut annotated = input::load_image(image_path)?;
    overlay::draw_contours(&mut annotated, contours, self.highlight);

    let overlay_file = tempfile::Builder::new()
      .prefix("fracture_overlay_")
      .suffix(".png")
      .tempfile()?;
    annotated.save(overlay_file.path())?;

    let spans = layout::page_spans(report);
    pdf::render_document(&spans, overlay_file.path(), layout::IMAGE_SLOT)
  }

  /// 生成 PDF 报告文件并返回输出路径
  ///
  /// 文件写入当前工作目录，文件名内嵌生成时间戳。
  pub fn compose(
    &self,
    image_path: &Path,
    report: &Report,
    contours: &[Contour],
  ) -> Result<PathBuf, ReportError> {
    let bytes = self.render(image_path, report, contours)?;
    let output_path = PathBuf::from(report.file_name());
    std::fs::write(&output_path, bytes)?;

    info!("PDF report saved as {}", output_path.display());
    Ok(output_path)
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use crate::classifier::Severity;

  use super::*;

  #[test]
  fn file_name_embeds_timestamp() {
    let report = Report {
      generated_at: Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
      patient: PatientRecord::default(),
      classification: ClassificationResult {
        fractured: false,
        severity: Severity::NotApplicable,
        bone_type: "metacarpal",
      },
      summary: String::new(),
    };

    assert_eq!(report.file_name(), "fracture_report_20250102_030405.pdf");
  }
}
