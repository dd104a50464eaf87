// 该文件是 Guying （骨影） 项目的一部分。
// src/report/layout.rs - 固定版式
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

use super::Report;

/// 报告标题
pub const TITLE: &str = "Multiple Bone Fracture Detection";
/// 署名行
pub const ATTRIBUTION: &str = "Model built by Pavithra B, Samyuktha C S";

/// US Letter 页面宽度（point）
pub const PAGE_WIDTH_PT: f32 = 612.0;
/// US Letter 页面高度（point）
pub const PAGE_HEIGHT_PT: f32 = 792.0;

/// 左边距（point），全部文本行共用
const MARGIN_X: f32 = 50.0;
/// 结论文本块的行距（point）
const SUMMARY_LEADING: f32 = 14.0;

/// 内置字体选择（对应 Helvetica 字族）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontKind {
  Regular,
  Bold,
  Oblique,
}

/// 一行文本及其页面坐标（单位 point，原点位于页面左下角）
#[derive(Debug, Clone)]
pub struct TextSpan {
  pub x: f32,
  pub y: f32,
  pub size: f32,
  pub font: FontKind,
  pub text: String,
}

/// 叠加图的固定嵌入区域（point）
#[derive(Debug, Clone, Copy)]
pub struct ImageSlot {
  pub x: f32,
  pub y: f32,
  pub width: f32,
  pub height: f32,
}

/// 叠加图锚定在页面下方，400×250 point
pub const IMAGE_SLOT: ImageSlot = ImageSlot {
  x: 50.0,
  y: 300.0,
  width: 400.0,
  height: 250.0,
};

/// 生成整页文本行
///
/// 坐标与字号取自参考版式，固定不变。
pub fn page_spans(report: &Report) -> Vec<TextSpan> {
  let mut spans = vec![
    span(780.0, 18.0, FontKind::Bold, TITLE.to_string()),
    span(765.0, 12.0, FontKind::Oblique, ATTRIBUTION.to_string()),
    body(
      740.0,
      format!(
        "Scan Date: {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S")
      ),
    ),
    body(720.0, format!("Patient Name: {}", report.patient.name)),
    body(
      700.0,
      format!(
        "Age / Gender: {} / {}",
        report.patient.age, report.patient.gender
      ),
    ),
    body(
      680.0,
      format!("Lab Technician: {}", report.patient.technician),
    ),
    body(660.0, format!("Bone Type: {}", report.classification.bone_type)),
    body(
      640.0,
      format!(
        "Fractured: {}",
        if report.classification.fractured {
          "Yes"
        } else {
          "No"
        }
      ),
    ),
    body(
      620.0,
      format!("Severity: {}", report.classification.severity),
    ),
    body(600.0, "AI Summary:".to_string()),
  ];

  // 结论文本块逐行排版
  for (index, line) in report.summary.split('\n').enumerate() {
    spans.push(span(
      580.0 - (index as f32) * SUMMARY_LEADING,
      12.0,
      FontKind::Oblique,
      line.to_string(),
    ));
  }

  spans
}

fn span(y: f32, size: f32, font: FontKind, text: String) -> TextSpan {
  TextSpan {
    x: MARGIN_X,
    y,
    size,
    font,
    text,
  }
}

fn body(y: f32, text: String) -> TextSpan {
  span(y, 11.0, FontKind::Regular, text)
}

#[cfg(test)]
mod tests {
  use chrono::{Local, TimeZone};

  use crate::classifier::{ClassificationResult, Severity};
  use crate::report::PatientRecord;

  use super::*;

  fn sample_report(fractured: bool) -> Report {
    let severity = if fractured {
      Severity::Moderate
    } else {
      Severity::NotApplicable
    };
    Report {
      generated_at: Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
      patient: PatientRecord {
        name: "Zhang San".to_string(),
        age: "42".to_string(),
        gender: "M".to_string(),
        technician: "Li Si".to_string(),
      },
      classification: ClassificationResult {
        fractured,
        severity,
        bone_type: "metacarpal",
      },
      summary: crate::classifier::generate_summary("metacarpal", severity, fractured),
    }
  }

  fn texts(report: &Report) -> Vec<String> {
    page_spans(report).into_iter().map(|s| s.text).collect()
  }

  #[test]
  fn page_contains_every_field() {
    let report = sample_report(true);
    let texts = texts(&report);

    assert!(texts.contains(&TITLE.to_string()));
    assert!(texts.contains(&ATTRIBUTION.to_string()));
    assert!(texts.contains(&"Scan Date: 2025-01-02 03:04:05".to_string()));
    assert!(texts.contains(&"Patient Name: Zhang San".to_string()));
    assert!(texts.contains(&"Age / Gender: 42 / M".to_string()));
    assert!(texts.contains(&"Lab Technician: Li Si".to_string()));
    assert!(texts.contains(&"Bone Type: metacarpal".to_string()));
    assert!(texts.contains(&"Fractured: Yes".to_string()));
    assert!(texts.contains(&"Severity: moderate".to_string()));
    assert!(texts.contains(&"AI Summary:".to_string()));
    assert!(texts.iter().any(|t| t.starts_with("Fracture detected")));
  }

  #[test]
  fn unfractured_page_shows_not_applicable() {
    let report = sample_report(false);
    let texts = texts(&report);

    assert!(texts.contains(&"Fractured: No".to_string()));
    assert!(texts.contains(&"Severity: N/A".to_string()));
    assert!(texts.iter().any(|t| t.starts_with("No fracture detected")));
  }

  #[test]
  fn title_position_and_font() {
    let report = sample_report(true);
    let spans = page_spans(&report);
    let title = spans.iter().find(|s| s.text == TITLE).unwrap();

    assert_eq!(title.x, 50.0);
    assert_eq!(title.y, 780.0);
    assert_eq!(title.size, 18.0);
    assert_eq!(title.font, FontKind::Bold);
  }

  #[test]
  fn image_slot_is_fixed() {
    assert_eq!(IMAGE_SLOT.x, 50.0);
    assert_eq!(IMAGE_SLOT.y, 300.0);
    assert_eq!(IMAGE_SLOT.width, 400.0);
    assert_eq!(IMAGE_SLOT.height, 250.0);
  }
}
