// 该文件是 Guying （骨影） 项目的一部分。
// src/classifier.rs - 轮廓计数启发式分类
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use std::fmt;
use std::path::Path;

/// 骨折判定的轮廓数量阈值（严格大于）
pub const FRACTURE_CONTOUR_THRESHOLD: usize = 10;
/// severe 档位阈值（严格大于）
const SEVERE_CONTOUR_THRESHOLD: usize = 15;
/// moderate 档位阈值（严格大于）
const MODERATE_CONTOUR_THRESHOLD: usize = 7;

/// 严重程度档位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
  Mild,
  Moderate,
  Severe,
  /// 未判定骨折时的占位值
  NotApplicable,
}

impl fmt::Display for Severity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let text = match self {
      Severity::Mild => "mild",
      Severity::Moderate => "moderate",
      Severity::Severe => "severe",
      Severity::NotApplicable => "N/A",
    };
    write!(f, "{}", text)
  }
}

/// 完整分类结果
#[derive(Debug, Clone)]
pub struct ClassificationResult {
  pub fractured: bool,
  pub severity: Severity,
  pub bone_type: &'static str,
}

/// 骨折判定：轮廓数量严格大于固定阈值
///
/// 产品名里的 “AI” 全部在这一行：固定线性阈值，无学习、无置信度。
pub fn classify_fracture(contour_count: usize) -> bool {
  contour_count > FRACTURE_CONTOUR_THRESHOLD
}

/// 严重程度分档，仅应在判定骨折后调用
///
/// 骨折判定要求轮廓数大于 10，因此 mild 分支在正常流程中不可达。
/// 这是既有启发式的一部分，保留原样而非悄悄移除。
pub fn classify_severity(contour_count: usize) -> Severity {
  if contour_count > SEVERE_CONTOUR_THRESHOLD {
    Severity::Severe
  } else if contour_count > MODERATE_CONTOUR_THRESHOLD {
    Severity::Moderate
  } else {
    Severity::Mild
  }
}

/// 骨型分类桩：无论图像内容如何，始终返回同一固定标签
pub fn classify_bone_type(_image_path: &Path) -> &'static str {
  "metacarpal"
}

/// 由分类结果填充自然语言结论
pub fn generate_summary(bone_type: &str, severity: Severity, fractured: bool) -> String {
  if fractured {
    format!(
      "Fracture detected in the {} bone. Severity level is {}. Immediate medical attention is advised.",
      bone_type, severity
    )
  } else {
    format!(
      "No fracture detected in the {} bone. Bone appears normal based on X-ray analysis.",
      bone_type
    )
  }
}
