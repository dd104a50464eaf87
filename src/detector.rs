// 该文件是 Guying （骨影） 项目的一部分。
// src/detector.rs - 骨折检测流水线
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use std::path::Path;

use image::{GrayImage, RgbImage};
use imageproc::contours::find_contours;
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;
use imageproc::point::Point;
use tracing::info;

use crate::classifier;
use crate::input::{self, ImageLoadError};

/// Canny 边缘检测低阈值。临床定值：修改会改变最终判定结果。
pub const CANNY_LOW_THRESHOLD: f32 = 50.0;
/// Canny 边缘检测高阈值。临床定值：修改会改变最终判定结果。
pub const CANNY_HIGH_THRESHOLD: f32 = 150.0;
/// 与 5×5 高斯核等效的 sigma：0.3*((5-1)*0.5-1)+0.8
const BLUR_SIGMA: f32 = 1.1;

/// 闭合轮廓，点链按渲染顺序排列，且已去除共线冗余点
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
  pub points: Vec<Point<i32>>,
}

/// 单次分析的结果
///
/// 轮廓数量是唯一的下游统计量；边缘图与轮廓同时保留，
/// 供报告排版绘制叠加图使用。
#[derive(Debug, Clone)]
pub struct Analysis {
  /// 是否判定为骨折
  pub fractured: bool,
  /// 提取到的全部轮廓（含各嵌套层级）
  pub contours: Vec<Contour>,
  /// 二值边缘图，尺寸与输入图像一致
  pub edge_map: GrayImage,
}

/// 骨折检测器
///
/// 灰度化 → 高斯模糊 → Canny 边缘 → 全层级轮廓提取。
/// 所有阈值为编译期常量，同一输入必然得到同一输出。
pub struct FractureDetector {
  low_threshold: f32,
  high_threshold: f32,
  blur_sigma: f32,
}

impl Default for FractureDetector {
  fn default() -> Self {
    Self::new()
  }
}

impl FractureDetector {
  /// 创建一个新的骨折检测器
  pub fn new() -> Self {
    Self {
      low_threshold: CANNY_LOW_THRESHOLD,
      high_threshold: CANNY_HIGH_THRESHOLD,
      blur_sigma: BLUR_SIGMA,
    }
  }

  /// 分析一张图像文件
  ///
  /// 图像缺失或无法解码时返回 [`ImageLoadError`]，不产生任何输出文件。
  pub fn analyze(&self, path: &Path) -> Result<Analysis, ImageLoadError> {
    let image = input::load_image(path)?;
    Ok(self.analyze_image(&image))
  }

  /// 分析一张已解码的图像（内存中的纯函数路径，便于测试）
  pub fn analyze_image(&self, image: &RgbImage) -> Analysis {
    let blurred = self.preprocess(image);
    let edge_map = self.detect_edges(&blurred);
    let contours = self.extract_contours(&edge_map);
    let fractured = classifier::classify_fracture(contours.len());

    info!(
      "分析完成: {} 条轮廓, 骨折判定: {}",
      contours.len(),
      fractured
    );

    Analysis {
      fractured,
      contours,
      edge_map,
    }
  }

  /// 预处理：灰度化并做降噪模糊，输出尺寸与输入一致
  fn preprocess(&self, image: &RgbImage) -> GrayImage {
    let gray = image::imageops::grayscale(image);
    gaussian_blur_f32(&gray, self.blur_sigma)
  }

  /// 双阈值边缘检测，输出 0/255 的二值边缘图
  fn detect_edges(&self, blurred: &GrayImage) -> GrayImage {
    canny(blurred, self.low_threshold, self.high_threshold)
  }

  /// 全层级轮廓提取（外边界与孔边界都计入）
  fn extract_contours(&self, edge_map: &GrayImage) -> Vec<Contour> {
    find_contours::<i32>(edge_map)
      .into_iter()
      .map(|contour| Contour {
        points: simplify_chain(contour.points),
      })
      .collect()
  }
}

/// 去除闭合 8 连通点链中方向不变的中间点
///
/// 只压缩点链本身，不改变轮廓数量。
fn simplify_chain(points: Vec<Point<i32>>) -> Vec<Point<i32>> {
  if points.len() <= 2 {
    return points;
  }

  let n = points.len();
  let mut kept = Vec::with_capacity(n);
  for i in 0..n {
    let prev = points[(i + n - 1) % n];
    let cur = points[i];
    let next = points[(i + 1) % n];
    let step_in = (cur.x - prev.x, cur.y - prev.y);
    let step_out = (next.x - cur.x, next.y - cur.y);
    if step_in != step_out {
      kept.push(cur);
    }
  }

  // 整条链方向完全一致时退化保留起点
  if kept.is_empty() {
    kept.push(points[0]);
  }
  kept
}
