// 该文件是 Guying （骨影） 项目的一部分。
// src/report/overlay.rs - 轮廓叠加图绘制
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;
use imageproc::point::Point;

use crate::detector::Contour;

/// 轮廓高亮颜色（绿色）
pub const HIGHLIGHT_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
/// 三次偏移绘制，横向与纵向都达到 2 像素线宽
const LINE_OFFSETS: [(i32, i32); 3] = [(0, 0), (1, 0), (0, 1)];

/// 在原图上绘制全部轮廓
pub fn draw_contours(image: &mut RgbImage, contours: &[Contour], color: Rgb<u8>) {
  for contour in contours {
    draw_closed_polyline(image, &contour.points, color);
  }
}

/// 绘制一条闭合折线（末点连回起点），偏移重绘实现 2 像素线宽
fn draw_closed_polyline(image: &mut RgbImage, points: &[Point<i32>], color: Rgb<u8>) {
  if points.is_empty() {
    return;
  }

  if points.len() == 1 {
    // 单点轮廓退化为一个像素
    let p = points[0];
    if p.x >= 0 && p.y >= 0 && (p.x as u32) < image.width() && (p.y as u32) < image.height() {
      image.put_pixel(p.x as u32, p.y as u32, color);
    }
    return;
  }

  let n = points.len();
  for i in 0..n {
    let a = points[i];
    let b = points[(i + 1) % n];
    for (dx, dy) in LINE_OFFSETS {
      draw_line_segment_mut(
        image,
        ((a.x + dx) as f32, (a.y + dy) as f32),
        ((b.x + dx) as f32, (b.y + dy) as f32),
        color,
      );
    }
  }
}
