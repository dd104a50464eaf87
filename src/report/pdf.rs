// 该文件是 Guying （骨影） 项目的一部分。
// src/report/pdf.rs - PDF 文档写出
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

use printpdf::image_crate::GenericImageView;
use printpdf::{BuiltinFont, Image, ImageTransform, Mm, PdfDocument, Pt};

use super::ReportError;
use super::layout::{FontKind, ImageSlot, PAGE_HEIGHT_PT, PAGE_WIDTH_PT, TextSpan};

const DOCUMENT_TITLE: &str = "Fracture Report";
const LAYER_NAME: &str = "Layer 1";
/// 以 72 DPI 嵌入时 1 像素恰为 1 point，缩放系数可直接按槽位尺寸计算
const EMBED_DPI: f32 = 72.0;

/// 渲染单页报告为 PDF 字节流
///
/// printpdf 内部使用 0.24 版 image crate，叠加图经由临时 PNG 文件
/// 重新解码后嵌入（参见 report::ReportComposer::render）。
pub fn render_document(
  spans: &[TextSpan],
  overlay_path: &Path,
  slot: ImageSlot,
) -> Result<Vec<u8>, ReportError> {
  let (doc, page, layer) = PdfDocument::new(
    DOCUMENT_TITLE,
    Mm::from(Pt(PAGE_WIDTH_PT)),
    Mm::from(Pt(PAGE_HEIGHT_PT)),
    LAYER_NAME,
  );
  let layer = doc.get_page(page).get_layer(layer);

  let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
  let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
  let oblique = doc.add_builtin_font(BuiltinFont::HelveticaOblique)?;

  for span in spans {
    let font = match span.font {
      FontKind::Regular => &regular,
      FontKind::Bold => &bold,
      FontKind::Oblique => &oblique,
    };
    layer.use_text(
      span.text.clone(),
      span.size,
      Mm::from(Pt(span.x)),
      Mm::from(Pt(span.y)),
      font,
    );
  }

  let overlay = printpdf::image_crate::open(overlay_path)?;
  let (width_px, height_px) = overlay.dimensions();
  let pdf_image = Image::from_dynamic_image(&overlay);
  pdf_image.add_to_layer(
    layer.clone(),
    ImageTransform {
      translate_x: Some(Mm::from(Pt(slot.x))),
      translate_y: Some(Mm::from(Pt(slot.y))),
      scale_x: Some(slot.width / width_px as f32),
      scale_y: Some(slot.height / height_px as f32),
      dpi: Some(EMBED_DPI),
      ..Default::default()
    },
  );

  let bytes = doc.save_to_bytes()?;
  Ok(bytes)
}
