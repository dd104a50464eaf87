// 该文件是 Guying （骨影） 项目的一部分。
// src/main.rs - 项目主程序
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

mod args;

use std::path::Path;

use anyhow::Result;
use clap::Parser;

use guying::classifier::{self, ClassificationResult, Severity};
use guying::detector::FractureDetector;
use guying::report::{PatientRecord, ReportComposer};

fn main() -> Result<()> {
  tracing_subscriber::fmt::init();

  let args = args::Args::parse();

  println!("Guying 骨折筛查");
  println!("==============");
  println!("图像文件路径: {}", args.image);
  println!();

  let image_path = Path::new(&args.image);

  // 运行检测流水线
  println!("正在分析图像...");
  let detector = FractureDetector::new();
  let analysis = detector.analyze(image_path)?;
  println!("分析完成: 检测到 {} 条轮廓", analysis.contours.len());

  // 轮廓计数启发式分类
  let bone_type = classifier::classify_bone_type(image_path);
  let severity = if analysis.fractured {
    classifier::classify_severity(analysis.contours.len())
  } else {
    Severity::NotApplicable
  };
  let summary = classifier::generate_summary(bone_type, severity, analysis.fractured);
  let classification = ClassificationResult {
    fractured: analysis.fractured,
    severity,
    bone_type,
  };

  let patient = PatientRecord {
    name: args.name,
    age: args.age,
    gender: args.gender,
    technician: args.technician,
  };

  // 生成报告
  println!("正在生成报告...");
  let composer = ReportComposer::new();
  let report = composer.build(patient, classification, summary);
  let output_path = composer.compose(image_path, &report, &analysis.contours)?;

  println!();
  println!(
    "Report generated successfully. Fracture: {} | Severity: {}",
    if report.classification.fractured {
      "Yes"
    } else {
      "No"
    },
    report.classification.severity
  );
  println!("输出文件: {}", output_path.display());

  Ok(())
}
