// 该文件是 Guying （骨影） 项目的一部分。
// src/args.rs - 项目参数配置
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use clap::Parser;

/// Guying 项目参数配置
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
  /// X 光图像文件路径
  /// 支持格式: *.jpg, *.jpeg, *.png
  #[arg(long, value_name = "FILE")]
  pub image: String,

  /// 患者姓名
  #[arg(long, default_value = "", value_name = "NAME")]
  pub name: String,

  /// 患者年龄
  #[arg(long, default_value = "", value_name = "AGE")]
  pub age: String,

  /// 患者性别
  #[arg(long, default_value = "", value_name = "GENDER")]
  pub gender: String,

  /// 检验技师姓名
  #[arg(long, default_value = "", value_name = "NAME")]
  pub technician: String,
}
