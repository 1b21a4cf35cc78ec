//! 説明参照コマンド
//!
//! class / purpose / convert サブコマンドの処理。

use crate::error::Result;
use breed_info_common::{ApaClass, Purpose, convert_purpose};

/// APAクラスの説明（不明なクラスはエラー）
pub fn describe_class(name: &str) -> Result<&'static str> {
    let class: ApaClass = name.parse()?;
    tracing::debug!(class = %class, "APAクラス参照");
    Ok(class.description())
}

/// 品種用途の説明（"show"エイリアス・先頭大文字化を適用）
pub fn describe_purpose(name: &str) -> Result<&'static str> {
    let purpose = Purpose::resolve(name)?;
    tracing::debug!(input = name, purpose = %purpose, "用途参照");
    Ok(purpose.description())
}

/// 全クラスの (名前, 説明)
pub fn all_classes() -> Vec<(&'static str, &'static str)> {
    ApaClass::ALL
        .iter()
        .map(|c| (c.name(), c.description()))
        .collect()
}

/// 全用途の (名前, 説明)
pub fn all_purposes() -> Vec<(&'static str, &'static str)> {
    Purpose::ALL
        .iter()
        .map(|p| (p.name(), p.description()))
        .collect()
}

pub fn print_class(name: Option<&str>) -> Result<()> {
    match name {
        Some(name) => println!("{}", describe_class(name)?),
        None => print_table(&all_classes()),
    }
    Ok(())
}

pub fn print_purpose(name: Option<&str>) -> Result<()> {
    match name {
        Some(name) => println!("{}", describe_purpose(name)?),
        None => print_table(&all_purposes()),
    }
    Ok(())
}

pub fn print_converted(purposes: &str) {
    let converted = convert_purpose(purposes);
    tracing::debug!(input = purposes, count = converted.len(), "用途変換");
    for purpose in converted {
        println!("{}", purpose);
    }
}

fn print_table(rows: &[(&str, &str)]) {
    for (name, description) in rows {
        println!("■ {}", name);
        println!("  {}\n", description);
    }
}
