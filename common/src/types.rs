//! 品種レコードの型定義
//!
//! 品種データはUI/データ層が所有する外部レコード。
//! ここでは表示に必要なフィールドのみを型付けし、それ以外はそのまま保持する。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 品種レコード
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breed {
    /// 品種名
    pub breed: String,

    /// 用途（", "区切りの小文字トークン。例: "meat, eggs"）
    #[serde(default)]
    pub purposes: String,

    /// 画像パス（add_image_url_to_breedsで付与）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,

    /// その他のフィールド（変更せずに書き戻す）
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Breed {
    pub fn new(breed: impl Into<String>, purposes: impl Into<String>) -> Self {
        Self {
            breed: breed.into(),
            purposes: purposes.into(),
            ..Default::default()
        }
    }
}
