//! 画像パス生成モジュール
//!
//! 品種名から `assets/breed_photos/<slug>.jpg` 形式のパスを生成する。
//! ファイルの存在確認は行わない。

use crate::types::Breed;
use serde::{Deserialize, Serialize};

pub const DEFAULT_IMAGE_BASE: &str = "assets/breed_photos";
pub const DEFAULT_IMAGE_EXTENSION: &str = "jpg";

/// 画像パスのテンプレート（`<base>/<slug>.<extension>`）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrlTemplate {
    pub base: String,
    pub extension: String,
}

impl Default for ImageUrlTemplate {
    fn default() -> Self {
        Self {
            base: DEFAULT_IMAGE_BASE.into(),
            extension: DEFAULT_IMAGE_EXTENSION.into(),
        }
    }
}

impl ImageUrlTemplate {
    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            ..Default::default()
        }
    }

    /// 品種名からパスを生成
    pub fn url_for(&self, breed_name: &str) -> String {
        format!(
            "{}/{}.{}",
            self.base.trim_end_matches('/'),
            breed_slug(breed_name),
            self.extension
        )
    }

    /// 各レコードの `img_url` を上書きする
    pub fn apply<'a>(&self, breeds: &'a mut [Breed]) -> &'a mut [Breed] {
        for breed in breeds.iter_mut() {
            breed.img_url = Some(self.url_for(&breed.breed));
        }
        breeds
    }
}

/// BOM（U+FEFF）も空白として扱う
fn is_slug_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// 空白をすべて除去して小文字化
pub fn breed_slug(breed_name: &str) -> String {
    breed_name
        .chars()
        .filter(|&c| !is_slug_whitespace(c))
        .collect::<String>()
        .to_lowercase()
}

/// 既定テンプレートで品種名から画像パスを生成
pub fn image_url_for(breed_name: &str) -> String {
    ImageUrlTemplate::default().url_for(breed_name)
}

/// 各品種に `img_url` を付与する（既存値は上書き）
///
/// 同じスライスを返すので呼び出し側で連結できる。
pub fn add_image_url_to_breeds(breeds: &mut [Breed]) -> &mut [Breed] {
    ImageUrlTemplate::default().apply(breeds)
}
