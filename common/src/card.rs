//! 品種カード
//!
//! 品種カードの表示に必要なデータ（名前・画像パス・用途と説明）を組み立てる。

use crate::description::breed_purpose_description;
use crate::image_url::ImageUrlTemplate;
use crate::purpose::convert_purpose;
use crate::types::Breed;
use serde::Serialize;

/// 用途タグ
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurposeTag {
    pub label: String,
    /// テーブルにない用途は `None`
    pub description: Option<&'static str>,
}

/// 品種カード
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreedCard {
    pub name: String,
    pub img_url: String,
    pub purposes: Vec<PurposeTag>,
}

impl BreedCard {
    /// 既定テンプレート（`assets/breed_photos`）でカードを生成
    pub fn from_breed(breed: &Breed) -> Self {
        Self::from_breed_with(breed, &ImageUrlTemplate::default())
    }

    pub fn from_breed_with(breed: &Breed, template: &ImageUrlTemplate) -> Self {
        let purposes = convert_purpose(&breed.purposes)
            .into_iter()
            .map(|label| PurposeTag {
                label: label.to_string(),
                description: breed_purpose_description(label),
            })
            .collect();

        Self {
            name: breed.breed.clone(),
            img_url: template.url_for(&breed.breed),
            purposes,
        }
    }
}
