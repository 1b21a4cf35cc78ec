//! Breed Info Common Library
//!
//! APAクラス・品種用途の説明テーブルと品種レコードの共通処理

pub mod types;
pub mod description;
pub mod purpose;
pub mod image_url;
pub mod card;
pub mod error;

pub use types::Breed;
pub use description::{ApaClass, Purpose, apa_class_description, breed_purpose_description};
pub use purpose::convert_purpose;
pub use image_url::{ImageUrlTemplate, add_image_url_to_breeds, image_url_for};
pub use card::{BreedCard, PurposeTag};
pub use error::{Error, Result};
