//! 品種JSONの入出力
//!
//! 品種レコードの配列を読み込み、画像パスを付与して書き出す。

use crate::error::{BreedInfoError, Result};
use breed_info_common::{Breed, BreedCard, ImageUrlTemplate};
use serde::Serialize;
use std::path::Path;

/// 品種JSONファイルを読み込み
pub fn load_breeds(path: &Path) -> Result<Vec<Breed>> {
    if !path.exists() {
        return Err(BreedInfoError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let breeds: Vec<Breed> = serde_json::from_str(&content)?;
    tracing::info!(path = %path.display(), count = breeds.len(), "品種データ読み込み");
    Ok(breeds)
}

/// 品種ごとのカードを生成
pub fn build_cards(breeds: &[Breed], template: &ImageUrlTemplate) -> Vec<BreedCard> {
    breeds
        .iter()
        .map(|breed| BreedCard::from_breed_with(breed, template))
        .collect()
}

/// JSONを出力（ファイル指定がなければstdout）
pub fn write_json<T: Serialize + ?Sized>(value: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;

    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            tracing::info!(path = %path.display(), "JSON出力");
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// cards サブコマンド
pub fn run_cards(
    input: &Path,
    output: Option<&Path>,
    as_cards: bool,
    template: &ImageUrlTemplate,
) -> Result<()> {
    let mut breeds = load_breeds(input)?;

    if as_cards {
        let cards = build_cards(&breeds, template);
        write_json(&cards, output)
    } else {
        let breeds = template.apply(&mut breeds);
        write_json(&*breeds, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_breeds_not_found() {
        let result = load_breeds(Path::new("/nonexistent/breeds-12345.json"));
        assert!(matches!(result, Err(BreedInfoError::FileNotFound(_))));
    }

    #[test]
    fn test_load_breeds_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("breeds.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = load_breeds(&path);
        assert!(matches!(result, Err(BreedInfoError::JsonParse(_))));
    }

    #[test]
    fn test_build_cards() {
        let breeds = vec![
            Breed::new("Leghorn", "eggs"),
            Breed::new("Wyandotte", "meat, eggs"),
        ];
        let cards = build_cards(&breeds, &ImageUrlTemplate::default());
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].img_url, "assets/breed_photos/leghorn.jpg");
        assert_eq!(cards[0].purposes[0].label, "eggs");
        assert_eq!(cards[1].purposes[0].label, "Dual-purpose");
    }
}
