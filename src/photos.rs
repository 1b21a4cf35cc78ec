//! 品種写真チェック
//!
//! 画像パスの規約（`<base>/<slug>.jpg`）に対して、実ファイルの有無を照合する。

use crate::error::{BreedInfoError, Result};
use breed_info_common::image_url::breed_slug;
use breed_info_common::{Breed, ImageUrlTemplate};
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;

/// 写真が見つからない品種
#[derive(Debug, Clone, PartialEq)]
pub struct MissingPhoto {
    pub breed: String,
    pub img_url: String,
}

/// チェック結果
#[derive(Debug, Clone, Default)]
pub struct PhotoReport {
    /// チェックした品種数
    pub total: usize,
    /// 写真がない品種
    pub missing: Vec<MissingPhoto>,
    /// どの品種にも対応しない写真（ファイル名順）
    pub unused: Vec<String>,
}

impl PhotoReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// 写真フォルダ直下のファイル名を収集
pub fn scan_photo_folder(folder: &Path) -> Result<BTreeSet<String>> {
    if !folder.is_dir() {
        return Err(BreedInfoError::FolderNotFound(folder.display().to_string()));
    }

    let files: BTreeSet<String> = WalkDir::new(folder)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();

    Ok(files)
}

/// 品種ごとに写真の有無をチェック
pub fn check_photos(
    breeds: &[Breed],
    web_root: &Path,
    template: &ImageUrlTemplate,
) -> Result<PhotoReport> {
    let folder = web_root.join(&template.base);
    let present = scan_photo_folder(&folder)?;
    tracing::debug!(folder = %folder.display(), files = present.len(), "写真フォルダをスキャン");
    let mut unused = present.clone();

    let mut missing = Vec::new();
    for breed in breeds {
        let file_name = format!("{}.{}", breed_slug(&breed.breed), template.extension);
        unused.remove(&file_name);
        if !present.contains(&file_name) {
            missing.push(MissingPhoto {
                breed: breed.breed.clone(),
                img_url: template.url_for(&breed.breed),
            });
        }
    }

    Ok(PhotoReport {
        total: breeds.len(),
        missing,
        unused: unused.into_iter().collect(),
    })
}

/// photos サブコマンド
pub fn run_photos(input: &Path, web_root: &Path, template: &ImageUrlTemplate) -> Result<()> {
    let breeds = crate::breeds::load_breeds(input)?;
    let report = check_photos(&breeds, web_root, template)?;

    println!("品種数: {}", report.total);
    if report.is_complete() {
        println!("✔ すべての品種に写真があります");
    } else {
        println!("写真がない品種: {}件", report.missing.len());
        for missing in &report.missing {
            println!("  - {} ({})", missing.breed, missing.img_url);
        }
    }

    if !report.unused.is_empty() {
        println!("未使用の写真: {}件", report.unused.len());
        for file_name in &report.unused {
            println!("  - {}", file_name);
        }
    }

    tracing::info!(
        total = report.total,
        missing = report.missing.len(),
        unused = report.unused.len(),
        "写真チェック完了"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};

    #[test]
    fn test_scan_photo_folder_not_found() {
        let result = scan_photo_folder(Path::new("/nonexistent/photos"));
        assert!(matches!(result, Err(BreedInfoError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_photo_folder_skips_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("silkie.jpg")).unwrap();
        fs::create_dir(dir.path().join("thumbs")).unwrap();
        File::create(dir.path().join("thumbs").join("cochin.jpg")).unwrap();

        let files = scan_photo_folder(dir.path()).unwrap();
        assert_eq!(files.into_iter().collect::<Vec<_>>(), vec!["silkie.jpg"]);
    }

    #[test]
    fn test_check_photos_shared_photo() {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("assets").join("breed_photos");
        fs::create_dir_all(&folder).unwrap();
        File::create(folder.join("silkie.jpg")).unwrap();

        // 空白違いで同じslugになる品種
        let breeds = vec![Breed::new("Silkie", ""), Breed::new("Sil kie", "")];
        let report = check_photos(&breeds, dir.path(), &ImageUrlTemplate::default()).unwrap();
        assert!(report.is_complete());
        assert!(report.unused.is_empty());
    }
}
