//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use breed_info::error::BreedInfoError;
use breed_info::{breeds, lookup, photos};
use breed_info_common::ImageUrlTemplate;
use std::path::Path;
use tempfile::tempdir;

/// 存在しない品種ファイル
#[test]
fn test_load_nonexistent_file() {
    let result = breeds::load_breeds(Path::new("/nonexistent/path/12345.json"));
    assert!(matches!(result.unwrap_err(), BreedInfoError::FileNotFound(_)));
}

/// 配列でないJSON
#[test]
fn test_load_non_array_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("breeds.json");
    std::fs::write(&path, r#"{"breed": "Silkie"}"#).unwrap();

    let result = breeds::load_breeds(&path);
    assert!(matches!(result.unwrap_err(), BreedInfoError::JsonParse(_)));
}

/// 写真フォルダがない場合
#[test]
fn test_photos_without_photo_folder() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = photos::check_photos(&[], dir.path(), &ImageUrlTemplate::default());
    assert!(matches!(result.unwrap_err(), BreedInfoError::FolderNotFound(_)));
}

/// BreedInfoErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        BreedInfoError::Config("テスト設定エラー".to_string()),
        BreedInfoError::FileNotFound("breeds.json".to_string()),
        BreedInfoError::FolderNotFound("/path/to/folder".to_string()),
        BreedInfoError::Prompt("中断".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: BreedInfoError = io_err.into();

    assert!(matches!(err, BreedInfoError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// common::Errorは透過的に表示される
#[test]
fn test_common_error_transparent() {
    let err: BreedInfoError = breed_info_common::Error::UnknownPurpose("Speed".to_string()).into();
    assert!(matches!(err, BreedInfoError::Common(_)));
    assert_eq!(format!("{}", err), "Unknown breed purpose: Speed");
}

/// 不明な用途・空の用途
#[test]
fn test_unknown_and_empty_purpose() {
    assert!(lookup::describe_purpose("speed").is_err());
    assert!(lookup::describe_purpose("").is_err());
    assert!(lookup::describe_class("Unknown").is_err());
}
