//! 用途変換モジュール
//!
//! ", "区切りの用途文字列をリストに変換する。
//! "meat" と "eggs" が両方含まれる場合は "Dual-purpose" に置き換える。

use crate::description::Purpose;

const PURPOSE_SEPARATOR: &str = ", ";

/// 用途文字列をリストに変換する
///
/// - 区切りは `", "` 固定。順序・重複はそのまま
/// - "meat" と "eggs" が両方あれば `["Dual-purpose"]` のみを返す
/// - 照合は大文字小文字を区別する（"Meat, Eggs" は変換しない）
pub fn convert_purpose(purposes: &str) -> Vec<&str> {
    let tokens: Vec<&str> = purposes.split(PURPOSE_SEPARATOR).collect();

    if is_dual_purpose(&tokens) {
        vec![Purpose::DualPurpose.name()]
    } else {
        tokens
    }
}

/// "meat" と "eggs" が両方含まれるか
pub fn is_dual_purpose(tokens: &[&str]) -> bool {
    tokens.contains(&"meat") && tokens.contains(&"eggs")
}
