//! 説明テーブルモジュール
//!
//! APAクラスと品種用途の説明文を固定テーブルとして保持する。
//! テーブルはコンパイル時に確定し、実行中に変更されない。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// `"show"` は `Exhibition` と同じ用途を指す
const SHOW_ALIAS: &str = "show";

/// APA（American Poultry Association）クラス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApaClass {
    American,
    Asiatic,
    Continental,
    #[serde(rename = "All Other Standard Breeds")]
    AllOtherStandardBreeds,
    Mediterranean,
    English,
    #[serde(rename = "Not Listed")]
    NotListed,
}

impl ApaClass {
    /// テーブル順の全クラス
    pub const ALL: [ApaClass; 7] = [
        ApaClass::American,
        ApaClass::Asiatic,
        ApaClass::Continental,
        ApaClass::AllOtherStandardBreeds,
        ApaClass::Mediterranean,
        ApaClass::English,
        ApaClass::NotListed,
    ];

    /// テーブルのキー名
    pub fn name(&self) -> &'static str {
        match self {
            ApaClass::American => "American",
            ApaClass::Asiatic => "Asiatic",
            ApaClass::Continental => "Continental",
            ApaClass::AllOtherStandardBreeds => "All Other Standard Breeds",
            ApaClass::Mediterranean => "Mediterranean",
            ApaClass::English => "English",
            ApaClass::NotListed => "Not Listed",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ApaClass::American => "The American Class contains thirteen breeds which originated in Canada or the United States. All are heavy breeds, and most lay brown eggs; most are cold-hardy",
            ApaClass::Asiatic => "These three breeds originate in China; they are large, feather legged, and lay brown eggs.",
            ApaClass::Continental => "This group consists of eleven breeds from Belgium, France, Germany, and the Netherlands. They are mostly sprightly birds, the Faverolles being an exception.",
            ApaClass::AllOtherStandardBreeds => "Other breeds are grouped in this class, which has three subclasses: Game, Oriental, and Miscellaneous. The Game subclass includes the non-oriental game birds, the Oriental subclass includes mainly birds from Asia; the Cubalaya, however, is from Cuba. The Miscellaneous subclass holds the remaining breeds.",
            ApaClass::Mediterranean => "These breeds originating in Italy and Spain have white earlobes and tend to be productive layers of white eggs. In general they are flighty, and exceptional free-range birds, with both evasion and foraging skills.",
            ApaClass::English => "This class consists of five breeds from the United Kingdom and one from Australia.",
            ApaClass::NotListed => "There are many breeds not listed in the American Poultry Association's Standards of Perfection.",
        }
    }
}

impl std::str::FromStr for ApaClass {
    type Err = Error;

    /// キー名の完全一致のみ受け付ける（大文字小文字を区別）
    fn from_str(s: &str) -> Result<Self> {
        ApaClass::ALL
            .into_iter()
            .find(|class| class.name() == s)
            .ok_or_else(|| Error::UnknownApaClass(s.to_string()))
    }
}

impl std::fmt::Display for ApaClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 品種の用途
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Purpose {
    Eggs,
    Meat,
    Ornamental,
    Exhibition,
    Feathers,
    #[serde(rename = "Broody hens")]
    BroodyHens,
    #[serde(rename = "Dual-purpose")]
    DualPurpose,
}

impl Purpose {
    /// テーブル順の全用途
    pub const ALL: [Purpose; 7] = [
        Purpose::Eggs,
        Purpose::Meat,
        Purpose::Ornamental,
        Purpose::Exhibition,
        Purpose::Feathers,
        Purpose::BroodyHens,
        Purpose::DualPurpose,
    ];

    /// テーブルのキー名
    pub fn name(&self) -> &'static str {
        match self {
            Purpose::Eggs => "Eggs",
            Purpose::Meat => "Meat",
            Purpose::Ornamental => "Ornamental",
            Purpose::Exhibition => "Exhibition",
            Purpose::Feathers => "Feathers",
            Purpose::BroodyHens => "Broody hens",
            Purpose::DualPurpose => "Dual-purpose",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Purpose::Eggs => "These breeds are used primarily for egg production. The egg layer is leaner and rangier in body type. It will lay more eggs, as a general rule.",
            Purpose::Meat => "These breeds are used primarily for meat production. Meat birds have a blockier body that fills out with muscle for meat. It will lay fewer eggs, as a general rule.",
            Purpose::Ornamental => "These breeds are primarily ornamental and do produce many eggs or much meat.",
            Purpose::Exhibition => "These breeds are often shown in poultry competitions.",
            Purpose::Feathers => "These breeds are prized for their particularly beautiful feathers.",
            Purpose::BroodyHens => "These breeds produce particularly good hens for brooding and raising chicks.",
            Purpose::DualPurpose => "The dual purpose chicken is intended to grow a good body, adequate for putting meat on the table, and lay a nice quantity of eggs. The dual purpose chicken will not provide as large a carcass as a meat bird, nor lay as many eggs as an egg layer.",
        }
    }

    /// 用途文字列を解決する
    ///
    /// - `"show"` は `Exhibition` として扱う
    /// - それ以外は先頭1文字のみ大文字化してキー名と照合する
    pub fn resolve(purpose: &str) -> Result<Self> {
        if purpose == SHOW_ALIAS {
            return Ok(Purpose::Exhibition);
        }

        let key = capitalize_first_letter(purpose).ok_or(Error::EmptyPurpose)?;
        key.parse()
    }
}

impl std::str::FromStr for Purpose {
    type Err = Error;

    /// キー名の完全一致のみ受け付ける（エイリアス・大文字化なし）
    fn from_str(s: &str) -> Result<Self> {
        Purpose::ALL
            .into_iter()
            .find(|purpose| purpose.name() == s)
            .ok_or_else(|| Error::UnknownPurpose(s.to_string()))
    }
}

impl std::fmt::Display for Purpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// APAクラスの説明を取得する
///
/// キーが存在しない場合は `None`。
pub fn apa_class_description(apa_class: &str) -> Option<&'static str> {
    apa_class.parse::<ApaClass>().ok().map(|class| class.description())
}

/// 品種用途の説明を取得する
///
/// 空文字列やテーブルにない用途は `None`。
pub fn breed_purpose_description(purpose: &str) -> Option<&'static str> {
    Purpose::resolve(purpose).ok().map(|p| p.description())
}

/// 先頭1文字を大文字化する（残りはそのまま）
///
/// 空文字列の場合は `None`。
pub fn capitalize_first_letter(word: &str) -> Option<String> {
    let mut chars = word.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}
