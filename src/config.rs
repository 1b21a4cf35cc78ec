use crate::error::{BreedInfoError, Result};
use breed_info_common::image_url::DEFAULT_IMAGE_BASE;
use breed_info_common::ImageUrlTemplate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 画像パスの基準ディレクトリ
    pub web_root: PathBuf,
    /// 画像パスの接頭辞
    pub image_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web_root: PathBuf::from("."),
            image_base: DEFAULT_IMAGE_BASE.into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "設定ファイル読み込み");
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        tracing::debug!(path = %config_path.display(), "設定ファイル保存");
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| BreedInfoError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("breed-info").join("config.json"))
    }

    pub fn set_web_root(&mut self, web_root: PathBuf) -> Result<()> {
        self.web_root = web_root;
        self.save()
    }

    /// 画像パスは常に基準ディレクトリからの相対パス（先頭の`/`は除去）
    pub fn image_template(&self) -> ImageUrlTemplate {
        ImageUrlTemplate::with_base(self.image_base.trim_start_matches('/'))
    }
}
