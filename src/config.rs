use crate::error::{Result, SlotReportError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub font_family: String,
    pub font_dir: Option<PathBuf>,
    pub default_output: PathBuf,
    pub banner_height: u32,
    pub table_width: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font_family: "Noto Sans CJK JP".into(),
            font_dir: None,
            default_output: PathBuf::from("final_report.png"),
            banner_height: 150,
            table_width: 2400,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!("設定を読み込み: {}", path.display());
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SlotReportError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("slot-report").join("config.json"))
    }

    pub fn set_font_family(&mut self, family: String) -> Result<()> {
        if family.trim().is_empty() {
            return Err(SlotReportError::Config("フォント名が空です".into()));
        }
        self.font_family = family;
        self.save()
    }

    pub fn set_font_dir(&mut self, dir: PathBuf) -> Result<()> {
        if !dir.is_dir() {
            return Err(SlotReportError::FileNotFound(dir.display().to_string()));
        }
        self.font_dir = Some(dir);
        self.save()
    }
}
