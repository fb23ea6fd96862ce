//! 配置服务
//!
//! 配置文件位于 `<config_dir>/keyword-selector-tui/config.json`。
//! 文件不存在时使用默认值；文件损坏时记录警告并使用默认值。

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 配置目录名
const APP_DIR: &str = "keyword-selector-tui";
/// 配置文件名
const CONFIG_FILE: &str = "config.json";

/// 默认分析服务器地址
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 分析服务器地址
    pub server_url: String,
    /// 界面语言代码（`en-US` / `ko-KR`）
    pub language: String,
    pub theme: Theme,
    /// 请求超时（秒），为空表示不超时
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            language: "ko-KR".to_string(),
            theme: Theme::Dark,
            request_timeout_secs: None,
        }
    }
}

impl AppConfig {
    /// 请求超时
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务（JSON 文件）
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用系统配置目录
    pub fn new() -> Result<Self> {
        let dir = dirs::config_dir().context("Cannot determine config directory")?;
        Ok(Self::with_path(dir.join(APP_DIR).join(CONFIG_FILE)))
    }

    /// 使用指定路径（测试用）
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!("No config file at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!(
                    "Malformed config file {}: {e}; using defaults",
                    self.path.display()
                );
                Ok(AppConfig::default())
            }
        }
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        log::debug!("Config saved to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn service(dir: &tempfile::TempDir) -> LocalConfigService {
        LocalConfigService::with_path(dir.path().join("nested").join(CONFIG_FILE))
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = service(&dir).load().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.server_url, "http://localhost:5000");
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        let config = AppConfig {
            server_url: "http://10.0.0.2:8080".to_string(),
            language: "en-US".to_string(),
            theme: Theme::Light,
            request_timeout_secs: Some(30),
        };

        svc.save(&config).unwrap();
        let loaded = svc.load().unwrap();

        assert_eq!(loaded, config);
        assert_eq!(loaded.request_timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{"theme":"light"}"#).unwrap();

        let config = LocalConfigService::with_path(path).load().unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.language, "ko-KR");
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();

        let config = LocalConfigService::with_path(path).load().unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
