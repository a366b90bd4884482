//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// hangeul 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HangeulConfig {
    /// 분해 결과를 첫가끝 자모로 출력할지 여부 (false면 호환용 자모)
    #[serde(default)]
    pub use_jamo: bool,
    /// env_logger 기본 필터
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for HangeulConfig {
    fn default() -> Self {
        Self {
            use_jamo: false,
            log_filter: default_log_filter(),
        }
    }
}

/// 설정 파일 경로: $XDG_CONFIG_HOME/hangeul/config.json 또는 ~/.config/hangeul/config.json
pub fn config_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(PathBuf::from)
                .filter(|p| p.is_absolute())
                .map(|home| home.join(".config"))
        })
        // HOME 미설정이면 현재 디렉토리 기준
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("hangeul").join("config.json")
}

/// 지정한 경로에서 설정 로드
/// 파일이 없으면 Ok(None)
pub fn try_load_config_from(path: &Path) -> Result<Option<HangeulConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(serde_json::from_str(&content)?))
}

/// 기본 경로에서 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> HangeulConfig {
    let path = config_path();
    match try_load_config_from(&path) {
        Ok(Some(config)) => config,
        Ok(None) => HangeulConfig::default(),
        Err(e) => {
            log::warn!("설정 파일 로드 실패 ({}): {}", path.display(), e);
            HangeulConfig::default()
        }
    }
}

/// 지정한 경로에 설정 저장
pub fn save_config_to(config: &HangeulConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

/// 기본 경로에 설정 저장
pub fn save_config(config: &HangeulConfig) -> Result<(), ConfigError> {
    save_config_to(config, &config_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("hangeul-config-test-{}-{}", std::process::id(), name))
            .join("config.json")
    }

    #[test]
    fn test_default_config() {
        let config = HangeulConfig::default();
        assert!(!config.use_jamo);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = HangeulConfig {
            use_jamo: true,
            log_filter: "debug".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: HangeulConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: HangeulConfig = serde_json::from_str(r#"{"use_jamo": true}"#).unwrap();
        assert!(config.use_jamo);
        assert_eq!(config.log_filter, "warn");

        let config: HangeulConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, HangeulConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_config_path("roundtrip");
        let config = HangeulConfig {
            use_jamo: true,
            log_filter: "trace".to_string(),
        };
        save_config_to(&config, &path).unwrap();
        assert_eq!(try_load_config_from(&path).unwrap(), Some(config));

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_load_missing_file() {
        let path = temp_config_path("missing");
        assert_eq!(try_load_config_from(&path).unwrap(), None);
    }

    #[test]
    fn test_load_invalid_json() {
        let path = temp_config_path("invalid");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(try_load_config_from(&path), Err(ConfigError::Json(_))));

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }
}
