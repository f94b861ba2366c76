use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::units::*;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 결과 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// 번역된 사람용 텍스트
    Text,
    /// serde_json 직렬화
    Json,
}

/// 결과 표시 단위.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    /// 코일 외경/내경 표시
    pub diameter: LengthUnit,
    /// 코일 전개 길이 표시
    pub length: LengthUnit,
    pub mass: MassUnit,
    pub area: AreaUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            diameter: LengthUnit::Millimeter,
            length: LengthUnit::Meter,
            mass: MassUnit::Kilogram,
            area: AreaUnit::SquareMeter,
        }
    }
}

/// 애플리케이션 설정을 표현한다. 단가표는 설정 대상이 아니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// "ko", "en" 또는 "auto"(시스템 로케일)
    pub language: String,
    pub output: OutputFormat,
    /// tracing 필터 기본값. RUST_LOG가 있으면 그것을 우선한다.
    pub log_level: String,
    /// 언어팩 디렉터리 (없으면 내장 문자열만 사용)
    pub locale_dir: Option<String>,
    pub default_units: DefaultUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            output: OutputFormat::Text,
            log_level: "warn".to_string(),
            locale_dir: None,
            default_units: DefaultUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성해 저장한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg = Config::from_toml(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// TOML 문자열을 해석한다. 빠진 항목은 기본값으로 채운다.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}
