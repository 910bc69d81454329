use crate::config::{
    validate_settings, DEFAULT_ASC_CSV, DEFAULT_DATA_DIR, DEFAULT_DRAW_CSV, DEFAULT_JSON_SOURCE,
    DEFAULT_OUTPUT, DEFAULT_PLACEHOLDER, DEFAULT_TEMPLATE, DEFAULT_VARIABLE, DEFAULT_YEAR,
};
use crate::core::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 所有區段皆可省略，未填的值沿用預設檔名
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub normalize: NormalizeConfig,
    pub report: ReportConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub data_dir: String,
    pub json: String,
    pub asc_csv: String,
    pub draw_csv: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            json: DEFAULT_JSON_SOURCE.to_string(),
            asc_csv: DEFAULT_ASC_CSV.to_string(),
            draw_csv: DEFAULT_DRAW_CSV.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    pub default_year: i32,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            default_year: DEFAULT_YEAR,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub template: String,
    pub output: String,
    pub placeholder: String,
    pub variable: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            output: DEFAULT_OUTPUT.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            variable: DEFAULT_VARIABLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LOTTO_DATA_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn data_dir(&self) -> &str {
        &self.source.data_dir
    }

    fn json_source(&self) -> &str {
        &self.source.json
    }

    fn asc_csv(&self) -> &str {
        &self.source.asc_csv
    }

    fn draw_csv(&self) -> &str {
        &self.source.draw_csv
    }

    fn template_path(&self) -> &str {
        &self.report.template
    }

    fn output_file(&self) -> &str {
        &self.report.output
    }

    fn default_year(&self) -> i32 {
        self.normalize.default_year
    }

    fn placeholder(&self) -> &str {
        &self.report.placeholder
    }

    fn data_variable(&self) -> &str {
        &self.report.variable
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_settings(self)
    }
}
