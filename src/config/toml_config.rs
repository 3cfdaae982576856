use crate::utils::error::{ContactError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// Optional on-disk configuration. Every key may be omitted.
///
/// ```toml
/// [endpoint]
/// base_url = "${CONTACT_API_URL}"
/// timeout_seconds = 10
///
/// [dismiss]
/// success_ms = 3000
/// error_ms = 5000
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub dismiss: DismissConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DismissConfig {
    pub success_ms: Option<u64>,
    pub error_ms: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ContactError::Config {
            message: format!("Cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ContactError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CONTACT_API_URL})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(url) = &self.endpoint.base_url {
            validate_url("endpoint.base_url", url)?;
        }
        if let Some(timeout) = self.endpoint.timeout_seconds {
            validate_positive_number("endpoint.timeout_seconds", timeout, 1)?;
        }
        if let Some(ms) = self.dismiss.success_ms {
            validate_positive_number("dismiss.success_ms", ms, 1)?;
        }
        if let Some(ms) = self.dismiss.error_ms {
            validate_positive_number("dismiss.error_ms", ms, 1)?;
        }
        Ok(())
    }
}
