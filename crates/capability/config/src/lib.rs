//! 应用运行配置加载。

use std::env;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env: {0}")]
    Missing(String),
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 应用运行配置。
///
/// 日期窗口在此只做原样透传：非法日期串不是配置错误，
/// 由 normalize 层静默回退默认窗口。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub report_path: String,
}

impl AppConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        let date_from = read_optional("EVLOG_DATE_FROM");
        let date_to = read_optional("EVLOG_DATE_TO");
        let report_path =
            env::var("EVLOG_REPORT_PATH").unwrap_or_else(|_| "event_report.json".to_string());

        Ok(Self {
            date_from,
            date_to,
            report_path,
        })
    }
}

fn read_optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}
