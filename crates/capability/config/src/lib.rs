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
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 集合 blob 的落盘路径；未设置则使用内存后端。
    pub storage_path: Option<String>,
    /// 初始化时是否向空存储写入演示数据。
    pub seed_demo_data: bool,
    /// 启动前是否清空存储（清空后会重新初始化）。
    pub reset_on_start: bool,
}

impl AppConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        let storage_path = read_optional("CIVIC_STORAGE_PATH");
        let seed_demo_data = read_bool_with_default("CIVIC_SEED", true);
        let reset_on_start = read_bool_with_default("CIVIC_RESET", false);

        Ok(Self {
            storage_path,
            seed_demo_data,
            reset_on_start,
        })
    }
}

fn read_optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

fn read_bool_with_default(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(value) => matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "on"),
        Err(_) => default,
    }
}
