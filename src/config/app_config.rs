//! 应用配置管理
//!
//! 启动时从环境变量（以及可选的 `.env` 文件）加载一次，之后只读，
//! 通过共享状态显式传递给处理器。

use crate::error::{AppError, AppResult};

/// 服务名称，用于根路径的运行状态消息
const SERVICE_NAME: &str = "WhatsApp AI Assistant API";

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
const DEFAULT_MAX_TOKENS: u32 = 1024;
const DEFAULT_PORT: u16 = 8000;

/// 应用配置结构体
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 模型服务 API 密钥
    pub api_key: String,

    /// 模型服务基础 URL
    pub base_url: String,

    /// 模型名称
    pub model: String,

    /// 最大输出 token 数
    pub max_tokens: u32,

    /// 监听端口
    pub port: u16,

    pub service_name: String,
}

impl AppConfig {
    /// 从进程环境变量加载配置
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 通过任意键查找函数加载配置
    ///
    /// | 变量                 | 默认值                      |
    /// |----------------------|-----------------------------|
    /// | `ANTHROPIC_API_KEY`  | 必填                        |
    /// | `ANTHROPIC_BASE_URL` | `https://api.anthropic.com` |
    /// | `PORT`               | `8000`                      |
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("ANTHROPIC_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::Config("ANTHROPIC_API_KEY environment variable is required".to_string())
            })?;

        let base_url = lookup("ANTHROPIC_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("invalid PORT {:?}: {}", raw, e)))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            api_key,
            base_url,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            port,
            service_name: SERVICE_NAME.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> AppResult<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_config() {
        let config = load(&[("ANTHROPIC_API_KEY", "sk-test")]).unwrap();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.base_url, "https://api.anthropic.com");
        assert_eq!(config.model, "claude-sonnet-4-20250514");
        assert_eq!(config.max_tokens, 1024);
        assert_eq!(config.port, 8000);
        assert_eq!(config.service_name, "WhatsApp AI Assistant API");
    }

    #[test]
    fn test_missing_api_key() {
        let err = load(&[("PORT", "9000")]).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        let err = load(&[("ANTHROPIC_API_KEY", "   ")]).unwrap_err();
        assert!(err.to_string().contains("ANTHROPIC_API_KEY"));
    }

    #[test]
    fn test_port_and_base_url_overrides() {
        let config = load(&[
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("ANTHROPIC_BASE_URL", "http://localhost:4000"),
            ("PORT", "9000"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.base_url, "http://localhost:4000");
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("ANTHROPIC_API_KEY", "sk-test"), ("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("invalid PORT"));
    }
}
