//! 配置模块
//!
//! 支持从 JSON 文件加载系统配置

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// 指定配置文件路径的环境变量
pub const CONFIG_ENV: &str = "CHARTS_CONFIG";

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,
    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
    /// 工作线程数（0 表示使用 CPU 核心数）
    #[serde(default)]
    pub workers: usize,
}

/// 跨域配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// 是否启用跨域响应头
    #[serde(default = "default_cors_enabled")]
    pub enabled: bool,
    /// Access-Control-Allow-Origin 的值
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
}

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,
    /// 跨域配置
    #[serde(default)]
    pub cors: CorsConfig,
}

// 默认值函数
fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }
fn default_cors_enabled() -> bool { true }
fn default_allowed_origin() -> String { "*".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: default_cors_enabled(),
            allowed_origin: default_allowed_origin(),
        }
    }
}

impl AppConfig {
    /// 从 JSON 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// 加载配置，优先使用环境变量指定的文件，其次默认路径，都失败则使用默认值
    pub fn load() -> Self {
        let mut config_paths = Vec::new();
        if let Ok(path) = env::var(CONFIG_ENV) {
            config_paths.push(path);
        }
        config_paths.push("config.json".to_string());
        config_paths.push("config/config.json".to_string());

        for path in &config_paths {
            if Path::new(path).exists() {
                match Self::from_file(path) {
                    Ok(config) => {
                        log::info!("从 {} 加载配置成功", path);
                        return config;
                    }
                    Err(e) => {
                        log::warn!("加载配置文件 {} 失败: {}", path, e);
                    }
                }
            }
        }

        log::info!("使用默认配置");
        Self::default()
    }

    /// 获取服务器绑定地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
        assert_eq!(config.server.workers, 0);
        assert!(config.cors.enabled);
        assert_eq!(config.cors.allowed_origin, "*");
    }

    #[test]
    fn test_partial_json() {
        let config: AppConfig =
            serde_json::from_str(r#"{"server": {"port": 9090}, "cors": {"enabled": false}}"#)
                .unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert!(!config.cors.enabled);
        assert_eq!(config.cors.allowed_origin, "*");

        let empty: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.bind_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_from_file() {
        let path = env::temp_dir().join(format!("charts-config-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"{"server": {"host": "127.0.0.1", "port": 8081, "workers": 2},
                "cors": {"allowed_origin": "http://localhost:3000"}}"#,
        )
        .unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:8081");
        assert_eq!(config.server.workers, 2);
        assert_eq!(config.cors.allowed_origin, "http://localhost:3000");
    }

    #[test]
    fn test_from_missing_file() {
        assert!(AppConfig::from_file("/nonexistent/charts-config.json").is_err());
    }
}
