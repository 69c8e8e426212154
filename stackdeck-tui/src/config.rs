//! 应用配置
//!
//! 配置以显式值的形式传入 `App` 与各组件，不存在全局配置对象。

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// 状态消息自动隐藏的默认延迟（毫秒）
const DEFAULT_AUTO_HIDE_DELAY_MS: u64 = 5000;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// 服务端基础地址
    pub api_base: String,
    /// 状态消息自动隐藏延迟（毫秒）
    pub auto_hide_delay_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            api_base: "http://127.0.0.1:8080".to_string(),
            auto_hide_delay_ms: DEFAULT_AUTO_HIDE_DELAY_MS,
        }
    }
}

impl TuiConfig {
    /// 从配置文件加载，文件缺失或解析失败时回退到默认值
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                log::warn!("invalid config file {}: {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// 配置文件路径：`$CONFIG_DIR/stackdeck/config.json`
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("stackdeck").join("config.json"))
    }
}
