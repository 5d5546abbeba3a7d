//! 配置
//!
//! ~/.config/tunelist/config.toml，文件不存在就用默认值

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::models::TransformOptions;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 封面取远程 artworkUrl60 还是占位图
    pub use_remote_artwork: bool,
    /// 覆盖素材目录（缺省用内置素材）
    pub data_dir: Option<PathBuf>,
    /// 热门页签最多显示多少首
    pub popular_limit: usize,
    /// 详情屏预览多少首
    pub preview_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            use_remote_artwork: false,
            data_dir: None,
            popular_limit: 50,
            preview_limit: 5,
        }
    }
}

impl Config {
    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            use_remote_artwork: self.use_remote_artwork,
        }
    }
}

/// 从 TOML 文件加载配置
pub fn load_config(path: &Path) -> io::Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
