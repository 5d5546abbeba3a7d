//! 曲库装载
//!
//! 三份 JSON 素材（热门曲目列表、流派分类表、心情分类表）内置在二进制
//! 里，也可以用配置指定的目录覆盖（目录下放同名文件即可）

use std::fs;
use std::path::Path;

use log::info;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::{
    GenreGroup, RawTrack, Song, TransformOptions, transform_category_set, transform_song_list,
};

const POPULAR_JSON: &str = include_str!("../data/Popular.json");
const GENRES_JSON: &str = include_str!("../data/Genres.json");
const MOODS_JSON: &str = include_str!("../data/Moods.json");

/// 素材文件名（覆盖目录下按此查找）
pub const POPULAR_FILE: &str = "Popular.json";
pub const GENRES_FILE: &str = "Genres.json";
pub const MOODS_FILE: &str = "Moods.json";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("读取素材文件失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("解析 {file} 失败: {source}")]
    Json {
        file: String,
        #[source]
        source: serde_json::Error,
    },
}

/// 曲库：三个页签各自的数据，装载后只读
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub popular: Vec<Song>,
    pub moods: Vec<GenreGroup>,
    pub genres: Vec<GenreGroup>,
}

impl Catalog {
    /// 从内置素材装载
    pub fn load_bundled(opts: TransformOptions) -> Result<Catalog, CatalogError> {
        let catalog = Catalog {
            popular: parse_popular(POPULAR_JSON, POPULAR_FILE, opts)?,
            moods: parse_category_set(MOODS_JSON, MOODS_FILE, opts)?,
            genres: parse_category_set(GENRES_JSON, GENRES_FILE, opts)?,
        };
        info!(
            "已装载内置曲库: {} 首热门, {} 个心情, {} 个流派",
            catalog.popular.len(),
            catalog.moods.len(),
            catalog.genres.len()
        );
        Ok(catalog)
    }

    /// 从覆盖目录装载，三个文件缺一不可
    pub fn load_from_dir(dir: &Path, opts: TransformOptions) -> Result<Catalog, CatalogError> {
        let popular = fs::read_to_string(dir.join(POPULAR_FILE))?;
        let moods = fs::read_to_string(dir.join(MOODS_FILE))?;
        let genres = fs::read_to_string(dir.join(GENRES_FILE))?;
        let catalog = Catalog {
            popular: parse_popular(&popular, POPULAR_FILE, opts)?,
            moods: parse_category_set(&moods, MOODS_FILE, opts)?,
            genres: parse_category_set(&genres, GENRES_FILE, opts)?,
        };
        info!("已从 {} 装载曲库", dir.display());
        Ok(catalog)
    }
}

/// 热门列表素材：原始曲目数组 -> 歌曲列表
fn parse_popular(text: &str, file: &str, opts: TransformOptions) -> Result<Vec<Song>, CatalogError> {
    let raw: Vec<RawTrack> = serde_json::from_str(text).map_err(|e| CatalogError::Json {
        file: file.to_string(),
        source: e,
    })?;
    Ok(transform_song_list(&raw, opts))
}

/// 分类素材：分类名 -> {results} 对象 -> 分组列表
fn parse_category_set(
    text: &str,
    file: &str,
    opts: TransformOptions,
) -> Result<Vec<GenreGroup>, CatalogError> {
    let categories: Map<String, Value> =
        serde_json::from_str(text).map_err(|e| CatalogError::Json {
            file: file.to_string(),
            source: e,
        })?;
    Ok(transform_category_set(&categories, opts))
}
