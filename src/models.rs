use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 占位封面图（不开远程封面时统一使用）
pub const PLACEHOLDER_ARTWORK: &str =
    "https://image-cdn.hypb.st/https%3A%2F%2Fhypebeast.com%2Fimage%2F2018%2F09%2Flil-yachty-mtv-how-high-2-movie-0.jpg?q=75&w=800&cbr=1&fit=max";

/// 分类（流派 / 心情）图标
pub const CATEGORY_ICON: &str = "https://png.pngtree.com/svg/20170526/mic_icon_525549.png";

/// 原始曲目记录（iTunes Search API 返回的字段子集）
///
/// 所有字段都允许缺失：缺失即空串 / 0，去留由转换函数决定
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawTrack {
    pub track_name: String,
    pub artist_name: String,
    pub track_explicitness: String,
    pub track_time_millis: u64,
    pub preview_url: String,
    pub artwork_url60: String,
}

/// 歌曲（展示用，构造后只读）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub artist: String,
    pub is_explicit: bool,
    pub duration_ms: u64,
    pub audio: String,
    pub image: String,
}

/// 分类分组：一个流派 / 心情下的歌曲桶
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreGroup {
    pub genre: String,
    pub image: String,
    pub items: Vec<Song>,
}

/// 转换开关（原实现里的 USE_REMOTE_IMAGES 静态标志，这里显式传入）
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransformOptions {
    pub use_remote_artwork: bool,
}

/// 原始曲目列表 -> 歌曲列表
///
/// 规则：
/// - 丢弃 trackName 为空的记录，其余字段缺失不影响去留
/// - trackExplicitness == "explicit" 映射为布尔
/// - 时长和 URL 原样透传
/// - 封面按开关取远程字段或占位图
/// - 幸存记录保持相对顺序
pub fn transform_song_list(list: &[RawTrack], opts: TransformOptions) -> Vec<Song> {
    list.iter()
        .filter(|track| !track.track_name.is_empty())
        .map(|track| Song {
            title: track.track_name.clone(),
            artist: track.artist_name.clone(),
            is_explicit: track.track_explicitness == "explicit",
            duration_ms: track.track_time_millis,
            audio: track.preview_url.clone(),
            image: if opts.use_remote_artwork {
                track.artwork_url60.clone()
            } else {
                PLACEHOLDER_ARTWORK.to_string()
            },
        })
        .collect()
}

/// 分类表 -> 分组列表
///
/// 每个键产出一个分组，顺序跟随键的枚举顺序（serde_json 开了
/// preserve_order，即 JSON 对象的插入顺序）。值里取 results 数组跑
/// 歌曲转换；取不出来就当空列表，不报错
pub fn transform_category_set(
    categories: &Map<String, Value>,
    opts: TransformOptions,
) -> Vec<GenreGroup> {
    categories
        .iter()
        .map(|(name, value)| GenreGroup {
            genre: name.clone(),
            image: CATEGORY_ICON.to_string(),
            items: transform_song_list(&category_results(value), opts),
        })
        .collect()
}

/// 从分类值里抽 results 数组，逐条宽松反序列化
fn category_results(value: &Value) -> Vec<RawTrack> {
    value
        .get("results")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .map(|entry| serde_json::from_value(entry.clone()).unwrap_or_default())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(name: &str, artist: &str) -> RawTrack {
        RawTrack {
            track_name: name.to_string(),
            artist_name: artist.to_string(),
            ..RawTrack::default()
        }
    }

    #[test]
    fn test_song_list_basic_mapping() {
        let list = vec![RawTrack {
            track_name: "A".to_string(),
            artist_name: "X".to_string(),
            track_explicitness: "explicit".to_string(),
            track_time_millis: 1000,
            preview_url: "u".to_string(),
            artwork_url60: "remote".to_string(),
        }];

        let songs = transform_song_list(&list, TransformOptions::default());
        assert_eq!(
            songs,
            vec![Song {
                title: "A".to_string(),
                artist: "X".to_string(),
                is_explicit: true,
                duration_ms: 1000,
                audio: "u".to_string(),
                image: PLACEHOLDER_ARTWORK.to_string(),
            }]
        );
    }

    #[test]
    fn test_song_list_drops_unnamed_tracks() {
        let list = vec![raw("", "Y")];
        assert!(transform_song_list(&list, TransformOptions::default()).is_empty());

        let list = vec![raw("A", "X"), raw("", "Y"), raw("B", "Z")];
        let songs = transform_song_list(&list, TransformOptions::default());
        assert_eq!(songs.len(), 2);
        // 幸存记录保持相对顺序
        assert_eq!(songs[0].title, "A");
        assert_eq!(songs[1].title, "B");
    }

    #[test]
    fn test_song_list_not_explicit() {
        let mut track = raw("A", "X");
        track.track_explicitness = "notExplicit".to_string();
        let songs = transform_song_list(&[track], TransformOptions::default());
        assert!(!songs[0].is_explicit);
    }

    #[test]
    fn test_remote_artwork_flag() {
        let mut track = raw("A", "X");
        track.artwork_url60 = "https://example.com/60.jpg".to_string();

        let opts = TransformOptions {
            use_remote_artwork: true,
        };
        let songs = transform_song_list(&[track.clone()], opts);
        assert_eq!(songs[0].image, "https://example.com/60.jpg");

        let songs = transform_song_list(&[track], TransformOptions::default());
        assert_eq!(songs[0].image, PLACEHOLDER_ARTWORK);
    }

    #[test]
    fn test_category_set_empty() {
        let categories = Map::new();
        assert!(transform_category_set(&categories, TransformOptions::default()).is_empty());
    }

    #[test]
    fn test_category_set_preserves_key_order() {
        let value = json!({
            "Rock": { "results": [ { "trackName": "R1" } ] },
            "Jazz": { "results": [ { "trackName": "J1" }, { "trackName": "" } ] },
            "Pop":  { "results": [] },
        });
        let categories = value.as_object().unwrap();

        let groups = transform_category_set(categories, TransformOptions::default());
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].genre, "Rock");
        assert_eq!(groups[1].genre, "Jazz");
        assert_eq!(groups[2].genre, "Pop");
        assert_eq!(groups[0].items.len(), 1);
        assert_eq!(groups[1].items.len(), 1); // 空名曲目被过滤
        assert!(groups[2].items.is_empty());
        assert_eq!(groups[0].image, CATEGORY_ICON);
    }

    #[test]
    fn test_category_set_tolerates_malformed_value() {
        let value = json!({
            "Broken": 42,
            "AlsoBroken": { "results": "not an array" },
        });
        let groups =
            transform_category_set(value.as_object().unwrap(), TransformOptions::default());
        assert_eq!(groups.len(), 2);
        assert!(groups[0].items.is_empty());
        assert!(groups[1].items.is_empty());
    }

    #[test]
    fn test_raw_track_missing_fields_default() {
        let track: RawTrack = serde_json::from_value(json!({ "trackName": "A" })).unwrap();
        assert_eq!(track.track_name, "A");
        assert_eq!(track.artist_name, "");
        assert_eq!(track.track_time_millis, 0);
        assert_eq!(track.artwork_url60, "");
    }
}
