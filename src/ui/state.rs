//! App 状态定义 (Model)
//!
//! 屏幕导航栈、页签、可见行计算

use crate::catalog::Catalog;
use crate::config::Config;
use crate::models::{GenreGroup, Song};

/// 浏览页签
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Popular,
    Moods,
    Genres,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Popular, Tab::Moods, Tab::Genres];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Popular => "热门",
            Tab::Moods => "心情",
            Tab::Genres => "流派",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Popular => 0,
            Tab::Moods => 1,
            Tab::Genres => 2,
        }
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// 分组的类型化引用：页签 + 在该页签分组列表里的下标
///
/// 详情屏的参数载荷，避免把整个分组克隆进导航栈
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupRef {
    pub tab: Tab,
    pub index: usize,
}

/// 屏幕：导航栈里的一帧，各自带参数和列表选中位置
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// 页签浏览屏（栈底永远是它）
    Browse { tab: Tab, selected: usize },
    /// 分组详情屏
    Detail { group: GroupRef, selected: usize },
}

/// 应用模式
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    Searching,
    Help,
}

/// 列表行：歌曲或分组
///
/// 分组行带原始下标，推详情屏时用它构造 GroupRef
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Row<'a> {
    Song(&'a Song),
    Group(usize, &'a GenreGroup),
}

/// 应用状态
pub struct App {
    pub catalog: Catalog,
    pub screens: Vec<Screen>,
    pub mode: AppMode,
    pub search_buffer: String,
    pub message: Option<String>,
    pub popular_limit: usize,
    pub preview_limit: usize,
}

impl App {
    /// 创建新的应用实例
    pub fn new(catalog: Catalog, config: &Config) -> Self {
        Self {
            catalog,
            screens: vec![Screen::Browse {
                tab: Tab::Popular,
                selected: 0,
            }],
            mode: AppMode::Normal,
            search_buffer: String::new(),
            message: None,
            popular_limit: config.popular_limit,
            preview_limit: config.preview_limit,
        }
    }

    /// 当前屏幕（栈顶）
    pub fn screen(&self) -> &Screen {
        self.screens.last().expect("导航栈不为空")
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        self.screens.last_mut().expect("导航栈不为空")
    }

    /// 按引用取分组
    pub fn group(&self, group: GroupRef) -> Option<&GenreGroup> {
        let groups = match group.tab {
            Tab::Moods => &self.catalog.moods,
            Tab::Genres => &self.catalog.genres,
            Tab::Popular => return None,
        };
        groups.get(group.index)
    }

    /// 当前屏的可见行：截断和搜索过滤都不动原数据
    pub fn visible_rows(&self) -> Vec<Row<'_>> {
        let rows: Vec<Row<'_>> = match *self.screen() {
            Screen::Browse { tab, .. } => match tab {
                Tab::Popular => self
                    .catalog
                    .popular
                    .iter()
                    .take(self.popular_limit)
                    .map(Row::Song)
                    .collect(),
                Tab::Moods => self
                    .catalog
                    .moods
                    .iter()
                    .enumerate()
                    .map(|(i, g)| Row::Group(i, g))
                    .collect(),
                Tab::Genres => self
                    .catalog
                    .genres
                    .iter()
                    .enumerate()
                    .map(|(i, g)| Row::Group(i, g))
                    .collect(),
            },
            Screen::Detail { group, .. } => self
                .group(group)
                .map(|g| {
                    g.items
                        .iter()
                        .take(self.preview_limit)
                        .map(Row::Song)
                        .collect()
                })
                .unwrap_or_default(),
        };

        if self.search_buffer.is_empty() {
            rows
        } else {
            let query = self.search_buffer.to_lowercase();
            rows.into_iter()
                .filter(|row| row_matches(row, &query))
                .collect()
        }
    }

    /// 当前屏的选中下标
    pub fn selected(&self) -> usize {
        match *self.screen() {
            Screen::Browse { selected, .. } | Screen::Detail { selected, .. } => selected,
        }
    }

    pub fn set_selected(&mut self, value: usize) {
        match self.screen_mut() {
            Screen::Browse { selected, .. } | Screen::Detail { selected, .. } => *selected = value,
        }
    }

    /// 当前选中的行
    pub fn selected_row(&self) -> Option<Row<'_>> {
        self.visible_rows().get(self.selected()).copied()
    }

    /// 确保选中下标有效（过滤条件变化后调用）
    pub fn clamp_selection(&mut self) {
        let len = self.visible_rows().len();
        let selected = self.selected();
        if len == 0 {
            self.set_selected(0);
        } else if selected >= len {
            self.set_selected(len - 1);
        }
    }
}

/// 搜索匹配：歌曲看标题和歌手，分组看名字，不分大小写
fn row_matches(row: &Row<'_>, query: &str) -> bool {
    match row {
        Row::Song(song) => {
            song.title.to_lowercase().contains(query) || song.artist.to_lowercase().contains(query)
        }
        Row::Group(_, group) => group.genre.to_lowercase().contains(query),
    }
}
