//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各种业务处理方法

use log::info;

use super::actions::Action;
use super::state::{App, AppMode, GroupRef, Row, Screen, Tab};

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),

            Action::NextTab => self.switch_tab(Tab::next),
            Action::PrevTab => self.switch_tab(Tab::prev),
            Action::GotoTab(tab) => self.goto_tab(tab),

            Action::Open => self.open_selected(),
            Action::Back => self.back(),

            Action::StartSearch => self.start_search(),
            Action::ShowHelp => self.mode = AppMode::Help,

            Action::Cancel => self.cancel(),

            Action::Submit => {
                // 搜索模式下 Enter 保留过滤条件回到普通模式
                if self.mode == AppMode::Searching {
                    self.mode = AppMode::Normal;
                }
            }

            Action::Input(c) => {
                if self.mode == AppMode::Searching {
                    self.search_buffer.push(c);
                    self.clamp_selection();
                }
            }

            Action::DeleteChar => {
                if self.mode == AppMode::Searching {
                    self.search_buffer.pop();
                    self.clamp_selection();
                }
            }
        }
        false
    }

    // ============ 导航相关 ============

    /// 向上移动选择
    pub fn move_up(&mut self) {
        let selected = self.selected();
        if selected > 0 {
            self.set_selected(selected - 1);
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        let selected = self.selected();
        if selected + 1 < self.visible_rows().len() {
            self.set_selected(selected + 1);
        }
    }

    /// 切换页签（仅浏览屏响应，切换后选中回到顶部）
    fn switch_tab(&mut self, step: impl Fn(Tab) -> Tab) {
        let Screen::Browse { tab, selected } = self.screen_mut() else {
            return;
        };
        *tab = step(*tab);
        *selected = 0;
        self.message = None;
    }

    /// 跳到指定页签
    pub fn goto_tab(&mut self, target: Tab) {
        self.switch_tab(|_| target);
    }

    // ============ 打开 / 返回 ============

    /// 打开当前选中的行：分组推详情屏，歌曲记成正在播放
    pub fn open_selected(&mut self) {
        let Screen::Browse { tab, .. } = *self.screen() else {
            // 详情屏里只有歌曲
            self.play_selected();
            return;
        };

        // 先把需要的信息拷出来，再改导航栈
        let target = self.selected_row().map(|row| match row {
            Row::Group(index, group) => Some((index, group.genre.clone())),
            Row::Song(_) => None,
        });
        match target {
            Some(Some((index, genre))) => {
                self.screens.push(Screen::Detail {
                    group: GroupRef { tab, index },
                    selected: 0,
                });
                self.message = Some(format!("进入分组: {}", genre));
            }
            Some(None) => self.play_selected(),
            None => {}
        }
    }

    /// 把选中歌曲记成正在播放（demo 不解码音频，只记日志和提示）
    fn play_selected(&mut self) {
        let Some(Row::Song(song)) = self.selected_row() else {
            return;
        };
        let title = song.title.clone();
        let artist = song.artist.clone();
        let audio = song.audio.clone();

        if audio.is_empty() {
            self.message = Some(format!("{} 没有预览音频", title));
            return;
        }
        info!("播放预览: {} - {} ({})", title, artist, audio);
        self.message = Some(format!("▶ {} - {}", title, artist));
    }

    /// 返回：详情屏弹栈；浏览屏上先清过滤条件，否则不动
    pub fn back(&mut self) {
        if self.screens.len() > 1 {
            self.screens.pop();
            // 过滤条件还在时，恢复的选中位置可能越界
            self.clamp_selection();
            self.message = None;
        } else if !self.search_buffer.is_empty() {
            self.search_buffer.clear();
            self.clamp_selection();
            self.message = Some("已清除过滤".to_string());
        }
    }

    // ============ 搜索相关 ============

    /// 进入搜索模式
    pub fn start_search(&mut self) {
        self.mode = AppMode::Searching;
        self.search_buffer.clear();
        self.message = None;
        self.clamp_selection();
    }

    // ============ 通用操作 ============

    /// 取消当前模式
    pub fn cancel(&mut self) {
        if self.mode == AppMode::Searching {
            self.search_buffer.clear();
            self.clamp_selection();
        }
        self.mode = AppMode::Normal;
        self.message = None;
    }
}
