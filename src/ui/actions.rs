//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

use super::state::Tab;

/// 用户操作枚举
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,

    // 页签切换（仅浏览屏）
    NextTab,
    PrevTab,
    GotoTab(Tab),

    // 导航
    Open, // 歌曲 -> 播放预览；分组 -> 推详情屏
    Back, // 弹出详情屏 / 清除过滤

    // 模式切换
    StartSearch,
    ShowHelp,

    // 表单/通用交互
    Cancel,      // Esc
    Submit,      // Enter
    Input(char), // 输入字符
    DeleteChar,  // Backspace
}
