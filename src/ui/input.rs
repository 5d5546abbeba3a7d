//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use std::io;

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, AppMode, Tab};

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: &AppMode, key: KeyCode) -> Option<Action> {
    match mode {
        AppMode::Normal => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => Some(Action::NextTab),
            KeyCode::Left | KeyCode::BackTab => Some(Action::PrevTab),
            KeyCode::Char('1') => Some(Action::GotoTab(Tab::Popular)),
            KeyCode::Char('2') => Some(Action::GotoTab(Tab::Moods)),
            KeyCode::Char('3') => Some(Action::GotoTab(Tab::Genres)),
            KeyCode::Enter => Some(Action::Open),
            KeyCode::Char('h') | KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),
            KeyCode::Char('/') => Some(Action::StartSearch),
            KeyCode::Char('?') => Some(Action::ShowHelp),
            _ => None,
        },
        AppMode::Searching => match key {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        AppMode::Help => match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::Cancel),
            _ => None,
        },
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(&app.mode, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_mode_bindings() {
        assert_eq!(get_action(&AppMode::Normal, KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(get_action(&AppMode::Normal, KeyCode::Tab), Some(Action::NextTab));
        assert_eq!(
            get_action(&AppMode::Normal, KeyCode::Char('2')),
            Some(Action::GotoTab(Tab::Moods))
        );
        assert_eq!(get_action(&AppMode::Normal, KeyCode::Enter), Some(Action::Open));
        assert_eq!(get_action(&AppMode::Normal, KeyCode::Char('x')), None);
    }

    #[test]
    fn test_searching_mode_captures_chars() {
        // 搜索模式下 q 是输入而不是退出
        assert_eq!(
            get_action(&AppMode::Searching, KeyCode::Char('q')),
            Some(Action::Input('q'))
        );
        assert_eq!(get_action(&AppMode::Searching, KeyCode::Esc), Some(Action::Cancel));
        assert_eq!(get_action(&AppMode::Searching, KeyCode::Enter), Some(Action::Submit));
    }
}
