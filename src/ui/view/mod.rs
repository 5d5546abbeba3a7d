//! 视图层模块
//!
//! 主渲染入口和各屏的视图函数，纯函数，不改状态

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};

use super::state::{App, AppMode, Row, Screen, Tab};
use components::{
    fmt_duration, group_list_item, render_dialog_framework, render_search_bar, song_list_item,
};
use layouts::centered_rect;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 搜索栏
            Constraint::Length(3), // 页签 / 详情屏标题
            Constraint::Min(8),    // 列表
            Constraint::Length(5), // 选中项详情
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_search_bar(
        frame,
        chunks[0],
        &app.search_buffer,
        app.mode == AppMode::Searching,
    );
    render_nav(frame, app, chunks[1]);
    render_list(frame, app, chunks[2]);
    render_details(frame, app, chunks[3]);
    render_help(frame, app, chunks[4]);

    // 渲染弹窗
    if app.mode == AppMode::Help {
        render_help_dialog(frame);
    }
}

/// 浏览屏画页签栏，详情屏画分组标题
fn render_nav(frame: &mut Frame, app: &App, area: Rect) {
    match *app.screen() {
        Screen::Browse { tab, .. } => {
            let titles = Tab::ALL.iter().map(|t| t.title());
            let tabs = Tabs::new(titles)
                .select(tab.index())
                .style(Style::default().fg(Color::Gray))
                .highlight_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                )
                .block(Block::default().title("🎵 音乐").borders(Borders::ALL));
            frame.render_widget(tabs, area);
        }
        Screen::Detail { group, .. } => {
            let title = app
                .group(group)
                .map(|g| g.genre.clone())
                .unwrap_or_else(|| "音乐".to_string());
            let header = Paragraph::new(Line::from(vec![
                Span::styled("‹ ", Style::default().fg(Color::Gray)),
                Span::styled(
                    title,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]))
            .block(Block::default().borders(Borders::ALL));
            frame.render_widget(header, area);
        }
    }
}

fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let rows = app.visible_rows();
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| match row {
            Row::Song(song) => song_list_item(song),
            Row::Group(_, group) => group_list_item(group),
        })
        .collect();

    let title = match *app.screen() {
        Screen::Browse { tab, .. } => tab.title(),
        Screen::Detail { .. } => "曲目预览",
    };
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

    let mut state = ListState::default();
    state.select((!rows.is_empty()).then_some(app.selected()));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_details(frame: &mut Frame, app: &App, area: Rect) {
    let content = match app.selected_row() {
        Some(Row::Song(song)) => format!(
            "标题: {}{}\n歌手: {}  时长: {}\n预览: {}",
            song.title,
            if song.is_explicit { " [显性内容]" } else { "" },
            song.artist,
            fmt_duration(song.duration_ms),
            if song.audio.is_empty() {
                "(无)"
            } else {
                &song.audio
            },
        ),
        Some(Row::Group(_, group)) => format!(
            "分组: {}\n共 {} 首，Enter 查看前 {} 首",
            group.genre,
            group.items.len(),
            app.preview_limit.min(group.items.len()),
        ),
        None => "没有匹配的条目".to_string(),
    };

    let details = Paragraph::new(content)
        .block(Block::default().title("详情").borders(Borders::ALL))
        .wrap(Wrap { trim: true });

    frame.render_widget(details, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match &app.mode {
        AppMode::Normal => {
            "[Tab/1-3] 页签  [j/k] 导航  [Enter] 打开  [Esc] 返回  [/] 搜索  [?] 帮助  [q] 退出"
        }
        AppMode::Searching => "输入关键字实时过滤  [Enter] 保留过滤  [Esc] 清除",
        AppMode::Help => "[Esc] 关闭帮助",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_help_dialog(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());
    let inner = render_dialog_framework(frame, area, "按键说明");

    let lines = [
        "Tab / Shift-Tab / ← →   切换页签",
        "1 / 2 / 3               热门 / 心情 / 流派",
        "j / k / ↓ ↑             移动选择",
        "Enter                   打开分组 / 播放预览",
        "Esc / Backspace / h     返回上一屏",
        "/                       搜索当前列表",
        "q                       退出",
    ]
    .join("\n");

    let body = Paragraph::new(lines).style(Style::default().fg(Color::White));
    frame.render_widget(body, inner);
}
