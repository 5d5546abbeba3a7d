//! 通用 UI 组件
//!
//! 列表行、搜索栏、弹窗等通用组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, ListItem, Paragraph},
};

use crate::models::{GenreGroup, Song};

/// 毫秒 -> mm:ss / hh:mm:ss
pub fn fmt_duration(duration_ms: u64) -> String {
    let total = duration_ms / 1000;
    let seconds = total % 60;
    let minutes = (total / 60) % 60;
    let hours = total / 3600;
    if hours > 0 {
        format!("{:0>2}:{:0>2}:{:0>2}", hours, minutes, seconds)
    } else {
        format!("{:0>2}:{:0>2}", minutes, seconds)
    }
}

/// [组件] 歌曲行：标题 · 歌手，右侧时长和播放符号
///
/// 选中高亮由列表的 highlight_style 统一处理，这里只管内容
pub fn song_list_item(song: &Song) -> ListItem<'static> {
    let mut spans = vec![
        Span::styled("♫ ", Style::default().fg(Color::Yellow)),
        Span::raw(song.title.clone()),
    ];
    if song.is_explicit {
        spans.push(Span::styled(" [E]", Style::default().fg(Color::Red)));
    }
    if !song.artist.is_empty() {
        spans.push(Span::styled(
            format!("  {}", song.artist),
            Style::default().fg(Color::Gray),
        ));
    }
    if song.duration_ms > 0 {
        spans.push(Span::styled(
            format!("  {}", fmt_duration(song.duration_ms)),
            Style::default().fg(Color::DarkGray),
        ));
    }
    spans.push(Span::styled(" ▶", Style::default().fg(Color::DarkGray)));

    ListItem::new(Line::from(spans))
}

/// [组件] 分组行：分组名，右侧箭头
pub fn group_list_item(group: &GenreGroup) -> ListItem<'static> {
    let line = Line::from(vec![
        Span::styled("🎙 ", Style::default().fg(Color::Cyan)),
        Span::raw(group.genre.clone()),
        Span::styled(
            format!("  {} 首", group.items.len()),
            Style::default().fg(Color::Gray),
        ),
        Span::styled("  ›", Style::default().fg(Color::DarkGray)),
    ]);
    ListItem::new(line)
}

/// [组件] 搜索栏（原 demo 的 SearchBar）
pub fn render_search_bar(frame: &mut Frame, area: Rect, value: &str, is_focused: bool) {
    let (text, style) = if value.is_empty() && !is_focused {
        (
            "搜索音乐 (/)".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        let cursor = if is_focused { "▏" } else { "" };
        (
            format!("/{}{}", value, cursor),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    };

    let input = Paragraph::new(text)
        .style(style)
        .block(Block::default().title("搜索").borders(Borders::ALL));
    frame.render_widget(input, area);
}

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_duration() {
        assert_eq!(fmt_duration(0), "00:00");
        assert_eq!(fmt_duration(1000), "00:01");
        assert_eq!(fmt_duration(205_920), "03:25");
        assert_eq!(fmt_duration(3_723_000), "01:02:03");
    }
}
