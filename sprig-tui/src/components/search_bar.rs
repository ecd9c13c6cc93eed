use crate::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use sprig_core::state::AppState;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Byte offset where the visible tail of `text` starts so that it fits in
/// `max_width` columns with one column left for the cursor. The query is only
/// ever edited at its end, so the tail is always the part worth showing.
fn trailing_fit(text: &str, max_width: u16) -> usize {
    let budget = usize::from(max_width).saturating_sub(1);
    let mut width = 0;
    let mut start = text.len();
    for (idx, grapheme) in text.grapheme_indices(true).rev() {
        width += grapheme.width();
        if width > budget {
            break;
        }
        start = idx;
    }
    start
}

pub fn draw(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let title = format!(
        " sprig · {} of {} branches ",
        state.filtered().len(),
        state.branches().len()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);

    if state.query().is_empty() {
        let placeholder = Line::from(Span::styled(
            "Type to filter branches (case-insensitive regex)...",
            Style::default().fg(theme.muted),
        ));
        f.render_widget(Paragraph::new(placeholder).block(block), area);
        if inner.width > 0 && inner.height > 0 {
            f.set_cursor_position((inner.x, inner.y));
        }
    } else {
        let start = trailing_fit(state.query(), inner.width);
        let visible = &state.query()[start..];
        f.render_widget(Paragraph::new(Line::from(Span::raw(visible))).block(block), area);

        if inner.width > 0 && inner.height > 0 {
            let cursor_x = inner
                .x
                .saturating_add(u16::try_from(visible.width()).unwrap_or(u16::MAX))
                .min(inner.x + inner.width - 1);
            f.set_cursor_position((cursor_x, inner.y));
        }
    }
}
