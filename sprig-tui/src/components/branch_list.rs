use crate::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use sprig_core::state::AppState;

pub fn draw(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let visible = state.filtered().len().min(state.capacity());

    let mut items: Vec<ListItem> = state.filtered()[..visible]
        .iter()
        .filter_map(|&idx| state.branches().get(idx))
        .map(|branch| {
            let mut spans = vec![Span::raw(branch.name.as_str())];
            if branch.remote_only() {
                spans.push(Span::styled(
                    " (remote)",
                    Style::default().fg(theme.remote),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    // Entries beyond the viewport are reachable by narrowing the query only.
    if state.filtered().len() > visible {
        items.push(ListItem::new(Line::from(Span::styled(
            "…",
            Style::default().fg(theme.muted),
        ))));
    }

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Enter: checkout · Ctrl+D: delete · Esc: quit ")
                .border_style(Style::default().fg(theme.border)),
        )
        .highlight_style(
            Style::default()
                .bg(theme.accent)
                .fg(theme.highlight_fg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut list_state = ListState::default();
    list_state.select(state.selected());
    f.render_stateful_widget(list, area, &mut list_state);
}
