use crate::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use sprig_core::state::{AppState, Mode};

/// Bottom line of the screen: the delete prompt while one is pending,
/// otherwise the most recent error. Blank the rest of the time.
pub fn draw(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let emphasis = Style::default().fg(theme.error).add_modifier(Modifier::BOLD);

    let line = match &state.mode {
        Mode::ConfirmDelete { branch_name } => Line::from(vec![
            Span::styled(format!(" Delete branch '{branch_name}'?"), emphasis),
            Span::styled(" (y/N)", Style::default().fg(theme.muted)),
        ]),
        Mode::Select => {
            let Some(error) = &state.error else {
                return;
            };
            Line::from(Span::styled(format!(" Error: {error}"), emphasis))
        }
    };
    f.render_widget(Paragraph::new(line), area);
}
