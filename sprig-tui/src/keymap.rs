use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use sprig_core::action::Action;
use sprig_core::state::{AppState, Mode};

/// Resolve a key event into an Action based on current mode
pub fn resolve_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    // Global quit
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    match state.mode {
        Mode::Select => resolve_select_key(key),
        Mode::ConfirmDelete { .. } => Some(resolve_confirm_key(key.code)),
    }
}

fn resolve_select_key(key: KeyEvent) -> Option<Action> {
    if key.code == KeyCode::Char('d') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::RequestDelete);
    }
    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Up => Some(Action::MoveSelection(-1)),
        KeyCode::Down => Some(Action::MoveSelection(1)),
        KeyCode::Backspace => Some(Action::SearchPop),
        // Shift is fine (capitals), but chords like Ctrl+A are not input.
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(Action::SearchPush(c))
        }
        _ => None,
    }
}

fn resolve_confirm_key(code: KeyCode) -> Action {
    match code {
        KeyCode::Char('y' | 'Y') | KeyCode::Enter => Action::AffirmDelete,
        // Any other key cancels without deleting
        _ => Action::CancelDelete,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_core::branch::BranchSet;

    fn select_state() -> AppState {
        AppState::new(
            BranchSet::from_parts(vec!["main".into()], Vec::new()),
            false,
        )
    }

    fn confirm_state() -> AppState {
        let mut state = select_state();
        state.request_delete();
        assert!(matches!(state.mode, Mode::ConfirmDelete { .. }));
        state
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_select_mode_keys() {
        let state = select_state();
        assert_eq!(
            resolve_action(key(KeyCode::Char('x')), &state),
            Some(Action::SearchPush('x'))
        );
        assert_eq!(
            resolve_action(key(KeyCode::Backspace), &state),
            Some(Action::SearchPop)
        );
        assert_eq!(
            resolve_action(key(KeyCode::Up), &state),
            Some(Action::MoveSelection(-1))
        );
        assert_eq!(
            resolve_action(key(KeyCode::Down), &state),
            Some(Action::MoveSelection(1))
        );
        assert_eq!(
            resolve_action(key(KeyCode::Enter), &state),
            Some(Action::Confirm)
        );
        assert_eq!(resolve_action(key(KeyCode::Esc), &state), Some(Action::Quit));
        assert_eq!(resolve_action(key(KeyCode::Tab), &state), None);
    }

    #[test]
    fn test_modified_chars_are_not_query_input() {
        let state = select_state();
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(resolve_action(ctrl_a, &state), None);
        let alt_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT);
        assert_eq!(resolve_action(alt_x, &state), None);
        // Shifted capitals are still typed text.
        let shift_m = KeyEvent::new(KeyCode::Char('M'), KeyModifiers::SHIFT);
        assert_eq!(resolve_action(shift_m, &state), Some(Action::SearchPush('M')));
    }

    #[test]
    fn test_ctrl_d_requests_delete() {
        let state = select_state();
        let event = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert_eq!(resolve_action(event, &state), Some(Action::RequestDelete));
    }

    #[test]
    fn test_ctrl_c_quits_in_any_mode() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(resolve_action(event, &select_state()), Some(Action::Quit));
        assert_eq!(resolve_action(event, &confirm_state()), Some(Action::Quit));
    }

    #[test]
    fn test_confirm_mode_affirm_keys() {
        let state = confirm_state();
        assert_eq!(
            resolve_action(key(KeyCode::Char('y')), &state),
            Some(Action::AffirmDelete)
        );
        assert_eq!(
            resolve_action(key(KeyCode::Char('Y')), &state),
            Some(Action::AffirmDelete)
        );
        assert_eq!(
            resolve_action(key(KeyCode::Enter), &state),
            Some(Action::AffirmDelete)
        );
    }

    #[test]
    fn test_confirm_mode_any_other_key_cancels() {
        let state = confirm_state();
        assert_eq!(
            resolve_action(key(KeyCode::Char('n')), &state),
            Some(Action::CancelDelete)
        );
        assert_eq!(
            resolve_action(key(KeyCode::Esc), &state),
            Some(Action::CancelDelete)
        );
        assert_eq!(
            resolve_action(key(KeyCode::Char('q')), &state),
            Some(Action::CancelDelete)
        );
    }
}
