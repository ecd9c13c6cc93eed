use crate::{components, keymap, theme::Theme};
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
};
use sprig_core::{
    action::Action,
    branch::BranchSet,
    git::GitProvider,
    state::{AppState, ExitAction, Mode},
};
use std::time::Duration;

/// Rows taken by chrome around the branch list: search bar (3), list borders
/// (2), bottom status line (1).
const CHROME_ROWS: u16 = 6;

/// Drive the interactive session until the user confirms a branch or quits.
///
/// The returned `ExitAction` is handled by the caller after the terminal has
/// been restored; no checkout happens while the TUI is alive.
pub fn run(
    terminal: &mut DefaultTerminal,
    state: &mut AppState,
    git: &dyn GitProvider,
    theme: &Theme,
) -> Result<ExitAction> {
    // Viewport capacity is measured once and held fixed for the session;
    // entries beyond it are reached by narrowing the query, not by scrolling.
    let rows = terminal.size()?.height.saturating_sub(CHROME_ROWS).max(1);
    state.set_capacity(rows as usize);

    loop {
        terminal.draw(|f| draw(f, state, theme))?;

        if event::poll(Duration::from_millis(80))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Clear error on any keypress
                state.error = None;

                if let Some(action) = keymap::resolve_action(key, state) {
                    if let Some(exit) = process_action(action, state, git) {
                        return Ok(exit);
                    }
                }
            }
        }
    }
}

fn draw(f: &mut Frame, state: &AppState, theme: &Theme) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(f.area());

    components::search_bar::draw(f, chunks[0], state, theme);
    components::branch_list::draw(f, chunks[1], state, theme);
    components::status_bar::draw(f, chunks[2], state, theme);
}

fn process_action(action: Action, state: &mut AppState, git: &dyn GitProvider) -> Option<ExitAction> {
    match action {
        Action::Quit => return Some(ExitAction::Quit),

        Action::SearchPush(c) => state.push_char(c),
        Action::SearchPop => state.pop_char(),
        Action::MoveSelection(delta) => state.move_selection(delta),

        Action::Confirm => {
            if let Some(branch) = state.selected_branch() {
                return Some(ExitAction::Switch {
                    branch: branch.name.clone(),
                });
            }
        }

        Action::RequestDelete => state.request_delete(),
        Action::CancelDelete => state.cancel_delete(),

        Action::AffirmDelete => {
            if let Mode::ConfirmDelete { branch_name } = state.mode.clone() {
                log::info!("deleting local branch {branch_name}");
                if let Err(err) = git.delete_local(&branch_name) {
                    state.error = Some(err.to_string());
                }
                // Full reload either way; the catalog is never patched in place.
                match BranchSet::load(git, state.local_only) {
                    Ok(branches) => state.set_branches(branches),
                    Err(err) => state.error = Some(err.to_string()),
                }
            }
            state.cancel_delete();
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_core::git::MockGitProvider;

    fn state_with(local: &[&str], remote: &[&str]) -> AppState {
        let branches = BranchSet::from_parts(
            local.iter().map(ToString::to_string).collect(),
            remote.iter().map(ToString::to_string).collect(),
        );
        AppState::new(branches, false)
    }

    #[test]
    fn test_confirm_yields_switch_for_selected_branch() {
        let git = MockGitProvider::default();
        let mut state = state_with(&["main", "dev"], &[]);
        state.move_selection(1);

        let exit = process_action(Action::Confirm, &mut state, &git);
        assert_eq!(
            exit,
            Some(ExitAction::Switch {
                branch: "dev".to_string()
            })
        );
    }

    #[test]
    fn test_confirm_on_empty_view_is_noop() {
        let git = MockGitProvider::default();
        let mut state = state_with(&["main"], &[]);
        for c in "zzz".chars() {
            process_action(Action::SearchPush(c), &mut state, &git);
        }

        assert_eq!(process_action(Action::Confirm, &mut state, &git), None);
    }

    #[test]
    fn test_affirm_delete_deletes_and_reloads() {
        let git = MockGitProvider {
            local_branches: vec!["main".into()],
            ..MockGitProvider::default()
        };
        let mut state = state_with(&["main", "doomed"], &[]);
        state.move_selection(1);

        process_action(Action::RequestDelete, &mut state, &git);
        assert!(matches!(state.mode, Mode::ConfirmDelete { .. }));

        process_action(Action::AffirmDelete, &mut state, &git);
        assert_eq!(state.mode, Mode::Select);
        assert_eq!(*git.delete_calls.lock().unwrap(), vec!["doomed".to_string()]);
        // Reloaded catalog no longer contains the deleted branch
        assert_eq!(state.branches().len(), 1);
        assert_eq!(state.branches().get(0).unwrap().name, "main");
    }

    #[test]
    fn test_affirm_delete_failure_surfaces_error_and_resumes() {
        let git = MockGitProvider {
            local_branches: vec!["main".into(), "dev".into()],
            delete_result: std::sync::Mutex::new(Some(Err(anyhow::anyhow!(
                "error: branch 'dev' not fully merged"
            )))),
            ..MockGitProvider::default()
        };
        let mut state = state_with(&["main", "dev"], &[]);
        state.move_selection(1);

        process_action(Action::RequestDelete, &mut state, &git);
        process_action(Action::AffirmDelete, &mut state, &git);

        assert_eq!(state.mode, Mode::Select);
        assert!(state.error.as_deref().unwrap().contains("not fully merged"));
        // Session resumes with the reloaded catalog intact
        assert_eq!(state.branches().len(), 2);
    }

    #[test]
    fn test_cancel_delete_does_not_touch_git() {
        let git = MockGitProvider::default();
        let mut state = state_with(&["main"], &[]);

        process_action(Action::RequestDelete, &mut state, &git);
        process_action(Action::CancelDelete, &mut state, &git);

        assert_eq!(state.mode, Mode::Select);
        assert!(git.delete_calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_request_delete_on_remote_only_is_noop() {
        let git = MockGitProvider::default();
        let mut state = state_with(&[], &["origin-only"]);

        process_action(Action::RequestDelete, &mut state, &git);
        assert_eq!(state.mode, Mode::Select);
    }
}
