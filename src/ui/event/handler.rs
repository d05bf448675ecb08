use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::action::Action;
use crate::app::input_mode::InputMode;
use crate::app::state::AppState;

use super::Event;

pub fn handle_event(event: Event, state: &AppState) -> Action {
    match event {
        Event::Init => Action::Render,
        Event::Resize(w, h) => Action::Resize(w, h),
        Event::Key(key) => handle_key_event(key, state),
    }
}

fn handle_key_event(key: KeyEvent, state: &AppState) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match state.ui.input_mode {
        InputMode::Normal => handle_normal_mode(key),
        InputMode::QueryInput => handle_query_input_mode(key),
    }
}

fn handle_normal_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Tab | KeyCode::BackTab => Action::ToggleFocus,
        KeyCode::Esc => Action::Escape,

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Action::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => Action::SelectNext,
        KeyCode::Char('g') | KeyCode::Home => Action::SelectFirst,
        KeyCode::Char('G') | KeyCode::End => Action::SelectLast,
        KeyCode::Enter => Action::ConfirmSelection,

        KeyCode::Char('c') => Action::ToggleDatabasePanel,
        KeyCode::Char('r') => Action::LoadDatabases,
        KeyCode::Char('i') => Action::EnterQueryInput,
        KeyCode::Char('x') => Action::CancelQuery,
        _ => Action::None,
    }
}

fn handle_query_input_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::SubmitQuery,
        KeyCode::Esc => Action::ExitQueryInput,
        KeyCode::Backspace => Action::QueryBackspace,
        KeyCode::Char(c) => Action::QueryInput(c),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn editing_state() -> AppState {
        let mut state = AppState::new("http://localhost:9999/lensapi/");
        state.ui.input_mode = InputMode::QueryInput;
        state
    }

    mod normal_mode {
        use super::*;

        #[rstest]
        #[case(KeyCode::Char('q'), Action::Quit)]
        #[case(KeyCode::Tab, Action::ToggleFocus)]
        #[case(KeyCode::Char('j'), Action::SelectNext)]
        #[case(KeyCode::Up, Action::SelectPrevious)]
        #[case(KeyCode::Char('G'), Action::SelectLast)]
        #[case(KeyCode::Enter, Action::ConfirmSelection)]
        #[case(KeyCode::Char('c'), Action::ToggleDatabasePanel)]
        #[case(KeyCode::Char('r'), Action::LoadDatabases)]
        #[case(KeyCode::Char('i'), Action::EnterQueryInput)]
        #[case(KeyCode::Char('x'), Action::CancelQuery)]
        #[case(KeyCode::F(5), Action::None)]
        fn maps_keys(#[case] code: KeyCode, #[case] expected: Action) {
            let state = AppState::new("http://localhost:9999/lensapi/");

            let action = handle_event(key(code), &state);

            assert_eq!(action, expected);
        }
    }

    mod query_input_mode {
        use super::*;

        #[test]
        fn letters_are_typed_not_interpreted() {
            let action = handle_event(key(KeyCode::Char('q')), &editing_state());

            assert_eq!(action, Action::QueryInput('q'));
        }

        #[rstest]
        #[case(KeyCode::Enter, Action::SubmitQuery)]
        #[case(KeyCode::Esc, Action::ExitQueryInput)]
        #[case(KeyCode::Backspace, Action::QueryBackspace)]
        fn editing_keys(#[case] code: KeyCode, #[case] expected: Action) {
            assert_eq!(handle_event(key(code), &editing_state()), expected);
        }

        #[test]
        fn ctrl_c_quits_even_while_editing() {
            let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

            assert_eq!(handle_event(event, &editing_state()), Action::Quit);
        }
    }

    #[test]
    fn resize_is_forwarded() {
        let state = AppState::new("http://localhost:9999/lensapi/");

        assert_eq!(
            handle_event(Event::Resize(120, 40), &state),
            Action::Resize(120, 40)
        );
    }
}
