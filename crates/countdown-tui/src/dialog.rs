use countdown_core::InputState;
use crossterm::event::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    None,
    Cancel,
    Submit,
    NextField,
}

/// Route a key press to the focused text field of a form.
///
/// Submitting is always allowed; empty fields are rejected by the command.
pub fn handle_dialog_input(input: &mut InputState, key_code: KeyCode) -> DialogAction {
    match key_code {
        KeyCode::Esc => DialogAction::Cancel,
        KeyCode::Enter => DialogAction::Submit,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => DialogAction::NextField,
        KeyCode::Char(c) => {
            input.insert_char(c);
            DialogAction::None
        }
        KeyCode::Backspace => {
            input.backspace();
            DialogAction::None
        }
        KeyCode::Delete => {
            input.delete();
            DialogAction::None
        }
        KeyCode::Left => {
            input.move_left();
            DialogAction::None
        }
        KeyCode::Right => {
            input.move_right();
            DialogAction::None
        }
        KeyCode::Home => {
            input.move_home();
            DialogAction::None
        }
        KeyCode::End => {
            input.move_end();
            DialogAction::None
        }
        _ => DialogAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_characters_edit_the_field() {
        let mut input = InputState::new();
        for c in "2099-01-01x".chars() {
            assert_eq!(handle_dialog_input(&mut input, KeyCode::Char(c)), DialogAction::None);
        }
        handle_dialog_input(&mut input, KeyCode::Backspace);
        assert_eq!(input.as_str(), "2099-01-01");
    }

    #[test]
    fn test_control_keys_map_to_actions() {
        let mut input = InputState::new();
        assert_eq!(handle_dialog_input(&mut input, KeyCode::Esc), DialogAction::Cancel);
        assert_eq!(handle_dialog_input(&mut input, KeyCode::Enter), DialogAction::Submit);
        assert_eq!(handle_dialog_input(&mut input, KeyCode::Tab), DialogAction::NextField);
        assert!(input.is_empty());
    }
}
