use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use run_picker_core::selection::Input;

/// Decodes a terminal key event into selection input.
///
/// Text editing is resolved here: the returned [`Input::Text`] carries the
/// full new query built from `query`. Returns `None` for keys the picker does
/// not use, and for releases and auto-repeats on terminals that report them.
#[must_use]
pub fn translate(key_event: KeyEvent, query: &str) -> Option<Input> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    match key_event.code {
        KeyCode::Up => Some(Input::Up),
        KeyCode::Down => Some(Input::Down),
        KeyCode::Enter => Some(Input::Enter),
        KeyCode::Esc => Some(Input::Escape),
        KeyCode::Tab => Some(Input::Tab),
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Input::Escape)
        }
        KeyCode::Char(_)
            if key_event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            None
        }
        KeyCode::Char(c) => {
            let mut updated = query.to_string();
            updated.push(c);
            Some(Input::Text(updated))
        }
        KeyCode::Backspace if !query.is_empty() => {
            let mut updated = query.to_string();
            updated.pop();
            Some(Input::Text(updated))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(translate(key(KeyCode::Up), ""), Some(Input::Up));
        assert_eq!(translate(key(KeyCode::Down), ""), Some(Input::Down));
        assert_eq!(translate(key(KeyCode::Enter), ""), Some(Input::Enter));
        assert_eq!(translate(key(KeyCode::Esc), ""), Some(Input::Escape));
        assert_eq!(translate(key(KeyCode::Tab), ""), Some(Input::Tab));
    }

    #[test]
    fn test_characters_extend_query() {
        assert_eq!(
            translate(key(KeyCode::Char('d')), "buil"),
            Some(Input::Text("build".to_string()))
        );
        assert_eq!(
            translate(KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT), ""),
            Some(Input::Text("B".to_string()))
        );
    }

    #[test]
    fn test_backspace_removes_last_character() {
        assert_eq!(
            translate(key(KeyCode::Backspace), "test"),
            Some(Input::Text("tes".to_string()))
        );
        assert_eq!(translate(key(KeyCode::Backspace), ""), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(translate(ctrl_c, "query"), Some(Input::Escape));
    }

    #[test]
    fn test_other_control_chords_are_ignored() {
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(translate(ctrl_a, ""), None);

        let alt_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT);
        assert_eq!(translate(alt_x, ""), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(translate(release, ""), None);
    }

    #[test]
    fn test_key_repeat_is_ignored() {
        let repeat = KeyEvent::new_with_kind(KeyCode::Down, KeyModifiers::NONE, KeyEventKind::Repeat);
        assert_eq!(translate(repeat, ""), None);

        let repeat = KeyEvent::new_with_kind(KeyCode::Char('a'), KeyModifiers::NONE, KeyEventKind::Repeat);
        assert_eq!(translate(repeat, "b"), None);
    }

    #[test]
    fn test_unused_keys_are_ignored() {
        for code in [KeyCode::Left, KeyCode::Right, KeyCode::Home, KeyCode::F(1)] {
            assert_eq!(translate(key(code), "abc"), None);
        }
    }
}
