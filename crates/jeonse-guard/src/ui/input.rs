use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::AppState;

/// Applies one key press. Returns `true` when the session should end.
pub(crate) fn handle_key_event(key: KeyEvent, app: &mut AppState) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if app.confirm_quit {
        if key.code == KeyCode::Esc {
            return true;
        }
        app.confirm_quit = false;
    }

    match key.code {
        KeyCode::Esc => app.confirm_quit = true,
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Enter => app.activate(),
        KeyCode::F(5) => app.compute(),
        KeyCode::Up => app.step_up(),
        KeyCode::Down => app.step_down(),
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => app.clear_field(),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.push_char(ch)
        }
        _ => {}
    }
    false
}
