use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.detail().is_visible() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('x') => app.close_detail(),
            KeyCode::Enter | KeyCode::Char('a') => app.add_from_detail(),
            _ => {}
        }
        return;
    }

    if app.picker_is_open() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('c') => app.close_picker(),
            KeyCode::Up | KeyCode::Char('k') => app.move_picker(-1),
            KeyCode::Down | KeyCode::Char('j') => app.move_picker(1),
            KeyCode::Enter => app.confirm_picker(),
            KeyCode::Char(ch) if ch.is_ascii_digit() => {
                app.pick_digit(ch.to_digit(10).unwrap_or(0) as usize);
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor_row(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor_row(1),
        KeyCode::Enter => app.select_highlighted(),
        KeyCode::Char('a') | KeyCode::Char('+') => app.add_highlighted(),
        KeyCode::Char('c') => app.open_picker(),
        KeyCode::Tab => app.cycle_category(1),
        KeyCode::BackTab => app.cycle_category(-1),
        KeyCode::Char('r') => app.reload(),
        KeyCode::Esc => app.dismiss_error(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
