use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.cycle_focus();
            return;
        }
        KeyCode::BackTab => {
            app.cycle_focus_back();
            return;
        }
        _ => {}
    }

    match app.focus() {
        Focus::Search => handle_search_key(app, key),
        Focus::Results => handle_results_key(app, key),
        Focus::Cart => handle_cart_key(app, key),
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            if app.submit_search().is_some() {
                app.set_focus(Focus::Results);
            }
        }
        KeyCode::Backspace => app.pop_query_char(),
        KeyCode::Esc => app.clear_query(),
        KeyCode::Down => app.set_focus(Focus::Results),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_query_char(ch);
        }
        _ => {}
    }
}

fn handle_results_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left => app.move_result_selection(-1),
        KeyCode::Right => app.move_result_selection(1),
        KeyCode::Up => app.move_result_row(-1),
        KeyCode::Down => app.move_result_row(1),
        KeyCode::Enter | KeyCode::Char('a') => {
            app.add_selected_to_cart();
        }
        KeyCode::Char('c') => app.set_focus(Focus::Cart),
        KeyCode::Esc | KeyCode::Char('/') => app.set_focus(Focus::Search),
        _ => {}
    }
}

fn handle_cart_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.move_cart_selection(-1),
        KeyCode::Down => app.move_cart_selection(1),
        KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('d') => {
            app.remove_selected_from_cart();
        }
        KeyCode::Esc | KeyCode::Char('/') => app.set_focus(Focus::Search),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
