//! Keyboard Input Handling Module
//!
//! The primary entry point for all keyboard input. Key events are routed
//! by input mode first (an open overlay captures everything), then by the
//! current page. Returns true when the application should quit.

use std::time::Instant;

use crate::app::{App, AppState, InputMode, MENU_ITEMS};
use ratatui::crossterm::event::{KeyCode, KeyEvent};

/// Main keyboard event handler and dispatcher.
pub fn handle_key_events(key: KeyEvent, app: &mut App) -> bool {
    app.needs_redraw = true;

    // Overlays capture input before anything global runs.
    match app.input_mode {
        InputMode::Search => return handle_search_keys(key, app),
        InputMode::HelpMenu => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                app.input_mode = InputMode::Normal;
            }
            return false;
        }
        InputMode::Normal => {}
    }

    match key.code {
        // Global quit
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,

        // Help overlay toggle, from any page
        KeyCode::Char('?') => {
            app.clear_messages();
            app.input_mode = InputMode::HelpMenu;
            false
        }

        // Theme toggle, from any page
        KeyCode::Char('T') => {
            app.toggle_theme();
            false
        }

        // Global back navigation
        KeyCode::Backspace => {
            if app.can_go_back() {
                app.go_back();
            }
            false
        }

        // Home from anywhere
        KeyCode::Char('h') if app.state != AppState::StartPage => {
            app.navigate_to(AppState::StartPage);
            false
        }

        _ => match app.state {
            AppState::StartPage => handle_start_page_keys(key, app),
            AppState::Library => handle_library_keys(key, app),
            AppState::Favorites => handle_favorites_keys(key, app),
            AppState::Stats | AppState::About => false,
        },
    }
}

/// Keystrokes while the floating search box is open. Every edit updates
/// the raw query immediately and re-arms the debounce; Enter applies the
/// pending value now; Esc abandons the search and cancels the timer.
fn handle_search_keys(key: KeyEvent, app: &mut App) -> bool {
    let now = Instant::now();

    match key.code {
        KeyCode::Esc => {
            app.active_query_mut().clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => {
            app.active_query_mut().flush();
            match app.state {
                AppState::Favorites => app.selected_favorite = 0,
                _ => {
                    app.selected_snippet = 0;
                    app.preview_scroll = 0;
                }
            }
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            let mut text = app.active_query_mut().raw().to_string();
            text.pop();
            app.active_query_mut().set(text, now);
        }
        KeyCode::Char(c) => {
            let mut text = app.active_query_mut().raw().to_string();
            text.push(c);
            app.active_query_mut().set(text, now);
        }
        _ => {}
    }

    false
}

fn handle_start_page_keys(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.previous_menu_item(),
        KeyCode::Down | KeyCode::Char('j') => app.next_menu_item(),
        KeyCode::Enter => return activate_menu_item(app, app.selected_menu_item),
        KeyCode::Char('s') => app.navigate_to(AppState::Library),
        KeyCode::Char('f') => app.navigate_to(AppState::Favorites),
        KeyCode::Char('t') => app.navigate_to(AppState::Stats),
        KeyCode::Char('i') => app.navigate_to(AppState::About),
        _ => {}
    }
    false
}

fn activate_menu_item(app: &mut App, index: usize) -> bool {
    match MENU_ITEMS.get(index).map(|(_, name, _, _)| *name) {
        Some("Library") => app.navigate_to(AppState::Library),
        Some("Favorites") => app.navigate_to(AppState::Favorites),
        Some("Statistics") => app.navigate_to(AppState::Stats),
        Some("About") => app.navigate_to(AppState::About),
        Some("Exit") => return true,
        _ => {}
    }
    false
}

fn handle_library_keys(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Left | KeyCode::Char('[') => app.previous_category(),
        KeyCode::Right | KeyCode::Char(']') => app.next_category(),
        KeyCode::Char('/') => {
            app.clear_messages();
            app.input_mode = InputMode::Search;
        }
        KeyCode::Char('l') => app.cycle_level(),
        KeyCode::Char('f') => app.toggle_favorite_selected(),
        KeyCode::Char('K') => app.preview_scroll = app.preview_scroll.saturating_sub(2),
        KeyCode::Char('J') => app.preview_scroll = app.preview_scroll.saturating_add(2),
        KeyCode::Esc => {
            // Esc clears an applied search before it acts as "back".
            if app.filter.query.is_active() || !app.filter.query.raw().is_empty() {
                app.filter.query.clear();
                app.selected_snippet = 0;
            } else if app.can_go_back() {
                app.go_back();
            }
        }
        _ => {}
    }
    false
}

fn handle_favorites_keys(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Char('/') => {
            app.clear_messages();
            app.input_mode = InputMode::Search;
        }
        KeyCode::Char('l') => app.cycle_level(),
        KeyCode::Char('f') => app.toggle_favorite_selected(),
        KeyCode::Esc => {
            if app.favorites_filter.query.is_active()
                || !app.favorites_filter.query.raw().is_empty()
            {
                app.favorites_filter.query.clear();
                app.selected_favorite = 0;
            } else if app.can_go_back() {
                app.go_back();
            }
        }
        _ => {}
    }
    false
}
