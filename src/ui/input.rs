use crate::nav::Screen;
use crate::screens::{DetailIntent, ListIntent};
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const PAGE: isize = 5;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    let list = match &app.nav().top().screen {
        Screen::List(screen) => Some((
            screen.state().error.is_some(),
            !screen.state().query.is_empty(),
        )),
        Screen::Details(_) => None,
    };

    match list {
        Some(_) if app.search_focused() => handle_search_key(app, key),
        Some((has_error, has_query)) => handle_list_key(app, key, has_error, has_query),
        None => handle_detail_key(app, key),
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.set_search_focused(false);
            app.list_intent(ListIntent::SubmitSearch);
        }
        KeyCode::Esc => app.set_search_focused(false),
        KeyCode::Backspace => app.list_intent(ListIntent::Backspace),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.list_intent(ListIntent::ClearSearch)
        }
        KeyCode::Char(c) => app.list_intent(ListIntent::InsertChar(c)),
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent, has_error: bool, has_query: bool) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('/') => app.set_search_focused(true),
        KeyCode::Esc if has_query => app.list_intent(ListIntent::ClearSearch),
        KeyCode::Char('x') => app.list_intent(ListIntent::ClearSearch),
        KeyCode::Char('r') if has_error => app.list_intent(ListIntent::Retry),
        KeyCode::Char('r') | KeyCode::F(5) => app.list_intent(ListIntent::Refresh),
        KeyCode::Up | KeyCode::Char('k') => app.list_intent(ListIntent::MoveBy(-1)),
        KeyCode::Down | KeyCode::Char('j') => app.list_intent(ListIntent::MoveBy(1)),
        KeyCode::PageUp => app.list_intent(ListIntent::MoveBy(-PAGE)),
        KeyCode::PageDown => app.list_intent(ListIntent::MoveBy(PAGE)),
        KeyCode::Home | KeyCode::Char('g') => app.list_intent(ListIntent::MoveToStart),
        KeyCode::End | KeyCode::Char('G') => app.list_intent(ListIntent::MoveToEnd),
        KeyCode::Enter => app.list_intent(ListIntent::Select),
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => app.back(),
        KeyCode::Char('r') => app.detail_intent(DetailIntent::Retry),
        KeyCode::Left | KeyCode::Char('h') => app.detail_intent(DetailIntent::PrevImage),
        KeyCode::Right | KeyCode::Char('l') => app.detail_intent(DetailIntent::NextImage),
        _ => {}
    }
}
