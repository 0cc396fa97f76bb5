use catalog_core::{AppViewModel, Msg, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum UiCommand {
    Dispatch(Msg),
    ScrollUp,
    ScrollDown,
    Quit,
}

/// Maps a key press onto a command for the current screen.
///
/// The search box always has focus, so printable characters edit the query.
pub(crate) fn map_key(key: KeyEvent, view: &AppViewModel) -> Option<UiCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => return Some(UiCommand::Quit),
        KeyCode::Char('c') if ctrl => return Some(UiCommand::Quit),
        KeyCode::F(5) => return Some(UiCommand::Dispatch(Msg::RefreshRequested)),
        _ => {}
    }

    let Screen::Table(table) = &view.screen else {
        return None;
    };

    let msg = match key.code {
        KeyCode::Up => return Some(UiCommand::ScrollUp),
        KeyCode::Down => return Some(UiCommand::ScrollDown),
        KeyCode::Left | KeyCode::PageUp => Msg::PreviousPageClicked,
        KeyCode::Right | KeyCode::PageDown => Msg::NextPageClicked,
        KeyCode::Tab => Msg::PageSizeSelected(table.pager.page_size.next()),
        KeyCode::BackTab => Msg::PageSizeSelected(table.pager.page_size.previous()),
        KeyCode::Backspace => {
            let mut query = table.query.clone();
            query.pop()?;
            Msg::QueryChanged(query)
        }
        KeyCode::Char('u') if ctrl => Msg::QueryChanged(String::new()),
        KeyCode::Char(ch) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            let mut query = table.query.clone();
            query.push(ch);
            Msg::QueryChanged(query)
        }
        _ => return None,
    };
    Some(UiCommand::Dispatch(msg))
}

#[cfg(test)]
mod tests {
    use catalog_core::{update, AppState, FetchOutcome, PageSize, Product};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn table_view(query: &str) -> AppViewModel {
        let (state, _) = update(AppState::new(), Msg::Mounted);
        let (state, _) = update(
            state,
            Msg::FetchCompleted {
                fetch_id: 1,
                outcome: FetchOutcome::Loaded {
                    products: vec![Product::new(1, "Apple", 1.5, "Fruit")],
                    skipped: 0,
                    fetched_at: "08:00:00".to_string(),
                },
            },
        );
        update(state, Msg::QueryChanged(query.to_string())).0.view()
    }

    #[test]
    fn typing_appends_to_query() {
        let view = table_view("app");
        assert_eq!(
            map_key(press(KeyCode::Char('l')), &view),
            Some(UiCommand::Dispatch(Msg::QueryChanged("appl".to_string())))
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT), &view),
            Some(UiCommand::Dispatch(Msg::QueryChanged("appA".to_string())))
        );
    }

    #[test]
    fn backspace_on_empty_query_does_nothing() {
        assert_eq!(map_key(press(KeyCode::Backspace), &table_view("")), None);
        assert_eq!(
            map_key(press(KeyCode::Backspace), &table_view("ab")),
            Some(UiCommand::Dispatch(Msg::QueryChanged("a".to_string())))
        );
    }

    #[test]
    fn ctrl_u_clears_query() {
        let key = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(
            map_key(key, &table_view("fruit")),
            Some(UiCommand::Dispatch(Msg::QueryChanged(String::new())))
        );
    }

    #[test]
    fn pager_and_page_size_keys() {
        let view = table_view("");
        assert_eq!(
            map_key(press(KeyCode::Right), &view),
            Some(UiCommand::Dispatch(Msg::NextPageClicked))
        );
        assert_eq!(
            map_key(press(KeyCode::PageUp), &view),
            Some(UiCommand::Dispatch(Msg::PreviousPageClicked))
        );
        assert_eq!(
            map_key(press(KeyCode::Tab), &view),
            Some(UiCommand::Dispatch(Msg::PageSizeSelected(PageSize::Twenty)))
        );
        assert_eq!(
            map_key(press(KeyCode::BackTab), &view),
            Some(UiCommand::Dispatch(Msg::PageSizeSelected(PageSize::Five)))
        );
    }

    #[test]
    fn quit_and_refresh_work_on_every_screen() {
        let loading = AppViewModel::default();
        assert_eq!(map_key(press(KeyCode::Esc), &loading), Some(UiCommand::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &loading),
            Some(UiCommand::Quit)
        );
        assert_eq!(
            map_key(press(KeyCode::F(5)), &loading),
            Some(UiCommand::Dispatch(Msg::RefreshRequested))
        );
    }

    #[test]
    fn arrow_keys_scroll_the_table() {
        let view = table_view("");
        assert_eq!(map_key(press(KeyCode::Up), &view), Some(UiCommand::ScrollUp));
        assert_eq!(map_key(press(KeyCode::Down), &view), Some(UiCommand::ScrollDown));
    }

    #[test]
    fn table_keys_are_ignored_while_loading() {
        let loading = AppViewModel::default();
        assert_eq!(map_key(press(KeyCode::Char('x')), &loading), None);
        assert_eq!(map_key(press(KeyCode::Right), &loading), None);
        assert_eq!(map_key(press(KeyCode::Down), &loading), None);
    }
}
