use anyhow::Context;
use hn_client::{AlgoliaClient, SearchClient};
use hn_stories_config::{AppConfig, FileStore, KeyValueStore, PersistentValue};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;

mod actions;
mod capabilities;
mod command_id;
mod dispatcher;
mod keybindings;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
#[cfg(test)]
mod test_support;
mod theme;
mod utils;
mod view_models;
mod views;

use actions::{Action, GlobalAction};
use middleware::{
    keyboard_middleware::KeyboardMiddleware, logging::LoggingMiddleware,
    navigation_middleware::NavigationMiddleware, persistence_middleware::PersistenceMiddleware,
    search_form_middleware::SearchFormMiddleware, stories_middleware::StoriesMiddleware,
    text_input_middleware::TextInputMiddleware,
};
use state::AppState;
use store::Store;

fn main() -> anyhow::Result<()> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    let log_file = logger::init()?;
    log::info!("Starting hacker-stories, logging to {:?}", log_file);

    let config = AppConfig::load().with_env_overrides();

    // Without storage there is no way to keep the search term, so this is fatal
    let storage = FileStore::open_default().context("Failed to open storage")?;
    let search_term = PersistentValue::init(
        Box::new(storage) as Box<dyn KeyValueStore>,
        config.storage_key.clone(),
        &config.default_query,
    )
    .context("Failed to restore search term")?;

    let client = AlgoliaClient::new(config.request_timeout())?;
    let mut store = build_store(&config, search_term, Arc::new(client))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("Exiting hacker-stories");
    result.context("Terminal error")
}

/// Assemble the store with the full middleware chain
fn build_store(
    config: &AppConfig,
    search_term: PersistentValue<Box<dyn KeyValueStore>>,
    client: Arc<dyn SearchClient>,
) -> anyhow::Result<Store> {
    let mut store = Store::new(AppState::new(search_term.value(), config));

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(NavigationMiddleware::new()));
    store.add_middleware(Box::new(TextInputMiddleware::new()));
    store.add_middleware(Box::new(SearchFormMiddleware::new()));
    store.add_middleware(Box::new(PersistenceMiddleware::new(search_term)));
    store.add_middleware(Box::new(StoriesMiddleware::new(client)?));

    Ok(store)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
) -> io::Result<()> {
    let mut mounted = false;

    loop {
        // Pick up results of background fetches
        store.process_pending();

        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !mounted {
            mounted = true;
            for effect in views::mount_effects(store.state()) {
                store.dispatch(effect);
            }
            continue;
        }

        if !store.state().running {
            break;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeSearchClient;
    use crate::view_models::SearchFormViewModel;
    use crate::views::stories_view::{ERROR_MESSAGE, LOADING_MESSAGE};
    use crate::views::test_helpers::buffer_text;
    use hn_client::Hit;
    use hn_stories_config::MemoryStore;
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::sync::Mutex;
    use std::time::Instant;

    struct Harness {
        store: Store,
        storage: MemoryStore,
        urls: Arc<Mutex<Vec<String>>>,
    }

    fn start(storage: MemoryStore, client: FakeSearchClient) -> Harness {
        let mut h = mount(storage, client);
        wait_for_fetch(&mut h.store);
        h
    }

    /// Build and mount the app without waiting for the initial fetch
    fn mount(storage: MemoryStore, client: FakeSearchClient) -> Harness {
        let config = AppConfig::default();
        let search_term = PersistentValue::init(
            Box::new(storage.clone()) as Box<dyn KeyValueStore>,
            config.storage_key.clone(),
            &config.default_query,
        )
        .unwrap();
        let urls = client.requested_urls();
        let mut store = build_store(&config, search_term, Arc::new(client)).unwrap();

        for effect in views::mount_effects(store.state()) {
            store.dispatch(effect);
        }

        Harness {
            store,
            storage,
            urls,
        }
    }

    fn wait_for_fetch(store: &mut Store) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while store.state().stories.in_flight.is_some() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
            store.process_pending();
        }
    }

    fn press(store: &mut Store, code: KeyCode) {
        press_with(store, code, KeyModifiers::NONE);
    }

    fn press_with(store: &mut Store, code: KeyCode, modifiers: KeyModifiers) {
        store.dispatch(Action::Global(GlobalAction::KeyPressed(KeyEvent::new(
            code, modifiers,
        ))));
    }

    fn type_text(store: &mut Store, text: &str) {
        for c in text.chars() {
            press(store, KeyCode::Char(c));
        }
    }

    fn screen(store: &Store) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal
            .draw(|f| views::render(store.state(), f.area(), f))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn ids(store: &Store) -> Vec<&str> {
        store
            .state()
            .stories
            .data
            .iter()
            .map(|h| h.object_id.as_str())
            .collect()
    }

    #[test]
    fn test_initial_fetch_uses_default_term() {
        let client = FakeSearchClient::with_hits(vec![
            Hit::new("1", "React Hooks"),
            Hit::new("2", "React Server Components"),
        ]);
        let h = start(MemoryStore::new(), client);

        assert_eq!(
            *h.urls.lock().unwrap(),
            vec!["https://hn.algolia.com/api/v1/search?query=React".to_string()]
        );
        assert_eq!(ids(&h.store), vec!["1", "2"]);

        let text = screen(&h.store);
        assert!(text.contains("React Hooks"));
        assert!(text.contains("React Server Components"));
        assert!(!text.contains(LOADING_MESSAGE));
    }

    #[test]
    fn test_input_is_focused_after_mount() {
        let h = start(MemoryStore::new(), FakeSearchClient::with_hits(vec![]));
        assert!(h.store.state().search_form.input_focused());
    }

    #[test]
    fn test_submit_with_empty_term_does_not_fetch() {
        let mut h = start(MemoryStore::new(), FakeSearchClient::with_hits(vec![]));

        press_with(&mut h.store, KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(h.store.state().search.term, "");
        assert!(!SearchFormViewModel::from_state(h.store.state()).submit_enabled);

        press(&mut h.store, KeyCode::Enter);

        assert_eq!(h.urls.lock().unwrap().len(), 1);
        assert!(!h.store.state().stories.is_loading);
        assert_eq!(
            h.store.state().search.url,
            "https://hn.algolia.com/api/v1/search?query=React"
        );
    }

    #[test]
    fn test_failed_fetch_shows_error_and_no_list() {
        let h = start(MemoryStore::new(), FakeSearchClient::failing());

        assert!(h.store.state().stories.is_error);
        assert!(!h.store.state().stories.is_loading);
        assert!(h.store.state().stories.data.is_empty());

        let text = screen(&h.store);
        assert!(text.contains(ERROR_MESSAGE));
        assert!(!text.contains(LOADING_MESSAGE));
    }

    #[test]
    fn test_dismiss_removes_only_that_story() {
        let client = FakeSearchClient::with_hits(vec![
            Hit::new("1", "First"),
            Hit::new("123", "Target"),
            Hit::new("2", "Second"),
        ]);
        let mut h = start(MemoryStore::new(), client);

        // Leave the input, move to the second row, dismiss it
        press(&mut h.store, KeyCode::Esc);
        press(&mut h.store, KeyCode::Char('j'));
        press(&mut h.store, KeyCode::Char('d'));

        assert_eq!(ids(&h.store), vec!["1", "2"]);
        assert_eq!(h.urls.lock().unwrap().len(), 1);
        assert!(!screen(&h.store).contains("Target"));
    }

    #[test]
    fn test_editing_keys_in_focused_input_leave_stories_alone() {
        let client = FakeSearchClient::with_hits(vec![Hit::new("1", "First"), Hit::new("2", "Second")]);
        let mut h = start(MemoryStore::new(), client);
        assert!(h.store.state().search_form.input_focused());

        for code in [KeyCode::Delete, KeyCode::End, KeyCode::Down, KeyCode::Home] {
            press(&mut h.store, code);
        }

        assert_eq!(ids(&h.store), vec!["1", "2"]);
        assert_eq!(h.store.state().story_list.cursor, 0);
        assert_eq!(h.store.state().search.term, "React");

        // Delete still dismisses once the list has focus
        press(&mut h.store, KeyCode::Esc);
        press(&mut h.store, KeyCode::Delete);
        assert_eq!(ids(&h.store), vec!["2"]);
    }

    #[test]
    fn test_submitting_new_term_refetches_and_persists() {
        let mut h = start(MemoryStore::new(), FakeSearchClient::with_hits(vec![]));

        press_with(&mut h.store, KeyCode::Char('u'), KeyModifiers::CONTROL);
        type_text(&mut h.store, "Rust");
        assert_eq!(h.storage.get("search").unwrap().as_deref(), Some("Rust"));

        press(&mut h.store, KeyCode::Enter);
        wait_for_fetch(&mut h.store);

        assert_eq!(
            h.urls.lock().unwrap().last().map(String::as_str),
            Some("https://hn.algolia.com/api/v1/search?query=Rust")
        );

        // Same url again does not refetch
        press(&mut h.store, KeyCode::Enter);
        assert_eq!(h.urls.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_superseded_fetch_never_lands() {
        let client = FakeSearchClient::echoing_after(vec![Duration::from_millis(300)]);
        let completed = client.completed_urls();
        let mut h = mount(MemoryStore::new(), client);
        assert!(h.store.state().stories.is_loading);

        // Submit a new term while the initial request is still sleeping
        press_with(&mut h.store, KeyCode::Char('u'), KeyModifiers::CONTROL);
        type_text(&mut h.store, "Rust");
        press(&mut h.store, KeyCode::Enter);
        wait_for_fetch(&mut h.store);

        std::thread::sleep(Duration::from_millis(400));
        h.store.process_pending();

        let rust_url = "https://hn.algolia.com/api/v1/search?query=Rust";
        assert_eq!(ids(&h.store), vec![rust_url]);
        assert!(!h.store.state().stories.is_loading);
        assert_eq!(h.urls.lock().unwrap().len(), 2);
        assert_eq!(*completed.lock().unwrap(), vec![rust_url.to_string()]);
    }

    #[test]
    fn test_search_term_survives_restart() {
        let storage = MemoryStore::new();
        let mut first = start(storage.clone(), FakeSearchClient::with_hits(vec![]));
        press_with(&mut first.store, KeyCode::Char('u'), KeyModifiers::CONTROL);
        type_text(&mut first.store, "Rust");
        drop(first);

        let second = start(storage, FakeSearchClient::with_hits(vec![]));
        assert_eq!(second.store.state().search.term, "Rust");
        assert_eq!(
            *second.urls.lock().unwrap(),
            vec!["https://hn.algolia.com/api/v1/search?query=Rust".to_string()]
        );
    }

    #[test]
    fn test_help_popup_toggles_and_quit() {
        let mut h = start(MemoryStore::new(), FakeSearchClient::with_hits(vec![]));
        press(&mut h.store, KeyCode::Esc);

        press(&mut h.store, KeyCode::Char('?'));
        assert_eq!(h.store.state().view_stack.len(), 2);
        press(&mut h.store, KeyCode::Char('?'));
        assert_eq!(h.store.state().view_stack.len(), 1);

        press(&mut h.store, KeyCode::Char('q'));
        assert!(!h.store.state().running);
    }
}
