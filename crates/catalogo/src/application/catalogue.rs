use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

use tokio::task::JoinHandle;

use crate::{
    application::{
        loader::{AsyncLoader, Ticket},
        status::{FetchStatus, View, with_timeout},
    },
    domain::{
        entities::{
            character::Character,
            page::{LoadMode, Page},
        },
        repositories::{character::CharacterRepository, error::FetchError},
        services::{catalogue::CatalogueState, pager::Pager, search::filter_by_name},
    },
};

pub const ALL_LOADED_NOTICE: &str = "All characters loaded.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub cursor: String,
    pub mode: LoadMode,
}

#[derive(Default)]
struct State {
    catalogue: CatalogueState,
    pager: Pager,
    status: FetchStatus,
    last_request: Option<PageRequest>,
    query: String,
}

impl State {
    fn filtered(&self) -> Vec<Character> {
        filter_by_name(self.catalogue.all(), &self.query)
            .into_iter()
            .cloned()
            .collect()
    }
}

/// Drives the character catalogue: paging, local search and the request
/// lifecycle. Only the latest request may change state, older in-flight
/// requests are aborted and their responses dropped.
pub struct CatalogueController<R>
where
    R: CharacterRepository,
{
    repo: Arc<R>,
    view: Arc<dyn View<[Character]>>,
    base_url: String,
    timeout: Duration,
    state: Mutex<State>,
    loader: AsyncLoader,
}

impl<R> CatalogueController<R>
where
    R: CharacterRepository + 'static,
{
    pub fn new(
        repo: R,
        view: Arc<dyn View<[Character]>>,
        base_url: String,
        timeout: Duration,
    ) -> Arc<Self> {
        Arc::new(Self {
            repo: Arc::new(repo),
            view,
            base_url,
            timeout,
            state: Mutex::new(State::default()),
            loader: AsyncLoader::new(),
        })
    }

    fn lock_state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn request_page(self: &Arc<Self>, cursor: &str, mode: LoadMode) -> JoinHandle<()> {
        let cursor = cursor.to_string();

        let mut state = self.lock_state();
        state.last_request = Some(PageRequest {
            cursor: cursor.clone(),
            mode,
        });
        state.status = FetchStatus::Loading;
        self.view.clear_error();
        self.view.set_loading(true);

        let controller = self.clone();
        let handle = self.loader.load(move |ticket| async move {
            debug!("request {} for {cursor} ({mode:?})", ticket.id());
            let result = with_timeout(controller.timeout, controller.repo.fetch_page(&cursor)).await;
            controller.finish(&ticket, &cursor, mode, result);
        });
        drop(state);

        handle
    }

    fn finish(&self, ticket: &Ticket, cursor: &str, mode: LoadMode, result: Result<Page, FetchError>) {
        let mut state = self.lock_state();
        if !ticket.is_current() {
            debug!("dropping stale response {} for {cursor}", ticket.id());
            return;
        }

        match result {
            Ok(page) => {
                state.pager.update(&page);
                state.catalogue.apply(mode, page.results);
                state.status = FetchStatus::Success;

                self.view.clear_error();
                self.view.render(&state.filtered());
                if !state.pager.has_next() {
                    self.view.show_notice(ALL_LOADED_NOTICE);
                }
            }
            Err(e) => {
                warn!("request for {cursor} failed: {e}");
                self.view.show_error(&e.user_message("Page"));
                state.status = FetchStatus::Failed(e);
            }
        }

        self.view.set_loading(false);
    }

    /// Re-issue the last request, if there was one
    pub fn retry_last(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        let last = self.lock_state().last_request.clone();
        last.map(|request| self.request_page(&request.cursor, request.mode))
    }

    pub fn load_first(self: &Arc<Self>) -> JoinHandle<()> {
        let base_url = self.base_url.clone();
        self.request_page(&base_url, LoadMode::Replace)
    }

    pub fn load_more(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        let next = self.lock_state().pager.next().map(str::to_string);
        next.map(|cursor| self.request_page(&cursor, LoadMode::Append))
    }

    pub fn next_page(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        let next = self.lock_state().pager.next().map(str::to_string);
        next.map(|cursor| self.request_page(&cursor, LoadMode::Replace))
    }

    pub fn prev_page(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        let prev = self.lock_state().pager.prev().map(str::to_string);
        prev.map(|cursor| self.request_page(&cursor, LoadMode::Replace))
    }

    /// Abort the in-flight request, if any
    pub fn cancel(&self) {
        let mut state = self.lock_state();
        self.loader.cancel();
        if state.status.is_loading() {
            state.status = FetchStatus::Idle;
            self.view.set_loading(false);
        }
    }

    pub fn search(&self, query: &str) {
        let mut state = self.lock_state();
        state.query = query.to_string();
        self.view.render(&state.filtered());
    }

    pub fn find(&self, id: i64) -> Option<Character> {
        self.lock_state().catalogue.find(id).cloned()
    }

    pub fn characters(&self) -> Vec<Character> {
        self.lock_state().catalogue.all().to_vec()
    }

    pub fn filtered(&self) -> Vec<Character> {
        self.lock_state().filtered()
    }

    pub fn status(&self) -> FetchStatus {
        self.lock_state().status.clone()
    }

    pub fn last_request(&self) -> Option<PageRequest> {
        self.lock_state().last_request.clone()
    }

    pub fn has_next(&self) -> bool {
        self.lock_state().pager.has_next()
    }

    pub fn has_prev(&self) -> bool {
        self.lock_state().pager.has_prev()
    }

    pub fn is_loading(&self) -> bool {
        self.loader.is_loading()
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use async_trait::async_trait;

    use super::*;
    use crate::application::status::testing::{Event, RecordingView};

    const PAGE1: &str = "https://example.test/api/character";
    const PAGE2: &str = "https://example.test/api/character?page=2";

    fn character(id: i64, name: &str) -> Character {
        Character {
            id,
            name: name.to_string(),
            species: "Human".to_string(),
            status: "Alive".to_string(),
            image_url: format!("https://example.test/avatar/{id}.jpeg"),
            origin_name: "Earth".to_string(),
        }
    }

    #[derive(Default)]
    struct FakeRepository {
        responses: HashMap<String, (Duration, Result<Page, FetchError>)>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeRepository {
        fn with(mut self, cursor: &str, delay_ms: u64, result: Result<Page, FetchError>) -> Self {
            self.responses
                .insert(cursor.to_string(), (Duration::from_millis(delay_ms), result));
            self
        }
    }

    #[async_trait]
    impl CharacterRepository for FakeRepository {
        async fn fetch_page(&self, cursor: &str) -> Result<Page, FetchError> {
            self.calls.lock().unwrap().push(cursor.to_string());
            let (delay, result) = self
                .responses
                .get(cursor)
                .cloned()
                .unwrap_or((Duration::ZERO, Err(FetchError::HttpStatus(404))));
            tokio::time::sleep(delay).await;
            result
        }
    }

    fn page1() -> Page {
        Page {
            results: vec![character(1, "Rick")],
            next: Some(PAGE2.to_string()),
            prev: None,
        }
    }

    fn page2() -> Page {
        Page {
            results: vec![character(2, "Morty")],
            next: None,
            prev: Some(PAGE1.to_string()),
        }
    }

    fn controller(
        repo: FakeRepository,
    ) -> (
        Arc<CatalogueController<FakeRepository>>,
        Arc<RecordingView<[Character]>>,
    ) {
        let view = Arc::new(RecordingView::<[Character]>::new());
        let controller = CatalogueController::new(
            repo,
            view.clone(),
            PAGE1.to_string(),
            Duration::from_secs(10),
        );
        (controller, view)
    }

    fn names(characters: &[Character]) -> Vec<&str> {
        characters.iter().map(|c| c.name.as_str()).collect()
    }

    fn loading_events(events: &[Event<Vec<Character>>]) -> Vec<bool> {
        events
            .iter()
            .filter_map(|e| match e {
                Event::Loading(on) => Some(*on),
                _ => None,
            })
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_page() {
        let (controller, view) = controller(FakeRepository::default().with(PAGE1, 50, Ok(page1())));

        assert_eq!(controller.status(), FetchStatus::Idle);

        let handle = controller.load_first();
        assert_eq!(controller.status(), FetchStatus::Loading);
        handle.await.unwrap();

        assert_eq!(names(&controller.characters()), vec!["Rick"]);
        assert!(!controller.has_prev());
        assert!(controller.has_next());
        assert_eq!(controller.status(), FetchStatus::Success);
        assert!(!controller.is_loading());

        assert_eq!(
            view.events(),
            vec![
                Event::ClearError,
                Event::Loading(true),
                Event::ClearError,
                Event::Render(vec![character(1, "Rick")]),
                Event::Loading(false),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_more_appends() {
        let repo = FakeRepository::default()
            .with(PAGE1, 10, Ok(page1()))
            .with(PAGE2, 10, Ok(page2()));
        let (controller, view) = controller(repo);

        controller.load_first().await.unwrap();
        controller.load_more().unwrap().await.unwrap();

        assert_eq!(names(&controller.characters()), vec!["Rick", "Morty"]);
        assert!(!controller.has_next());
        assert!(controller.has_prev());
        assert!(controller.load_more().is_none());
        assert!(
            view.events()
                .contains(&Event::Notice(ALL_LOADED_NOTICE.to_string()))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cursor_navigation_replaces() {
        let repo = FakeRepository::default()
            .with(PAGE1, 10, Ok(page1()))
            .with(PAGE2, 10, Ok(page2()));
        let (controller, _view) = controller(repo);

        controller.load_first().await.unwrap();
        assert!(controller.prev_page().is_none());

        controller.next_page().unwrap().await.unwrap();
        assert_eq!(names(&controller.characters()), vec!["Morty"]);

        controller.prev_page().unwrap().await.unwrap();
        assert_eq!(names(&controller.characters()), vec!["Rick"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_request_supersedes_older() {
        let repo = FakeRepository::default()
            .with("A", 100, Ok(page1()))
            .with("B", 10, Ok(page2()));
        let (controller, view) = controller(repo);

        let a = controller.request_page("A", LoadMode::Append);
        tokio::time::sleep(Duration::from_millis(5)).await;
        let b = controller.request_page("B", LoadMode::Append);

        a.await.unwrap();
        b.await.unwrap();
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(names(&controller.characters()), vec!["Morty"]);
        assert_eq!(controller.repo.calls.lock().unwrap().clone(), vec!["A", "B"]);

        let events = view.events();
        let renders = events
            .iter()
            .filter(|e| matches!(e, Event::Render(_)))
            .count();
        assert_eq!(renders, 1);
        assert_eq!(loading_events(&events), vec![true, true, false]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_http_error_then_retry() {
        let repo = FakeRepository::default().with(PAGE1, 10, Err(FetchError::HttpStatus(404)));
        let (controller, view) = controller(repo);

        controller.load_first().await.unwrap();

        assert_eq!(
            controller.status(),
            FetchStatus::Failed(FetchError::HttpStatus(404))
        );
        assert!(controller.characters().is_empty());
        let events = view.events();
        assert!(events.contains(&Event::Error(
            "Page not found. Check the name and try again.".to_string()
        )));
        assert_eq!(loading_events(&events), vec![true, false]);

        controller.retry_last().unwrap().await.unwrap();
        assert_eq!(
            controller.repo.calls.lock().unwrap().clone(),
            vec![PAGE1, PAGE1]
        );
        assert_eq!(
            controller.last_request(),
            Some(PageRequest {
                cursor: PAGE1.to_string(),
                mode: LoadMode::Replace,
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_without_request_is_noop() {
        let (controller, view) = controller(FakeRepository::default());

        assert!(controller.retry_last().is_none());
        assert!(view.events().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_is_distinct_from_network() {
        let repo = FakeRepository::default()
            .with("slow", 60_000, Ok(page1()))
            .with("offline", 0, Err(FetchError::Network("connection refused".to_string())));
        let (controller, view) = controller(repo);

        controller.request_page("slow", LoadMode::Append).await.unwrap();
        assert_eq!(controller.status(), FetchStatus::Failed(FetchError::Timeout));
        assert!(controller.characters().is_empty());
        assert_eq!(loading_events(&view.events()), vec![true, false]);

        controller.request_page("offline", LoadMode::Append).await.unwrap();
        assert!(matches!(
            controller.status(),
            FetchStatus::Failed(FetchError::Network(_))
        ));

        let errors: Vec<String> = view
            .events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Error(message) => Some(message),
                _ => None,
            })
            .collect();
        assert_eq!(errors.len(), 2);
        assert_ne!(errors[0], errors[1]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_filters_rendered_view() {
        let repo = FakeRepository::default()
            .with(PAGE1, 10, Ok(page1()))
            .with(PAGE2, 10, Ok(page2()));
        let (controller, view) = controller(repo);

        controller.search("  MOR ");
        controller.load_first().await.unwrap();
        assert!(controller.filtered().is_empty());

        controller.load_more().unwrap().await.unwrap();
        assert_eq!(names(&controller.filtered()), vec!["Morty"]);
        assert_eq!(names(&controller.characters()), vec!["Rick", "Morty"]);

        controller.search("");
        assert_eq!(
            view.events().last(),
            Some(&Event::Render(vec![character(1, "Rick"), character(2, "Morty")]))
        );
        assert_eq!(controller.find(2).map(|c| c.name), Some("Morty".to_string()));
        assert!(controller.find(3).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_in_flight_request() {
        let (controller, view) =
            controller(FakeRepository::default().with(PAGE1, 1_000, Ok(page1())));

        let handle = controller.load_first();
        controller.cancel();
        handle.await.unwrap();

        assert_eq!(controller.status(), FetchStatus::Idle);
        assert!(controller.characters().is_empty());
        assert!(!controller.is_loading());
        assert_eq!(loading_events(&view.events()), vec![true, false]);
    }
}
