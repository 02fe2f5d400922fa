use crate::api::CatalogApi;
use crate::nav::{Entry, NavStack, Route, Screen, ScreenId};
use crate::screens::fetch::{self, FetchOutcome, FetchRequest};
use crate::screens::{DetailIntent, DetailPhase, ListEffect, ListIntent};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// A finished fetch, addressed to the screen instance that asked for it.
#[derive(Debug)]
pub struct Completion {
    pub screen: ScreenId,
    pub outcome: FetchOutcome,
}

pub struct App {
    api: Arc<dyn CatalogApi>,
    nav: NavStack,
    completions: UnboundedSender<Completion>,
    tick: u64,
    search_focused: bool,
    should_quit: bool,
}

impl App {
    pub fn new(api: Arc<dyn CatalogApi>) -> (Self, UnboundedReceiver<Completion>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let app = Self {
            api,
            nav: NavStack::new(),
            completions: tx,
            tick: 0,
            search_focused: false,
            should_quit: false,
        };
        (app, rx)
    }

    /// Mounts the root list screen. Must run inside a tokio runtime.
    pub fn start(&mut self) {
        let root = self.nav.top().id;
        self.dispatch_list(root, ListIntent::Mount);
    }

    pub fn nav(&self) -> &NavStack {
        &self.nav
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn search_focused(&self) -> bool {
        self.search_focused
    }

    pub fn set_search_focused(&mut self, focused: bool) {
        self.search_focused = focused;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Intent for the list screen on top of the stack; ignored otherwise.
    pub fn list_intent(&mut self, intent: ListIntent) {
        let top = self.nav.top();
        if matches!(top.screen, Screen::List(_)) {
            let id = top.id;
            self.dispatch_list(id, intent);
        }
    }

    /// Intent for the detail screen on top of the stack; ignored otherwise.
    pub fn detail_intent(&mut self, intent: DetailIntent) {
        let top = self.nav.top();
        if matches!(top.screen, Screen::Details(_)) {
            let id = top.id;
            self.dispatch_detail(id, intent);
        }
    }

    pub fn back(&mut self) {
        self.nav.pop();
    }

    pub fn on_completion(&mut self, completion: Completion) {
        let Completion { screen, outcome } = completion;
        if !self.nav.contains(screen) {
            tracing::debug!(?screen, "Dropping result for a screen that is gone");
            return;
        }
        match outcome {
            FetchOutcome::List { request, result } => {
                self.dispatch_list(screen, ListIntent::Loaded { request, result })
            }
            FetchOutcome::Detail { request, result } => {
                self.dispatch_detail(screen, DetailIntent::Loaded { request, result })
            }
        }
    }

    fn dispatch_list(&mut self, id: ScreenId, intent: ListIntent) {
        let Some(entry) = self.nav.get_mut(id) else {
            return;
        };
        let Screen::List(screen) = &mut entry.screen else {
            return;
        };
        let effect = screen.update(intent);
        sync_view(entry, self.tick);

        match effect {
            ListEffect::None => {}
            ListEffect::Fetch(request) => self.spawn_fetch(id, FetchRequest::List(request)),
            ListEffect::Navigate(product_id) => {
                self.search_focused = false;
                let details = self.nav.push(Route::ProductDetails { product_id });
                self.dispatch_detail(details, DetailIntent::Mount);
            }
        }
    }

    fn dispatch_detail(&mut self, id: ScreenId, intent: DetailIntent) {
        let Some(entry) = self.nav.get_mut(id) else {
            return;
        };
        let Screen::Details(screen) = &mut entry.screen else {
            return;
        };
        let request = screen.update(intent);
        sync_view(entry, self.tick);

        if let Some(request) = request {
            self.spawn_fetch(id, FetchRequest::Detail(request));
        }
    }

    fn spawn_fetch(&mut self, id: ScreenId, request: FetchRequest) {
        let api = Arc::clone(&self.api);
        let tx = self.completions.clone();
        tracing::debug!(?id, ?request, "Starting fetch");
        let handle = tokio::spawn(async move {
            let outcome = fetch::execute(api.as_ref(), request).await;
            // The receiver only goes away when the UI loop has exited.
            let _ = tx.send(Completion {
                screen: id,
                outcome,
            });
        });
        if let Some(entry) = self.nav.get_mut(id) {
            entry.tasks.track(handle.abort_handle());
        }
    }
}

/// Starts or stops the entry's animations to match its screen state.
fn sync_view(entry: &mut Entry, now: u64) {
    let busy = match &entry.screen {
        Screen::List(screen) => {
            let revision = screen.revision();
            if revision != entry.view.seen_revision {
                entry.view.seen_revision = revision;
                entry.view.entrance_tick = Some(now);
            }
            screen.state().loading
        }
        Screen::Details(screen) => screen.state().phase == DetailPhase::Loading,
    };
    if busy {
        entry.view.spinner.start(now);
    } else {
        entry.view.spinner.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::list::LOAD_ERROR;
    use crate::screens::DetailPhase;
    use crate::test_support::{product_with_images, products, StubCatalog};

    async fn drain(app: &mut App, rx: &mut UnboundedReceiver<Completion>, count: usize) {
        for _ in 0..count {
            let completion = rx.recv().await.expect("completion");
            app.on_completion(completion);
        }
    }

    fn list_state(app: &App) -> &crate::screens::ListState {
        match &app.nav().top().screen {
            Screen::List(screen) => screen.state(),
            other => panic!("expected list on top, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn mount_loads_products_and_stops_spinner() {
        let api = Arc::new(StubCatalog::new().with_list(Ok(products(5))));
        let (mut app, mut rx) = App::new(api.clone());
        app.start();
        assert!(app.nav().top().view.spinner.is_running());

        drain(&mut app, &mut rx, 1).await;
        assert_eq!(list_state(&app).products.len(), 5);
        assert!(!app.nav().top().view.spinner.is_running());
        assert!(app.nav().top().view.entrance_tick.is_some());
        assert_eq!(api.list_calls(), 1);
    }

    #[tokio::test]
    async fn refresh_failure_leaves_list_untouched() {
        let api = Arc::new(StubCatalog::new().with_list(Ok(products(5))));
        let (mut app, mut rx) = App::new(api.clone());
        app.start();
        drain(&mut app, &mut rx, 1).await;

        api.set_list(Err(503));
        app.list_intent(ListIntent::Refresh);
        drain(&mut app, &mut rx, 1).await;

        let state = list_state(&app);
        assert!(!state.refreshing);
        assert_eq!(state.products.len(), 5);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn failed_load_surfaces_error() {
        let api = Arc::new(StubCatalog::new().with_list(Err(500)));
        let (mut app, mut rx) = App::new(api);
        app.start();
        drain(&mut app, &mut rx, 1).await;
        assert_eq!(list_state(&app).error.as_deref(), Some(LOAD_ERROR));
    }

    #[tokio::test]
    async fn selecting_a_product_opens_its_details() {
        let api = Arc::new(
            StubCatalog::new()
                .with_list(Ok(products(3)))
                .with_product(product_with_images(1, 2)),
        );
        let (mut app, mut rx) = App::new(api.clone());
        app.start();
        drain(&mut app, &mut rx, 1).await;

        app.list_intent(ListIntent::Select);
        assert_eq!(app.nav().depth(), 2);
        drain(&mut app, &mut rx, 1).await;

        match &app.nav().top().screen {
            Screen::Details(screen) => {
                assert_eq!(screen.state().phase, DetailPhase::Ready);
                assert_eq!(screen.state().product.as_ref().map(|p| p.id), Some(1));
            }
            other => panic!("expected details on top, got {:?}", other),
        }
        assert_eq!(api.product_calls(), vec![1]);

        app.back();
        assert_eq!(app.nav().depth(), 1);
    }

    #[tokio::test]
    async fn results_for_popped_screen_are_ignored() {
        let api = Arc::new(StubCatalog::new().with_list(Ok(products(3))));
        let (mut app, mut rx) = App::new(api);
        app.start();
        drain(&mut app, &mut rx, 1).await;

        app.list_intent(ListIntent::Select);
        let detail_id = app.nav().top().id;
        app.back();

        // Forge a late completion for the popped detail screen.
        app.on_completion(Completion {
            screen: detail_id,
            outcome: FetchOutcome::Detail {
                request: crate::screens::DetailRequest {
                    generation: 1,
                    product_id: 1,
                },
                result: Ok(product_with_images(1, 1)),
            },
        });
        assert_eq!(app.nav().depth(), 1);
        assert_eq!(list_state(&app).products.len(), 3);
    }
}
