use super::RequestGeneration;
use crate::error::CatalogError;
use crate::model::Product;

pub const LOAD_ERROR: &str = "Failed to load products. Please try again.";
pub const SEARCH_ERROR: &str = "Failed to search products. Please try again.";
pub const EMPTY_SEARCH: &str = "No products found matching your search.";
pub const EMPTY_CATALOG: &str = "No products available.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListFetch {
    /// Unfiltered list, shown with the full-screen loading view.
    All,
    Search(String),
    /// Unfiltered list triggered by a manual refresh; failures stay silent.
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub generation: u64,
    pub fetch: ListFetch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    Browsing,
    Searching,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListState {
    pub products: Vec<Product>,
    pub loading: bool,
    pub searching: bool,
    pub refreshing: bool,
    pub error: Option<String>,
    pub query: String,
    pub selected: usize,
}

impl ListState {
    pub fn mode(&self) -> QueryMode {
        if self.query.trim().is_empty() {
            QueryMode::Browsing
        } else {
            QueryMode::Searching
        }
    }

    pub fn in_flight(&self) -> bool {
        self.loading || self.searching || self.refreshing
    }

    pub fn empty_message(&self) -> &'static str {
        if self.query.is_empty() {
            EMPTY_CATALOG
        } else {
            EMPTY_SEARCH
        }
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.products.get(self.selected)
    }
}

#[derive(Debug)]
pub enum ListIntent {
    Mount,
    InsertChar(char),
    Backspace,
    SubmitSearch,
    ClearSearch,
    Refresh,
    Retry,
    MoveBy(isize),
    MoveToStart,
    MoveToEnd,
    Select,
    Loaded {
        request: ListRequest,
        result: Result<Vec<Product>, CatalogError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEffect {
    None,
    Fetch(ListRequest),
    Navigate(u64),
}

#[derive(Debug, Default)]
pub struct ListScreen {
    state: ListState,
    generation: RequestGeneration,
    last_failed: Option<ListFetch>,
    /// Bumped whenever `products` is replaced.
    revision: u64,
    /// Set once any fetch has delivered products.
    loaded: bool,
}

impl ListScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn can_retry(&self) -> bool {
        self.last_failed.is_some()
    }

    pub fn update(&mut self, intent: ListIntent) -> ListEffect {
        match intent {
            ListIntent::Mount => self.begin(ListFetch::All),
            ListIntent::InsertChar(c) => {
                self.state.query.push(c);
                ListEffect::None
            }
            ListIntent::Backspace => {
                self.state.query.pop();
                ListEffect::None
            }
            ListIntent::SubmitSearch => {
                if self.state.query.trim().is_empty() {
                    self.begin(ListFetch::All)
                } else {
                    let query = self.state.query.clone();
                    self.begin(ListFetch::Search(query))
                }
            }
            ListIntent::ClearSearch => {
                self.state.query.clear();
                self.begin(ListFetch::All)
            }
            // Until a load has landed, a refresh stands in for the initial
            // load so its failure is still reported.
            ListIntent::Refresh if self.state.loading || !self.loaded => {
                self.begin(ListFetch::All)
            }
            ListIntent::Refresh => self.begin(ListFetch::Refresh),
            ListIntent::Retry => match self.last_failed.clone() {
                Some(fetch) => self.begin(fetch),
                None => ListEffect::None,
            },
            ListIntent::MoveBy(delta) => {
                let last = self.state.products.len().saturating_sub(1);
                let target = self.state.selected as isize + delta;
                self.state.selected = target.clamp(0, last as isize) as usize;
                ListEffect::None
            }
            ListIntent::MoveToStart => {
                self.state.selected = 0;
                ListEffect::None
            }
            ListIntent::MoveToEnd => {
                self.state.selected = self.state.products.len().saturating_sub(1);
                ListEffect::None
            }
            ListIntent::Select => match self.state.selected_product() {
                Some(product) => ListEffect::Navigate(product.id),
                None => ListEffect::None,
            },
            ListIntent::Loaded { request, result } => {
                self.complete(request, result);
                ListEffect::None
            }
        }
    }

    fn begin(&mut self, fetch: ListFetch) -> ListEffect {
        // A new request supersedes whatever was in flight.
        self.state.loading = false;
        self.state.searching = false;
        self.state.refreshing = false;
        match fetch {
            ListFetch::All => {
                self.state.loading = true;
                self.state.error = None;
            }
            ListFetch::Search(_) => {
                self.state.searching = true;
                self.state.error = None;
            }
            ListFetch::Refresh => self.state.refreshing = true,
        }
        let generation = self.generation.advance();
        ListEffect::Fetch(ListRequest { generation, fetch })
    }

    fn complete(&mut self, request: ListRequest, result: Result<Vec<Product>, CatalogError>) {
        if !self.generation.is_current(request.generation) {
            tracing::debug!(
                generation = request.generation,
                current = self.generation.current(),
                "Discarding stale product list response"
            );
            return;
        }

        match (request.fetch, result) {
            (ListFetch::All, Ok(products)) => {
                self.state.loading = false;
                self.replace_products(products, true);
            }
            (ListFetch::All, Err(e)) => {
                self.state.loading = false;
                tracing::warn!(error = %e, "Initial product load failed");
                self.state.error = Some(LOAD_ERROR.to_string());
                self.last_failed = Some(ListFetch::All);
            }
            (ListFetch::Search(_), Ok(products)) => {
                self.state.searching = false;
                self.replace_products(products, true);
            }
            (ListFetch::Search(query), Err(e)) => {
                self.state.searching = false;
                tracing::warn!(query = %query, error = %e, "Product search failed");
                self.state.error = Some(SEARCH_ERROR.to_string());
                self.last_failed = Some(ListFetch::Search(query));
            }
            (ListFetch::Refresh, Ok(products)) => {
                self.state.refreshing = false;
                self.replace_products(products, false);
            }
            (ListFetch::Refresh, Err(e)) => {
                self.state.refreshing = false;
                tracing::warn!(error = %e, "Refresh failed; keeping current products");
            }
        }
    }

    fn replace_products(&mut self, products: Vec<Product>, reset_cursor: bool) {
        self.state.products = products;
        self.state.error = None;
        self.last_failed = None;
        self.loaded = true;
        self.revision += 1;
        if reset_cursor {
            self.state.selected = 0;
        } else {
            self.state.selected = self
                .state
                .selected
                .min(self.state.products.len().saturating_sub(1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{product, products};

    fn expect_fetch(effect: ListEffect) -> ListRequest {
        match effect {
            ListEffect::Fetch(request) => request,
            other => panic!("expected a fetch, got {:?}", other),
        }
    }

    fn type_query(screen: &mut ListScreen, query: &str) {
        for c in query.chars() {
            screen.update(ListIntent::InsertChar(c));
        }
    }

    fn network_error() -> CatalogError {
        CatalogError::Http {
            status: 500,
            message: "Internal Server Error".to_string(),
        }
    }

    #[test]
    fn initial_load_populates_products() {
        let mut screen = ListScreen::new();
        let request = expect_fetch(screen.update(ListIntent::Mount));
        assert_eq!(request.fetch, ListFetch::All);
        assert!(screen.state().loading);

        screen.update(ListIntent::Loaded {
            request,
            result: Ok(products(5)),
        });

        let state = screen.state();
        assert!(!state.loading);
        assert_eq!(state.products.len(), 5);
        assert!(state.error.is_none());
    }

    #[test]
    fn failed_initial_load_sets_error_and_retry_repeats_it() {
        let mut screen = ListScreen::new();
        let request = expect_fetch(screen.update(ListIntent::Mount));
        screen.update(ListIntent::Loaded {
            request,
            result: Err(network_error()),
        });

        assert!(screen.state().products.is_empty());
        assert_eq!(screen.state().error.as_deref(), Some(LOAD_ERROR));
        assert!(screen.can_retry());

        let retry = expect_fetch(screen.update(ListIntent::Retry));
        assert_eq!(retry.fetch, ListFetch::All);
        assert!(screen.state().loading);
        assert!(screen.state().error.is_none());
    }

    #[test]
    fn failed_reload_keeps_previous_products() {
        let mut screen = ListScreen::new();
        let request = expect_fetch(screen.update(ListIntent::Mount));
        screen.update(ListIntent::Loaded {
            request,
            result: Ok(products(3)),
        });

        let reload = expect_fetch(screen.update(ListIntent::ClearSearch));
        screen.update(ListIntent::Loaded {
            request: reload,
            result: Err(network_error()),
        });

        assert_eq!(screen.state().products.len(), 3);
        assert!(screen.state().error.is_some());
    }

    #[test]
    fn search_replaces_products_and_clears_flag() {
        let mut screen = ListScreen::new();
        let initial = expect_fetch(screen.update(ListIntent::Mount));
        screen.update(ListIntent::Loaded {
            request: initial,
            result: Ok(products(5)),
        });

        type_query(&mut screen, "phone");
        assert_eq!(screen.state().mode(), QueryMode::Searching);
        let search = expect_fetch(screen.update(ListIntent::SubmitSearch));
        assert_eq!(search.fetch, ListFetch::Search("phone".to_string()));
        assert!(screen.state().searching);
        assert!(!screen.state().loading);

        screen.update(ListIntent::Loaded {
            request: search,
            result: Ok(vec![product(101, "iPhone 9"), product(102, "iPhone X")]),
        });

        let state = screen.state();
        assert!(!state.searching);
        assert_eq!(state.products.len(), 2);
        assert_eq!(state.products[0].id, 101);
    }

    #[test]
    fn failed_search_retries_same_query() {
        let mut screen = ListScreen::new();
        type_query(&mut screen, "laptop");
        let search = expect_fetch(screen.update(ListIntent::SubmitSearch));
        screen.update(ListIntent::Loaded {
            request: search,
            result: Err(network_error()),
        });

        assert!(!screen.state().searching);
        assert_eq!(screen.state().error.as_deref(), Some(SEARCH_ERROR));

        let retry = expect_fetch(screen.update(ListIntent::Retry));
        assert_eq!(retry.fetch, ListFetch::Search("laptop".to_string()));
    }

    #[test]
    fn blank_query_submit_is_initial_load() {
        let mut screen = ListScreen::new();
        type_query(&mut screen, "   ");
        let request = expect_fetch(screen.update(ListIntent::SubmitSearch));
        assert_eq!(request.fetch, ListFetch::All);
        assert!(screen.state().loading);
        assert!(!screen.state().searching);
    }

    #[test]
    fn clear_search_resets_query_and_loads_everything() {
        let mut screen = ListScreen::new();
        type_query(&mut screen, "phone");
        let search = expect_fetch(screen.update(ListIntent::SubmitSearch));
        screen.update(ListIntent::Loaded {
            request: search,
            result: Ok(products(2)),
        });

        let reload = expect_fetch(screen.update(ListIntent::ClearSearch));
        assert_eq!(reload.fetch, ListFetch::All);
        assert!(screen.state().query.is_empty());
        assert_eq!(screen.state().mode(), QueryMode::Browsing);

        screen.update(ListIntent::Loaded {
            request: reload,
            result: Ok(products(30)),
        });
        assert_eq!(screen.state().products.len(), 30);
    }

    #[test]
    fn refresh_failure_is_silent_and_keeps_products() {
        let mut screen = ListScreen::new();
        let initial = expect_fetch(screen.update(ListIntent::Mount));
        screen.update(ListIntent::Loaded {
            request: initial,
            result: Ok(products(4)),
        });
        let before = screen.state().products.clone();

        let refresh = expect_fetch(screen.update(ListIntent::Refresh));
        assert!(screen.state().refreshing);
        screen.update(ListIntent::Loaded {
            request: refresh,
            result: Err(network_error()),
        });

        let state = screen.state();
        assert!(!state.refreshing);
        assert_eq!(state.products, before);
        assert!(state.error.is_none());
        assert!(!screen.can_retry());
    }

    #[test]
    fn refresh_during_initial_load_still_reports_failure() {
        let mut screen = ListScreen::new();
        let initial = expect_fetch(screen.update(ListIntent::Mount));

        let refresh = expect_fetch(screen.update(ListIntent::Refresh));
        assert_eq!(refresh.fetch, ListFetch::All);
        assert!(screen.state().loading);
        assert!(!screen.state().refreshing);

        screen.update(ListIntent::Loaded {
            request: initial,
            result: Ok(products(5)),
        });
        assert!(screen.state().products.is_empty());

        screen.update(ListIntent::Loaded {
            request: refresh,
            result: Err(network_error()),
        });
        let state = screen.state();
        assert!(!state.in_flight());
        assert_eq!(state.error.as_deref(), Some(LOAD_ERROR));
        assert!(screen.can_retry());
        assert_eq!(
            expect_fetch(screen.update(ListIntent::Retry)).fetch,
            ListFetch::All
        );
    }

    #[test]
    fn refresh_after_failed_initial_load_acts_as_reload() {
        let mut screen = ListScreen::new();
        let initial = expect_fetch(screen.update(ListIntent::Mount));
        screen.update(ListIntent::Loaded {
            request: initial,
            result: Err(network_error()),
        });

        let reload = expect_fetch(screen.update(ListIntent::Refresh));
        assert_eq!(reload.fetch, ListFetch::All);
        screen.update(ListIntent::Loaded {
            request: reload,
            result: Err(network_error()),
        });
        assert_eq!(screen.state().error.as_deref(), Some(LOAD_ERROR));
    }

    #[test]
    fn search_sends_query_as_typed() {
        let mut screen = ListScreen::new();
        type_query(&mut screen, " phone ");
        let search = expect_fetch(screen.update(ListIntent::SubmitSearch));
        assert_eq!(search.fetch, ListFetch::Search(" phone ".to_string()));
    }

    #[test]
    fn refresh_success_keeps_cursor_in_bounds() {
        let mut screen = ListScreen::new();
        let initial = expect_fetch(screen.update(ListIntent::Mount));
        screen.update(ListIntent::Loaded {
            request: initial,
            result: Ok(products(10)),
        });
        screen.update(ListIntent::MoveToEnd);
        assert_eq!(screen.state().selected, 9);

        let refresh = expect_fetch(screen.update(ListIntent::Refresh));
        screen.update(ListIntent::Loaded {
            request: refresh,
            result: Ok(products(3)),
        });
        assert_eq!(screen.state().selected, 2);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut screen = ListScreen::new();
        type_query(&mut screen, "phone");
        let search = expect_fetch(screen.update(ListIntent::SubmitSearch));
        let reload = expect_fetch(screen.update(ListIntent::ClearSearch));
        assert!(!screen.state().searching);

        screen.update(ListIntent::Loaded {
            request: reload,
            result: Ok(products(30)),
        });
        let revision = screen.revision();

        // The superseded search resolves last and must not win.
        screen.update(ListIntent::Loaded {
            request: search,
            result: Ok(products(2)),
        });
        assert_eq!(screen.state().products.len(), 30);
        assert_eq!(screen.revision(), revision);
        assert!(!screen.state().in_flight());
    }

    #[test]
    fn selection_navigates_to_product() {
        let mut screen = ListScreen::new();
        assert_eq!(screen.update(ListIntent::Select), ListEffect::None);

        let initial = expect_fetch(screen.update(ListIntent::Mount));
        screen.update(ListIntent::Loaded {
            request: initial,
            result: Ok(products(3)),
        });
        screen.update(ListIntent::MoveBy(1));
        assert_eq!(screen.update(ListIntent::Select), ListEffect::Navigate(2));

        screen.update(ListIntent::MoveBy(-10));
        assert_eq!(screen.state().selected, 0);
    }

    #[test]
    fn empty_message_depends_on_query() {
        let mut screen = ListScreen::new();
        assert_eq!(screen.state().empty_message(), EMPTY_CATALOG);
        type_query(&mut screen, "zzz");
        assert_eq!(screen.state().empty_message(), EMPTY_SEARCH);
        screen.update(ListIntent::Backspace);
        screen.update(ListIntent::Backspace);
        screen.update(ListIntent::Backspace);
        assert_eq!(screen.state().empty_message(), EMPTY_CATALOG);
    }
}
