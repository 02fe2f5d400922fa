//! Navigation shell: a stack of screen instances.
//!
//! Each entry carries a unique [`ScreenId`] and a [`TaskScope`] holding the
//! fetch tasks it started. Popping an entry drops its scope, which aborts
//! those tasks; any completion that still arrives for the id finds no entry
//! and is ignored.

use crate::screens::{DetailScreen, ListScreen};
use crate::ui::components::Spinner;
use tokio::task::AbortHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    ProductList,
    ProductDetails { product_id: u64 },
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::ProductList => "Product Catalog",
            Route::ProductDetails { .. } => "Product Details",
        }
    }
}

#[derive(Debug)]
pub enum Screen {
    List(ListScreen),
    Details(DetailScreen),
}

impl Screen {
    fn for_route(route: Route) -> Self {
        match route {
            Route::ProductList => Screen::List(ListScreen::new()),
            Route::ProductDetails { product_id } => Screen::Details(DetailScreen::new(product_id)),
        }
    }
}

/// Fetch tasks owned by one screen; aborted when the scope is dropped.
#[derive(Debug, Default)]
pub struct TaskScope {
    handles: Vec<AbortHandle>,
}

impl TaskScope {
    pub fn track(&mut self, handle: AbortHandle) {
        self.handles.retain(|h| !h.is_finished());
        self.handles.push(handle);
    }

    pub fn abort_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for TaskScope {
    fn drop(&mut self) {
        self.abort_all();
    }
}

/// Per-instance presentation state; lives and dies with its entry.
#[derive(Debug, Default)]
pub struct ScreenView {
    pub spinner: Spinner,
    /// Tick at which the current list contents started their entrance.
    pub entrance_tick: Option<u64>,
    pub seen_revision: u64,
}

#[derive(Debug)]
pub struct Entry {
    pub id: ScreenId,
    pub route: Route,
    pub screen: Screen,
    pub view: ScreenView,
    pub tasks: TaskScope,
}

#[derive(Debug)]
pub struct NavStack {
    entries: Vec<Entry>,
    next_id: u64,
}

impl Default for NavStack {
    fn default() -> Self {
        Self::new()
    }
}

impl NavStack {
    /// A stack holding only the root product list.
    pub fn new() -> Self {
        let mut stack = Self {
            entries: Vec::new(),
            next_id: 0,
        };
        stack.push(Route::ProductList);
        stack
    }

    pub fn push(&mut self, route: Route) -> ScreenId {
        self.next_id += 1;
        let id = ScreenId(self.next_id);
        tracing::debug!(?route, ?id, "Pushing screen");
        self.entries.push(Entry {
            id,
            route,
            screen: Screen::for_route(route),
            view: ScreenView::default(),
            tasks: TaskScope::default(),
        });
        id
    }

    /// Pops the top screen. The root list is never popped.
    pub fn pop(&mut self) -> Option<ScreenId> {
        if self.entries.len() <= 1 {
            return None;
        }
        let entry = self.entries.pop()?;
        tracing::debug!(route = ?entry.route, id = ?entry.id, "Popping screen");
        Some(entry.id)
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn top(&self) -> &Entry {
        // `new` pushes the root and `pop` never removes it.
        &self.entries[self.entries.len() - 1]
    }

    pub fn get_mut(&mut self, id: ScreenId) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }

    pub fn contains(&self, id: ScreenId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }
}
