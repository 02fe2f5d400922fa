//! Screen state machines.
//!
//! Each screen owns its state and turns intents (user input or fetch
//! completions) into state changes plus at most one effect for the shell to
//! carry out. Screens never perform I/O themselves; fetches are described as
//! requests, executed by [`fetch::execute`], and fed back as `Loaded` intents.

pub mod detail;
pub mod fetch;
pub mod list;

pub use detail::{DetailIntent, DetailPhase, DetailRequest, DetailScreen, DetailState};
pub use fetch::{FetchOutcome, FetchRequest};
pub use list::{ListEffect, ListFetch, ListIntent, ListRequest, ListScreen, ListState, QueryMode};

/// Monotonic request counter; only the newest request's completion is applied.
#[derive(Debug, Default, Clone)]
pub struct RequestGeneration {
    current: u64,
}

impl RequestGeneration {
    pub fn advance(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.current
    }
}
