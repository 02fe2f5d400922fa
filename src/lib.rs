//! Product catalog browser for the dummyjson.com demo API.
//!
//! The crate is layered leaves-first: [`api`] talks to the remote catalog,
//! [`screens`] holds the list and detail state machines, [`nav`] stacks screen
//! instances, and [`ui`] renders them in the terminal.

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod nav;
pub mod output;
pub mod screens;
pub mod ui;

#[cfg(test)]
mod test_support;
