//! Terminal presentation: the app shell, its event loop and the widgets it draws.

pub mod animation;
pub mod app;
pub mod components;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
