//! Text UI for the pokemon info app.

pub mod app;
pub mod mvi;
pub mod runtime;
pub mod transition;
pub mod view;
