pub mod cli;
pub mod config;
pub mod logging;
pub mod pokemon;
pub mod resource;
pub mod ui;
