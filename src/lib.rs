//! askdata - ask natural-language questions about your business data from the terminal
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod response;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod widgets;
