//! File browser for versioned artifact repositories.
//!
//! The [`core`] module is UI-free and runs on native targets for tests;
//! [`app`] and [`components`] render it with Leptos in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
