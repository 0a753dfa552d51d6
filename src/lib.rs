pub mod app;
pub mod config;
pub mod domain;
pub mod logging;
pub mod navigation;
pub mod prefs;
pub mod ui;
