pub mod api;
pub mod catalog;
pub mod compose;
pub mod config;
pub mod dispatch;
pub mod effect;
pub mod gate;
pub mod model;
pub mod scheduled;
pub mod session;
pub mod shell;
pub mod tui;
