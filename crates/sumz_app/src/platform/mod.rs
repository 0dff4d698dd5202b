//! Terminal host for the sumz article session.
mod app;
mod clipboard;
mod config;
mod input;
mod render;

pub use app::run_app;
