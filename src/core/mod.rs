// logbook - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: platform, app, or the filesystem directly.

pub mod command;
pub mod contacts;
pub mod export;
pub mod filter;
pub mod model;
pub mod parser;
pub mod report;
