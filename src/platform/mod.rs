// logbook - platform/mod.rs
//
// Platform abstraction layer.
// Dependencies: standard library, directories, toml.
// Must NOT depend on: core, app.

pub mod config;
