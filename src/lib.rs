// logbook - lib.rs
//
// Library entry point shared by the `log-stats` and `contact-bot` binaries
// and exposed for integration testing.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
