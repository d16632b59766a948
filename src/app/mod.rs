// logbook - app/mod.rs
//
// Application layer: orchestration of the two tools.
// Dependencies: core layer, util.

pub mod loader;
pub mod log_stats;
pub mod repl;
