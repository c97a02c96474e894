// NOTE: tradify Architecture
//
// - types: plain data (products, page content, controller state)
// - engine: pure functions (filter, highlight, mail composition)
// - runtime: catalog loading, config, controllers driving host side effects
// - cli (this crate): argument parsing, handlers, console/JSON output, TUI
//
// Controllers never talk to the terminal or the OS. Every side effect goes
// through `tradify_runtime::Host`, so the same Storefront drives the TUI and
// the tests.

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod host;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
