//! # Presentation Layer
//!
//! MVVM-style split between what a command found and how it is shown.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                 ==(Text)==> [ View ]
//! ```
//!
//! The interactive storefront (`tui/`) reads controller state directly and
//! maps it onto Ratatui widgets; it does not go through view models.
//!
//! ## Rules
//! * `view_models/` hold raw data and derive `Serialize`. No formatting.
//! * `presenters/` convert domain values into view models.
//! * `views/` implement `Display` for plain output. Colors only when the
//!   `TextStyle` says so.
//! * `formatters/` are small shared helpers (stars, truncation, emphasis).

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod tui;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
