//! Interactive storefront.
//!
//! `BrowseApp` owns the `Storefront` and a `TuiHost`; key presses are
//! translated into controller operations, and every frame is drawn from
//! controller state by the widgets in `components/`.

mod app;
pub mod components;
mod host;
mod ui;

pub use app::BrowseApp;
pub use host::TuiHost;

use anyhow::Result;
use tradify_runtime::Storefront;

/// Take over the terminal until the user quits
pub fn run(storefront: Storefront<'_>, no_open: bool) -> Result<()> {
    let host = if no_open {
        TuiHost::dry_run()
    } else {
        TuiHost::new()
    };
    BrowseApp::new(storefront, host).run()
}
