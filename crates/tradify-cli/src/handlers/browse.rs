use crate::context::ExecutionContext;
use crate::presentation::tui;
use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use tradify_runtime::Storefront;

pub fn handle(ctx: &ExecutionContext, no_open: bool) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("browse needs an interactive terminal; try `tradify products` instead");
    }

    let catalog = ctx.catalog()?;
    let storefront = Storefront::new(catalog, ctx.config()?);

    tracing::info!(products = catalog.len(), no_open, "starting storefront");
    tui::run(storefront, no_open)
}
