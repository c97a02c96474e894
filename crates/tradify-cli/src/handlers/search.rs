use crate::context::ExecutionContext;
use crate::host::SystemHost;
use crate::presentation::Renderer;
use crate::presentation::presenters;
use anyhow::Result;
use tradify_runtime::{NoopListener, SearchOverlay};

/// One-shot run of the search panel: open, type, read what it shows
pub fn handle(ctx: &ExecutionContext, query: &str) -> Result<()> {
    let catalog = ctx.catalog()?;
    let mut host = SystemHost::dry_run();

    let mut overlay = SearchOverlay::new(catalog.all());
    overlay.open(&mut host);
    overlay.on_query_change(query, &mut NoopListener);

    let result = presenters::present_search(
        overlay.query(),
        overlay.results(),
        overlay.panel_message(),
    );
    ctx.renderer().render(result)
}
