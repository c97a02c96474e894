use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters;
use anyhow::Result;
use tradify_runtime::{GridSettings, ProductGrid};

pub fn handle(ctx: &ExecutionContext, query: &str, top_rated: bool) -> Result<()> {
    let catalog = ctx.catalog()?;
    let settings = GridSettings::from(&ctx.config()?.grid);

    let mut grid = ProductGrid::new(catalog.all(), settings);
    grid.set_query(query);
    if top_rated {
        grid.set_rating_filter(Some(settings.top_rating));
    }

    tracing::debug!(query, top_rated, visible = grid.visible().len(), "listing products");

    let result = presenters::present_product_list(
        grid.visible(),
        query,
        grid.filter_state().rating_filter,
    );
    ctx.renderer().render(result)
}
