use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters;
use anyhow::{Result, anyhow};
use tradify_types::ProductId;

pub fn handle(ctx: &ExecutionContext, id: ProductId) -> Result<()> {
    let catalog = ctx.catalog()?;
    let product = catalog
        .get(id)
        .ok_or_else(|| anyhow!("no product with id {}", id))?;

    ctx.renderer().render(presenters::present_product_detail(product))
}
