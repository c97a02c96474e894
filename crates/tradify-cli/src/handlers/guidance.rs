use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let catalog = ctx.catalog()?;
    let config_exists = ctx.config_path().exists();

    let result = presenters::present_guidance(ctx.data_dir(), config_exists, catalog);
    ctx.renderer().render(result)
}
