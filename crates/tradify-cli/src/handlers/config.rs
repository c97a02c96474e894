use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters;
use anyhow::Result;
use tradify_runtime::Config;

pub fn init(ctx: &ExecutionContext, force: bool) -> Result<()> {
    let path = ctx.config_path();

    let written = if path.exists() && !force {
        tracing::info!(path = %path.display(), "config exists, not overwriting");
        false
    } else {
        Config::default().save_to(&path)?;
        true
    };

    ctx.renderer()
        .render(presenters::present_config_init(&path, written))
}

pub fn show(ctx: &ExecutionContext) -> Result<()> {
    let path = ctx.config_path();
    let config = ctx.config()?.clone();

    ctx.renderer()
        .render(presenters::present_config(&path, path.exists(), config))
}
