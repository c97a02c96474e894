use crate::presentation::view_models::{CommandOutput, GuidanceViewModel, Tip};
use std::path::Path;
use tradify_runtime::CatalogStore;

pub fn present_guidance(
    data_dir: &Path,
    config_exists: bool,
    catalog: &CatalogStore,
) -> CommandOutput<GuidanceViewModel> {
    let hero = catalog.hero();
    let content = GuidanceViewModel {
        data_dir: data_dir.display().to_string(),
        config_exists,
        product_count: catalog.len(),
        headline: hero.headline.clone(),
        tagline: hero.tagline.clone(),
    };

    let mut result = CommandOutput::new(content)
        .with_tip(Tip::new("Browse the storefront").with_command("tradify browse"))
        .with_tip(Tip::new("Search the catalog").with_command("tradify search <QUERY>"))
        .with_tip(Tip::new("Show top picks").with_command("tradify products --top-rated"));

    if !config_exists {
        result =
            result.with_tip(Tip::new("Create a config file").with_command("tradify config init"));
    }

    result
}
