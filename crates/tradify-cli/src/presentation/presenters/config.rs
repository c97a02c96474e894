use crate::presentation::view_models::{
    Badge, CommandOutput, ConfigInitViewModel, ConfigViewModel, Tip,
};
use std::path::Path;
use tradify_runtime::Config;

pub fn present_config(
    path: &Path,
    exists: bool,
    config: Config,
) -> CommandOutput<ConfigViewModel> {
    let result = CommandOutput::new(ConfigViewModel {
        path: path.display().to_string(),
        exists,
        config,
    });

    if exists {
        result
    } else {
        result.with_tip(
            Tip::new("Write these defaults to disk").with_command("tradify config init"),
        )
    }
}

pub fn present_config_init(path: &Path, written: bool) -> CommandOutput<ConfigInitViewModel> {
    let content = ConfigInitViewModel {
        path: path.display().to_string(),
        written,
    };

    if written {
        CommandOutput::new(content).with_badge(Badge::success("Config written"))
    } else {
        CommandOutput::new(content)
            .with_badge(Badge::warning("Config already exists"))
            .with_tip(
                Tip::new("Overwrite it with defaults").with_command("tradify config init --force"),
            )
    }
}
