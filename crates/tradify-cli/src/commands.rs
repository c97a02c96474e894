use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging::{self, LogSink};
use anyhow::Result;
use tradify_runtime::resolve_data_dir;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;

    let log_path = data_dir.join("tradify.log");
    let sink = match cli.command {
        Some(Commands::Browse { .. }) => LogSink::File(&log_path),
        _ => LogSink::Stderr,
    };
    logging::init(cli.log_level, sink)?;

    let ctx = ExecutionContext::new(data_dir, cli.catalog, cli.format);

    let Some(command) = cli.command else {
        return handlers::guidance::handle(&ctx);
    };

    match command {
        Commands::Products { query, top_rated } => {
            handlers::products::handle(&ctx, query.as_deref().unwrap_or(""), top_rated)
        }
        Commands::Search { query } => handlers::search::handle(&ctx, &query),
        Commands::Show { id } => handlers::show::handle(&ctx, id.into()),
        Commands::Contact {
            name,
            email,
            message,
            print_only,
        } => handlers::contact::handle(
            &ctx,
            handlers::contact::ContactInput {
                name,
                email,
                message,
            },
            print_only,
        ),
        Commands::Browse { no_open } => handlers::browse::handle(&ctx, no_open),
        Commands::Config { command } => match command {
            ConfigCommand::Init { force } => handlers::config::init(&ctx, force),
            ConfigCommand::Show => handlers::config::show(&ctx),
        },
    }
}
