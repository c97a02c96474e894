use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// List the product grid
    Products {
        #[arg(long, short, help = "Filter by name or benefit")]
        query: Option<String>,

        #[arg(long, help = "Only show top rated products")]
        top_rated: bool,
    },

    /// Search the catalog the way the header search panel does
    Search {
        #[arg(default_value = "")]
        query: String,
    },

    /// Show one product
    Show { id: u32 },

    /// Send a message through your mail client
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,

        #[arg(long, help = "Print the mailto link instead of opening it")]
        print_only: bool,
    },

    /// Open the interactive storefront
    Browse {
        #[arg(long, help = "Never launch the browser or mail client")]
        no_open: bool,
    },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write a config file with default settings
    Init {
        #[arg(long, help = "Overwrite an existing config file")]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}
