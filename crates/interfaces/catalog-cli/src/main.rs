use catalog_app_core::viewmodel::Presentation;
use catalog_cli::{commands, CliEllipsis};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    #[arg(
        long,
        global = true,
        env = "CATALOG_ENDPOINT",
        default_value = catalog_config::DEFAULT_PRODUCTS_ENDPOINT
    )]
    endpoint: String,
    #[arg(long, global = true, value_enum, default_value_t = CliEllipsis::Always)]
    ellipsis: CliEllipsis,
    #[arg(long, global = true, default_value_t = catalog_config::DESCRIPTION_PREVIEW_CHARS)]
    preview_chars: usize,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the catalog and print every product card
    List {
        #[arg(
            short,
            long,
            value_delimiter = ',',
            help = "Product IDs to show with full descriptions"
        )]
        expand: Vec<u64>,
        #[arg(long, help = "Print cards as JSON")]
        json: bool,
    },
    /// Fetch the catalog and print one product with its full description
    Show { id: u64 },
}

async fn run(cli: Cli) -> anyhow::Result<String> {
    let presentation = Presentation {
        preview_chars: catalog_config::clamp_preview_chars(cli.preview_chars),
        ellipsis: cli.ellipsis.into(),
    };

    match cli.command {
        Commands::List { expand, json } => {
            commands::cmd_list(commands::ListOptions {
                endpoint: cli.endpoint,
                expand,
                presentation,
                json,
            })
            .await
        }
        Commands::Show { id } => commands::cmd_show(&cli.endpoint, id, presentation).await,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    match run(cli).await {
        Ok(out) => print!("{out}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
