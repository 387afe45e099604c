mod analyze;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "revlens-cli")]
#[command(about = "Revlens command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze customer reviews on a product page.
    Analyze {
        /// Product page URL to analyze.
        url: String,
        /// Override the maximum number of reviews collected from the page.
        #[arg(long)]
        max_reviews: Option<usize>,
        /// Print the full report as JSON instead of a human-readable summary.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            url,
            max_reviews,
            json,
        } => analyze::run(&url, max_reviews, json).await,
    }
}
