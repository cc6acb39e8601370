//! Person API - HTTP server and tooling entry point.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

use api_lib::config::ApiConfig;
use api_lib::openapi::ApiDoc;
use api_lib::routes::ROUTE_TABLE;

#[derive(Parser)]
#[command(name = "person-api")]
#[command(author, version, about = "Validation-only person API", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long, env = "API_HOST")]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long, env = "API_PORT")]
        port: Option<u16>,
    },
    /// Print the route table
    Routes,
    /// Print the OpenAPI document as JSON
    Openapi,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ApiConfig::from_env();

    init_tracing(cli.verbose, &config.service.log_level);

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.service.host.clone());
            let port = port.unwrap_or(config.service.port);
            api_lib::run_server(config.with_addr(host, port)).await?;
        }
        Commands::Routes => {
            for route in ROUTE_TABLE {
                println!(
                    "{:<6} {:<28} {:<50} -> {}",
                    route.method, route.path, route.input, route.output
                );
            }
        }
        Commands::Openapi => {
            println!("{}", ApiDoc::openapi().to_pretty_json()?);
        }
    }

    Ok(())
}

/// Initialize tracing subscriber (verbose mode sets debug level)
fn init_tracing(verbose: bool, default_level: &str) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
