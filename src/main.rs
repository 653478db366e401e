use bookrec_api::RestApi;
use bookrec_storage::CatalogStore;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Book recommendation service over precomputed similarity snapshots
#[derive(Parser, Debug)]
#[command(name = "bookrec")]
#[command(about = "Serve book recommendations from precomputed snapshots", long_about = None)]
struct Args {
    /// Path to the snapshot data directory
    #[arg(short, long, default_value = "./data")]
    data_dir: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 8000)]
    http_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting bookrec v{}", env!("CARGO_PKG_VERSION"));
    info!("Data directory: {:?}", args.data_dir);
    info!("HTTP API port: {}", args.http_port);

    // Load failure is fatal: the process must not serve without a full
    // catalog.
    let store = CatalogStore::load(&args.data_dir)?;
    let catalog = store.catalog();
    info!(
        "Catalog loaded: {} axis titles, {} records, {} popular entries",
        catalog.axis().len(),
        catalog.books().len(),
        catalog.popular().len()
    );

    let catalog_http = catalog.clone();
    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(catalog_http, http_port).await {
                eprintln!("HTTP server error: {}", e);
            }
        })
    });

    info!("bookrec started successfully");
    info!("HTTP API: http://localhost:{}/", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
