use clap::Parser;
use gallery::core::catalog::Filter;
use gallery::core::config::{GalleryConfig, load_config, resolve};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "gallery", about = "Browse an artwork catalog in the terminal")]
struct Args {
    /// Catalog JSON file or http(s) URL
    #[arg(short, long)]
    catalog: Option<String>,

    /// Category shown at startup
    #[arg(short, long, value_enum)]
    filter: Option<Filter>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to gallery.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("gallery.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = load_config().unwrap_or_else(|e| {
        log::warn!("{}; falling back to defaults", e);
        GalleryConfig::default()
    });
    let resolved = resolve(&config, args.catalog.as_deref(), args.filter);

    log::info!(
        "Gallery starting up with catalog {} (filter: {})",
        resolved.catalog,
        resolved.filter
    );

    gallery::tui::run(resolved)
}
