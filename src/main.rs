use clap::Parser;
use newsdeck::core::config;
use newsdeck::news::Category;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "newsdeck", about = "Swipeable top-stories card deck for the terminal")]
struct Args {
    /// News section to load on startup
    #[arg(short, long, value_enum)]
    category: Option<Category>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Log to newsdeck.log in the working directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("newsdeck.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            log::warn!("Falling back to default config: {}", e);
            Default::default()
        }
    };
    let resolved = config::resolve(&file_config, args.category);

    log::info!("Newsdeck starting up with section: {}", resolved.category);

    newsdeck::tui::run(resolved)
}
