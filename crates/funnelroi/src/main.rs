use clap::Parser;
use funnelroi::{App, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "funnelroi")]
#[command(about = "A terminal-based marketing-funnel ROI calculator")]
struct Args {
    /// Path to the data directory (default: ~/.funnelroi/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".funnelroi")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let mut app = App::with_data_dir(data_dir);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
