//! LearnAble - Accessibility Learning Companion
//!
//! Run with: cargo run --bin learnable

use clap::Parser;
use tracing::Level;

use learnable::gui::LearnAbleApp;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> iced::Result {
    let args = Args::parse();

    // Setup logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    tracing::info!("✋ LearnAble v{} starting...", env!("CARGO_PKG_VERSION"));

    iced::application("LearnAble", LearnAbleApp::update, LearnAbleApp::view)
        .theme(LearnAbleApp::theme)
        .run_with(LearnAbleApp::new)
}
