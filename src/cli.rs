use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "chatpane", about = "Mock chat-list renderer (draw-op dump)")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render the demo chat list and print the draw operations
    Render(RenderArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct RenderArgs {
    /// Viewport width in pixels (overrides config)
    #[arg(long)]
    pub width: Option<i32>,

    /// Viewport height in pixels (overrides config)
    #[arg(long)]
    pub height: Option<i32>,

    /// Scroll offset in pixels from the top of the list
    #[arg(long)]
    pub scroll: Option<i32>,

    /// Index of the selected row
    #[arg(long)]
    pub select: Option<usize>,

    /// Index of the hovered row
    #[arg(long)]
    pub hover: Option<usize>,

    /// Emit the operation stream as JSON instead of a listing
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Render(RenderArgs::default()))
    }
}
