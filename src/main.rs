use clap::{Parser, Subcommand};
use dartboard::config;
use dartboard::gui::app::AppModel;
use dartboard::gui::board::BoardRenderer;
use dartboard::gui::snapshot;
use relm4::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dartboard", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file to use instead of the one in the user config directory
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Render a single frame to a PNG file
    Snapshot {
        /// Where to write the image
        output: PathBuf,
    },
    /// Write the default config file (to --config if given) and print its path
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(Commands::InitConfig) = cli.command {
        let path = config::write_default_config(cli.config.as_deref())?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = config::load_config(cli.config.as_deref())?;
    let renderer = BoardRenderer::from_config(&config)?;

    match cli.command {
        Some(Commands::Snapshot { output }) => snapshot::write_png(&renderer, &output)?,
        _ => {
            // clap already consumed the arguments
            let app = RelmApp::new("org.dartboard.Dartboard").with_args(Vec::new());
            app.run::<AppModel>(renderer);
        }
    }

    Ok(())
}
