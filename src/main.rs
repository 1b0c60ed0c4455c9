mod app;
mod colors;
mod config;
mod dispatch;
mod districts;
mod help;
mod puddle;
mod render;
mod replay;
mod settings;
mod terminal;

use clap::{Args, Parser, Subcommand};
use config::{AnimationConfig, ReplayConfig, ShowConfig};
use settings::Settings;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rainpuddle")]
#[command(author = "Terminal Art Generator")]
#[command(version = "0.1.0")]
#[command(about = "Click the canvas to ripple a random Hong Kong district's rainfall", long_about = None)]
struct Cli {
    /// Write debug logs to this file
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Default)]
struct AnimationArgs {
    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Ripple frames per click (a transparent closing frame follows)
    #[arg(short = 'L', long)]
    layers: Option<usize>,

    /// Milliseconds between frames
    #[arg(short, long)]
    interval: Option<u64>,

    /// Ripple field grid size
    #[arg(short, long)]
    resolution: Option<usize>,
}

impl AnimationArgs {
    fn resolve(&self, settings: &Settings) -> AnimationConfig {
        AnimationConfig::resolve(settings, self.layers, self.interval, self.resolution)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive canvas (default)
    Show {
        #[command(flatten)]
        animation: AnimationArgs,

        /// Hide the district table panel
        #[arg(long)]
        no_table: bool,
    },

    /// Print the district rainfall table
    Table,

    /// Play one ripple without a terminal, printing a line per frame
    Replay {
        #[command(flatten)]
        animation: AnimationArgs,

        /// District name (random when omitted)
        #[arg(short, long)]
        district: Option<String>,

        /// Rainfall in mm (picked from the district's range when omitted)
        #[arg(short = 'm', long)]
        rainfall: Option<f64>,

        /// Click x in plot space (0-100)
        #[arg(short, long, default_value = "50")]
        x: f64,

        /// Click y in plot space (0-100)
        #[arg(short, long, default_value = "50")]
        y: f64,
    },
}

fn init_logging(log_file: Option<&Path>) -> io::Result<()> {
    let default_filter = if log_file.is_some() { "debug" } else { "off" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if let Some(path) = log_file {
        let file = std::fs::File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    let _ = builder.try_init();
    Ok(())
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log.as_deref())?;
    let settings = Settings::load();

    match cli.command.unwrap_or(Commands::Show {
        animation: AnimationArgs::default(),
        no_table: false,
    }) {
        Commands::Show { animation, no_table } => {
            let show_table = !no_table && settings.display.show_table.unwrap_or(true);
            let config = ShowConfig {
                animation: animation.resolve(&settings),
                seed: animation.seed,
                show_table,
            };
            app::run(config)?;
        }
        Commands::Table => {
            println!("{}", districts::TABLE_TITLE);
            println!();
            for line in districts::table_lines() {
                println!("{line}");
            }
            println!();
            println!("{} districts", districts::all().len());
        }
        Commands::Replay {
            animation,
            district,
            rainfall,
            x,
            y,
        } => {
            let config = ReplayConfig {
                animation: animation.resolve(&settings),
                seed: animation.seed,
                district,
                rainfall,
                center: replay::plot_center(x, y)?,
            };
            replay::run(&config, &mut io::stdout().lock())?;
        }
    }

    Ok(())
}
