use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

mod commands;
mod config;
mod output;

use commands::generate::{self, GenerateOptions};
use config::{ThemeConfig, ThemeType};

#[derive(Parser)]
#[command(name = "cargo-m3-theme")]
#[command(bin_name = "cargo")]
#[command(
    version,
    about = "Generate an Angular Material 3 theme from seed colors",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write m3-theme.scss from one to four seed colors
    #[command(name = "m3-theme")]
    M3Theme(M3ThemeArgs),
}

#[derive(Args)]
struct M3ThemeArgs {
    /// Seed color for the whole scheme (ex. #6750a4)
    #[arg(long, value_name = "COLOR")]
    primary: Option<String>,
    /// Seed color whose primary palette replaces the secondary palette
    #[arg(long, value_name = "COLOR")]
    secondary: Option<String>,
    /// Seed color whose primary palette replaces the tertiary palette
    #[arg(long, value_name = "COLOR")]
    tertiary: Option<String>,
    /// Seed color whose primary palette replaces the neutral palette
    #[arg(long, value_name = "COLOR")]
    neutral: Option<String>,
    /// Theme variables to emit [default: both]
    #[arg(long, value_enum)]
    theme_types: Option<ThemeType>,
    /// Emit `use-system-variables: true` in the color and typography configs
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    use_system_variables: Option<bool>,
    /// Directory to write m3-theme.scss into [default: .]
    #[arg(short, long)]
    directory: Option<PathBuf>,
    /// Overwrite an existing m3-theme.scss
    #[arg(short, long)]
    force: bool,
}

impl M3ThemeArgs {
    fn into_config(self) -> (ThemeConfig, bool) {
        let config = ThemeConfig {
            primary: self.primary,
            secondary: self.secondary,
            tertiary: self.tertiary,
            neutral: self.neutral,
            theme_types: self.theme_types,
            use_system_variables: self.use_system_variables,
            directory: self.directory,
        };
        (config, self.force)
    }
}

fn main() -> ExitCode {
    init_tracing();
    let Cli { command } = Cli::parse();

    let result = match command {
        Commands::M3Theme(args) => run(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(args: M3ThemeArgs) -> Result<()> {
    let (flags, force) = args.into_config();
    let manifest = ThemeConfig::load_from(&std::env::current_dir()?)?;
    let options = GenerateOptions::resolve(flags.or(manifest), force)?;
    generate::execute(&options)?;
    Ok(())
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            match tracing_subscriber::EnvFilter::try_new("error,m3_theme=info,cargo_m3_theme=info")
            {
                Ok(filter) => filter,
                Err(_) => tracing_subscriber::EnvFilter::new("error"),
            }
        }
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}
