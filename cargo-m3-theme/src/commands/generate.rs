use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::{Context, Result, anyhow, bail};
use m3_theme::{SeedColors, ThemeTypes};
use tracing::debug;

use crate::{config::ThemeConfig, output};

pub const THEME_FILE_NAME: &str = "m3-theme.scss";

/// Fully resolved options for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub seeds: SeedColors,
    pub theme_types: ThemeTypes,
    pub use_system_variables: bool,
    pub directory: PathBuf,
    pub force: bool,
}

impl GenerateOptions {
    /// Applies defaults to the layered config. A primary seed is required.
    pub fn resolve(config: ThemeConfig, force: bool) -> Result<Self> {
        let primary = config.primary.ok_or_else(|| {
            anyhow!(
                "No primary seed color given, pass --primary or set `primary` under [package.metadata.m3-theme] in Cargo.toml"
            )
        })?;

        Ok(Self {
            seeds: SeedColors {
                primary,
                secondary: config.secondary,
                tertiary: config.tertiary,
                neutral: config.neutral,
            },
            theme_types: config.theme_types.map(ThemeTypes::from).unwrap_or_default(),
            use_system_variables: config.use_system_variables.unwrap_or(false),
            directory: config.directory.unwrap_or_else(|| PathBuf::from(".")),
            force,
        })
    }

    pub fn output_path(&self) -> PathBuf {
        self.directory.join(THEME_FILE_NAME)
    }
}

/// Generates the theme and writes it, returning the written path.
///
/// Nothing is written unless every seed parses.
pub fn execute(options: &GenerateOptions) -> Result<PathBuf> {
    let started = Instant::now();
    output::generating(options.theme_types, &options.seeds);

    let scss = m3_theme::generate_theme(
        &options.seeds,
        options.theme_types,
        options.use_system_variables,
    )?;
    let path = write_theme_file(&options.output_path(), &scss, options.force)?;

    output::finished(&path, started.elapsed());
    Ok(path)
}

fn write_theme_file(path: &Path, scss: &str, force: bool) -> Result<PathBuf> {
    if path.exists() {
        if !force {
            bail!(
                "{} already exists, pass --force to overwrite it",
                path.display()
            );
        }
        output::overwriting(path);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, scss).with_context(|| format!("Failed to write {}", path.display()))?;
    debug!(path = %path.display(), bytes = scss.len(), "wrote theme file");

    Ok(path.to_path_buf())
}
