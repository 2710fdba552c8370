//! Theme defaults from `[package.metadata.m3-theme]` in `Cargo.toml`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::ValueEnum;
use m3_theme::ThemeTypes;
use serde::Deserialize;

pub const MANIFEST_FILE: &str = "Cargo.toml";

/// Theme variant selector as accepted on the command line and in the
/// manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeType {
    Light,
    Dark,
    Both,
}

impl From<ThemeType> for ThemeTypes {
    fn from(value: ThemeType) -> Self {
        match value {
            ThemeType::Light => ThemeTypes::Light,
            ThemeType::Dark => ThemeTypes::Dark,
            ThemeType::Both => ThemeTypes::Both,
        }
    }
}

/// Partially specified theme options. Unset fields fall back to the next
/// layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ThemeConfig {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub tertiary: Option<String>,
    pub neutral: Option<String>,
    pub theme_types: Option<ThemeType>,
    pub use_system_variables: Option<bool>,
    pub directory: Option<PathBuf>,
}

impl ThemeConfig {
    /// Reads `dir/Cargo.toml`, returning empty options when it does not exist
    /// or has no `m3-theme` metadata.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents =
            fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_manifest_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_manifest_str(contents: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(contents)?;
        Ok(manifest
            .package
            .and_then(|p| p.metadata)
            .and_then(|m| m.m3_theme)
            .unwrap_or_default())
    }

    /// Field-wise `Option::or`: values set here win over `fallback`.
    pub fn or(self, fallback: ThemeConfig) -> ThemeConfig {
        ThemeConfig {
            primary: self.primary.or(fallback.primary),
            secondary: self.secondary.or(fallback.secondary),
            tertiary: self.tertiary.or(fallback.tertiary),
            neutral: self.neutral.or(fallback.neutral),
            theme_types: self.theme_types.or(fallback.theme_types),
            use_system_variables: self.use_system_variables.or(fallback.use_system_variables),
            directory: self.directory.or(fallback.directory),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Manifest {
    package: Option<PackageSection>,
}

#[derive(Debug, Deserialize)]
struct PackageSection {
    metadata: Option<MetadataSection>,
}

#[derive(Debug, Deserialize)]
struct MetadataSection {
    #[serde(rename = "m3-theme")]
    m3_theme: Option<ThemeConfig>,
}
