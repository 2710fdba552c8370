//! Material 3 theme generation from seed colors.
//!
//! # Usage
//!
//! Derive tonal palettes from one to four seed colors and render them as a
//! Sass file for Angular Material.
//!
//! ```no_run
//! use m3_theme::{SeedColors, ThemeTypes, generate_theme};
//!
//! let seeds = SeedColors::new("#6750a4").with_tertiary("#7d5260");
//! let scss = generate_theme(&seeds, ThemeTypes::Both, false)?;
//! assert!(scss.contains("$light-theme"));
//! # Ok::<(), m3_theme::ThemeError>(())
//! ```
#![deny(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]

pub mod color;
mod error;
pub mod palette;
pub mod patch;
pub mod render;
pub mod science;

pub use color::Rgb;
pub use error::{ColorError, ThemeError};
pub use palette::{HUE_TONES, PaletteMap, Role, SeedColors, TonePalette, build_palettes};
pub use patch::patch_missing_hues;
pub use render::{ThemeTypes, render_palettes_block, render_theme};
pub use science::{ColorScience, MaterialColorScience, SpecVersion, TonalScheme};

/// Generates the theme file contents using `material-color-utilities`.
pub fn generate_theme(
    seeds: &SeedColors,
    theme_types: ThemeTypes,
    use_system_variables: bool,
) -> Result<String, ThemeError> {
    generate_theme_with(
        &MaterialColorScience::default(),
        seeds,
        theme_types,
        use_system_variables,
    )
}

/// Generates the theme file contents with a custom color-science backend.
pub fn generate_theme_with<S: ColorScience>(
    science: &S,
    seeds: &SeedColors,
    theme_types: ThemeTypes,
    use_system_variables: bool,
) -> Result<String, ThemeError> {
    let palettes = seeds.generate_palettes(science)?;
    Ok(render_theme(
        &palettes,
        theme_types,
        &seeds.provenance_comment(),
        use_system_variables,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::science::testing::FakeScience;

    #[test]
    fn test_default_seed_generates_both_themes() {
        let scss = generate_theme(&SeedColors::new("#6750a4"), ThemeTypes::Both, false).unwrap();

        assert_eq!(scss.matches("$light-theme: mat.define-theme((").count(), 1);
        assert_eq!(scss.matches("$dark-theme: mat.define-theme((").count(), 1);
        assert_eq!(scss.matches("    primary: $_primary,").count(), 2);
        assert_eq!(scss.matches("    tertiary: $_tertiary,").count(), 2);
        assert!(!scss.contains("use-system-variables"));
        assert!(scss.contains("// Note: Color palettes are generated from primary: #6750a4"));
        assert!(scss.contains("  neutral-variant: (\n    0: #000000,"));
    }

    #[test]
    fn test_generated_neutral_holds_every_tone() {
        let palettes = SeedColors::new("#6750a4")
            .generate_palettes(&MaterialColorScience::default())
            .unwrap();
        let patched = patch_missing_hues(&palettes);

        let neutral = patched.get(Role::Neutral).unwrap();
        assert_eq!(neutral.tones().collect::<Vec<_>>(), patch::neutral_tones());
        for role in [Role::Primary, Role::Secondary, Role::Error] {
            assert_eq!(patched.get(role).unwrap().len(), HUE_TONES.len());
        }
    }

    #[test]
    fn test_invalid_seed_names_the_value() {
        let err = generate_theme(&SeedColors::new("not-a-color"), ThemeTypes::Both, false)
            .unwrap_err();
        assert!(err.to_string().contains("not-a-color"));
        assert!(err.to_string().contains("primary"));
    }

    #[test]
    fn test_custom_backend_output_is_deterministic() {
        let seeds = SeedColors::new("#200000").with_neutral("#400000");
        let first = generate_theme_with(&FakeScience, &seeds, ThemeTypes::Light, true).unwrap();
        let second = generate_theme_with(&FakeScience, &seeds, ThemeTypes::Light, true).unwrap();

        assert_eq!(first, second);
        assert!(first.contains("primary: #200000, neutral: #400000"));
        // neutral comes from the override seed's primary palette
        assert!(first.contains("  neutral: (\n    0: #400000,\n    4: #"));
    }
}
