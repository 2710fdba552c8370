//! Color-science backend seam.
//!
//! Palette assembly only needs `seed -> (role, tone) -> color`. The HCT math
//! stays behind [`ColorScience`] so another backend can be plugged in.

use material_color_utilities::{
    dynamiccolor::{DynamicScheme, DynamicSchemeBuilder, Variant},
    hct::Hct,
};

pub use material_color_utilities::dynamiccolor::SpecVersion;

use crate::{color::Rgb, palette::Role};

/// Tonal palettes derived from a single seed color.
pub trait TonalScheme {
    /// Color of `role`'s palette at `tone` (0 is black, 100 is white).
    fn tone(&self, role: Role, tone: u8) -> Rgb;
}

/// Produces a [`TonalScheme`] for a seed color.
pub trait ColorScience {
    /// Scheme type returned for each seed.
    type Scheme: TonalScheme;

    /// Derives the tonal palettes of every role from `seed`.
    fn scheme_from_seed(&self, seed: Rgb) -> Self::Scheme;
}

/// [`ColorScience`] backed by `material-color-utilities`, using the tonal
/// spot variant.
///
/// Palettes follow the 2025 color spec by default. Angular Material's own
/// `ng generate @angular/material:theme-color` follows the 2021 spec, so its
/// tones differ slightly; use [`MaterialColorScience::with_spec_version`]
/// with [`SpecVersion::Spec2021`] to match it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaterialColorScience {
    spec_version: SpecVersion,
}

impl Default for MaterialColorScience {
    fn default() -> Self {
        Self {
            spec_version: SpecVersion::Spec2025,
        }
    }
}

impl MaterialColorScience {
    /// Builds schemes following `spec_version` instead.
    pub fn with_spec_version(mut self, spec_version: SpecVersion) -> Self {
        self.spec_version = spec_version;
        self
    }

    /// Color spec version the schemes follow.
    pub fn spec_version(&self) -> SpecVersion {
        self.spec_version
    }
}

/// Tonal palettes of a `material-color-utilities` dynamic scheme.
pub struct MaterialScheme {
    scheme: DynamicScheme,
}

impl ColorScience for MaterialColorScience {
    type Scheme = MaterialScheme;

    fn scheme_from_seed(&self, seed: Rgb) -> MaterialScheme {
        let scheme = DynamicSchemeBuilder::default()
            .source_color_hct(Hct::from_int(seed.to_argb()))
            .variant(Variant::TonalSpot)
            .spec_version(self.spec_version)
            .is_dark(false)
            .build();
        MaterialScheme { scheme }
    }
}

impl TonalScheme for MaterialScheme {
    fn tone(&self, role: Role, tone: u8) -> Rgb {
        let palette = match role {
            Role::Primary => self.scheme.primary_palette(),
            Role::Secondary => self.scheme.secondary_palette(),
            Role::Tertiary => self.scheme.tertiary_palette(),
            Role::Neutral => self.scheme.neutral_palette(),
            Role::NeutralVariant => self.scheme.neutral_variant_palette(),
            Role::Error => self.scheme.error_palette(),
        };
        Rgb::from_argb(palette.tone(tone.into()))
    }
}
