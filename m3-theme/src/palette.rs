//! Tonal palette assembly from seed colors.
//!
//! ## Usage
//!
//! Build the per-role tone tables for one seed with [`build_palettes`], or
//! combine a primary seed with per-role overrides through [`SeedColors`].

use std::fmt;

use tracing::debug;

use crate::{
    color::Rgb,
    error::ThemeError,
    science::{ColorScience, TonalScheme},
};

/// Tones requested from the color-science backend for every role.
pub const HUE_TONES: [u8; 16] = [0, 10, 20, 25, 30, 35, 40, 50, 60, 70, 80, 90, 95, 98, 99, 100];

/// A palette slot within a Material 3 theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Primary accent palette.
    Primary,
    /// Secondary accent palette.
    Secondary,
    /// Tertiary accent palette.
    Tertiary,
    /// Neutral palette used for surfaces and backgrounds.
    Neutral,
    /// Neutral variant palette used for outlines and variant surfaces.
    NeutralVariant,
    /// Error palette.
    Error,
}

impl Role {
    /// All roles in theme order.
    pub const ALL: [Role; 6] = [
        Role::Primary,
        Role::Secondary,
        Role::Tertiary,
        Role::Neutral,
        Role::NeutralVariant,
        Role::Error,
    ];

    /// Kebab-case name used as the Sass map key.
    pub const fn name(self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::Secondary => "secondary",
            Role::Tertiary => "tertiary",
            Role::Neutral => "neutral",
            Role::NeutralVariant => "neutral-variant",
            Role::Error => "error",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered `tone -> color` table for a single role.
///
/// Entries keep insertion order; [`TonePalette::sort_by_tone`] reorders them
/// ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TonePalette {
    entries: Vec<(u8, Rgb)>,
}

impl TonePalette {
    /// Creates an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the color recorded for `tone`.
    pub fn get(&self, tone: u8) -> Option<Rgb> {
        self.entries
            .iter()
            .find_map(|&(t, color)| (t == tone).then_some(color))
    }

    /// Returns `true` if `tone` has a color.
    pub fn contains(&self, tone: u8) -> bool {
        self.entries.iter().any(|&(t, _)| t == tone)
    }

    /// Records `color` for `tone`, replacing an existing entry in place.
    pub fn insert(&mut self, tone: u8, color: Rgb) {
        match self.entries.iter_mut().find(|(t, _)| *t == tone) {
            Some(entry) => entry.1 = color,
            None => self.entries.push((tone, color)),
        }
    }

    /// Sorts entries by ascending tone.
    pub fn sort_by_tone(&mut self) {
        self.entries.sort_by_key(|&(tone, _)| tone);
    }

    /// Iterates `(tone, color)` pairs in their current order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Rgb)> + '_ {
        self.entries.iter().copied()
    }

    /// Tones in their current order.
    pub fn tones(&self) -> impl Iterator<Item = u8> + '_ {
        self.entries.iter().map(|&(tone, _)| tone)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no tone has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(u8, Rgb)> for TonePalette {
    fn from_iter<I: IntoIterator<Item = (u8, Rgb)>>(iter: I) -> Self {
        let mut palette = TonePalette::new();
        for (tone, color) in iter {
            palette.insert(tone, color);
        }
        palette
    }
}

/// Ordered `role -> tones` mapping.
///
/// Role order is observable in the generated Sass, so roles keep the
/// position they were first inserted at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteMap {
    roles: Vec<(Role, TonePalette)>,
}

impl PaletteMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the palette for `role`.
    pub fn get(&self, role: Role) -> Option<&TonePalette> {
        self.roles
            .iter()
            .find_map(|(r, palette)| (*r == role).then_some(palette))
    }

    /// Sets the palette for `role`, keeping its position if already present.
    pub fn insert(&mut self, role: Role, palette: TonePalette) {
        match self.roles.iter_mut().find(|(r, _)| *r == role) {
            Some(entry) => entry.1 = palette,
            None => self.roles.push((role, palette)),
        }
    }

    /// Removes and returns the palette for `role`.
    pub fn remove(&mut self, role: Role) -> Option<TonePalette> {
        let index = self.roles.iter().position(|(r, _)| *r == role)?;
        Some(self.roles.remove(index).1)
    }

    /// Iterates roles and their palettes in map order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &TonePalette)> + '_ {
        self.roles.iter().map(|(role, palette)| (*role, palette))
    }

    /// Roles in map order.
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.roles.iter().map(|(role, _)| *role)
    }

    /// Number of roles.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Returns `true` if the map has no roles.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl FromIterator<(Role, TonePalette)> for PaletteMap {
    fn from_iter<I: IntoIterator<Item = (Role, TonePalette)>>(iter: I) -> Self {
        let mut map = PaletteMap::new();
        for (role, palette) in iter {
            map.insert(role, palette);
        }
        map
    }
}

/// Builds all six role palettes for `seed` at the canonical [`HUE_TONES`].
///
/// Neutral gap tones are not queried here; see
/// [`patch_missing_hues`](crate::patch::patch_missing_hues).
pub fn build_palettes<S: ColorScience>(science: &S, seed: &str) -> Result<PaletteMap, ThemeError> {
    build_palettes_for(science, Role::Primary, seed)
}

#[tracing::instrument(level = "debug", skip(science))]
fn build_palettes_for<S: ColorScience>(
    science: &S,
    role: Role,
    seed: &str,
) -> Result<PaletteMap, ThemeError> {
    let color = seed
        .parse::<Rgb>()
        .map_err(|source| ThemeError::InvalidSeedColor {
            role,
            seed: seed.to_string(),
            source,
        })?;
    let scheme = science.scheme_from_seed(color);

    let palettes: PaletteMap = Role::ALL
        .iter()
        .map(|&r| {
            let tones: TonePalette = HUE_TONES
                .iter()
                .map(|&tone| (tone, scheme.tone(r, tone)))
                .collect();
            (r, tones)
        })
        .collect();

    debug!(%color, roles = palettes.len(), "built tonal palettes");
    Ok(palettes)
}

/// Seed colors for a theme: a required primary seed plus optional per-role
/// overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedColors {
    /// Seed for the full scheme.
    pub primary: String,
    /// Seed whose primary palette replaces the secondary role.
    pub secondary: Option<String>,
    /// Seed whose primary palette replaces the tertiary role.
    pub tertiary: Option<String>,
    /// Seed whose primary palette replaces the neutral role.
    pub neutral: Option<String>,
}

impl SeedColors {
    /// Seeds with only a primary color.
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            ..Self::default()
        }
    }

    /// Sets the secondary override seed.
    pub fn with_secondary(mut self, seed: impl Into<String>) -> Self {
        self.secondary = Some(seed.into());
        self
    }

    /// Sets the tertiary override seed.
    pub fn with_tertiary(mut self, seed: impl Into<String>) -> Self {
        self.tertiary = Some(seed.into());
        self
    }

    /// Sets the neutral override seed.
    pub fn with_neutral(mut self, seed: impl Into<String>) -> Self {
        self.neutral = Some(seed.into());
        self
    }

    /// Supplied seeds in primary, secondary, tertiary, neutral order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &str)> + '_ {
        std::iter::once((Role::Primary, self.primary.as_str())).chain(self.overrides())
    }

    fn overrides(&self) -> impl Iterator<Item = (Role, &str)> + '_ {
        [
            (Role::Secondary, &self.secondary),
            (Role::Tertiary, &self.tertiary),
            (Role::Neutral, &self.neutral),
        ]
        .into_iter()
        .filter_map(|(role, seed)| seed.as_deref().map(|seed| (role, seed)))
    }

    /// Builds the theme palettes.
    ///
    /// The primary seed supplies every role. Each override seed builds its
    /// own scheme and contributes only that scheme's primary palette, placed
    /// under the overridden role.
    pub fn generate_palettes<S: ColorScience>(&self, science: &S) -> Result<PaletteMap, ThemeError> {
        let mut palettes = build_palettes_for(science, Role::Primary, &self.primary)?;

        for (role, seed) in self.overrides() {
            let mut seeded = build_palettes_for(science, role, seed)?;
            if let Some(primary) = seeded.remove(Role::Primary) {
                palettes.insert(role, primary);
            }
        }

        Ok(palettes)
    }

    /// One-line note naming the seed used for each role.
    pub fn provenance_comment(&self) -> String {
        let seeds = self
            .iter()
            .map(|(role, seed)| format!("{role}: {seed}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("Color palettes are generated from {seeds}")
    }
}
