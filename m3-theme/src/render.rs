//! Sass emission for Angular Material's `mat.define-theme`.
//!
//! ## Usage
//!
//! Render a [`PaletteMap`] as the `$_palettes` map plus one theme variable
//! per requested variant.

use std::fmt;

use crate::{
    palette::{PaletteMap, Role},
    patch::patch_missing_hues,
};

const HEADER: [&str; 6] = [
    "// This file was generated by running 'cargo m3-theme'.",
    "// Proceed with caution if making changes to this file.",
    "",
    "@use 'sass:map';",
    "@use '@angular/material' as mat;",
    "",
];

/// Roles shared verbatim by the merged primary and tertiary maps.
const SHARED_ROLES: [Role; 4] = [Role::Secondary, Role::Neutral, Role::NeutralVariant, Role::Error];

/// Which theme variables to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeTypes {
    /// `$light-theme` only.
    Light,
    /// `$dark-theme` only.
    Dark,
    /// `$light-theme` followed by `$dark-theme`.
    #[default]
    Both,
}

impl ThemeTypes {
    /// Theme type names in emission order.
    pub const fn variants(self) -> &'static [&'static str] {
        match self {
            ThemeTypes::Light => &["light"],
            ThemeTypes::Dark => &["dark"],
            ThemeTypes::Both => &["light", "dark"],
        }
    }

    /// Selector name: `light`, `dark` or `both`.
    pub const fn name(self) -> &'static str {
        match self {
            ThemeTypes::Light => "light",
            ThemeTypes::Dark => "dark",
            ThemeTypes::Both => "both",
        }
    }
}

impl fmt::Display for ThemeTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Renders palettes as a nested Sass map, ending with `;`.
///
/// Roles and tones appear in map order.
pub fn render_palettes_block(palettes: &PaletteMap) -> String {
    let mut lines = vec!["(".to_string()];
    for (role, tones) in palettes.iter() {
        lines.push(format!("  {role}: ("));
        lines.extend(tones.iter().map(|(tone, color)| format!("    {tone}: {color},")));
        lines.push("  ),".to_string());
    }
    lines.push(");".to_string());
    lines.join("\n")
}

/// Renders the complete theme file.
///
/// Missing neutral gap tones are patched before the palettes are written.
/// `comment` is emitted as a `// Note:` line above the palettes.
pub fn render_theme(
    palettes: &PaletteMap,
    theme_types: ThemeTypes,
    comment: &str,
    use_system_variables: bool,
) -> String {
    let patched = patch_missing_hues(palettes);

    let mut lines: Vec<String> = HEADER.iter().map(|line| line.to_string()).collect();
    lines.push(format!("// Note: {comment}"));
    lines.push(format!("$_palettes: {}", render_palettes_block(&patched)));
    lines.push(String::new());

    lines.push("$_rest: (".to_string());
    lines.extend(
        SHARED_ROLES
            .iter()
            .map(|role| format!("  {role}: map.get($_palettes, {role}),")),
    );
    lines.push(");".to_string());
    lines.push("$_primary: map.merge(map.get($_palettes, primary), $_rest);".to_string());
    lines.push("$_tertiary: map.merge(map.get($_palettes, tertiary), $_rest);".to_string());
    lines.push(String::new());

    for theme_type in theme_types.variants() {
        lines.push(format!("${theme_type}-theme: mat.define-theme(("));
        lines.push("  color: (".to_string());
        lines.push(format!("    theme-type: {theme_type},"));
        lines.push("    primary: $_primary,".to_string());
        lines.push("    tertiary: $_tertiary,".to_string());
        if use_system_variables {
            lines.push("    use-system-variables: true,".to_string());
        }
        lines.push("  ),".to_string());
        if use_system_variables {
            lines.push("  typography: (".to_string());
            lines.push("    use-system-variables: true,".to_string());
            lines.push("  ),".to_string());
        }
        lines.push("));".to_string());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn sample_palettes() -> PaletteMap {
        let mut map = PaletteMap::new();
        map.insert(
            Role::Primary,
            [(0, Rgb::BLACK), (40, Rgb::new(0x67, 0x50, 0xa4))]
                .into_iter()
                .collect(),
        );
        map.insert(
            Role::Neutral,
            [(10, Rgb::new(0x1d, 0x1b, 0x20)), (0, Rgb::BLACK)]
                .into_iter()
                .collect(),
        );
        map
    }

    #[test]
    fn test_empty_palettes_block() {
        assert_eq!(render_palettes_block(&PaletteMap::new()), "(\n);");
    }

    #[test]
    fn test_palettes_block_keeps_map_order() {
        assert_eq!(
            render_palettes_block(&sample_palettes()),
            "(\n  primary: (\n    0: #000000,\n    40: #6750a4,\n  ),\n  neutral: (\n    10: #1d1b20,\n    0: #000000,\n  ),\n);"
        );
    }

    #[test]
    fn test_theme_patches_and_sorts_neutral() {
        let scss = render_theme(&sample_palettes(), ThemeTypes::Light, "test", false);
        assert!(scss.contains("  neutral: (\n    0: #000000,\n    4: #"));
        assert!(scss.contains("    6: #"));
        assert!(scss.contains("    10: #1d1b20,\n  ),\n);"));
    }

    #[test]
    fn test_theme_layout() {
        let mut map = PaletteMap::new();
        map.insert(Role::Primary, [(0, Rgb::BLACK)].into_iter().collect());
        let comment = "Color palettes are generated from primary: #000000";
        let scss = render_theme(&map, ThemeTypes::Dark, comment, false);

        let expected = [
            "// This file was generated by running 'cargo m3-theme'.",
            "// Proceed with caution if making changes to this file.",
            "",
            "@use 'sass:map';",
            "@use '@angular/material' as mat;",
            "",
            "// Note: Color palettes are generated from primary: #000000",
            "$_palettes: (",
            "  primary: (",
            "    0: #000000,",
            "  ),",
            ");",
            "",
            "$_rest: (",
            "  secondary: map.get($_palettes, secondary),",
            "  neutral: map.get($_palettes, neutral),",
            "  neutral-variant: map.get($_palettes, neutral-variant),",
            "  error: map.get($_palettes, error),",
            ");",
            "$_primary: map.merge(map.get($_palettes, primary), $_rest);",
            "$_tertiary: map.merge(map.get($_palettes, tertiary), $_rest);",
            "",
            "$dark-theme: mat.define-theme((",
            "  color: (",
            "    theme-type: dark,",
            "    primary: $_primary,",
            "    tertiary: $_tertiary,",
            "  ),",
            "));",
        ]
        .join("\n");
        assert_eq!(scss, expected);
    }

    #[test]
    fn test_both_emits_light_then_dark() {
        let scss = render_theme(&sample_palettes(), ThemeTypes::Both, "", false);
        let light = scss.find("$light-theme:").unwrap();
        let dark = scss.find("$dark-theme:").unwrap();
        assert!(light < dark);
        assert_eq!(scss.matches("mat.define-theme((").count(), 2);
        assert!(!scss.contains("use-system-variables"));
    }

    #[test]
    fn test_system_variables_in_color_and_typography() {
        let scss = render_theme(&sample_palettes(), ThemeTypes::Light, "", true);
        assert!(scss.ends_with(
            "    tertiary: $_tertiary,\n    use-system-variables: true,\n  ),\n  typography: (\n    use-system-variables: true,\n  ),\n));"
        ));
        assert_eq!(scss.matches("use-system-variables: true").count(), 2);
    }

    #[test]
    fn test_theme_types_names() {
        assert_eq!(ThemeTypes::default(), ThemeTypes::Both);
        assert_eq!(ThemeTypes::Both.variants(), ["light", "dark"]);
        assert_eq!(ThemeTypes::Dark.to_string(), "dark");
    }
}
