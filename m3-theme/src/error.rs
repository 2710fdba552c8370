use thiserror::Error;

use crate::palette::Role;

/// Failure to read a hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The text is not `#rgb` or `#rrggbb`.
    #[error("invalid hex color `{input}`, expected `#rgb` or `#rrggbb`")]
    InvalidColorFormat {
        /// The rejected text.
        input: String,
    },
}

/// Failure to generate theme palettes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// A seed color could not be parsed.
    #[error(
        "cannot parse the {role} seed color `{seed}`, please verify it is a hex color (ex. #ffffff)"
    )]
    InvalidSeedColor {
        /// Role the seed was supplied for.
        role: Role,
        /// The seed exactly as the caller supplied it.
        seed: String,
        /// Underlying parse failure.
        #[source]
        source: ColorError,
    },
}
