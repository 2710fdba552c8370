//! Fills the neutral tones Angular Material expects but the canonical tone
//! set leaves out.

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::{
    color::mix_rgb,
    palette::{HUE_TONES, PaletteMap, Role, TonePalette},
};

/// A neutral tone outside [`HUE_TONES`] and the canonical tones around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapTone {
    /// Tone to synthesize.
    pub tone: u8,
    /// Nearest canonical tone below.
    pub prev: u8,
    /// Nearest canonical tone above.
    pub next: u8,
}

impl GapTone {
    const fn new(tone: u8, prev: u8, next: u8) -> Self {
        Self { tone, prev, next }
    }

    /// Proportion of the `prev` color in the interpolated color.
    pub fn weight(&self) -> f64 {
        f64::from(self.next - self.tone) / f64::from(self.next - self.prev)
    }
}

/// Neutral gap tones, in the order they are filled.
pub const NEUTRAL_GAP_TONES: [GapTone; 10] = [
    GapTone::new(4, 0, 10),
    GapTone::new(6, 0, 10),
    GapTone::new(12, 10, 20),
    GapTone::new(17, 10, 20),
    GapTone::new(22, 20, 25),
    GapTone::new(24, 20, 25),
    GapTone::new(87, 80, 90),
    GapTone::new(92, 90, 95),
    GapTone::new(94, 90, 95),
    GapTone::new(96, 95, 98),
];

/// Every tone a fully patched neutral palette holds, ascending.
pub fn neutral_tones() -> Vec<u8> {
    let mut tones: Vec<u8> = HUE_TONES
        .iter()
        .copied()
        .chain(NEUTRAL_GAP_TONES.iter().map(|gap| gap.tone))
        .collect();
    tones.sort_unstable();
    tones
}

/// Interpolates the missing neutral gap tones.
///
/// A gap tone is filled only when both of its canonical neighbours are
/// present. If there is no neutral role, or nothing needed filling, the
/// input comes back as [`Cow::Borrowed`]. Otherwise the result is a copy of
/// the map whose neutral palette holds the new tones and is sorted by tone.
pub fn patch_missing_hues(palettes: &PaletteMap) -> Cow<'_, PaletteMap> {
    let Some(neutral) = palettes.get(Role::Neutral) else {
        return Cow::Borrowed(palettes);
    };

    let mut patched: Option<TonePalette> = None;
    for gap in &NEUTRAL_GAP_TONES {
        if neutral.contains(gap.tone) {
            continue;
        }
        let (Some(prev), Some(next)) = (neutral.get(gap.prev), neutral.get(gap.next)) else {
            trace!(tone = gap.tone, "neutral neighbours missing, leaving gap tone empty");
            continue;
        };

        let color = mix_rgb(prev, next, gap.weight());
        patched
            .get_or_insert_with(|| neutral.clone())
            .insert(gap.tone, color);
        debug!(tone = gap.tone, %color, "filled neutral gap tone");
    }

    let Some(mut patched) = patched else {
        return Cow::Borrowed(palettes);
    };
    patched.sort_by_tone();

    let mut result = palettes.clone();
    result.insert(Role::Neutral, patched);
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Rgb, mix};

    fn neutral_map(tones: &[(u8, Rgb)]) -> PaletteMap {
        let mut map = PaletteMap::new();
        map.insert(Role::Primary, [(0, Rgb::BLACK), (100, Rgb::WHITE)].into_iter().collect());
        map.insert(Role::Neutral, tones.iter().copied().collect());
        map.insert(Role::Error, [(40, Rgb::new(0xba, 0x1a, 0x1a))].into_iter().collect());
        map
    }

    fn gray(level: u8) -> Rgb {
        Rgb::new(level, level, level)
    }

    #[test]
    fn test_gap_table_neighbours_are_canonical() {
        for gap in NEUTRAL_GAP_TONES {
            assert!(!HUE_TONES.contains(&gap.tone));
            assert!(HUE_TONES.contains(&gap.prev) && HUE_TONES.contains(&gap.next));
            assert!(gap.prev < gap.tone && gap.tone < gap.next);
        }
        assert_eq!(neutral_tones().len(), 26);
    }

    #[test]
    fn test_fills_tone_four_from_zero_and_ten() {
        let map = neutral_map(&[(0, Rgb::BLACK), (10, Rgb::WHITE)]);
        let patched = patch_missing_hues(&map);
        assert!(matches!(patched, Cow::Owned(_)));

        let neutral = patched.get(Role::Neutral).unwrap();
        assert_eq!(NEUTRAL_GAP_TONES[0].weight(), 0.6);
        let expected = mix("#000000", "#ffffff", 0.6).unwrap();
        assert_eq!(neutral.get(4).map(|c| c.to_string()), Some(expected));
        assert_eq!(neutral.get(6), Some(gray(0x99)));
        assert_eq!(neutral.tones().collect::<Vec<_>>(), [0, 4, 6, 10]);
    }

    #[test]
    fn test_neutral_is_resorted_and_other_roles_untouched() {
        let map = neutral_map(&[
            (90, gray(0xe0)),
            (95, gray(0xf0)),
            (0, gray(0)),
            (10, gray(0x10)),
        ]);
        let patched = patch_missing_hues(&map);

        assert_eq!(
            patched.roles().collect::<Vec<_>>(),
            [Role::Primary, Role::Neutral, Role::Error]
        );
        assert_eq!(
            patched.get(Role::Neutral).unwrap().tones().collect::<Vec<_>>(),
            [0, 4, 6, 10, 90, 92, 94, 95]
        );
        assert_eq!(patched.get(Role::Primary), map.get(Role::Primary));
        assert_eq!(patched.get(Role::Error), map.get(Role::Error));
        // the caller's map is left as it was
        assert_eq!(map.get(Role::Neutral).unwrap().len(), 4);
    }

    #[test]
    fn test_complete_palette_is_returned_borrowed() {
        let tones: Vec<_> = neutral_tones()
            .into_iter()
            .map(|tone| (tone, gray(tone)))
            .collect();
        let map = neutral_map(&tones);

        let patched = patch_missing_hues(&map);
        assert!(matches!(patched, Cow::Borrowed(_)));
        assert!(std::ptr::eq(&*patched, &map));
    }

    #[test]
    fn test_map_without_neutral_is_identity() {
        let mut map = PaletteMap::new();
        map.insert(Role::Primary, [(0, Rgb::BLACK)].into_iter().collect());

        let patched = patch_missing_hues(&map);
        assert!(std::ptr::eq(&*patched, &map));

        let empty = PaletteMap::new();
        assert!(matches!(patch_missing_hues(&empty), Cow::Borrowed(_)));
    }

    #[test]
    fn test_missing_neighbours_leave_gap_empty() {
        // without 10, none of 4, 6, 12 or 17 can be interpolated
        let map = neutral_map(&[(0, gray(0)), (20, gray(0x30)), (25, gray(0x3c))]);
        let patched = patch_missing_hues(&map);

        let neutral = patched.get(Role::Neutral).unwrap();
        assert_eq!(neutral.tones().collect::<Vec<_>>(), [0, 20, 22, 24, 25]);
        for tone in [4, 6, 12, 17] {
            assert!(!neutral.contains(tone));
        }
    }

    #[test]
    fn test_existing_gap_tone_is_kept() {
        let map = neutral_map(&[(0, gray(0)), (4, Rgb::new(1, 2, 3)), (10, gray(0x10))]);
        let patched = patch_missing_hues(&map);
        assert_eq!(patched.get(Role::Neutral).unwrap().get(4), Some(Rgb::new(1, 2, 3)));
    }
}
