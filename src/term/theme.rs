//! Cosmetic palettes - 7 colors keyed by piece index
//!
//! The engine only exports color indices 0-6; what they look like is entirely
//! a presentation choice. Any palette with an entry per index satisfies the
//! contract, so swapping themes never touches game state.

use crate::term::fb::Rgb;
use crate::types::PieceKind;

/// A set of 7 piece colors keyed by `PieceKind::index()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    colors: [Rgb; 7],
}

impl Palette {
    /// Color for a piece kind.
    pub fn color(&self, kind: PieceKind) -> Rgb {
        self.colors[kind.index() as usize]
    }

    /// Color for a 1-based board cell index (as exported in snapshots).
    ///
    /// Index 0 (empty) is a programmer error; board cells are only painted
    /// when filled.
    pub fn color_for_cell(&self, cell: u8) -> Rgb {
        assert!(cell >= 1 && cell <= 7, "cell color index out of range");
        self.colors[(cell - 1) as usize]
    }
}

/// Default guideline-like colors.
pub const CLASSIC: Palette = Palette {
    name: "classic",
    colors: [
        Rgb::new(80, 220, 220), // I cyan
        Rgb::new(240, 220, 80), // O yellow
        Rgb::new(200, 120, 220), // T purple
        Rgb::new(255, 165, 0),  // L orange
        Rgb::new(80, 120, 220), // J blue
        Rgb::new(100, 220, 120), // S green
        Rgb::new(220, 80, 80),  // Z red
    ],
};

/// Warm alternate theme.
pub const SUNSET: Palette = Palette {
    name: "sunset",
    colors: [
        Rgb::new(250, 208, 137),
        Rgb::new(246, 114, 128),
        Rgb::new(192, 108, 132),
        Rgb::new(255, 166, 97),
        Rgb::new(106, 5, 114),
        Rgb::new(255, 211, 182),
        Rgb::new(171, 52, 40),
    ],
};

/// Built-in palettes, selectable by the host.
pub const PALETTES: [Palette; 2] = [CLASSIC, SUNSET];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_color_in_every_palette() {
        for palette in PALETTES {
            for kind in PieceKind::ALL {
                let _ = palette.color(kind);
            }
        }
    }

    #[test]
    fn cell_index_maps_to_kind_color() {
        for kind in PieceKind::ALL {
            assert_eq!(
                CLASSIC.color_for_cell(kind.index() + 1),
                CLASSIC.color(kind)
            );
        }
    }

    #[test]
    #[should_panic(expected = "cell color index out of range")]
    fn empty_cell_has_no_color() {
        CLASSIC.color_for_cell(0);
    }
}
