//! Named cell constellations that can be stamped onto a universe.

/// A fixed constellation of cells, expressed as (row, col) offsets relative
/// to an anchor cell. Offsets may be negative; stamping wraps them around
/// the torus.
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    pub name: &'static str,
    pub offsets: &'static [(i64, i64)],
}

/// The 5-cell glider; translates diagonally one cell every four generations.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    offsets: &[(-1, 0), (0, -1), (1, -1), (1, 0), (1, 1)],
};

/// Period-2 oscillator, a horizontal bar of three cells.
pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    offsets: &[(0, -1), (0, 0), (0, 1)],
};

/// Period-2 oscillator of six cells.
pub const TOAD: Pattern = Pattern {
    name: "Toad",
    offsets: &[(0, 0), (0, 1), (0, 2), (1, -1), (1, 0), (1, 1)],
};

/// Period-2 oscillator of two flashing 2x2 blocks.
pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    offsets: &[
        (0, 0),
        (0, 1),
        (1, 0),
        (1, 1),
        (2, 2),
        (2, 3),
        (3, 2),
        (3, 3),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glider_shape() {
        assert_eq!(GLIDER.offsets.len(), 5);
        assert_eq!(
            GLIDER.offsets,
            &[(-1, 0), (0, -1), (1, -1), (1, 0), (1, 1)]
        );
    }

    #[test]
    fn test_patterns_have_no_duplicate_offsets() {
        for pattern in [GLIDER, BLINKER, TOAD, BEACON] {
            let mut offsets = pattern.offsets.to_vec();
            offsets.sort_unstable();
            offsets.dedup();
            assert_eq!(offsets.len(), pattern.offsets.len(), "{}", pattern.name);
        }
    }
}
