//! Half-step commutation table for a 4-line (A, B, C, D) stepper.

/// Number of entries in [`HALF_STEP_SEQUENCE`]. One position count is one entry.
pub const PHASE_COUNT: usize = 8;

/// Drive levels for the four output lines; bit `i` is line `i` (A = 0 .. D = 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhasePattern(u8);

impl PhasePattern {
    /// All lines low; coils de-energised.
    pub const OFF: Self = Self(0);

    /// Build from line levels A..D.
    pub const fn from_lines(lines: [bool; 4]) -> Self {
        Self(
            (lines[0] as u8)
                | (lines[1] as u8) << 1
                | (lines[2] as u8) << 2
                | (lines[3] as u8) << 3,
        )
    }

    /// Level of line `index` (0..4).
    #[inline]
    pub const fn line(self, index: usize) -> bool {
        self.0 >> index & 1 == 1
    }

    /// Levels of lines A..D.
    #[inline]
    pub const fn lines(self) -> [bool; 4] {
        [self.line(0), self.line(1), self.line(2), self.line(3)]
    }

    /// Raw 4-bit value.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Number of energised lines.
    #[inline]
    pub const fn energized_lines(self) -> u32 {
        self.0.count_ones()
    }
}

/// A, AB, B, BC, C, CD, D, DA.
pub const HALF_STEP_SEQUENCE: [PhasePattern; PHASE_COUNT] = [
    PhasePattern::from_lines([true, false, false, false]),
    PhasePattern::from_lines([true, true, false, false]),
    PhasePattern::from_lines([false, true, false, false]),
    PhasePattern::from_lines([false, true, true, false]),
    PhasePattern::from_lines([false, false, true, false]),
    PhasePattern::from_lines([false, false, true, true]),
    PhasePattern::from_lines([false, false, false, true]),
    PhasePattern::from_lines([true, false, false, true]),
];

/// Table index for a position count.
#[inline]
pub const fn phase_index(position: u32) -> usize {
    position as usize % PHASE_COUNT
}

/// Pattern to assert at a position count.
#[inline]
pub const fn pattern_for(position: u32) -> PhasePattern {
    HALF_STEP_SEQUENCE[phase_index(position)]
}
