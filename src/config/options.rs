//! Storage options for band matrices.
//!
//! `BandOptions` selects how the stored band is interpreted. The default (no flags)
//! is a general band: every diagonal in `[-subs, supers]` is stored independently.
//! `SELF_ADJOINT` stores only the main diagonal and the sub-diagonals of a square
//! symmetric matrix; the super-diagonals are read back as the mirrored sub-diagonals.

use bitflags::bitflags;

bitflags! {
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct BandOptions: u32 {
        const SELF_ADJOINT = 0b0000_0001;
    }
}

impl BandOptions {
    /// True when the upper band is implied by the lower one.
    pub fn is_self_adjoint(self) -> bool {
        self.contains(Self::SELF_ADJOINT)
    }
}
