//! Octant classification of motion deltas.
//!
//! Trackers compare the direction of consecutive deltas and stop averaging
//! once the pointer turns, so the velocity estimate only covers motion in
//! roughly the same direction.

use std::f64::consts::{FRAC_1_PI, PI};
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr};

/// Bitmask of compass octants.
///
/// Octants run clockwise from north in bits 0 to 7. Screen coordinates are
/// used, so positive `y` is south.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Direction(u8);

impl Direction {
    /// No direction; the result of combining disjoint directions
    pub const NONE: Self = Self(0);
    /// North (negative y)
    pub const N: Self = Self(1 << 0);
    /// North-east
    pub const NE: Self = Self(1 << 1);
    /// East (positive x)
    pub const E: Self = Self(1 << 2);
    /// South-east
    pub const SE: Self = Self(1 << 3);
    /// South (positive y)
    pub const S: Self = Self(1 << 4);
    /// South-west
    pub const SW: Self = Self(1 << 5);
    /// West (negative x)
    pub const W: Self = Self(1 << 6);
    /// North-west
    pub const NW: Self = Self(1 << 7);
    /// Compatible with every direction
    pub const UNDEFINED: Self = Self(0xff);

    /// Raw octant bits.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether no octant is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every octant of `other` is also set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Classify a delta.
    ///
    /// Small deltas (both axes below 2 units) are too coarse to resolve a
    /// single octant and map to the three octants around their quadrant.
    /// Larger deltas map to the one or two octants closest to their angle.
    /// A zero delta is [`Direction::UNDEFINED`].
    ///
    /// # Example
    ///
    /// ```
    /// use ptraccel_tracking::Direction;
    ///
    /// assert_eq!(Direction::from_delta(10.0, 0.0), Direction::E);
    /// assert_eq!(
    ///     Direction::from_delta(1.0, 1.0),
    ///     Direction::S | Direction::SE | Direction::E
    /// );
    /// ```
    pub fn from_delta(x: f64, y: f64) -> Self {
        if x.abs() < 2.0 && y.abs() < 2.0 {
            return Self::from_small_delta(x, y);
        }

        // r in [0, 8) with 0 being north, clockwise
        let r = y.atan2(x);
        let r = (r + 2.5 * PI) % (2.0 * PI);
        let r = r * 4.0 * FRAC_1_PI;

        Self(octant_bit(r + 0.9) | octant_bit(r + 0.1))
    }

    fn from_small_delta(x: f64, y: f64) -> Self {
        let bits = if x > 0.0 && y > 0.0 {
            Self::S.0 | Self::SE.0 | Self::E.0
        } else if x > 0.0 && y < 0.0 {
            Self::N.0 | Self::NE.0 | Self::E.0
        } else if x < 0.0 && y > 0.0 {
            Self::S.0 | Self::SW.0 | Self::W.0
        } else if x < 0.0 && y < 0.0 {
            Self::N.0 | Self::NW.0 | Self::W.0
        } else if x > 0.0 {
            Self::NE.0 | Self::E.0 | Self::SE.0
        } else if x < 0.0 {
            Self::NW.0 | Self::W.0 | Self::SW.0
        } else if y > 0.0 {
            Self::SE.0 | Self::S.0 | Self::SW.0
        } else if y < 0.0 {
            Self::NE.0 | Self::N.0 | Self::NW.0
        } else {
            Self::UNDEFINED.0
        };
        Self(bits)
    }
}

#[inline]
fn octant_bit(r: f64) -> u8 {
    let index = (r.floor() as i64).rem_euclid(8);
    u32::try_from(index).map_or(0, |shift| 1u8 << shift)
}

impl BitAnd for Direction {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for Direction {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Direction {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Debug for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Direction({:#010b})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_directions() {
        assert_eq!(Direction::from_delta(10.0, 0.0), Direction::E);
        assert_eq!(Direction::from_delta(-10.0, 0.0), Direction::W);
        assert_eq!(Direction::from_delta(0.0, 10.0), Direction::S);
        assert_eq!(Direction::from_delta(0.0, -10.0), Direction::N);
    }

    #[test]
    fn test_diagonal_marks_neighbouring_octants() {
        let dir = Direction::from_delta(10.0, 10.0);
        assert!(dir.contains(Direction::SE));
        assert!(!dir.contains(Direction::N));
        assert!(!dir.contains(Direction::W));
    }

    #[test]
    fn test_small_deltas_use_quadrants() {
        assert_eq!(
            Direction::from_delta(1.0, -1.0),
            Direction::N | Direction::NE | Direction::E
        );
        assert_eq!(
            Direction::from_delta(-1.0, 0.0),
            Direction::NW | Direction::W | Direction::SW
        );
        assert_eq!(
            Direction::from_delta(0.0, 1.5),
            Direction::SE | Direction::S | Direction::SW
        );
    }

    #[test]
    fn test_zero_delta_is_undefined() {
        assert_eq!(Direction::from_delta(0.0, 0.0), Direction::UNDEFINED);
    }

    #[test]
    fn test_opposite_directions_are_disjoint() {
        let east = Direction::from_delta(10.0, 0.0);
        let west = Direction::from_delta(-10.0, 0.0);
        assert!((east & west).is_empty());

        let mut dir = Direction::UNDEFINED;
        dir &= east;
        assert_eq!(dir, east);
    }

    #[test]
    fn test_large_deltas_set_at_most_two_octants() {
        for i in 0..360 {
            let angle = f64::from(i).to_radians();
            let dir = Direction::from_delta(angle.cos() * 50.0, angle.sin() * 50.0);
            let count = dir.bits().count_ones();
            assert!((1..=2).contains(&count), "angle {i} gave {dir:?}");
        }
    }
}
