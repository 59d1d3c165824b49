use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg, Sub};

/// Axial coordinate on the organelle hex grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    pub const ORIGIN: Hex = Hex { q: 0, r: 0 };

    #[must_use]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    #[must_use]
    pub fn is_origin(&self) -> bool {
        *self == Self::ORIGIN
    }

    /// Rotates the coordinate around the origin by `turns` steps of 60 degrees.
    ///
    /// One step maps cube `(x, y, z)` to `(-z, -x, -y)`. Negative turn counts
    /// are normalized into `0..6`.
    #[must_use]
    pub fn rotate_axial(self, turns: i32) -> Self {
        let mut hex = self;
        for _ in 0..turns.rem_euclid(6) {
            hex = Hex {
                q: -hex.r,
                r: hex.q + hex.r,
            };
        }
        hex
    }

    /// Hex distance from the origin, in grid steps.
    #[must_use]
    pub fn ring(&self) -> i32 {
        (self.q.abs() + self.r.abs() + (self.q + self.r).abs()) / 2
    }
}

impl Add for Hex {
    type Output = Hex;

    fn add(self, rhs: Hex) -> Hex {
        Hex::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl Sub for Hex {
    type Output = Hex;

    fn sub(self, rhs: Hex) -> Hex {
        Hex::new(self.q - rhs.q, self.r - rhs.r)
    }
}

impl Neg for Hex {
    type Output = Hex;

    fn neg(self) -> Hex {
        Hex::new(-self.q, -self.r)
    }
}

impl From<(i32, i32)> for Hex {
    fn from((q, r): (i32, i32)) -> Self {
        Hex::new(q, r)
    }
}
