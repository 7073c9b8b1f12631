//! Axial hex coordinates and cube distance.
//!
//! A hex is addressed by its axial pair `(q, r)`; the third cube coordinate
//! is implied by `q + r + s = 0`.  Distance on the hex lattice is the
//! Chebyshev distance over the three cube axes.
//!
//! Maps may wrap east-west (along `q`).  On such a cylinder the shortest
//! offset between two hexes is either the direct one or the one going the
//! other way round, so [`HexCoord::wrapped_distance`] takes the minimum of
//! both before measuring.

/// Axial offsets of the six neighbours, clockwise from east.
pub const DIRECTIONS: [(i32, i32); 6] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
];

/// A hex position in axial coordinates.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

impl HexCoord {
    #[inline]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The implied third cube coordinate.
    #[inline]
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    /// The six adjacent coordinates, in [`DIRECTIONS`] order.  No wrapping
    /// or bounds are applied; that is the map's job.
    pub fn neighbors(self) -> [HexCoord; 6] {
        DIRECTIONS.map(|(dq, dr)| HexCoord::new(self.q + dq, self.r + dr))
    }

    /// Number of steps between `self` and `other` on an unbounded lattice.
    pub fn distance(self, other: HexCoord) -> u32 {
        let dq = (self.q - other.q).unsigned_abs();
        let dr = (self.r - other.r).unsigned_abs();
        let ds = (self.s() - other.s()).unsigned_abs();
        dq.max(dr).max(ds)
    }

    /// Distance on a map that wraps east-west every `width` columns.
    ///
    /// `None` (or a zero width) means the map does not wrap.
    pub fn wrapped_distance(self, other: HexCoord, width: Option<u32>) -> u32 {
        let direct = self.distance(other);
        let Some(width) = width.filter(|&w| w > 0) else {
            return direct;
        };
        let w = width as i32;
        let east = self.distance(HexCoord::new(other.q + w, other.r));
        let west = self.distance(HexCoord::new(other.q - w, other.r));
        direct.min(east).min(west)
    }
}

impl std::fmt::Display for HexCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}
