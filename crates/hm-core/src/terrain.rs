//! Terrain and the raw movement cost a unit pays to enter it.
//!
//! Raw costs are whole movement points.  The allocator in `hm-mobility`
//! turns them into fractions of a turn; this module only answers "how many
//! points does this unit pay for this tile, or can it not enter at all".

/// Raw cost sentinel for tiles a unit can never enter.
pub const IMPASSABLE_RAW: i32 = -99;

/// Height class of a tile.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Elevation {
    Ocean,
    #[default]
    Flat,
    Hill,
    Mountain,
}

/// Vegetation or other surface feature on top of the elevation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Feature {
    #[default]
    None,
    Forest,
    Jungle,
}

/// The terrain of a single tile.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Terrain {
    pub elevation: Elevation,
    pub feature:   Feature,
}

impl Terrain {
    pub const FLAT:     Terrain = Terrain::new(Elevation::Flat, Feature::None);
    pub const HILL:     Terrain = Terrain::new(Elevation::Hill, Feature::None);
    pub const FOREST:   Terrain = Terrain::new(Elevation::Flat, Feature::Forest);
    pub const MOUNTAIN: Terrain = Terrain::new(Elevation::Mountain, Feature::None);
    pub const OCEAN:    Terrain = Terrain::new(Elevation::Ocean, Feature::None);

    #[inline]
    pub const fn new(elevation: Elevation, feature: Feature) -> Self {
        Self { elevation, feature }
    }

    /// Raw movement points a unit with `traits` pays to enter this terrain.
    ///
    /// Ocean and mountains are closed to everything but flyers; flyers pay 1
    /// everywhere.  Otherwise the cost starts at 1, plus 1 for a hill unless
    /// the unit is a hill walker, plus 1 for forest or jungle unless it is a
    /// forest walker.
    pub fn base_movement_cost(self, traits: MovementTraits) -> i32 {
        if traits.flyer {
            return 1;
        }
        if matches!(self.elevation, Elevation::Ocean | Elevation::Mountain) {
            return IMPASSABLE_RAW;
        }
        let mut cost = 1;
        if self.elevation == Elevation::Hill && !traits.hill_walker {
            cost += 1;
        }
        if matches!(self.feature, Feature::Forest | Feature::Jungle) && !traits.forest_walker {
            cost += 1;
        }
        cost
    }
}

/// Movement abilities that change what terrain costs a unit.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementTraits {
    pub hill_walker:   bool,
    pub forest_walker: bool,
    pub flyer:         bool,
}

impl MovementTraits {
    /// A plain foot unit with no terrain bonuses.
    pub const FOOT: MovementTraits = MovementTraits {
        hill_walker:   false,
        forest_walker: false,
        flyer:         false,
    };
}
