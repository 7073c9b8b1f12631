//! Unit tests for hm-core primitives.

#[cfg(test)]
mod ids {
    use crate::{TileId, UnitId};

    #[test]
    fn index_roundtrip() {
        let id = TileId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(TileId::from_index(42), id);
    }

    #[test]
    fn invalid_sentinels() {
        assert_eq!(TileId::INVALID.0, u32::MAX);
        assert_eq!(UnitId::default(), UnitId::INVALID);
        assert!(!TileId::INVALID.is_valid());
        assert!(TileId(0).is_valid());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn from_index_rejects_sentinel() {
        let _ = UnitId::from_index(u32::MAX as usize);
    }

    #[test]
    fn display() {
        assert_eq!(UnitId(7).to_string(), "UnitId(7)");
    }
}

#[cfg(test)]
mod hex {
    use crate::HexCoord;

    #[test]
    fn cube_coordinate_sums_to_zero() {
        let c = HexCoord::new(3, -5);
        assert_eq!(c.q + c.r + c.s(), 0);
    }

    #[test]
    fn neighbors_are_distance_one() {
        let c = HexCoord::new(2, 2);
        for n in c.neighbors() {
            assert_eq!(c.distance(n), 1, "{n} should be adjacent to {c}");
        }
    }

    #[test]
    fn distance_uses_largest_cube_delta() {
        let a = HexCoord::new(0, 0);
        assert_eq!(a.distance(HexCoord::new(3, 0)), 3);
        assert_eq!(a.distance(HexCoord::new(2, -4)), 4);
        // (2, 1): dq = 2, dr = 1, ds = 3
        assert_eq!(a.distance(HexCoord::new(2, 1)), 3);
    }

    #[test]
    fn wrapped_distance_goes_the_short_way_round() {
        let west_edge = HexCoord::new(0, 2);
        let east_edge = HexCoord::new(9, 2);
        assert_eq!(west_edge.distance(east_edge), 9);
        assert_eq!(west_edge.wrapped_distance(east_edge, Some(10)), 1);
        assert_eq!(west_edge.wrapped_distance(east_edge, None), 9);
    }

    #[test]
    fn wrapped_distance_never_exceeds_direct() {
        let a = HexCoord::new(1, 1);
        for q in 0..12 {
            for r in 0..6 {
                let b = HexCoord::new(q, r);
                assert!(a.wrapped_distance(b, Some(12)) <= a.distance(b));
            }
        }
    }
}

#[cfg(test)]
mod terrain {
    use crate::{Elevation, Feature, IMPASSABLE_RAW, MovementTraits, Terrain};

    #[test]
    fn flat_costs_one() {
        assert_eq!(Terrain::FLAT.base_movement_cost(MovementTraits::FOOT), 1);
    }

    #[test]
    fn hills_and_forest_stack() {
        let wooded_hill = Terrain::new(Elevation::Hill, Feature::Forest);
        assert_eq!(wooded_hill.base_movement_cost(MovementTraits::FOOT), 3);

        let ranger = MovementTraits { forest_walker: true, ..MovementTraits::FOOT };
        assert_eq!(wooded_hill.base_movement_cost(ranger), 2);

        let mountaineer = MovementTraits { hill_walker: true, forest_walker: true, flyer: false };
        assert_eq!(wooded_hill.base_movement_cost(mountaineer), 1);
    }

    #[test]
    fn mountains_and_ocean_block_walkers() {
        assert_eq!(Terrain::MOUNTAIN.base_movement_cost(MovementTraits::FOOT), IMPASSABLE_RAW);
        assert_eq!(Terrain::OCEAN.base_movement_cost(MovementTraits::FOOT), IMPASSABLE_RAW);
    }

    #[test]
    fn flyers_ignore_terrain() {
        let flyer = MovementTraits { flyer: true, ..MovementTraits::FOOT };
        assert_eq!(Terrain::MOUNTAIN.base_movement_cost(flyer), 1);
        assert_eq!(Terrain::new(Elevation::Hill, Feature::Jungle).base_movement_cost(flyer), 1);
    }
}

#[cfg(test)]
mod turns {
    use crate::{Turn, TurnClock, split_turns};

    #[test]
    fn split_keeps_ordinary_remainders() {
        let (whole, rem) = split_turns(2.5);
        assert_eq!(whole, 2.0);
        assert!((rem - 0.5).abs() < 1e-12);
    }

    #[test]
    fn split_snaps_near_zero() {
        assert_eq!(split_turns(3.004), (3.0, 0.0));
        assert_eq!(split_turns(0.0), (0.0, 0.0));
    }

    #[test]
    fn split_rolls_over_near_one() {
        // 0.995 must become one clean whole turn, not 0 + 0.995.
        assert_eq!(split_turns(0.995), (1.0, 0.0));
        assert_eq!(split_turns(1.0 - 1e-12), (1.0, 0.0));
    }

    #[test]
    fn split_absorbs_accumulated_thirds() {
        let mut total = 0.0;
        for _ in 0..3 {
            total += 1.0 / 3.0;
        }
        assert_eq!(split_turns(total), (1.0, 0.0));
    }

    #[test]
    fn clock_advances() {
        let mut clock = TurnClock::new();
        assert_eq!(clock.current, Turn::ZERO);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current, Turn(2));
        assert_eq!(clock.elapsed(), 2);
        assert_eq!(clock.current.to_string(), "turn 2");
    }
}

#[cfg(test)]
mod policy {
    use crate::{CoreError, DRIFT_SNAP, MAX_MOVEMENT, MovementConfig, MovementPolicy};

    #[test]
    fn default_is_strict() {
        assert_eq!(MovementPolicy::default(), MovementPolicy::Strict);
        assert_eq!(MovementConfig::default().policy, MovementPolicy::Strict);
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("Lenient".parse::<MovementPolicy>().unwrap(), MovementPolicy::Lenient);
        assert_eq!(" strict ".parse::<MovementPolicy>().unwrap(), MovementPolicy::Strict);
        assert!("civ5".parse::<MovementPolicy>().is_err());
        assert_eq!(MovementPolicy::Lenient.to_string(), "lenient");
    }

    #[test]
    fn zero_default_movement_rejected() {
        let mut cfg = MovementConfig::default();
        assert!(cfg.validate().is_ok());
        cfg.default_movement = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_bounds_movement_by_drift_resolution() {
        let mut cfg = MovementConfig::default();
        cfg.default_movement = MAX_MOVEMENT;
        assert!(cfg.validate().is_ok());
        cfg.default_movement = MAX_MOVEMENT + 1;
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
        assert!(1.0 / (MAX_MOVEMENT as f64) > DRIFT_SNAP);
    }
}
