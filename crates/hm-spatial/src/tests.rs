//! Unit tests for hm-spatial.
//!
//! All tests use hand-built maps and a simple additive test unit so they do
//! not depend on the turn allocator in `hm-mobility`.

#[cfg(test)]
mod helpers {
    use hm_core::{HexCoord, IMPASSABLE_TURNS, MovementTraits, Terrain, TileId};

    use crate::{HexMap, HexMapBuilder, PathUnit};

    /// A unit whose cumulative cost is simply `so_far + min(1, raw / movement)`.
    pub struct Walker {
        pub movement: u32,
        pub traits:   MovementTraits,
    }

    impl Walker {
        pub fn new(movement: u32) -> Self {
            Self { movement, traits: MovementTraits::FOOT }
        }
    }

    impl PathUnit for Walker {
        fn movement(&self) -> u32 {
            self.movement
        }

        fn movement_remaining(&self) -> f64 {
            self.movement as f64
        }

        fn movement_cost_to_enter(&self, terrain: &Terrain) -> i32 {
            terrain.base_movement_cost(self.traits)
        }

        fn aggregate_turns_to_enter(&self, terrain: &Terrain, turns_so_far: f64) -> f64 {
            let raw = self.movement_cost_to_enter(terrain);
            if raw < 0 {
                return IMPASSABLE_TURNS;
            }
            turns_so_far + (raw as f64 / self.movement as f64).min(1.0)
        }
    }

    /// 5×5 flat map with optional mountains.
    pub fn map_with_mountains(mountains: &[(i32, i32)]) -> HexMap {
        let mut b = HexMapBuilder::new(5, 5);
        for &(q, r) in mountains {
            b.set_terrain(HexCoord::new(q, r), Terrain::MOUNTAIN).unwrap();
        }
        b.build().unwrap()
    }

    pub fn at(map: &HexMap, q: i32, r: i32) -> TileId {
        map.tile_at(HexCoord::new(q, r)).unwrap()
    }

    pub fn tile_distance(map: &HexMap) -> impl Fn(TileId, TileId) -> f64 + '_ {
        move |a, b| map.distance(a, b) as f64
    }
}

// ── Frontier ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod frontier {
    use crate::Frontier;

    #[test]
    fn extracts_in_priority_order() {
        let mut f = Frontier::new();
        f.insert('c', 3.0);
        f.insert('a', 1.0);
        f.insert('d', 4.0);
        f.insert('b', 2.0);
        assert_eq!(f.len(), 4);
        let order: Vec<char> = std::iter::from_fn(|| f.extract_min()).collect();
        assert_eq!(order, vec!['a', 'b', 'c', 'd']);
        assert!(f.is_empty());
    }

    #[test]
    fn decrease_key_moves_item_forward() {
        let mut f = Frontier::new();
        f.insert(1u32, 5.0);
        f.insert(2u32, 3.0);
        f.insert(3u32, 4.0);
        assert!(f.insert_or_update(1, 0.5));
        assert_eq!(f.priority_of(1), Some(0.5));
        assert_eq!(f.extract_min(), Some(1));
        assert_eq!(f.extract_min(), Some(2));
    }

    #[test]
    fn worse_priority_is_ignored() {
        let mut f = Frontier::new();
        f.insert(7u32, 2.0);
        assert!(!f.insert_or_update(7, 9.0));
        assert!(!f.insert_or_update(7, 2.0));
        assert_eq!(f.priority_of(7), Some(2.0));
        assert_eq!(f.len(), 1);
    }

    #[test]
    fn contains_tracks_membership() {
        let mut f = Frontier::new();
        assert!(!f.contains(1u8));
        f.insert_or_update(1u8, 1.0);
        assert!(f.contains(1u8));
        f.extract_min();
        assert!(!f.contains(1u8));
        assert_eq!(f.priority_of(1u8), None);
    }

    #[test]
    fn equal_priorities_extract_first_inserted_first() {
        let mut f = Frontier::new();
        for item in [10u32, 20, 30, 40, 50] {
            f.insert(item, 1.0);
        }
        let order: Vec<u32> = std::iter::from_fn(|| f.extract_min()).collect();
        assert_eq!(order, vec![10, 20, 30, 40, 50]);
    }

    #[test]
    fn many_items_stay_sorted() {
        let mut f = Frontier::new();
        // Deterministic scramble of 0..200.
        for i in 0..200u32 {
            f.insert((i * 73) % 200, ((i * 73) % 200) as f64);
        }
        // Lower a few keys below everything else.
        f.insert_or_update(150, -3.0);
        f.insert_or_update(99, -2.0);
        let first: Vec<u32> = (0..3).filter_map(|_| f.extract_min()).collect();
        assert_eq!(first, vec![150, 99, 0]);

        let mut last = f64::NEG_INFINITY;
        while let Some((_, p)) = f.extract_min_with_priority() {
            assert!(p >= last);
            last = p;
        }
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use crate::Route;

    fn sample() -> Route<u32> {
        Route::from_steps([(0, 0.0), (1, 0.5), (2, 1.0), (3, 1.5), (4, 2.0)])
    }

    #[test]
    fn accessors() {
        let r = sample();
        assert_eq!(r.len(), 5);
        assert_eq!(r.steps(), 4);
        assert_eq!(r.start(), Some(0));
        assert_eq!(r.destination(), Some(4));
        assert_eq!(r.turns_to(3), Some(1.5));
        assert_eq!(r.turns_to(9), None);
        assert_eq!(r.total_turns(), 2.0);
        assert_eq!(r.position(2), Some(2));
    }

    #[test]
    fn turns_until_reached_rounds_up() {
        let r = sample();
        assert_eq!(r.turns_until_reached(0), Some(0));
        assert_eq!(r.turns_until_reached(1), Some(1));
        assert_eq!(r.turns_until_reached(2), Some(1));
        assert_eq!(r.turns_until_reached(3), Some(2));
    }

    #[test]
    fn empty_route() {
        let r: Route<u32> = Route::empty();
        assert!(r.is_empty());
        assert_eq!(r.steps(), 0);
        assert_eq!(r.start(), None);
        assert_eq!(r.total_turns(), 0.0);
    }

    #[test]
    fn suffix_keeps_recorded_costs() {
        let r = sample();
        let rest = r.suffix_from(2);
        assert_eq!(rest.tiles(), &[2, 3, 4]);
        assert_eq!(rest.turns_to(4), Some(2.0));
        assert!(r.suffix_from(5).is_empty());
    }

    #[test]
    fn shift_only_touches_tiles_ahead() {
        let mut r = sample();
        r.shift_turns_after(1, 1.0);
        let costs: Vec<f64> = r.iter().map(|(_, t)| t).collect();
        assert_eq!(costs, vec![0.0, 0.5, 0.0, 0.5, 1.0]);
    }
}

// ── HexMap ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod map {
    use hm_core::{HexCoord, Terrain, TileId};

    use super::helpers::{Walker, at};
    use crate::{HexMapBuilder, SpatialError, TileGraph};

    fn neighbors_of(map: &crate::HexMap, tile: TileId) -> Vec<TileId> {
        let mut buf = Vec::new();
        TileGraph::<Walker>::neighbors(map, tile, &mut buf);
        buf
    }

    #[test]
    fn builder_rejects_bad_input() {
        assert!(matches!(
            HexMapBuilder::new(0, 4).build(),
            Err(SpatialError::BadDimensions { .. })
        ));
        let mut b = HexMapBuilder::new(3, 3);
        assert!(matches!(
            b.set_terrain(HexCoord::new(3, 0), Terrain::HILL),
            Err(SpatialError::OffMap(_))
        ));
    }

    #[test]
    fn coordinates_roundtrip() {
        let map = HexMapBuilder::new(6, 4).build().unwrap();
        assert_eq!(map.tile_count(), 24);
        for tile in map.tiles() {
            assert_eq!(map.tile_at(map.coord(tile)), Some(tile));
        }
        assert_eq!(map.tile_at(HexCoord::new(6, 0)), None);
        assert_eq!(map.tile_at(HexCoord::new(0, -1)), None);
    }

    #[test]
    fn interior_tile_has_six_neighbors_corner_fewer() {
        let map = HexMapBuilder::new(5, 5).build().unwrap();
        assert_eq!(neighbors_of(&map, at(&map, 2, 2)).len(), 6);
        // (0, 0): only (1, 0) and (0, 1) exist.
        assert_eq!(neighbors_of(&map, at(&map, 0, 0)).len(), 2);
    }

    #[test]
    fn wrapping_map_links_east_and_west_edges() {
        let map = HexMapBuilder::new(6, 3).wrap_east_west(true).build().unwrap();
        let west = at(&map, 0, 1);
        let east = at(&map, 5, 1);
        assert!(neighbors_of(&map, west).contains(&east));
        assert_eq!(map.distance(west, east), 1);
        assert_eq!(map.tile_at(HexCoord::new(-1, 1)), Some(east));
    }

    #[test]
    fn terrain_can_be_replaced() {
        let mut map = HexMapBuilder::new(3, 3).fill(Terrain::FOREST).build().unwrap();
        let t = at(&map, 1, 1);
        assert_eq!(map.terrain(t), Some(&Terrain::FOREST));
        map.set_terrain(t, Terrain::HILL).unwrap();
        assert_eq!(map.terrain(t), Some(&Terrain::HILL));
        assert!(map.set_terrain(TileId::INVALID, Terrain::HILL).is_err());
    }
}

// ── A* ────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod astar {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use hm_core::{HexCoord, Terrain, TileId};

    use super::helpers::{Walker, at, map_with_mountains, tile_distance};
    use crate::{AstarPathfinder, HexMap, HexMapBuilder, Pathfinder, Route, SpatialError, TileGraph, find_path};

    fn assert_well_formed(map: &HexMap, route: &Route<TileId>, start: TileId, dest: TileId) {
        assert_eq!(route.start(), Some(start));
        assert_eq!(route.destination(), Some(dest));
        assert_eq!(route.turns_to(start), Some(0.0));
        let tiles = route.tiles();
        for pair in tiles.windows(2) {
            assert_eq!(map.distance(pair[0], pair[1]), 1, "{:?} not adjacent", pair);
        }
        let costs: Vec<f64> = route.iter().map(|(_, t)| t).collect();
        for pair in costs.windows(2) {
            assert!(pair[1] >= pair[0], "costs decrease: {costs:?}");
        }
        for &t in &tiles[1..] {
            assert_ne!(map.terrain(t), Some(&Terrain::MOUNTAIN));
        }
    }

    #[test]
    fn start_equals_destination() {
        let map = map_with_mountains(&[]);
        let s = at(&map, 2, 2);
        let route = find_path(&map, &Walker::new(2), s, s, tile_distance(&map)).unwrap();
        assert_eq!(route.tiles(), &[s]);
        assert_eq!(route.turns_to(s), Some(0.0));
    }

    #[test]
    fn straight_line_on_open_ground() {
        let map = map_with_mountains(&[]);
        let (s, d) = (at(&map, 0, 2), at(&map, 4, 2));
        let route = find_path(&map, &Walker::new(2), s, d, map.turn_heuristic(0.5)).unwrap();
        assert_well_formed(&map, &route, s, d);
        assert_eq!(route.steps(), 4);
        assert!((route.total_turns() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn routes_around_impassable_tile() {
        let map = map_with_mountains(&[(2, 2)]);
        let (s, d) = (at(&map, 0, 2), at(&map, 4, 2));
        let route = find_path(&map, &Walker::new(1), s, d, tile_distance(&map)).unwrap();
        assert_well_formed(&map, &route, s, d);
        assert!(!route.contains(at(&map, 2, 2)));
        // The only 4-step route runs straight through the mountain.
        assert_eq!(route.steps(), 5);
        assert!((route.total_turns() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn constant_heuristic_offset_keeps_optimum() {
        // Every open tile carries the same offset, so expansion order and
        // route cost match the blind search.
        let map = map_with_mountains(&[(2, 2), (2, 1)]);
        let (s, d) = (at(&map, 0, 2), at(&map, 4, 2));
        let walker = Walker::new(1);
        let offset = find_path(&map, &walker, s, d, |_, _| 100.0).unwrap();
        let blind = find_path(&map, &walker, s, d, |_, _| 0.0).unwrap();
        assert_well_formed(&map, &offset, s, d);
        assert_eq!(offset.tiles(), blind.tiles());
        assert_eq!(offset.total_turns(), blind.total_turns());
    }

    #[test]
    fn walled_in_destination_is_unreachable_not_an_error() {
        let ring = [(3, 2), (3, 1), (2, 1), (1, 2), (1, 3), (2, 3)];
        let map = map_with_mountains(&ring);
        let route = find_path(&map, &Walker::new(2), at(&map, 0, 0), at(&map, 2, 2), tile_distance(&map))
            .unwrap();
        assert!(route.is_empty());
    }

    #[test]
    fn unknown_tiles_are_invalid_arguments() {
        let map = map_with_mountains(&[]);
        let w = Walker::new(2);
        let h = tile_distance(&map);
        assert!(matches!(
            find_path(&map, &w, TileId::INVALID, TileId(0), &h),
            Err(SpatialError::InvalidArgument(_))
        ));
        assert!(matches!(
            AstarPathfinder.find_path(&map, &w, TileId(0), TileId(999), &h),
            Err(SpatialError::InvalidArgument(_))
        ));
    }

    #[test]
    fn wrap_around_shortcut_is_used() {
        let map = HexMapBuilder::new(10, 3).wrap_east_west(true).build().unwrap();
        let (s, d) = (at(&map, 0, 1), at(&map, 9, 1));
        let route = find_path(&map, &Walker::new(1), s, d, tile_distance(&map)).unwrap();
        assert_eq!(route.tiles(), &[s, d]);
    }

    #[test]
    fn expensive_terrain_is_avoided_when_cheaper_detour_exists() {
        // A line of forest across the direct route; hills flank it.
        let mut b = HexMapBuilder::new(5, 3);
        b.set_terrain(HexCoord::new(2, 1), Terrain::new(hm_core::Elevation::Hill, hm_core::Feature::Forest))
            .unwrap();
        let map = b.build().unwrap();
        let (s, d) = (at(&map, 1, 1), at(&map, 3, 1));
        // Through (2,1) costs 3 + 1 points; around costs 1 + 1 + 1.
        let route = find_path(&map, &Walker::new(4), s, d, map.turn_heuristic(0.25)).unwrap();
        assert_well_formed(&map, &route, s, d);
        assert!(!route.contains(at(&map, 2, 1)));
        assert!((route.total_turns() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn uniform_cost_view_counts_steps() {
        let mut b = HexMapBuilder::new(5, 5).fill(Terrain::FOREST);
        b.set_terrain(HexCoord::new(2, 2), Terrain::MOUNTAIN).unwrap();
        let map = b.build().unwrap();
        let (s, d) = (at(&map, 0, 2), at(&map, 4, 2));
        let route = find_path(&map.uniform_cost(), &Walker::new(1), s, d, tile_distance(&map)).unwrap();
        assert_eq!(route.total_turns(), 5.0);
        assert!(!route.contains(at(&map, 2, 2)));
    }

    /// A 1-D graph over `u8` tiles whose entry cost jumps to the next whole
    /// turn whenever a 0.6-turn step would cross a turn boundary.
    struct TurnLine(u8);

    impl TileGraph<()> for TurnLine {
        type Tile = u8;

        fn contains(&self, tile: u8) -> bool {
            tile < self.0
        }

        fn neighbors(&self, tile: u8, buf: &mut Vec<u8>) {
            if tile > 0 {
                buf.push(tile - 1);
            }
            if tile + 1 < self.0 {
                buf.push(tile + 1);
            }
        }

        fn aggregate_cost_to_enter(&self, so_far: f64, _source: u8, _tile: u8, _unit: &()) -> f64 {
            let whole = so_far.floor();
            if so_far - whole + 0.6 > 1.0 { whole + 1.6 } else { so_far + 0.6 }
        }
    }

    #[test]
    fn engine_uses_non_additive_costs_verbatim() {
        let route = find_path(&TurnLine(4), &(), 0u8, 3u8, |_, _| 0.0).unwrap();
        assert_eq!(route.tiles(), &[0, 1, 2, 3]);
        let costs: Vec<f64> = route.iter().map(|(_, t)| t).collect();
        assert_eq!(costs.len(), 4);
        for (got, want) in costs.iter().zip([0.0, 0.6, 1.6, 2.6]) {
            assert!((got - want).abs() < 1e-9, "{costs:?}");
        }
    }

    #[test]
    fn random_maps_satisfy_route_invariants() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        for _ in 0..8 {
            let mut b = HexMapBuilder::new(12, 8);
            for q in 0..12 {
                for r in 0..8 {
                    let t = match rng.gen_range(0..10) {
                        0..=4 => Terrain::FLAT,
                        5 | 6 => Terrain::HILL,
                        7 | 8 => Terrain::FOREST,
                        _ => Terrain::MOUNTAIN,
                    };
                    b.set_terrain(HexCoord::new(q, r), t).unwrap();
                }
            }
            let map = b.build().unwrap();
            let walker = Walker::new(2);

            for _ in 0..25 {
                let s = TileId(rng.gen_range(0..map.tile_count() as u32));
                let d = TileId(rng.gen_range(0..map.tile_count() as u32));
                let guided = find_path(&map, &walker, s, d, map.turn_heuristic(0.5)).unwrap();
                let blind = find_path(&map, &walker, s, d, |_, _| 0.0).unwrap();

                assert_eq!(guided.is_empty(), blind.is_empty());
                if guided.is_empty() {
                    continue;
                }
                assert_well_formed(&map, &guided, s, d);
                // An admissible heuristic must not change the optimum.
                assert!((guided.total_turns() - blind.total_turns()).abs() < 1e-9);
            }
        }
    }
}
