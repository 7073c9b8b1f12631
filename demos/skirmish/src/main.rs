//! skirmish — a small scripted battle for the hexmarch movement engine.
//!
//! Four units with different terrain abilities march across a seeded,
//! east-west wrapping hex map towards the same rally point.  Every move is
//! printed as it happens, followed by a per-unit summary.
//!
//! Usage:
//!
//! ```text
//! skirmish [config.json] [strict|lenient]
//! ```
//!
//! The optional JSON file holds a `SimConfig`; the optional second argument
//! overrides its movement policy.  Set `RUST_LOG=debug` to see routing.

mod map_gen;

use std::env;
use std::fs;

use anyhow::{Context, Result};

use hm_core::{HexCoord, MovementPolicy, MovementTraits, TileId, Turn, UnitId};
use hm_mobility::PositionChanged;
use hm_sim::{SimBuilder, SimConfig, SimObserver};
use hm_spatial::{AstarPathfinder, HexMap};

use map_gen::{build_map, render};

// ── Constants ─────────────────────────────────────────────────────────────────

const MAP_WIDTH:  u32 = 24;
const MAP_HEIGHT: u32 = 12;
const SEED:       u64 = 7;

const RALLY_POINT: HexCoord = HexCoord::new(18, 6);

/// `(name, start, movement, traits)`.
const ROSTER: [(&str, HexCoord, u32, MovementTraits); 4] = [
    ("infantry", HexCoord::new(2, 2), 2, MovementTraits::FOOT),
    ("ranger",   HexCoord::new(3, 9), 2, MovementTraits {
        hill_walker:   false,
        forest_walker: true,
        flyer:         false,
    }),
    ("scout",    HexCoord::new(1, 5), 3, MovementTraits {
        hill_walker:   true,
        forest_walker: false,
        flyer:         false,
    }),
    ("gryphon",  HexCoord::new(0, 0), 4, MovementTraits {
        hill_walker:   false,
        forest_walker: false,
        flyer:         true,
    }),
];

// ── Observer ──────────────────────────────────────────────────────────────────

struct Narrator<'a> {
    map:      &'a HexMap,
    arrivals: Vec<(UnitId, Turn)>,
}

impl SimObserver for Narrator<'_> {
    fn on_turn_start(&mut self, turn: Turn) {
        println!("── {turn} ──");
    }

    fn on_unit_moved(&mut self, _turn: Turn, e: &PositionChanged) {
        println!(
            "  {:<8} {} -> {}",
            unit_name(e.unit),
            self.map.coord(e.from),
            self.map.coord(e.to)
        );
    }

    fn on_route_complete(&mut self, turn: Turn, unit: UnitId, _tile: TileId) {
        println!("  {:<8} reached the rally point", unit_name(unit));
        self.arrivals.push((unit, turn));
    }

    fn on_order_blocked(&mut self, _turn: Turn, unit: UnitId, _destination: TileId) {
        println!("  {:<8} is cut off and holds position", unit_name(unit));
    }
}

fn unit_name(unit: UnitId) -> &'static str {
    ROSTER.get(unit.index()).map_or("?", |u| u.0)
}

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config(args: &[String]) -> Result<SimConfig> {
    let mut config = match args.get(1) {
        Some(path) => {
            let text = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
            serde_json::from_str::<SimConfig>(&text).with_context(|| format!("parsing {path}"))?
        }
        None => SimConfig::default(),
    };
    if let Some(policy) = args.get(2) {
        config.movement.policy = policy.parse::<MovementPolicy>()?;
    }
    config.validate()?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let args: Vec<String> = env::args().collect();
    let config = load_config(&args)?;

    println!("=== skirmish — hexmarch movement engine ===");
    println!(
        "Map: {MAP_WIDTH}x{MAP_HEIGHT} (wraps east-west)  |  Seed: {SEED}  |  Policy: {}",
        config.movement.policy
    );
    println!();

    // 1. Map, with every start tile and the rally point kept clear.
    let mut clear: Vec<HexCoord> = ROSTER.iter().map(|u| u.1).collect();
    clear.push(RALLY_POINT);
    let map = build_map(MAP_WIDTH, MAP_HEIGHT, SEED, &clear)?;
    print!("{}", render(&map));
    println!();

    let rally = map
        .tile_at(RALLY_POINT)
        .context("rally point is off the map")?;

    // 2. Sim with the roster placed.
    let mut builder = SimBuilder::new(config, map.clone(), AstarPathfinder);
    for (_, start, movement, traits) in ROSTER {
        let tile = map
            .tile_at(start)
            .with_context(|| format!("start {start} is off the map"))?;
        builder = builder.unit_with_movement(tile, movement, traits);
    }
    let mut sim = builder.build()?;

    // 3. Orders, with the planned turn count for each unit.
    for (i, (name, ..)) in ROSTER.iter().enumerate() {
        let unit = UnitId::from_index(i);
        if !sim.order_move(unit, rally)? {
            println!("{name:<8} has no route to {RALLY_POINT}");
            continue;
        }
        let route = sim
            .mobility
            .remaining_route(unit)?
            .context("route vanished after planning")?;
        println!(
            "{name:<8} {} steps, {} turns away ({:.2} turns of movement)",
            route.steps(),
            route.turns_until_reached(rally).unwrap_or(0),
            route.total_turns()
        );
    }
    println!();

    // 4. Run.
    let mut narrator = Narrator { map: &map, arrivals: Vec::new() };
    let stopped = sim.run(&mut narrator)?;
    log::info!("skirmish over on {stopped}, {} orders outstanding", sim.orders.len());

    println!();
    println!("=== Summary ({stopped}) ===");
    for (unit, turn) in &narrator.arrivals {
        println!("{:<8} arrived on {turn}", unit_name(*unit));
    }
    for unit in sim.orders.keys() {
        let tile = sim.mobility.tile_of(*unit)?;
        println!("{:<8} still marching at {}", unit_name(*unit), map.coord(tile));
    }

    Ok(())
}
