//! Seeded terrain generation for the skirmish map.

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use hm_core::{Elevation, Feature, HexCoord, Terrain};
use hm_spatial::{HexMap, HexMapBuilder};

/// Roll terrain for a `width × height` east-west wrapping map.
///
/// Tiles listed in `keep_clear` stay flat so units can always be placed.
pub fn build_map(width: u32, height: u32, seed: u64, keep_clear: &[HexCoord]) -> Result<HexMap> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut b = HexMapBuilder::new(width, height).wrap_east_west(true);

    for r in 0..height as i32 {
        for q in 0..width as i32 {
            let coord = HexCoord::new(q, r);
            if keep_clear.contains(&coord) {
                continue;
            }
            b.set_terrain(coord, roll(&mut rng))?;
        }
    }
    Ok(b.build()?)
}

fn roll(rng: &mut SmallRng) -> Terrain {
    match rng.gen_range(0..100) {
        0..55  => Terrain::FLAT,
        55..70 => Terrain::FOREST,
        70..82 => Terrain::HILL,
        82..88 => Terrain::new(Elevation::Hill, Feature::Forest),
        88..94 => Terrain::MOUNTAIN,
        _      => Terrain::OCEAN,
    }
}

/// One character per tile, odd rows indented so neighbours line up.
pub fn render(map: &HexMap) -> String {
    let mut out = String::new();
    for r in 0..map.height() as i32 {
        out.push_str(&" ".repeat(r as usize));
        for q in 0..map.width() as i32 {
            let glyph = map
                .tile_at(HexCoord::new(q, r))
                .and_then(|t| map.terrain(t))
                .map_or('?', |t| glyph(*t));
            out.push(glyph);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

fn glyph(t: Terrain) -> char {
    match (t.elevation, t.feature) {
        (Elevation::Ocean, _)              => '~',
        (Elevation::Mountain, _)           => '^',
        (Elevation::Hill, Feature::None)   => 'n',
        (Elevation::Hill, _)               => 'N',
        (Elevation::Flat, Feature::None)   => '.',
        (Elevation::Flat, _)               => 'f',
    }
}
