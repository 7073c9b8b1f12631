use hm_core::{TileId, UnitId};
use hm_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("unit {0} not found")]
    UnitNotFound(UnitId),

    #[error("movement must be in 1..={max} (got {0})", max = hm_core::MAX_MOVEMENT)]
    InvalidMovement(u32),

    #[error("tile {0} is not on the map")]
    TileNotFound(TileId),

    #[error("route for unit {unit} starts at {route_start:?} but the unit stands on {unit_tile}")]
    RouteMismatch {
        unit:        UnitId,
        unit_tile:   TileId,
        route_start: Option<TileId>,
    },

    #[error("route for unit {unit} jumps from {from} to {to}, which are not neighbours on the map")]
    RouteNotContiguous {
        unit: UnitId,
        from: TileId,
        to:   TileId,
    },

    #[error("routing failed: {0}")]
    Routing(#[from] SpatialError),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
