//! Common types: shot results and the crate error enum.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coord::Coord;
use crate::ship::ShipKind;

/// Result of a shot applied to a defence board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotResult {
    /// Shot landed on open water.
    Miss,
    /// Shot hit a ship segment that was still afloat.
    Hit,
    /// Shot drained the last segment of this ship.
    Sunk(ShipKind),
}

impl ShotResult {
    /// `true` for `Hit` and `Sunk`.
    pub fn is_hit(self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

impl fmt::Display for ShotResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotResult::Miss => f.write_str("miss"),
            ShotResult::Hit => f.write_str("hit"),
            ShotResult::Sunk(kind) => write!(f, "sunk {}", kind.name()),
        }
    }
}

/// Errors surfaced by the engine. All of them are recoverable by soliciting
/// another shot; caller bugs are asserted instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// Malformed or out-of-range coordinate or label.
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
    /// Shot at a cell that was already resolved.
    #[error("shot already called at {0}")]
    InvalidShot(Coord),
    /// Rejected ship layout.
    #[error("invalid ship placement")]
    InvalidShipPlacement,
}
