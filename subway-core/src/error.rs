use thiserror::Error;

use crate::{Distance, LineId, StationId};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid section stations: {0}")]
    InvalidSectionStations(String),
    #[error(
        "Insufficient line length: existing section is {existing}, inserted section is {inserted}"
    )]
    InsufficientLineLength {
        existing: Distance,
        inserted: Distance,
    },
    #[error("Cannot find the first section of the line")]
    NoFirstSegment,
    #[error("Station {0} is not the last station of the line")]
    InvalidRemoval(StationId),
    #[error("Cannot remove the only section of the line")]
    CannotRemoveOnlySegment,
    #[error("Stations {from} and {to} are not connected")]
    DisconnectedPath { from: StationId, to: StationId },
    #[error("Station not found: {0}")]
    StationNotFound(StationId),
    #[error("Line not found: {0}")]
    LineNotFound(LineId),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
