use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Distance, Error, LineId, PathFinderOptions, Station, StationId};

/// Description of a whole network: stations first, then lines whose
/// sections refer to those stations by id.
///
/// ```json
/// {
///   "stations": [{ "id": 1, "name": "Gangnam" }, { "id": 2, "name": "Yangjae" }],
///   "lines": [{
///     "id": 1, "name": "Sinbundang", "color": "red",
///     "sections": [{ "up_station": 1, "down_station": 2, "distance": 10 }]
///   }],
///   "options": { "direction": "undirected" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub stations: Vec<Station>,
    #[serde(default)]
    pub lines: Vec<LineConfig>,
    #[serde(default)]
    pub options: PathFinderOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineConfig {
    pub id: LineId,
    pub name: String,
    pub color: String,
    /// Applied in order, each one through the regular insertion rules
    #[serde(default)]
    pub sections: Vec<SectionConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionConfig {
    pub up_station: StationId,
    pub down_station: StationId,
    pub distance: Distance,
}

impl NetworkConfig {
    /// # Errors
    ///
    /// Returns [`Error::JsonError`] for malformed input.
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    ///
    /// Returns [`Error::IoError`] if the file cannot be read and
    /// [`Error::JsonError`] for malformed content.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
