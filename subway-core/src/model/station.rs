use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::StationId;

/// Network vertex shared by every line passing through it.
///
/// Two stations are the same station when their ids match; the name is
/// display data only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    id: StationId,
    name: String,
}

impl Station {
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
