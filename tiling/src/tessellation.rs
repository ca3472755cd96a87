use crate::error::TilingError;
use serde::{Deserialize, Serialize};

// One periodic tiling family: two translation vectors over the four-coordinate
// basis plus the seed offsets replicated at every translation. Consumed
// pre-parsed; whatever loads it from disk is not this crate's concern.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Tessellation {
    pub name: String,
    // single-character flags read by the selection collaborator:
    // 'N', 'C', 'F' mark a definition worth picking, 'B' excludes it
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(rename = "T1")]
    pub t1: [i32; 4],
    #[serde(rename = "T2")]
    pub t2: [i32; 4],
    pub seed: Vec<[i32; 4]>,
}

impl Tessellation {
    pub fn find<'a>(
        definitions: &'a [Tessellation],
        name: &str,
    ) -> Result<&'a Tessellation, TilingError> {
        definitions
            .iter()
            .find(|definition| definition.name == name)
            .ok_or_else(|| TilingError::UnknownTessellation(String::from(name)))
    }

    pub fn is_favored(&self) -> bool {
        match &self.tags {
            Some(tags) => {
                tags.contains(|c| c == 'N' || c == 'C' || c == 'F') && !tags.contains('B')
            }
            None => false,
        }
    }

    // favored returns the pool a random picker should draw from
    pub fn favored(definitions: &[Tessellation]) -> Vec<&Tessellation> {
        definitions
            .iter()
            .filter(|definition| definition.is_favored())
            .collect()
    }
}
