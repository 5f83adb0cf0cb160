/// Album domain type
use crate::types::AlbumId;
use serde::{Deserialize, Serialize};

/// Album as listed by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    /// Unique album identifier
    #[serde(rename = "_id")]
    pub id: AlbumId,

    /// Album name, matched against `Track::album`
    pub name: String,

    /// Short description
    #[serde(rename = "desc", default)]
    pub description: String,

    /// Cover artwork reference
    #[serde(default)]
    pub image: String,
}

impl Album {
    /// Create an album with minimal metadata
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: AlbumId::new(id),
            name: name.into(),
            description: String::new(),
            image: String::new(),
        }
    }
}
