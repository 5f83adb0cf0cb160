/// Track domain type
use crate::types::TrackId;
use serde::{Deserialize, Serialize};

/// A playable media item as listed by the catalog
///
/// Field names on the wire follow the catalog listing (`_id`, `desc`,
/// `audioUrl`). Tracks are immutable once loaded and are shared as
/// `Arc<Track>` rather than copied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    #[serde(rename = "_id")]
    pub id: TrackId,

    /// Display name
    pub name: String,

    /// Short description shown under the name
    #[serde(rename = "desc", default)]
    pub description: String,

    /// Artwork reference
    #[serde(default)]
    pub image: String,

    /// Audio source locator handed to the playback engine
    #[serde(rename = "audioUrl")]
    pub audio_url: String,

    /// Album name this track belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
}

impl Track {
    /// Create a track with minimal metadata
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        audio_url: impl Into<String>,
    ) -> Self {
        Self {
            id: TrackId::new(id),
            name: name.into(),
            description: String::new(),
            image: String::new(),
            audio_url: audio_url.into(),
            album: None,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach an album name
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_catalog_listing_entry() {
        let json = r#"{
            "_id": "65f1c0",
            "name": "Song One",
            "desc": "Opening track",
            "image": "https://img.example.com/1.jpg",
            "audioUrl": "https://cdn.example.com/1.mp3",
            "album": "Debut",
            "duration": "3:20",
            "__v": 0
        }"#;

        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.id, TrackId::new("65f1c0"));
        assert_eq!(track.description, "Opening track");
        assert_eq!(track.audio_url, "https://cdn.example.com/1.mp3");
        assert_eq!(track.album.as_deref(), Some("Debut"));
    }

    #[test]
    fn builders_fill_optional_metadata() {
        let track = Track::new("b1", "Harbor Lights", "b1.mp3")
            .with_description("Slow synth opener")
            .with_album("Night Drive");

        assert_eq!(track.description, "Slow synth opener");
        assert_eq!(track.album.as_deref(), Some("Night Drive"));

        let json = serde_json::to_value(&track).unwrap();
        assert_eq!(json["desc"], "Slow synth opener");
        assert_eq!(json["audioUrl"], "b1.mp3");
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"{"_id": "a", "name": "Bare", "audioUrl": "a.mp3"}"#;
        let track: Track = serde_json::from_str(json).unwrap();
        assert!(track.description.is_empty());
        assert!(track.image.is_empty());
        assert!(track.album.is_none());
    }
}
