//! Read-only track catalog
//!
//! The catalog is the ordered listing the playback controller navigates.
//! It is populated externally (catalog listing API, a local file, a test)
//! and never mutated afterwards: a refresh builds a new `Catalog`.

use crate::error::{CoreError, Result};
use crate::types::{Album, Track, TrackId};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// Ordered, read-only sequence of tracks plus the album listing
///
/// ```text
/// index:  0        1        2
///        [Track A][Track B][Track C]   <- navigation order (never filtered)
/// ```
///
/// Positions are not cached by callers: they re-resolve by identifier with
/// [`Catalog::position_of`] every time, so a refreshed catalog with a
/// different order is picked up transparently.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tracks: Vec<Arc<Track>>,
    albums: Vec<Album>,
}

/// Wire shape of a catalog listing
#[derive(Debug, Deserialize)]
struct CatalogListing {
    songs: Vec<Track>,
    #[serde(default)]
    albums: Vec<Album>,
}

impl Catalog {
    /// Build a catalog from tracks in navigation order
    ///
    /// Fails if two tracks share an identifier.
    pub fn new(tracks: Vec<Track>) -> Result<Self> {
        Self::with_albums(tracks, Vec::new())
    }

    /// Build a catalog from tracks and albums
    pub fn with_albums(tracks: Vec<Track>, albums: Vec<Album>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(tracks.len());
        for track in &tracks {
            if !seen.insert(track.id.clone()) {
                return Err(CoreError::DuplicateTrack(track.id.clone()));
            }
        }

        Ok(Self {
            tracks: tracks.into_iter().map(Arc::new).collect(),
            albums,
        })
    }

    /// Parse a `{ "songs": [...], "albums": [...] }` listing
    pub fn from_json(json: &str) -> Result<Self> {
        let listing: CatalogListing = serde_json::from_str(json)?;
        Self::with_albums(listing.songs, listing.albums)
    }

    /// Read and parse a listing file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the catalog has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Position of a track in navigation order (linear scan)
    pub fn position_of(&self, id: &TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| &t.id == id)
    }

    /// Look up a track by identifier
    pub fn get(&self, id: &TrackId) -> Option<&Arc<Track>> {
        self.tracks.iter().find(|t| &t.id == id)
    }

    /// Track at a navigation position
    pub fn track_at(&self, index: usize) -> Option<&Arc<Track>> {
        self.tracks.get(index)
    }

    /// First track in navigation order
    pub fn first(&self) -> Option<&Arc<Track>> {
        self.tracks.first()
    }

    /// All tracks in navigation order
    pub fn tracks(&self) -> &[Arc<Track>] {
        &self.tracks
    }

    /// All albums
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    /// Tracks belonging to the named album, in catalog order
    pub fn tracks_in_album(&self, album: &str) -> Vec<Arc<Track>> {
        self.tracks
            .iter()
            .filter(|t| t.album.as_deref() == Some(album))
            .cloned()
            .collect()
    }

    /// Tracks whose name contains `term` (case-insensitive)
    ///
    /// Presentation only: navigation always walks the unfiltered order.
    pub fn search_tracks(&self, term: &str) -> Vec<Arc<Track>> {
        let needle = term.to_lowercase();
        self.tracks
            .iter()
            .filter(|t| t.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Albums whose name contains `term` (case-insensitive)
    pub fn search_albums(&self, term: &str) -> Vec<&Album> {
        let needle = term.to_lowercase();
        self.albums
            .iter()
            .filter(|a| a.name.to_lowercase().contains(&needle))
            .collect()
    }
}
