//! Domain types for the media library

mod album;
mod ids;
mod track;

pub use album::Album;
pub use ids::{AlbumId, TrackId};
pub use track::Track;
