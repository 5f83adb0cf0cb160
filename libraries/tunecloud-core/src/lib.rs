//! TuneCloud Core
//!
//! Platform-agnostic domain types and the read-only catalog shared by the
//! playback controller and every host application.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Album` and their identifiers
//! - **Catalog**: the ordered, read-only track listing the controller navigates
//! - **Error Handling**: `CoreError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use tunecloud_core::{Catalog, Track, TrackId};
//!
//! let catalog = Catalog::new(vec![
//!     Track::new("a", "Intro", "https://cdn.example.com/a.mp3"),
//!     Track::new("b", "Outro", "https://cdn.example.com/b.mp3"),
//! ])
//! .unwrap();
//!
//! assert_eq!(catalog.position_of(&TrackId::new("b")), Some(1));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod types;

pub use catalog::Catalog;
pub use error::{CoreError, Result};
pub use types::{Album, AlbumId, Track, TrackId};
