//! Error handling for renoplan.
//!
//! Provides the error type shared across the floorplan engine and its
//! persistence surface. All variants use `thiserror` for ergonomic
//! error handling; fallible operations return [`Result`].

use std::io;
use thiserror::Error;

/// Errors that can occur while building, editing, or persisting a floor plan.
#[derive(Error, Debug)]
pub enum Error {
    /// A floor id did not match any floor in the plan.
    #[error("Unknown floor: {0}")]
    UnknownFloor(String),

    /// A room id did not match any room on the given floor.
    #[error("Unknown room '{room}' on floor '{floor}'")]
    UnknownRoom {
        /// The floor that was searched.
        floor: String,
        /// The room id that was not found.
        room: String,
    },

    /// A wall side string was not one of top/right/bottom/left.
    #[error("Unknown wall side: {0}")]
    UnknownSide(String),

    /// A room failed validation at the deserialization boundary.
    #[error("Invalid room '{id}': {reason}")]
    InvalidRoom {
        /// The offending room id.
        id: String,
        /// Why the room was rejected.
        reason: String,
    },

    /// An opening failed validation at the deserialization boundary.
    #[error("Invalid opening '{id}': {reason}")]
    InvalidOpening {
        /// The offending opening id.
        id: String,
        /// Why the opening was rejected.
        reason: String,
    },

    /// No wall is currently selected in the editor.
    #[error("No wall selected")]
    NoSelection,

    /// I/O error during plan persistence.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for renoplan operations.
pub type Result<T> = std::result::Result<T, Error>;
