//! Error types for Plaza.
//!
//! The interaction core (feed, profile, navigation) is total and has no
//! error channel. Errors only arise at the edges: reading the seed document
//! and parsing the command line.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::PostId;

/// Failures while loading or validating seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed document is not valid JSON for the expected shape.
    #[error("invalid seed document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two posts share the same id.
    #[error("duplicate post id {0}")]
    DuplicatePostId(PostId),

    /// A post is marked liked but carries zero likes, so unliking it would
    /// underflow the counter.
    #[error("post {0} is liked but has no likes")]
    LikedWithoutLikes(PostId),

    /// An unliked post already holds the largest representable count, so
    /// liking it would overflow the counter.
    #[error("post {0} has too many likes to be liked again")]
    LikesOverflow(PostId),
}

/// Invalid command-line usage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    /// A flag that takes a value was given none.
    #[error("{0} requires a value")]
    MissingValue(String),

    /// An argument we do not recognise.
    #[error("unknown argument: {0}")]
    Unknown(String),
}
