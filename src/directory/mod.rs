//! Player Directory: the boundary between roster operations and the
//! `/players` REST endpoints.
//!
//! [`PlayerDirectory`] is the seam the roster view talks to;
//! [`HttpPlayerDirectory`] is the reqwest-backed implementation. There is no
//! caching and no retry: each call is a single request and its outcome is
//! returned as-is.

pub mod http;

use crate::{
    core::PlayerFilter,
    models::{Draft, Player, PlayerId},
    Result,
};
use serde::{Deserialize, Serialize};

pub use http::HttpPlayerDirectory;

/// Server confirmation for a create or update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Saved {
    pub message: String,
    pub player: Player,
}

/// Server confirmation that carries only a message (delete).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct MessageEnvelope {
    pub message: String,
}

/// Roster operations against the players API.
///
/// Failures are reported as [`crate::RosterError::Network`],
/// [`crate::RosterError::Api`] or [`crate::RosterError::NotFound`].
#[allow(async_fn_in_trait)]
pub trait PlayerDirectory {
    /// Players matching `filter`; unset filter fields place no constraint.
    async fn list(&self, filter: &PlayerFilter) -> Result<Vec<Player>>;

    async fn get(&self, id: PlayerId) -> Result<Player>;

    /// Create a player from `draft`. Any id on the draft is ignored.
    async fn create(&self, draft: &Draft) -> Result<Saved>;

    async fn update(&self, id: PlayerId, draft: &Draft) -> Result<Saved>;

    /// Delete a player, returning the server's confirmation message.
    async fn delete(&self, id: PlayerId) -> Result<String>;
}
