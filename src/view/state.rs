//! State and outcome types for the roster view.

use crate::{
    core::PlayerFilter,
    models::{DraftIssue, Player},
};
use std::sync::Arc;

/// Whether a list request for the current filter is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
}

/// Sub-state of the create/edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Closed,
    /// Editing a blank draft that will be created.
    Adding,
    /// Editing a draft copied from an existing player.
    Editing,
}

impl FormState {
    pub fn is_open(&self) -> bool {
        !matches!(self, FormState::Closed)
    }
}

/// Sub-state of the detail panel.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    NoSelection,
    Viewing(Player),
}

/// Which admin controls a presentation layer should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub can_add: bool,
    pub can_edit: bool,
    pub can_delete: bool,
}

impl Controls {
    pub fn for_admin(is_admin: bool) -> Self {
        Self {
            can_add: is_admin,
            can_edit: is_admin,
            can_delete: is_admin,
        }
    }
}

/// A dispatched list request, tagged with the filter active at dispatch.
///
/// Hand it back to [`super::RosterView::finish_load`] with the result.
///
/// The request counts as in flight only while its ticket is alive, so a
/// ticket dropped with a cancelled future stops reporting `Loading`.
#[derive(Debug)]
#[must_use = "a list ticket must be settled with finish_load"]
pub struct ListTicket {
    pub(super) tag: PlayerFilter,
    pub(super) live: Arc<()>,
}

impl ListTicket {
    /// The filter to send with the request.
    pub fn filter(&self) -> &PlayerFilter {
        &self.tag
    }
}

/// Result of settling a list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The roster was replaced with `count` players.
    Applied { count: usize },
    /// The filter changed after dispatch; the result was dropped.
    Stale,
    /// The request failed; the roster is unchanged.
    Failed,
}

/// Result of a save attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// The form is closed; there is nothing to save.
    NotOpen,
    /// The draft did not validate; no request was made.
    Invalid(Vec<DraftIssue>),
    /// The server accepted the draft; the form is closed and the roster reloaded.
    Saved { message: String, player: Player },
    /// The request failed; the form stays open with the draft intact.
    Failed,
}

/// Result of a delete attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user did not confirm; no request was made.
    Declined,
    Deleted { message: String },
    /// The request failed; the roster is unchanged.
    Failed,
}
