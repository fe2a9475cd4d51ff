//! Roster view: the state behind the players screen.
//!
//! The view owns the in-memory roster, the active category filter, the
//! create/edit form and the detail selection. It talks to the server only
//! through a [`PlayerDirectory`] passed into each networked action, and it
//! never patches the roster locally: every successful write is followed by a
//! fresh list request for the current filter.
//!
//! # Stale results
//!
//! Each list request is tagged with the filter active when it was dispatched
//! ([`ListTicket`]). A result whose tag no longer matches the current filter
//! is dropped, so a slow response for an old filter can never overwrite the
//! roster of a newer one. Hosts that run requests concurrently use
//! [`RosterView::begin_load`] / [`RosterView::finish_load`] directly.
//! Dropping a ticket, or a `load` future mid-request, forgets the request.
//!
//! # Errors
//!
//! Directory failures are caught here: the roster and draft are left as they
//! were, the error is logged and kept in [`RosterView::last_error`], and the
//! action reports a `Failed` outcome. How to show it is up to the caller.

pub mod state;


use crate::{
    core::{filters::normalize_category, PlayerFilter},
    directory::PlayerDirectory,
    error::{Result, RosterError},
    models::{Draft, DraftIssue, Player, PlayerId, TeamSummary},
};
use log::{debug, error, info, warn};
use std::sync::{Arc, Weak};

pub use state::{
    Controls, DeleteOutcome, DetailState, FormState, ListTicket, LoadOutcome, LoadState,
    SaveOutcome,
};

/// Question asked before a delete is sent.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this player?";

/// Explicit user confirmation, asked before destructive actions.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug)]
pub struct RosterView {
    roster: Vec<Player>,
    filter: PlayerFilter,
    in_flight: Vec<(PlayerFilter, Weak<()>)>,
    form: FormState,
    draft: Draft,
    detail: DetailState,
    is_admin: bool,
    teams: Vec<TeamSummary>,
    last_error: Option<RosterError>,
}

impl Default for RosterView {
    fn default() -> Self {
        Self {
            roster: Vec::new(),
            filter: PlayerFilter::default(),
            in_flight: Vec::new(),
            form: FormState::Closed,
            draft: Draft::default(),
            detail: DetailState::NoSelection,
            is_admin: false,
            teams: Vec::new(),
            last_error: None,
        }
    }
}

impl RosterView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the admin flag supplied by the authentication collaborator.
    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    pub fn set_admin(&mut self, is_admin: bool) {
        self.is_admin = is_admin;
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Visibility of add/edit/delete controls. Not enforced by the view.
    pub fn controls(&self) -> Controls {
        Controls::for_admin(self.is_admin)
    }

    /// Replace the team list supplied by the team directory collaborator.
    pub fn set_teams(&mut self, teams: Vec<TeamSummary>) {
        self.teams = teams;
    }

    pub fn teams(&self) -> &[TeamSummary] {
        &self.teams
    }

    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    pub fn find(&self, id: PlayerId) -> Option<&Player> {
        self.roster.iter().find(|p| p.id == Some(id))
    }

    pub fn filter(&self) -> &PlayerFilter {
        &self.filter
    }

    pub fn category(&self) -> Option<&str> {
        self.filter.category.as_deref()
    }

    pub fn load_state(&self) -> LoadState {
        let current = self
            .in_flight
            .iter()
            .any(|(tag, live)| *tag == self.filter && live.strong_count() > 0);
        if current {
            LoadState::Loading
        } else {
            LoadState::Idle
        }
    }

    pub fn form_state(&self) -> FormState {
        self.form
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Form input goes straight into the draft.
    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    pub fn last_error(&self) -> Option<&RosterError> {
        self.last_error.as_ref()
    }

    pub fn take_error(&mut self) -> Option<RosterError> {
        self.last_error.take()
    }

    /// Team name for `player`: the server's summary if present, else a
    /// lookup of its `team_id` in the injected team list.
    pub fn team_name<'a>(&'a self, player: &'a Player) -> Option<&'a str> {
        player.team.as_ref().map(|t| t.name.as_str()).or_else(|| {
            player
                .team_id
                .and_then(|id| self.teams.iter().find(|t| t.id == id))
                .map(|t| t.name.as_str())
        })
    }

    /// Dispatch a list request for the current filter.
    pub fn begin_load(&mut self) -> ListTicket {
        self.last_error = None;
        self.in_flight.retain(|(_, live)| live.strong_count() > 0);

        let live = Arc::new(());
        self.in_flight.push((self.filter.clone(), Arc::downgrade(&live)));
        ListTicket {
            tag: self.filter.clone(),
            live,
        }
    }

    /// Change the category filter and dispatch a list request for it.
    pub fn change_category(&mut self, category: Option<String>) -> ListTicket {
        self.filter.category = normalize_category(category);
        self.begin_load()
    }

    /// Settle a list request. Results for a filter that is no longer current
    /// are dropped without touching the roster or the error slot.
    pub fn finish_load(
        &mut self,
        ticket: ListTicket,
        result: Result<Vec<Player>>,
    ) -> LoadOutcome {
        let live = Arc::downgrade(&ticket.live);
        self.in_flight
            .retain(|(_, other)| !other.ptr_eq(&live) && other.strong_count() > 0);

        if ticket.tag != self.filter {
            warn!(
                "Discarding players loaded for {:?}; filter is now {:?}",
                ticket.tag, self.filter
            );
            return LoadOutcome::Stale;
        }

        match result {
            Ok(players) => {
                let count = players.len();
                debug!("Loaded {} players for {:?}", count, self.filter);
                self.roster = players;
                LoadOutcome::Applied { count }
            }
            Err(e) => {
                error!("Error loading players: {}", e);
                self.last_error = Some(e);
                LoadOutcome::Failed
            }
        }
    }

    /// Load the roster for the current filter. Called on mount and after
    /// every successful write.
    pub async fn load<D: PlayerDirectory>(&mut self, directory: &D) -> LoadOutcome {
        let ticket = self.begin_load();
        let result = directory.list(ticket.filter()).await;
        self.finish_load(ticket, result)
    }

    /// Change the category filter and reload. Blank means all categories.
    pub async fn set_category<D: PlayerDirectory>(
        &mut self,
        directory: &D,
        category: Option<String>,
    ) -> LoadOutcome {
        let ticket = self.change_category(category);
        let result = directory.list(ticket.filter()).await;
        self.finish_load(ticket, result)
    }

    /// Open the form on a blank draft. Does nothing while the form is
    /// already open; returns whether it opened.
    pub fn open_add(&mut self) -> bool {
        if self.form.is_open() {
            return false;
        }
        self.draft = Draft::default();
        self.form = FormState::Adding;
        true
    }

    /// Open the form on a copy of `player`, id included.
    pub fn open_edit(&mut self, player: &Player) {
        self.draft = Draft::from(player);
        self.form = FormState::Editing;
    }

    /// Discard the draft and close the form.
    pub fn cancel(&mut self) {
        self.draft = Draft::default();
        self.form = FormState::Closed;
    }

    /// Send the draft: `update` when editing, `create` when adding.
    ///
    /// Nothing is sent unless the draft validates. On success the form
    /// closes and the roster is reloaded; on failure the form stays open
    /// with the draft untouched.
    pub async fn save<D: PlayerDirectory>(&mut self, directory: &D) -> SaveOutcome {
        let mut issues = self.draft.validate();
        let target = match self.form {
            FormState::Closed => return SaveOutcome::NotOpen,
            FormState::Adding => None,
            FormState::Editing => {
                if self.draft.id.is_none() {
                    issues.push(DraftIssue::MissingId);
                }
                self.draft.id
            }
        };
        if !issues.is_empty() {
            debug!("Not saving invalid draft: {:?}", issues);
            return SaveOutcome::Invalid(issues);
        }

        self.last_error = None;
        let result = match target {
            Some(id) => directory.update(id, &self.draft).await,
            None => directory.create(&self.draft).await,
        };

        match result {
            Ok(saved) => {
                info!("{}: {}", saved.message, saved.player.full_name());
                self.form = FormState::Closed;
                self.draft = Draft::default();
                self.load(directory).await;
                SaveOutcome::Saved {
                    message: saved.message,
                    player: saved.player,
                }
            }
            Err(e) => {
                match target {
                    Some(id) => error!("Error updating player {}: {}", id, e),
                    None => error!("Error creating player: {}", e),
                }
                self.last_error = Some(e);
                SaveOutcome::Failed
            }
        }
    }

    /// Delete player `id` once `confirm` agrees, then reload.
    pub async fn delete<D, C>(
        &mut self,
        directory: &D,
        id: PlayerId,
        confirm: &mut C,
    ) -> DeleteOutcome
    where
        D: PlayerDirectory,
        C: Confirm + ?Sized,
    {
        if !confirm.confirm(DELETE_PROMPT) {
            debug!("Delete of player {} declined", id);
            return DeleteOutcome::Declined;
        }

        self.last_error = None;
        match directory.delete(id).await {
            Ok(message) => {
                info!("{} (id {})", message, id);
                if matches!(&self.detail, DetailState::Viewing(p) if p.id == Some(id)) {
                    self.detail = DetailState::NoSelection;
                }
                self.load(directory).await;
                DeleteOutcome::Deleted { message }
            }
            Err(e) => {
                error!("Error deleting player {}: {}", id, e);
                self.last_error = Some(e);
                DeleteOutcome::Failed
            }
        }
    }

    /// Show `player` in the detail panel. Purely local.
    pub fn view_details(&mut self, player: &Player) {
        self.detail = DetailState::Viewing(player.clone());
    }

    pub fn close_details(&mut self) {
        self.detail = DetailState::NoSelection;
    }
}
