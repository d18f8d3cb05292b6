//! Application state for the regions view.
//!
//! The view drives a single [`AppState`] through a unidirectional cycle:
//! an event calls [`AppState::select`], which hands back a [`FetchTicket`]; when the
//! request settles the outcome is fed to [`AppState::resolve`] and the view re-renders.

use crate::error::RegionsError;
use atlas_domain::config::StalePolicy;
use atlas_domain::region::{Category, Region};

/// Receipt for one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    category: Category,
    sequence: u64,
}

impl FetchTicket {
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Issue order, starting at 1.
    #[must_use]
    pub const fn sequence(&self) -> u64 {
        self.sequence
    }
}

/// What [`AppState::resolve`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The list was replaced with `count` regions.
    Applied { count: usize },
    /// A newer request had been issued and the policy is [`StalePolicy::Discard`].
    Discarded,
    /// The request failed; the previous list is kept.
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    policy: StalePolicy,
    selected: Option<Category>,
    regions: Vec<Region>,
    shown: Option<Category>,
    generation: u64,
    issued: u64,
    in_flight: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(StalePolicy::default())
    }
}

impl AppState {
    #[must_use]
    pub const fn new(policy: StalePolicy) -> Self {
        Self {
            policy,
            selected: None,
            regions: Vec::new(),
            shown: None,
            generation: 0,
            issued: 0,
            in_flight: 0,
        }
    }

    /// Records a category selection and returns the ticket for the request it triggers.
    ///
    /// Every call issues a new ticket, even when `category` is already selected.
    pub fn select(&mut self, category: Category) -> FetchTicket {
        self.selected = Some(category);
        self.issued += 1;
        self.in_flight += 1;
        FetchTicket { category, sequence: self.issued }
    }

    /// Feeds the outcome of the request behind `ticket` back into the state.
    ///
    /// On success the list is replaced wholesale and the generation advances; on failure
    /// nothing visible changes.
    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<Vec<Region>, RegionsError>,
    ) -> Resolution {
        self.in_flight = self.in_flight.saturating_sub(1);

        let Ok(regions) = outcome else {
            return Resolution::Failed;
        };

        if self.is_stale(ticket) {
            return Resolution::Discarded;
        }

        let count = regions.len();
        self.regions = regions;
        self.shown = Some(ticket.category);
        self.generation += 1;
        Resolution::Applied { count }
    }

    const fn is_stale(&self, ticket: FetchTicket) -> bool {
        matches!(self.policy, StalePolicy::Discard) && ticket.sequence < self.issued
    }

    /// Category of the most recent selection.
    #[must_use]
    pub const fn selected(&self) -> Option<Category> {
        self.selected
    }

    /// Category the displayed list was fetched for. May differ from [`Self::selected`]
    /// while a request is pending, or after an out-of-order response under
    /// [`StalePolicy::Apply`].
    #[must_use]
    pub const fn shown(&self) -> Option<Category> {
        self.shown
    }

    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Bumped every time a fetched list replaces the displayed one.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    #[must_use]
    pub const fn policy(&self) -> StalePolicy {
        self.policy
    }
}
