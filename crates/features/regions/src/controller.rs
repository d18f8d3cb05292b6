use crate::error::Result;
use crate::source::RegionSource;
use crate::state::{AppState, FetchTicket, Resolution};
use atlas_domain::region::{Category, Region};
use tracing::{debug, info, warn};

/// Runs the request behind `ticket`, logging failures instead of surfacing them.
///
/// # Errors
/// Returns whatever the source reported; callers hand it to [`AppState::resolve`].
#[tracing::instrument(
    name = "regions.fetch",
    skip(source),
    fields(category = %ticket.category(), sequence = ticket.sequence())
)]
pub async fn fetch<S: RegionSource>(source: &S, ticket: FetchTicket) -> Result<Vec<Region>> {
    let outcome = source.fetch(ticket.category()).await;
    if let Err(err) = &outcome {
        warn!(kind = err.kind(), error = %err, "Region request failed; keeping current list");
    }
    outcome
}

/// Logs what [`AppState::resolve`] did.
pub fn report(ticket: FetchTicket, resolution: Resolution) {
    match resolution {
        Resolution::Applied { count } => {
            info!(category = %ticket.category(), count, "Region list replaced");
        }
        Resolution::Discarded => {
            debug!(
                category = %ticket.category(),
                sequence = ticket.sequence(),
                "Discarded superseded response"
            );
        }
        Resolution::Failed => {}
    }
}

/// Selects `category` and awaits its request in one step.
///
/// Interactive hosts split this into [`AppState::select`] and a spawned task so the
/// state is not borrowed across the await; headless callers can use it directly.
pub async fn select_and_load<S: RegionSource>(
    state: &mut AppState,
    source: &S,
    category: Category,
) -> Resolution {
    let ticket = state.select(category);
    let outcome = fetch(source, ticket).await;
    let resolution = state.resolve(ticket, outcome);
    report(ticket, resolution);
    resolution
}
