//! Events listing

use serde::Serialize;
use tracing::warn;
use crate::filter::{EventFilter, QueryParams, RecordFilter};
use crate::models::SkillLevel;
use crate::services::Permission;
use crate::state::AppContext;
use crate::utils::errors::Result;
use crate::utils::helpers::count_label;
use crate::utils::logging::log_filter_run;
use super::EventCard;

#[derive(Debug, Clone, Serialize)]
pub struct EventsPage {
    pub filter: EventFilter,
    pub events: Vec<EventCard>,
    /// e.g. "2 events found"
    pub summary: String,
    pub locations: Vec<String>,
    pub sports: Vec<String>,
    pub skill_levels: Vec<SkillLevel>,
    pub can_create: bool,
}

/// Build the listing for the given query parameters
///
/// An unrecognised `level` value is dropped rather than failing the page.
pub fn load(ctx: &AppContext, query: &QueryParams) -> Result<EventsPage> {
    let filter = match EventFilter::from_query(query) {
        Ok(filter) => filter,
        Err(e) => {
            warn!(error = %e, "Ignoring invalid event filter parameter");
            let mut query = query.clone();
            query.remove("level");
            EventFilter::from_query(&query)?
        }
    };

    Ok(render(ctx, filter.with_location_match(ctx.services.location_match())))
}

/// Build the listing for an explicit set of criteria
pub fn render(ctx: &AppContext, filter: EventFilter) -> EventsPage {
    let all = ctx.database.events.list();
    let matched = filter.select(all);
    log_filter_run("events", filter.active_criteria(), all.len(), matched.len());

    let user = ctx.session.current_user();
    let can_create = ctx
        .services
        .auth_service
        .auth_context(user.as_ref(), None)
        .allows(Permission::CreateEvent);

    EventsPage {
        summary: count_label(matched.len(), "event", "events"),
        events: matched.into_iter().map(EventCard::from).collect(),
        locations: ctx.database.events.locations(),
        sports: ctx.database.sports.names(),
        skill_levels: SkillLevel::ALL.to_vec(),
        can_create,
        filter,
    }
}
