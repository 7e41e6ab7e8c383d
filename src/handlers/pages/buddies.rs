//! Buddies listing

use serde::Serialize;
use tracing::warn;
use crate::filter::{QueryParams, RecordFilter, UserFilter};
use crate::models::SkillLevel;
use crate::state::AppContext;
use crate::utils::errors::Result;
use crate::utils::helpers::count_label;
use crate::utils::logging::log_filter_run;
use super::UserCard;

#[derive(Debug, Clone, Serialize)]
pub struct BuddiesPage {
    pub filter: UserFilter,
    pub buddies: Vec<UserCard>,
    /// e.g. "1 buddy found"
    pub summary: String,
    pub locations: Vec<String>,
    pub sports: Vec<String>,
    pub skill_levels: Vec<SkillLevel>,
}

pub fn load(ctx: &AppContext, query: &QueryParams) -> Result<BuddiesPage> {
    let filter = match UserFilter::from_query(query) {
        Ok(filter) => filter,
        Err(e) => {
            warn!(error = %e, "Ignoring invalid buddy filter parameter");
            let mut query = query.clone();
            query.remove("level");
            UserFilter::from_query(&query)?
        }
    };

    Ok(render(ctx, filter.with_location_match(ctx.services.location_match())))
}

pub fn render(ctx: &AppContext, filter: UserFilter) -> BuddiesPage {
    let all = ctx.database.users.list();
    let matched = filter.select(all);
    log_filter_run("buddies", filter.active_criteria(), all.len(), matched.len());

    BuddiesPage {
        summary: count_label(matched.len(), "buddy", "buddies"),
        buddies: matched.into_iter().map(UserCard::from).collect(),
        locations: ctx.database.users.locations(),
        sports: ctx.database.sports.names(),
        skill_levels: SkillLevel::ALL.to_vec(),
        filter,
    }
}
