//! Admin handler - resets the application to its startup state.

use crate::config::Config;
use crate::store::SkillStore;

/// Drop all skills of every tenant and seed the configured ones again.
///
/// Returns the number of skills seeded. Commands still in the queue are
/// applied on top of the reset store.
pub fn handle_reset(store: &SkillStore, config: &Config) -> usize {
    let dropped = store.len();
    store.clear();
    let seeded = store.seed(config.default_tenant_id, config.seed_skills.iter().cloned());

    tracing::info!(dropped, seeded, "Application reset");
    seeded
}
