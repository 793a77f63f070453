//! Skill handlers - read, validate and commit skill rows.

use crate::error::{AppError, Result};
use crate::store::{CommandQueue, SkillStore, StoreError};
use roster_engine::{
    skill::{skill_rules, SKILL_RULES},
    Row, SaveOutcome, Skill, SkillId, SkillView, TenantId,
};
use serde::Serialize;

/// Response for an accepted save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResponse {
    /// Whether a command was queued for the store
    pub committed: bool,
}

/// Validation outcome for a candidate skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    /// Names of the failing rules, sorted
    pub failing_rules: Vec<String>,
    /// Messages of the failing rules, in rule order
    pub messages: Vec<String>,
}

/// All skills of a tenant.
pub fn handle_list(store: &SkillStore, tenant_id: TenantId) -> Vec<Skill> {
    store.list(tenant_id)
}

/// One skill of a tenant.
pub fn handle_get(store: &SkillStore, tenant_id: TenantId, id: SkillId) -> Result<Skill> {
    Ok(store.get(tenant_id, id)?)
}

/// Evaluate the skill rules without saving.
pub fn handle_validate(
    store: &SkillStore,
    tenant_id: TenantId,
    candidate: &Skill,
) -> Result<ValidationReport> {
    check_tenant(tenant_id, candidate)?;

    let existing = store.list(tenant_id);
    let result = skill_rules(&existing).evaluate(candidate, SKILL_RULES);

    Ok(ValidationReport {
        is_valid: result.is_valid(),
        failing_rules: result
            .failing_rule_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        messages: result.render_errors(SKILL_RULES),
    })
}

/// Save a new skill row.
pub fn handle_add(
    store: &SkillStore,
    queue: &CommandQueue,
    tenant_id: TenantId,
    view: SkillView,
) -> Result<SaveResponse> {
    let draft = view.into_draft();
    check_tenant(tenant_id, &draft)?;

    save(store, queue, tenant_id, Row::draft(draft))
}

/// Save an edited skill row.
pub fn handle_update(
    store: &SkillStore,
    queue: &CommandQueue,
    tenant_id: TenantId,
    skill: Skill,
) -> Result<SaveResponse> {
    let id = skill
        .id
        .ok_or_else(|| AppError::BadRequest("Skill to update has no ID".to_string()))?;
    check_tenant(tenant_id, &skill)?;

    let persisted = store.get(tenant_id, id)?;
    let row = Row::persisted(persisted).edit()?.with_draft(skill)?;

    save(store, queue, tenant_id, row)
}

/// Delete a skill row.
///
/// Returns `false` when the skill does not exist.
pub fn handle_delete(
    store: &SkillStore,
    queue: &CommandQueue,
    tenant_id: TenantId,
    id: SkillId,
) -> Result<bool> {
    let persisted = match store.get(tenant_id, id) {
        Ok(skill) => skill,
        Err(StoreError::NotFound(_)) => return Ok(false),
        Err(e) => return Err(e.into()),
    };

    Row::persisted(persisted).delete(queue)?;
    Ok(true)
}

fn save(
    store: &SkillStore,
    queue: &CommandQueue,
    tenant_id: TenantId,
    row: Row<Skill>,
) -> Result<SaveResponse> {
    let existing = store.list(tenant_id);
    let rules = skill_rules(&existing);

    match row.save(&rules, SKILL_RULES, queue)? {
        SaveOutcome::Committed { .. } => Ok(SaveResponse { committed: true }),
        SaveOutcome::Blocked { result, .. } => {
            tracing::debug!(
                failing = ?result.failing_rule_names(),
                "Save blocked by validation"
            );
            Err(AppError::Validation(result.render_errors(SKILL_RULES)))
        }
    }
}

fn check_tenant(tenant_id: TenantId, skill: &Skill) -> Result<()> {
    if skill.tenant_id == tenant_id {
        Ok(())
    } else {
        Err(StoreError::TenantMismatch {
            expected: tenant_id,
            name: skill.name.clone(),
            actual: skill.tenant_id,
        }
        .into())
    }
}
