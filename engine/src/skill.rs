//! Skills list page.
//!
//! Skills are the simplest rostering entity (a tenant-scoped name), so this
//! module is mostly glue: one sortable column, two validation rules, and the
//! URL defaults of the skills page.

use crate::{
    codec::{ViewDefaults, ViewState},
    sort::{string_sorter, Column, Columns},
    table::TablePage,
    validation::{Rule, RuleSet},
    SkillId, TenantId,
};
use serde::{Deserialize, Serialize};

/// Rule rejecting an empty skill name.
pub const NAME_MUST_NOT_BE_EMPTY: &str = "nameMustNotBeEmpty";
/// Rule rejecting a name used by a different skill.
pub const NAME_ALREADY_TAKEN: &str = "nameAlreadyTaken";

/// Rules checked before a skill row is saved, in display order.
pub const SKILL_RULES: &[&str] = &[NAME_MUST_NOT_BE_EMPTY, NAME_ALREADY_TAKEN];

/// A skill an employee can have and a spot can require.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    /// Store identifier; absent until persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SkillId>,
    pub tenant_id: TenantId,
    pub name: String,
}

impl Skill {
    /// An unsaved skill.
    pub fn new(tenant_id: TenantId, name: impl Into<String>) -> Self {
        Self {
            id: None,
            tenant_id,
            name: name.into(),
        }
    }

    /// A persisted skill.
    pub fn with_id(id: SkillId, tenant_id: TenantId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            ..Self::new(tenant_id, name)
        }
    }
}

/// Payload for creating a skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillView {
    pub tenant_id: TenantId,
    pub name: String,
}

impl SkillView {
    /// The unsaved skill this payload describes.
    pub fn into_draft(self) -> Skill {
        Skill::new(self.tenant_id, self.name)
    }
}

/// Validation rules for skills, checked against the current skill list.
pub fn skill_rules(existing: &[Skill]) -> RuleSet<'_, Skill> {
    RuleSet::new()
        .with_rule(
            NAME_MUST_NOT_BE_EMPTY,
            Rule::new(
                |skill: &Skill| !skill.name.is_empty(),
                |_: &Skill| "Skill cannot have an empty name".to_string(),
            ),
        )
        .with_rule(
            NAME_ALREADY_TAKEN,
            Rule::new(
                move |skill: &Skill| {
                    !existing
                        .iter()
                        .any(|other| other.name == skill.name && other.id != skill.id)
                },
                |skill: &Skill| {
                    format!("Name ({}) is already taken by another skill", skill.name)
                },
            ),
        )
}

/// Columns of the skills table. The name sorts case-sensitively.
pub fn skill_columns() -> Columns<Skill> {
    Columns::new().with_column(Column::sortable(
        "name",
        string_sorter(|skill: &Skill| skill.name.as_str()),
    ))
}

/// Text the filter box searches.
pub fn skill_filter_keys(skill: &Skill) -> Vec<String> {
    vec![skill.name.clone()]
}

/// URL defaults of the skills page: first page of ten, sorted by name.
pub fn skill_defaults() -> ViewDefaults {
    ViewDefaults::from_state(ViewState {
        page: 1,
        items_per_page: 10,
        filter: None,
        sort_by: Some(0),
        sort_ascending: true,
    })
}

/// Skills with the given items-per-page default.
pub fn skill_defaults_with_page_size(items_per_page: u32) -> ViewDefaults {
    let state = skill_defaults().state().with_items_per_page(items_per_page);
    ViewDefaults::from_state(state)
}

/// The skills list page.
pub fn skill_table() -> TablePage<Skill> {
    TablePage::new(skill_columns(), skill_defaults(), skill_filter_keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Command, QueryParams, Row, SaveOutcome};

    fn nurse() -> Skill {
        Skill::with_id(1, 7, "Nurse")
    }

    #[test]
    fn empty_name_fails() {
        let existing = vec![nurse()];
        let result = skill_rules(&existing).evaluate(&Skill::new(7, ""), SKILL_RULES);

        assert!(!result.is_valid());
        assert!(result.failing_rule_names().contains(NAME_MUST_NOT_BE_EMPTY));
        assert_eq!(
            result.render_errors(SKILL_RULES),
            vec!["Skill cannot have an empty name".to_string()]
        );
    }

    #[test]
    fn unique_name_passes() {
        let existing = vec![Skill::with_id(1, 7, "Doctor")];
        let result = skill_rules(&existing).evaluate(&Skill::new(7, "Nurse"), SKILL_RULES);
        assert!(result.is_valid());
    }

    #[test]
    fn duplicate_name_excludes_self() {
        let existing = vec![nurse()];
        let rules = skill_rules(&existing);

        let other = rules.evaluate(&Skill::with_id(2, 7, "Nurse"), SKILL_RULES);
        assert!(other.is_failing(NAME_ALREADY_TAKEN));
        assert_eq!(
            other.render_errors(SKILL_RULES),
            vec!["Name (Nurse) is already taken by another skill".to_string()]
        );

        let same = rules.evaluate(&nurse(), SKILL_RULES);
        assert!(!same.is_failing(NAME_ALREADY_TAKEN));
    }

    #[test]
    fn new_draft_with_taken_name_is_blocked() {
        let existing = vec![nurse()];
        let sent = std::cell::Cell::new(0);
        let sink = |_: Command<Skill>| sent.set(sent.get() + 1);

        let row = Row::draft(Skill::new(7, "Nurse"));
        let outcome = row.save(&skill_rules(&existing), SKILL_RULES, &sink).unwrap();

        assert!(matches!(outcome, SaveOutcome::Blocked { .. }));
        assert_eq!(sent.get(), 0);
    }

    #[test]
    fn defaults_sort_by_name() {
        let state = skill_defaults().state().clone();
        assert_eq!(state.page, 1);
        assert_eq!(state.items_per_page, 10);
        assert_eq!(state.sort_by, Some(0));
        assert!(state.sort_ascending);
        assert_eq!(state.filter, None);

        assert_eq!(skill_defaults_with_page_size(25).state().items_per_page, 25);
    }

    #[test]
    fn defaults_match_url_form() {
        use crate::codec::{ASC, FILTER, ITEMS_PER_PAGE, PAGE, SORT_BY};

        let parsed = ViewDefaults::from_pairs([
            (PAGE, Some("1")),
            (ITEMS_PER_PAGE, Some("10")),
            (FILTER, None),
            (SORT_BY, Some("0")),
            (ASC, Some("true")),
        ])
        .unwrap();
        assert_eq!(parsed, skill_defaults());
    }

    #[test]
    fn table_filters_and_sorts() {
        let skills = vec![
            Skill::with_id(1, 7, "nurse"),
            Skill::with_id(2, 7, "Doctor"),
            Skill::with_id(3, 7, "Nurse Practitioner"),
        ];
        let view = skill_table().view(&skills, &QueryParams::parse("filter=NURSE"));

        let names: Vec<_> = view.slice.items.iter().map(|s| s.name.as_str()).collect();
        // Case-sensitive: uppercase sorts first.
        assert_eq!(names, vec!["Nurse Practitioner", "nurse"]);
    }

    #[test]
    fn skill_json_shape() {
        let json = serde_json::to_value(Skill::new(7, "Nurse")).unwrap();
        assert_eq!(json, serde_json::json!({"tenantId": 7, "name": "Nurse"}));

        let parsed: Skill =
            serde_json::from_str(r#"{"id": 3, "tenantId": 7, "name": "Cook"}"#).unwrap();
        assert_eq!(parsed, Skill::with_id(3, 7, "Cook"));

        let view: SkillView = serde_json::from_str(r#"{"tenantId": 7, "name": "Cook"}"#).unwrap();
        assert_eq!(view.into_draft(), Skill::new(7, "Cook"));
    }
}
