//! Integration tests for the skills page wire format.
//!
//! These exercise the JSON the server exchanges with the page, built from
//! the engine types the handlers use.

use roster_engine::{
    skill::{skill_rules, skill_table, SKILL_RULES},
    Command, QueryParams, Row, SaveOutcome, Skill, SkillView,
};
use serde_json::json;

fn seeded() -> Vec<Skill> {
    ["Nurse", "Doctor", "Cook", "Driver"]
        .iter()
        .zip(1..)
        .map(|(name, id)| Skill::with_id(id, 1, *name))
        .collect()
}

#[cfg(test)]
mod wire_tests {
    use super::*;

    #[test]
    fn add_payload_becomes_draft() {
        let view: SkillView =
            serde_json::from_value(json!({"tenantId": 1, "name": "Porter"})).unwrap();
        let row = Row::draft(view.into_draft());

        assert!(row.is_new());
        assert_eq!(row.current().id, None);
    }

    #[test]
    fn update_payload_requires_id_to_round_trip() {
        let skill: Skill =
            serde_json::from_value(json!({"id": 3, "tenantId": 1, "name": "Chef"})).unwrap();
        assert_eq!(skill, Skill::with_id(3, 1, "Chef"));

        let value = serde_json::to_value(&skill).unwrap();
        assert_eq!(value["id"], 3);
    }

    #[test]
    fn command_json_shape() {
        let command = Command::Remove(Skill::with_id(2, 1, "Doctor"));
        let value = serde_json::to_value(&command).unwrap();

        assert_eq!(
            value,
            json!({"type": "remove", "entity": {"id": 2, "tenantId": 1, "name": "Doctor"}})
        );
        let parsed: Command<Skill> = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, command);
    }
}

#[cfg(test)]
mod page_tests {
    use super::*;

    #[test]
    fn table_json_shape() {
        let skills = seeded();
        let query = QueryParams::parse("?itemsPerPage=3&page=2");
        let value = serde_json::to_value(skill_table().view(&skills, &query)).unwrap();

        assert_eq!(value["page"], 2);
        assert_eq!(value["totalPages"], 2);
        assert_eq!(value["totalFilteredCount"], 4);
        assert_eq!(value["state"]["itemsPerPage"], 3);
        assert_eq!(value["columns"][0], json!({"name": "name", "sortable": true, "sort": "ascending"}));
        // Ascending by name: Cook, Doctor, Driver | Nurse
        assert_eq!(value["items"], json!([{"id": 1, "tenantId": 1, "name": "Nurse"}]));
    }

    #[test]
    fn edit_then_save_sends_one_update() {
        let skills = seeded();
        let rules = skill_rules(&skills);
        let sent = std::cell::RefCell::new(Vec::new());
        let sink = |command: Command<Skill>| sent.borrow_mut().push(command);

        let row = Row::persisted(skills[2].clone())
            .edit()
            .unwrap()
            .update_draft(|s| s.name = "Chef".into())
            .unwrap();
        let outcome = row.save(&rules, SKILL_RULES, &sink).unwrap();

        assert!(matches!(outcome, SaveOutcome::Committed { row: Some(_) }));
        assert_eq!(
            sent.into_inner(),
            vec![Command::Update(Skill::with_id(3, 1, "Chef"))]
        );
    }

    #[test]
    fn filter_link_resets_page() {
        let table = skill_table();
        let query = QueryParams::parse("page=2&itemsPerPage=2&tab=skills");
        let next = table.filter_change(&query, Some("dr"));

        assert_eq!(next.get("page"), Some("1"));
        assert_eq!(next.get("filter"), Some("dr"));
        assert_eq!(next.get("tab"), Some("skills"));

        let skills = seeded();
        let view = table.view(&skills, &next);
        let names: Vec<_> = view.slice.items.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Driver"]);
    }
}
