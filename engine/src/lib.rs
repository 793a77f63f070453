//! # Roster Engine
//!
//! Reusable building blocks for the list pages of an employee-rostering UI.
//!
//! Every list page (skills, spots, contracts, employees, ...) is the same
//! machine with different columns: a bookmarkable view-state in the URL, a
//! client-side filtered, sorted and paged slice of the collection, and inline
//! row editing guarded by named validation rules.
//!
//! ## Design Principles
//!
//! - **No IO**: the engine never touches the network, the URL bar or a store
//! - **Deterministic**: same inputs always produce the same outputs
//! - **Forgiving input**: malformed query parameters fall back to defaults
//!   field by field; nothing in the read path returns an error
//! - **Replace, don't patch**: view-states and rows are immutable values;
//!   every change produces a new one
//!
//! ## Core Concepts
//!
//! ### View-state codec
//!
//! [`decode`] and [`encode`] map a [`ViewState`] (page, page size, filter,
//! sort column, direction) to [`QueryParams`] and back. Parameters the codec
//! does not own are left untouched.
//!
//! ### Paging engine
//!
//! [`derive`] filters (case-insensitive substring over caller-provided keys),
//! sorts with the column's [`Comparator`] and cuts out the clamped page.
//!
//! ### Validation
//!
//! A [`RuleSet`] maps rule names to predicate/message pairs. The caller names
//! the rules that apply; [`ValidationResult::is_valid`] gates saving.
//!
//! ### Rows
//!
//! A [`Row`] is either viewing or editing. [`Row::save`] only sends a
//! [`Command`] to the [`CommitSink`] when the draft is valid.
//!
//! ## Quick Start
//!
//! ```rust
//! use roster_engine::{skill, Command, QueryParams, Row, SaveOutcome, Skill};
//!
//! let skills = vec![
//!     Skill::with_id(1, 1, "Nurse"),
//!     Skill::with_id(2, 1, "Doctor"),
//!     Skill::with_id(3, 1, "Cook"),
//! ];
//!
//! // 1. Render the page from the URL
//! let table = skill::skill_table();
//! let query = QueryParams::parse("?page=1&itemsPerPage=2&asc=false");
//! let view = table.view(&skills, &query);
//! assert_eq!(view.slice.total_pages, 2);
//! assert_eq!(view.slice.items[0].name, "Nurse");
//!
//! // 2. Clicking the name header flips the direction in the URL
//! let next = table.sort_change(&query, 0);
//! assert_eq!(next.get("asc"), Some("true"));
//!
//! // 3. Save an edited row through the validation rules
//! let rules = skill::skill_rules(&skills);
//! let row = Row::persisted(skills[2].clone())
//!     .edit()
//!     .unwrap()
//!     .update_draft(|s| s.name = "Nurse".into())
//!     .unwrap();
//! let outcome = row
//!     .save(&rules, skill::SKILL_RULES, &|_: Command<Skill>| unreachable!())
//!     .unwrap();
//! assert!(matches!(outcome, SaveOutcome::Blocked { .. }));
//! ```

pub mod codec;
pub mod error;
pub mod paging;
pub mod query;
pub mod row;
pub mod skill;
pub mod sort;
pub mod table;
pub mod validation;

// Re-export main types at crate root
pub use codec::{decode, encode, ViewDefaults, ViewState};
pub use error::Error;
pub use paging::{derive, PageSlice};
pub use query::QueryParams;
pub use row::{Command, CommitSink, Row, SaveOutcome};
pub use skill::{Skill, SkillView};
pub use sort::{Column, Columns, Comparator};
pub use table::{ColumnHeader, SortIndicator, TablePage, TableView};
pub use validation::{Rule, RuleFailure, RuleSet, ValidationResult};

/// Type aliases for clarity
pub type TenantId = u64;
pub type SkillId = u64;
