//! Row edit state machine.
//!
//! Each row of a list page is either viewed or edited. Edits happen on a
//! local draft; only a save that passes validation turns the draft into a
//! command for the backing store. Commands are one-way: the row does not wait
//! for the store, does not retry and does not roll back.

use crate::{error::Result, validation::RuleSet, Error, ValidationResult};
use serde::{Deserialize, Serialize};

/// A change sent to the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "entity", rename_all = "lowercase")]
pub enum Command<T> {
    /// Persist a new entity
    Create(T),
    /// Replace a persisted entity
    Update(T),
    /// Delete a persisted entity
    Remove(T),
}

impl<T> Command<T> {
    /// The entity carried by the command.
    pub fn entity(&self) -> &T {
        match self {
            Command::Create(e) | Command::Update(e) | Command::Remove(e) => e,
        }
    }

    /// Command name, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Command::Create(_) => "create",
            Command::Update(_) => "update",
            Command::Remove(_) => "remove",
        }
    }
}

/// Receiver of row commands.
///
/// Sending is fire-and-forget: there is no result to inspect.
pub trait CommitSink<T> {
    /// Hand a command to the store.
    fn send(&self, command: Command<T>);
}

impl<T, F> CommitSink<T> for F
where
    F: Fn(Command<T>),
{
    fn send(&self, command: Command<T>) {
        self(command)
    }
}

/// State of one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row<T> {
    /// Showing a persisted entity
    Viewing { entity: T },
    /// Editing a local draft
    Editing {
        /// The entity as it was when editing started
        base: T,
        /// Local edits, not yet committed
        draft: T,
        /// True when the entity has never been persisted
        is_new: bool,
    },
}

/// Result of a save attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome<T> {
    /// Validation failed; the row keeps editing and nothing was sent.
    Blocked { row: Row<T>, result: ValidationResult },
    /// A command was sent. Existing rows go back to viewing the draft;
    /// draft rows are gone (the store's copy replaces them).
    Committed { row: Option<Row<T>> },
}

impl<T> SaveOutcome<T> {
    /// Check if a command was sent.
    pub fn is_committed(&self) -> bool {
        matches!(self, SaveOutcome::Committed { .. })
    }
}

const VIEWING: &str = "viewing";
const EDITING: &str = "editing";

impl<T: Clone> Row<T> {
    /// A row for an entity that already exists in the store.
    pub fn persisted(entity: T) -> Self {
        Row::Viewing { entity }
    }

    /// A row for a new, unsaved entity. It starts in editing.
    pub fn draft(entity: T) -> Self {
        Row::Editing {
            base: entity.clone(),
            draft: entity,
            is_new: true,
        }
    }

    /// Check if the row is being edited.
    pub fn is_editing(&self) -> bool {
        matches!(self, Row::Editing { .. })
    }

    /// Check if the row represents an unsaved entity.
    pub fn is_new(&self) -> bool {
        matches!(self, Row::Editing { is_new: true, .. })
    }

    /// The entity as currently displayed: the draft while editing.
    pub fn current(&self) -> &T {
        match self {
            Row::Viewing { entity } => entity,
            Row::Editing { draft, .. } => draft,
        }
    }

    fn state_name(&self) -> &'static str {
        match self {
            Row::Viewing { .. } => VIEWING,
            Row::Editing { .. } => EDITING,
        }
    }

    fn invalid(&self, action: &'static str) -> Error {
        Error::InvalidTransition {
            action,
            state: self.state_name(),
        }
    }

    /// Start editing a viewed row.
    pub fn edit(&self) -> Result<Self> {
        match self {
            Row::Viewing { entity } => Ok(Row::Editing {
                base: entity.clone(),
                draft: entity.clone(),
                is_new: false,
            }),
            Row::Editing { .. } => Err(self.invalid("edit")),
        }
    }

    /// Replace the draft.
    pub fn with_draft(&self, draft: T) -> Result<Self> {
        match self {
            Row::Editing { base, is_new, .. } => Ok(Row::Editing {
                base: base.clone(),
                draft,
                is_new: *is_new,
            }),
            Row::Viewing { .. } => Err(self.invalid("change")),
        }
    }

    /// Derive a new draft from the current one.
    pub fn update_draft(&self, change: impl FnOnce(&mut T)) -> Result<Self> {
        let mut draft = self.current().clone();
        change(&mut draft);
        self.with_draft(draft)
    }

    /// Drop local edits.
    ///
    /// A persisted row goes back to viewing its original entity; a draft row
    /// is destroyed.
    pub fn cancel(&self) -> Result<Option<Self>> {
        match self {
            Row::Editing { is_new: true, .. } => Ok(None),
            Row::Editing { base, .. } => Ok(Some(Row::Viewing {
                entity: base.clone(),
            })),
            Row::Viewing { .. } => Err(self.invalid("cancel")),
        }
    }

    /// Validate the draft and, if valid, send it to the store.
    ///
    /// The rules in `active` run once against the draft. On failure the row
    /// is returned unchanged and the sink is never called.
    pub fn save<S>(
        &self,
        rules: &RuleSet<'_, T>,
        active: &[&str],
        sink: &S,
    ) -> Result<SaveOutcome<T>>
    where
        S: CommitSink<T> + ?Sized,
    {
        let Row::Editing { draft, is_new, .. } = self else {
            return Err(self.invalid("save"));
        };

        let result = rules.evaluate(draft, active);
        if !result.is_valid() {
            return Ok(SaveOutcome::Blocked {
                row: self.clone(),
                result,
            });
        }

        if *is_new {
            sink.send(Command::Create(draft.clone()));
            Ok(SaveOutcome::Committed { row: None })
        } else {
            sink.send(Command::Update(draft.clone()));
            Ok(SaveOutcome::Committed {
                row: Some(Row::Viewing {
                    entity: draft.clone(),
                }),
            })
        }
    }

    /// Remove a viewed row's entity from the store. The row is consumed.
    pub fn delete<S>(self, sink: &S) -> Result<()>
    where
        S: CommitSink<T> + ?Sized,
    {
        match self {
            Row::Viewing { entity } => {
                sink.send(Command::Remove(entity));
                Ok(())
            }
            Row::Editing { .. } => Err(self.invalid("delete")),
        }
    }
}
