//! Single-slot row editor.
//!
//! ```text
//! Idle ──begin(record)──▶ Editing { draft }
//!   ▲                       │  set_field: mutates draft only
//!   │                       │  begin(other): replaces draft
//!   └──commit / cancel──────┘
//! ```
//!
//! The draft is a full copy of the record taken when editing starts. Field
//! changes never touch the store; [`RowEditor::commit`] hands the draft back
//! for the caller to write.

use super::modes::EditField;
use crate::domain::{Record, RecordId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    Editing {
        draft: Record,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowEditor {
    state: EditState,
}

impl RowEditor {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: EditState::Idle,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &EditState {
        &self.state
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing { .. })
    }

    /// Id of the record under edit.
    #[must_use]
    pub const fn editing_id(&self) -> Option<&RecordId> {
        match &self.state {
            EditState::Editing { draft } => Some(&draft.id),
            EditState::Idle => None,
        }
    }

    #[must_use]
    pub const fn draft(&self) -> Option<&Record> {
        match &self.state {
            EditState::Editing { draft } => Some(draft),
            EditState::Idle => None,
        }
    }

    /// Starts editing a copy of `record`, discarding any previous draft.
    pub fn begin(&mut self, record: &Record) {
        if let Some(previous) = self.editing_id() {
            if previous != &record.id {
                tracing::debug!(discarded = %previous, "uncommitted draft replaced");
            }
        }
        self.state = EditState::Editing {
            draft: record.clone(),
        };
    }

    /// Writes `value` into the draft. Returns `false` when idle.
    pub fn set_field(&mut self, field: EditField, value: &str) -> bool {
        let EditState::Editing { draft } = &mut self.state else {
            return false;
        };
        let slot = match field {
            EditField::Name => &mut draft.name,
            EditField::Email => &mut draft.email,
            EditField::Role => &mut draft.role,
        };
        slot.clear();
        slot.push_str(value);
        true
    }

    /// Ends editing and returns the draft to be written back.
    pub fn commit(&mut self) -> Option<Record> {
        match std::mem::take(&mut self.state) {
            EditState::Editing { draft } => Some(draft),
            EditState::Idle => None,
        }
    }

    /// Drops the draft. Returns `false` when already idle.
    pub fn cancel(&mut self) -> bool {
        self.commit().is_some()
    }

    /// Drops the draft if its record is no longer present.
    pub fn discard_unless(&mut self, exists: impl Fn(&RecordId) -> bool) -> bool {
        match self.editing_id() {
            Some(id) if !exists(id) => self.cancel(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bob() -> Record {
        Record::new("2", "Bob", "bob@x.io", "member")
    }

    #[test]
    fn draft_changes_stay_local_until_commit() {
        let original = bob();
        let mut editor = RowEditor::new();
        editor.begin(&original);
        assert!(editor.set_field(EditField::Name, "Robert"));
        assert_eq!(original.name, "Bob");

        let committed = editor.commit().unwrap();
        assert_eq!(committed.name, "Robert");
        assert_eq!(committed.id, original.id);
        assert!(!editor.is_editing());
    }

    #[test]
    fn begin_on_another_row_replaces_the_draft() {
        let mut editor = RowEditor::new();
        editor.begin(&bob());
        editor.set_field(EditField::Role, "admin");
        editor.begin(&Record::new("3", "Cid", "cid@x.io", "member"));
        assert_eq!(editor.editing_id(), Some(&RecordId::new("3")));
        assert_eq!(editor.draft().unwrap().role, "member");
    }

    #[test]
    fn idle_operations_are_noops() {
        let mut editor = RowEditor::new();
        assert!(!editor.set_field(EditField::Email, "x"));
        assert!(editor.commit().is_none());
        assert!(!editor.cancel());
        assert!(!editor.discard_unless(|_| false));
    }

    #[test]
    fn discard_targets_only_matching_draft() {
        let mut editor = RowEditor::new();
        editor.begin(&bob());
        assert!(!editor.discard_unless(|id| id.as_str() == "2"));
        assert!(editor.discard_unless(|_| false));
        assert_eq!(editor.state(), &EditState::Idle);
    }
}
