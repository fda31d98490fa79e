use super::environment::Field;

/// One field whose value differs between two environments.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldChange {
    pub field: Field,
    pub left: String,
    pub right: String,
}

/// Result of comparing two resolved environments.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffResult {
    pub left_name: String,
    pub right_name: String,
    pub changes: Vec<FieldChange>,
}

impl DiffResult {
    /// Returns true if there are no differences.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}
