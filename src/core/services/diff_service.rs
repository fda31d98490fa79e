use crate::core::models::diff_result::{DiffResult, FieldChange};
use crate::core::models::environment::{EnvironmentConfig, Field};

/// Compares two resolved records field by field.
pub struct DiffService;

impl DiffService {
    /// Fields whose values differ, in `Field::ALL` order.
    ///
    /// Both records always carry all six fields, so a diff only ever
    /// reports changed values.
    pub fn diff(
        &self,
        left: &EnvironmentConfig,
        right: &EnvironmentConfig,
        left_name: &str,
        right_name: &str,
    ) -> DiffResult {
        let changes = Field::ALL
            .into_iter()
            .filter_map(|field| {
                let (l, r) = (left.value_of(field), right.value_of(field));
                (l != r).then_some(FieldChange {
                    field,
                    left: l,
                    right: r,
                })
            })
            .collect();

        DiffResult {
            left_name: left_name.to_string(),
            right_name: right_name.to_string(),
            changes,
        }
    }
}
