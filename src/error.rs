use crate::infer::ColumnType;

/// Conditions in the CSV input that stop header generation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("CSV must have header + data (got {rows} row(s))")]
    TooFewRows { rows: usize },

    #[error("row {row}, column `{column}`: expected {expected}, got {value:?}")]
    TypeMismatch {
        row: usize,
        column: String,
        expected: ColumnType,
        value: String,
    },
}
