// src/infer/mod.rs
use std::fmt;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::InputError;

/// Scalar kind of a column, guessed from a single sample cell.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Int,
    Float,
    String,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColumnType::Int => "int",
            ColumnType::Float => "float",
            ColumnType::String => "string",
        };
        f.write_str(s)
    }
}

/// A named column with its inferred type.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq, Hash)]
pub struct Column {
    pub name: String,
    pub ty: ColumnType,
}

/// Classify a single cell.
///
/// Surrounding whitespace is ignored. An integer is an optional sign followed
/// by one or more ASCII digits, with no width limit; anything else that
/// `f64` accepts is a float; the rest is a string.
pub fn infer_type(value: &str) -> ColumnType {
    let v = value.trim();
    if is_integer(v) {
        ColumnType::Int
    } else if v.parse::<f64>().is_ok() {
        ColumnType::Float
    } else {
        ColumnType::String
    }
}

fn is_integer(v: &str) -> bool {
    let digits = v.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(v);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Pair each header name with the type of the matching cell in `sample`.
///
/// Only as many columns as both rows have are produced.
pub fn derive_columns(headers: &[String], sample: &[String]) -> Vec<Column> {
    if headers.len() != sample.len() {
        warn!(
            headers = headers.len(),
            cells = sample.len(),
            "header and first data row differ in length; extra cells ignored"
        );
    }

    headers
        .iter()
        .zip(sample)
        .map(|(name, cell)| {
            let ty = infer_type(cell);
            debug!(column = %name, sample = %cell, %ty, "inferred column type");
            Column {
                name: name.clone(),
                ty,
            }
        })
        .collect()
}

/// Re-check every cell of the numeric columns against the column type.
///
/// `data_rows` starts at CSV record 1; errors report record indexes.
pub fn check_rows(columns: &[Column], data_rows: &[Vec<String>]) -> Result<()> {
    for (idx, row) in data_rows.iter().enumerate() {
        for (col, cell) in columns.iter().zip(row) {
            let ok = match (col.ty, infer_type(cell)) {
                (ColumnType::String, _) => true,
                (ColumnType::Int, ColumnType::Int) => true,
                (ColumnType::Float, ColumnType::Int | ColumnType::Float) => true,
                (ColumnType::Int | ColumnType::Float, _) => false,
            };
            if !ok {
                bail!(InputError::TypeMismatch {
                    row: idx + 1,
                    column: col.name.clone(),
                    expected: col.ty,
                    value: cell.clone(),
                });
            }
        }
    }
    Ok(())
}
