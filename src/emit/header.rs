use anyhow::{Context, Result};
use std::{
    fmt::Write as _,
    fs,
    io::{self, Write},
    path::Path,
};
use tracing::debug;

use super::escape::escape_c_string;
use crate::infer::{Column, ColumnType};

/// User-chosen C identifiers for the generated types and table instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNames {
    /// Row record typedef.
    pub row_struct: String,
    /// Table typedef wrapping `data` + `count`.
    pub table_struct: String,
    /// Static table instance; the array is named `<table_name>_rows`.
    pub table_name: String,
}

impl TableNames {
    pub fn new(
        row_struct: impl Into<String>,
        table_struct: impl Into<String>,
        table_name: impl Into<String>,
    ) -> Self {
        Self {
            row_struct: row_struct.into(),
            table_struct: table_struct.into(),
            table_name: table_name.into(),
        }
    }

    pub fn rows_name(&self) -> String {
        format!("{}_rows", self.table_name)
    }
}

fn field_decl(col: &Column) -> String {
    match col.ty {
        ColumnType::Int => format!("int {};", col.name),
        ColumnType::Float => format!("float {};", col.name),
        ColumnType::String => format!("const char *{};", col.name),
    }
}

fn cell_literal(ty: ColumnType, value: &str) -> String {
    match ty {
        ColumnType::String => format!("\"{}\"", escape_c_string(value)),
        // numeric text goes out exactly as read
        ColumnType::Int | ColumnType::Float => value.to_string(),
    }
}

/// Render the full header text.
///
/// `data_rows` are the CSV records after the header row. Each row yields one
/// array entry; its cells are paired with `columns` positionally and any
/// surplus on either side is dropped.
pub fn render_header(
    columns: &[Column],
    data_rows: &[Vec<String>],
    names: &TableNames,
    guard: &str,
) -> Result<String> {
    let mut h = String::new();
    let rows_name = names.rows_name();

    write!(h, "#ifndef {guard}\n#define {guard}\n\n")?;
    h.push_str("// Auto-generated from CSV\n\n");

    // Row struct
    h.push_str("typedef struct {\n");
    for col in columns {
        writeln!(h, "    {}", field_decl(col))?;
    }
    writeln!(h, "}} {};\n", names.row_struct)?;

    // Table struct
    h.push_str("typedef struct {\n");
    writeln!(h, "    const {} *data;", names.row_struct)?;
    h.push_str("    unsigned int count;\n");
    writeln!(h, "}} {};\n", names.table_struct)?;

    // Data
    writeln!(h, "static const {} {}[] = {{", names.row_struct, rows_name)?;
    for row in data_rows {
        let values: Vec<String> = columns
            .iter()
            .zip(row)
            .map(|(col, value)| cell_literal(col.ty, value))
            .collect();
        writeln!(h, "    {{ {} }},", values.join(", "))?;
    }
    h.push_str("};\n\n");

    // Table instance
    writeln!(h, "static const {} {} = {{", names.table_struct, names.table_name)?;
    writeln!(h, "    .data = {},", rows_name)?;
    writeln!(h, "    .count = {}", data_rows.len())?;
    h.push_str("};\n\n");

    h.push_str("#endif\n");

    debug!(
        columns = columns.len(),
        rows = data_rows.len(),
        bytes = h.len(),
        "rendered header"
    );
    Ok(h)
}

/// Create (or truncate) `path` and write `text` to it.
///
/// There is no temp-file dance here: a failed write leaves whatever bytes
/// already reached the file.
pub fn write_header<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    let path = path.as_ref();
    let mut f = fs::File::create(path)
        .map_err(|e| io::Error::new(e.kind(), format!("creating {:?}: {}", path, e)))?;
    f.write_all(text.as_bytes())
        .with_context(|| format!("writing header {:?}", path))?;
    Ok(())
}
