//! Turn a CSV file into a C header holding the rows as a static array.
//!
//! Column types are guessed from the first data row only: each cell is an
//! `int`, a `float` or a string. The header gets a row struct, a table struct
//! (`data` + `count`) and static instances of both.

pub mod config;
pub mod emit;
pub mod error;
pub mod infer;
pub mod load;

use anyhow::{bail, Result};
use std::path::Path;
use tracing::info;

use crate::config::Settings;
use crate::emit::TableNames;
use crate::error::InputError;
use crate::infer::Column;

/// Output of [`generate`]: the inferred columns and the header text.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    pub columns: Vec<Column>,
    pub text: String,
}

/// Build the header text for in-memory `rows` (row 0 = column names).
///
/// Fails with [`InputError::TooFewRows`] when there is no data row, and in
/// strict mode with [`InputError::TypeMismatch`].
pub fn generate(
    rows: &[Vec<String>],
    names: &TableNames,
    guard: &str,
    strict: bool,
) -> Result<Generated> {
    if rows.len() < 2 {
        bail!(InputError::TooFewRows { rows: rows.len() });
    }
    let headers = &rows[0];
    let data_rows = &rows[1..];

    let columns = infer::derive_columns(headers, &data_rows[0]);
    if strict {
        infer::check_rows(&columns, data_rows)?;
    }

    let text = emit::render_header(&columns, data_rows, names, guard)?;
    Ok(Generated { columns, text })
}

/// Read `csv_path`, write the header to `header_path`, and the schema
/// sidecar if one is configured.
///
/// Validation happens before the header file is opened, so a rejected input
/// leaves no output behind.
#[tracing::instrument(
    level = "info",
    skip(csv_path, header_path, names, settings),
    fields(
        input = %csv_path.as_ref().display(),
        output = %header_path.as_ref().display()
    )
)]
pub fn csv_to_header<P: AsRef<Path>, Q: AsRef<Path>>(
    csv_path: P,
    header_path: Q,
    names: &TableNames,
    settings: &Settings,
) -> Result<Generated> {
    let rows = load::load_csv(&csv_path)?;
    let guard = emit::include_guard(&header_path);

    let generated = generate(&rows, names, &guard, settings.strict)?;
    emit::write_header(&header_path, &generated.text)?;
    info!(
        rows = rows.len() - 1,
        columns = generated.columns.len(),
        guard = %guard,
        "wrote header"
    );

    if let Some(schema_path) = &settings.schema_json {
        emit::write_schema(schema_path, &generated.columns)?;
        info!(path = %schema_path.display(), "wrote schema sidecar");
    }

    Ok(generated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infer::ColumnType;
    use std::fs;
    use tempfile::tempdir;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,csv2header=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    fn names() -> TableNames {
        TableNames::new("Row", "Table", "people")
    }

    #[test]
    fn test_csv_to_header_example() -> Result<()> {
        init_test_logging();
        let tmp = tempdir()?;
        let csv_path = tmp.path().join("people.csv");
        let h_path = tmp.path().join("people.data.h");
        fs::write(&csv_path, "id,name,score\n1,Alice,9.5\n2,Bob,7.0\n")?;

        let out = csv_to_header(&csv_path, &h_path, &names(), &Settings::default())?;

        let tys: Vec<ColumnType> = out.columns.iter().map(|c| c.ty).collect();
        assert_eq!(
            tys,
            vec![ColumnType::Int, ColumnType::String, ColumnType::Float]
        );

        let text = fs::read_to_string(&h_path)?;
        assert_eq!(text, out.text);
        assert!(text.starts_with("#ifndef PEOPLE_DATA_H\n#define PEOPLE_DATA_H\n"));
        assert!(text.contains("    int id;\n    const char *name;\n    float score;\n"));
        assert!(text.contains("static const Row people_rows[] = {\n"));
        assert!(text.contains("    .count = 2\n"));
        assert!(text.ends_with("};\n\n#endif\n"));
        Ok(())
    }

    #[test]
    fn test_header_only_csv_writes_nothing() -> Result<()> {
        init_test_logging();
        let tmp = tempdir()?;
        let csv_path = tmp.path().join("empty.csv");
        let h_path = tmp.path().join("empty.h");
        fs::write(&csv_path, "id,name\n")?;

        let err = csv_to_header(&csv_path, &h_path, &names(), &Settings::default()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<InputError>(),
            Some(&InputError::TooFewRows { rows: 1 })
        );
        assert!(!h_path.exists());
        Ok(())
    }

    #[test]
    fn test_generate_rejects_empty_input() {
        let err = generate(&[], &names(), "G", false).unwrap_err();
        assert_eq!(
            err.downcast_ref::<InputError>(),
            Some(&InputError::TooFewRows { rows: 0 })
        );
    }

    #[test]
    fn test_lenient_vs_strict() -> Result<()> {
        let rows: Vec<Vec<String>> = [["n", "s"], ["1", "a"], ["two", "b"]]
            .iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect();

        let lenient = generate(&rows, &names(), "G", false)?;
        assert!(lenient.text.contains("    { two, \"b\" },\n"));

        let err = generate(&rows, &names(), "G", true).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InputError>(),
            Some(InputError::TypeMismatch { row: 2, .. })
        ));
        Ok(())
    }

    #[test]
    fn test_strict_failure_writes_nothing() -> Result<()> {
        let tmp = tempdir()?;
        let csv_path = tmp.path().join("bad.csv");
        let h_path = tmp.path().join("bad.h");
        fs::write(&csv_path, "x\n1.5\nnope\n")?;
        let settings = Settings {
            strict: true,
            schema_json: None,
        };

        assert!(csv_to_header(&csv_path, &h_path, &names(), &settings).is_err());
        assert!(!h_path.exists());
        Ok(())
    }

    #[test]
    fn test_schema_sidecar_written() -> Result<()> {
        let tmp = tempdir()?;
        let csv_path = tmp.path().join("t.csv");
        let h_path = tmp.path().join("t.h");
        let json_path = tmp.path().join("t.json");
        fs::write(&csv_path, "a,b\n1,x\n")?;
        let settings = Settings {
            strict: false,
            schema_json: Some(json_path.clone()),
        };

        csv_to_header(&csv_path, &h_path, &names(), &settings)?;

        let cols: Vec<Column> = serde_json::from_str(&fs::read_to_string(&json_path)?)?;
        assert_eq!(cols.len(), 2);
        assert_eq!(cols[0].ty, ColumnType::Int);
        assert_eq!(cols[1].ty, ColumnType::String);
        Ok(())
    }

    #[test]
    fn test_missing_input_is_error() {
        let tmp = tempdir().unwrap();
        let res = csv_to_header(
            tmp.path().join("missing.csv"),
            tmp.path().join("out.h"),
            &names(),
            &Settings::default(),
        );
        assert!(res.is_err());
        assert!(!tmp.path().join("out.h").exists());
    }
}
