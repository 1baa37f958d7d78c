//! JSON listing of the inferred columns, for build steps that need the
//! column types without parsing the generated C.

use anyhow::Result;
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::infer::Column;

/// Write `columns` as pretty JSON to `path`.
///
/// The JSON goes to a hidden temp file next to `path` first and is then
/// renamed over it, so readers never see a half-written schema.
pub fn write_schema<P: AsRef<Path>>(path: P, columns: &[Column]) -> Result<()> {
    let path = path.as_ref();
    let dir = path.parent().unwrap_or_else(|| Path::new(""));
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "schema.json".into());
    let tmp_path: PathBuf = dir.join(format!(".{}.tmp", file_name));

    let mut tmp = fs::File::create(&tmp_path)
        .map_err(|e| io::Error::new(e.kind(), format!("creating {:?}: {}", tmp_path, e)))?;

    // pretty-print with a trailing newline
    serde_json::to_writer_pretty(&mut tmp, columns)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("serializing JSON: {}", e)))?;
    tmp.write_all(b"\n")?;
    drop(tmp);

    fs::rename(&tmp_path, path).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("renaming {:?} -> {:?}: {}", tmp_path, path, e),
        )
    })?;

    Ok(())
}
