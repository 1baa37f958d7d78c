use anyhow::Result;
use clap::Parser;
use csv2header::{config::Settings, csv_to_header, emit::TableNames};
use std::{ffi::OsString, path::PathBuf, process};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

const USAGE: &str = "Usage: csv2header input.csv output.h RowStruct TableStruct table_name";

/// Convert a CSV file into a C header with a static table of rows.
#[derive(Parser, Debug, PartialEq)]
#[command(
    name = "csv2header",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    /// CSV file to read; the first row holds the column names.
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,
    /// Header file to write.
    #[arg(allow_hyphen_values = true)]
    output: PathBuf,
    /// Name of the row struct typedef.
    #[arg(allow_hyphen_values = true)]
    row_struct: String,
    /// Name of the table struct typedef.
    #[arg(allow_hyphen_values = true)]
    table_struct: String,
    /// Name of the static table instance.
    #[arg(allow_hyphen_values = true)]
    table_name: String,
}

/// `None` unless there are exactly five arguments after the program name.
///
/// The count is taken on the raw arguments, so a `--` counts like any other
/// argument.
fn parse_args<I, T>(args: I) -> Option<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut raw = args.into_iter().map(Into::into);
    let prog = raw.next()?;
    let rest: Vec<OsString> = raw.collect();
    if rest.len() != 5 {
        return None;
    }
    // everything after the program name is a value
    let argv = std::iter::once(prog)
        .chain(std::iter::once(OsString::from("--")))
        .chain(rest);
    Args::try_parse_from(argv).ok()
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    // stdout is kept for the usage line
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) arguments ────────────────────────────────────────────────
    let Some(args) = parse_args(std::env::args_os()) else {
        println!("{}", USAGE);
        process::exit(1);
    };
    let settings = Settings::from_env();
    debug!(?args, ?settings, "startup");

    // ─── 3) convert ──────────────────────────────────────────────────
    let names = TableNames::new(args.row_struct, args.table_struct, args.table_name);
    let generated = csv_to_header(&args.input, &args.output, &names, &settings)?;

    info!(
        columns = generated.columns.len(),
        output = %args.output.display(),
        "done"
    );
    Ok(())
}
