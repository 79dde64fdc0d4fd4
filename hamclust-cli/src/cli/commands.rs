//! Command implementation and argument parsing for the hamclust CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use hamclust_core::{
    ClusterReport, DEFAULT_SEPARATION, DEFAULT_WIDTH, HamclustBuilder, HamclustError,
    HamclustErrorCode, VectorSource,
};
use hamclust_providers_bitstring::{
    BitstringSource, BitstringSourceError, BitstringSourceErrorCode, MalformedLinePolicy,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "hamclust",
    about = "Cluster fixed-width binary vectors by Hamming separation."
)]
pub struct Cli {
    /// Path to the input file: a header line followed by one bit string per
    /// line.
    pub path: PathBuf,

    /// Width in bits of every input vector.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Minimum Hamming distance required between distinct clusters.
    #[arg(long, default_value_t = DEFAULT_SEPARATION)]
    pub separation: usize,

    /// Policy for lines that fail to parse.
    #[arg(long = "on-malformed", value_enum, default_value_t = OnMalformed::Reject)]
    pub on_malformed: OnMalformed,

    /// Override name for the data source (defaults to the file stem).
    #[arg(long)]
    pub name: Option<String>,
}

/// Malformed-line policies selectable on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OnMalformed {
    /// Fail the run on the first malformed line.
    Reject,
    /// Drop malformed lines with a warning.
    Skip,
}

impl std::fmt::Display for OnMalformed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Reject => "reject",
            Self::Skip => "skip",
        })
    }
}

impl From<OnMalformed> for MalformedLinePolicy {
    fn from(value: OnMalformed) -> Self {
        match value {
            OnMalformed::Reject => Self::Reject,
            OnMalformed::Skip => Self::Skip,
        }
    }
}

/// Errors surfaced while executing the CLI.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening the input source.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Bit-string ingestion failed.
    #[error(transparent)]
    Bitstring(#[from] BitstringSourceError),
    /// Core clustering failed.
    #[error(transparent)]
    Core(#[from] HamclustError),
}

impl CliError {
    /// Returns a stable, machine-readable error code for the variant.
    ///
    /// Wrapped errors report the code of their underlying failure so log
    /// consumers see one flat namespace.
    #[must_use]
    pub const fn code(&self) -> CliErrorCode {
        match self {
            Self::Io { .. } => CliErrorCode::Io,
            Self::Bitstring(error) => CliErrorCode::Bitstring(error.code()),
            Self::Core(error) => CliErrorCode::Core(error.code()),
        }
    }
}

/// Machine-readable error codes for [`CliError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CliErrorCode {
    /// File I/O failed while opening the input source.
    Io,
    /// Bit-string ingestion failed, carrying the provider's code.
    Bitstring(BitstringSourceErrorCode),
    /// Core clustering failed, carrying the core's code.
    Core(HamclustErrorCode),
}

impl CliErrorCode {
    /// Returns the symbolic identifier for logging and metrics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Io => "CLI_OPEN_INPUT",
            Self::Bitstring(code) => code.as_str(),
            Self::Core(code) => code.as_str(),
        }
    }
}

/// Summarises the outcome of a CLI run.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name reported for the data source.
    pub data_source: String,
    /// Counts produced by the clustering run.
    pub report: ClusterReport,
}

/// Executes the clustering run described by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading or execution fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use hamclust_cli::cli::{Cli, OnMalformed, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "header\n000\n111\n")?;
/// let cli = Cli {
///     path: file.path().to_path_buf(),
///     width: 3,
///     separation: 3,
///     on_malformed: OnMalformed::Reject,
///     name: None,
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.report.cluster_count(), 2);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(path = field::Empty, width = field::Empty, separation = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let Cli {
        path,
        width,
        separation,
        on_malformed,
        name,
    } = cli;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("width", field::display(width));
    span.record("separation", field::display(separation));

    let hamclust = HamclustBuilder::new()
        .with_width(width)
        .with_separation(separation)
        .build()?;

    let chosen_name = derive_data_source_name(&path, name.as_deref());
    let reader = open_input_reader(&path)?;
    let source = BitstringSource::try_from_reader(
        chosen_name,
        reader,
        hamclust.width(),
        on_malformed.into(),
    )?;
    let report = hamclust.run(&source)?;

    let summary = ExecutionSummary {
        data_source: source.name().to_owned(),
        report,
    };
    info!(
        data_source = summary.data_source.as_str(),
        clusters = summary.report.cluster_count(),
        "command completed"
    );
    Ok(summary)
}

#[instrument(name = "cli.open_input_reader", err, fields(path = field::Empty))]
pub(super) fn open_input_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "data_source".to_owned())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// The final line carries the single integer callers are after.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use hamclust_cli::cli::{ExecutionSummary, render_summary};
/// # use hamclust_core::ClusterReport;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     data_source: "demo".into(),
///     report: ClusterReport::new(4, 1),
/// };
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner())?;
/// assert!(text.ends_with("Number of clusters: 3\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(
        writer,
        "distinct vectors: {}",
        summary.report.distinct_vectors()
    )?;
    writeln!(
        writer,
        "Number of clusters: {}",
        summary.report.cluster_count()
    )?;
    Ok(())
}
