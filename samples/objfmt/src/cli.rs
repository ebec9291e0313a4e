use std::path::PathBuf;

use clap::ValueHint;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    /// One line per event, for terminals
    Compact,
    /// Newline-delimited JSON, for log collectors
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,wavefront=info,objfmt=info",
        env = "OBJFMT_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
    /// Skip directives other than `o` and `v` instead of failing, as long as they can't be
    /// mistaken for either
    #[arg(short, long)]
    pub skip_unknown: bool,
    /// Only check that the inputs parse; don't write anything
    #[arg(short, long)]
    pub check: bool,
    /// Where to write the formatted meshes; stdout if absent
    #[arg(short, long, value_hint = ValueHint::FilePath, conflicts_with = "check")]
    pub output: Option<PathBuf>,
    /// OBJ files to read
    #[arg(num_args = 1.., required = true, value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,
}

impl Cli {
    pub fn parse_options(&self) -> wavefront::Options {
        wavefront::Options {
            unknown_directives: if self.skip_unknown {
                wavefront::UnknownDirectives::Skip
            } else {
                wavefront::UnknownDirectives::Reject
            },
        }
    }
}

/// Send log output to stderr, so stdout only carries OBJ text
pub(crate) fn initialize_tracing(log_filter: &str, log_format: LogFormat) {
    let offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    let tsub = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::OffsetTime::new(
            offset,
            time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:3]"),
        ))
        .with_env_filter(log_filter);

    match log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Json => tsub.json().init(),
    }
}
