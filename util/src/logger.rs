//! Session logger
//!
//! Every record is prefixed with the session-elapsed time, the name of the
//! executable which owns the session and a three letter level tag. The
//! console copy has coloured tags, the session log file is kept plain.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External imports
use colored::{ColoredString, Colorize};
use log::{info, Level};
use std::fmt;
use thiserror::Error;

// Internal imports
use crate::session::{self, Session};

// Re-exports
pub use log::LevelFilter;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Library target whose records are capped at `DEBUG`.
const CAPPED_TARGET: &str = "mpcc_lib";

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Errors associated with initialising the logger.
#[derive(Debug, Error)]
pub enum LoggerInitError {
    #[error("The minimum log level must include INFO, found `{0}`")]
    InvalidMinLogLevel(LevelFilter),

    #[error("Cannot open the session log file: {0}")]
    LogFileInitError(std::io::Error),

    #[error("A logger has already been set: {0}")]
    FernInitError(log::SetLoggerError)
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Initialise the logger for the given session.
///
/// `min_level` must be `INFO` or more verbose. Per-stage traces from
/// `mpcc_lib` are capped at `DEBUG` whatever the level.
///
/// May only be called once per process.
pub fn logger_init(
    min_level: LevelFilter,
    session: &Session
) -> Result<(), LoggerInitError> {
    check_min_level(min_level)?;

    let exec_name = exec_name(session);
    let console_name = exec_name.clone();
    let file_name = exec_name;

    let log_file = fern::log_file(&session.log_file_path)
        .map_err(LoggerInitError::LogFileInitError)?;

    let console = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{}",
                format_line(&console_name, session::get_elapsed_seconds(), record.level(), message, true)
            ))
        })
        .chain(std::io::stdout());

    let file = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{}",
                format_line(&file_name, session::get_elapsed_seconds(), record.level(), message, false)
            ))
        })
        .chain(log_file);

    fern::Dispatch::new()
        .level(min_level)
        .level_for(CAPPED_TARGET, min_level.min(LevelFilter::Debug))
        .chain(console)
        .chain(file)
        .apply()
        .map_err(LoggerInitError::FernInitError)?;

    info!("Logging to {:?} at {:?}", session.log_file_path, min_level);

    Ok(())
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

fn check_min_level(min_level: LevelFilter) -> Result<(), LoggerInitError> {
    if min_level < Level::Info {
        Err(LoggerInitError::InvalidMinLogLevel(min_level))
    }
    else {
        Ok(())
    }
}

/// Name of the executable owning the session, taken from the log file name.
fn exec_name(session: &Session) -> String {
    session.log_file_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("exec"))
}

/// Format one log line.
fn format_line(
    exec_name: &str,
    elapsed_s: f64,
    level: Level,
    message: &fmt::Arguments,
    coloured: bool
) -> String {
    let tag = if coloured {
        colour_tag(level).to_string()
    }
    else {
        level_tag(level).to_string()
    };

    format!("[{:10.6} {} {}] {}", elapsed_s, exec_name, tag, message)
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Trace => "TRC",
        Level::Debug => "DBG",
        Level::Info  => "INF",
        Level::Warn  => "WRN",
        Level::Error => "ERR"
    }
}

fn colour_tag(level: Level) -> ColoredString {
    let tag = level_tag(level);
    match level {
        Level::Trace => tag.dimmed().italic(),
        Level::Debug => tag.dimmed(),
        Level::Info  => tag.normal(),
        Level::Warn  => tag.yellow(),
        Level::Error => tag.red().bold()
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
