use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

use crate::core::aliases::ShotId;
use crate::core::models::Shot;

/// Error set shared by the scheduling core and the CLI front end.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Parsing & Routing --------------------------------------------------
    /// Malformed argument, time, date or duration token.
    #[error("Parse error: {0}")]
    Parse(String),

    /// No resolver or command match (CommandParser).
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    // ---- Scheduling / Domain -----------------------------------------------
    /// A candidate shot was refused because it overlaps an existing one.
    /// The detector itself reports conflicts as values; only the command
    /// layer turns one into this error.
    #[error("Shot conflicts with '{title}' (#{id}) on {date} at {window}.")]
    ScheduleConflict {
        title: String,
        id: ShotId,
        date: String,
        window: String,
    },

    #[error("No shot with id {0}.")]
    ShotNotFound(ShotId),

    /// Location/travel collaborator failure.
    #[error("Travel estimate unavailable: {0}")]
    Travel(String),

    // ---- Config -------------------------------------------------------------
    /// Any issue initializing/reading config (file missing, invalid JSON, etc.)
    #[error("Config error: {0}")]
    Config(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    #[error("{0}")]
    Domain(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
    pub fn unknown<S: Into<String>>(cmd: S) -> Self {
        Error::UnknownCommand(cmd.into())
    }
    pub fn travel<S: Into<String>>(msg: S) -> Self {
        Error::Travel(msg.into())
    }
    /// Refusal naming the shot that blocks the requested slot.
    pub fn conflict_with(shot: &Shot) -> Self {
        Error::ScheduleConflict {
            title: shot.title.clone(),
            id: shot.id,
            date: shot.date.to_string(),
            window: shot.window(),
        }
    }
}

// ----------------------- Small result helpers --------------------------------

/// Map an `Option<T>` into `Result<T, Error::Parse>` with a custom message.
pub fn require_parse<T, S: Into<String>>(opt: Option<T>, msg: S) -> Result<T> {
    opt.ok_or_else(|| Error::Parse(msg.into()))
}
