use crate::arg::args::{
    Arg, DateArg, DurationArg, FlagArg, GearArg, IntArg, LocationArg, ModeArg, NameArg, SceneArg,
    StatusArg, TimeArg, TimeSpanArg,
};
use crate::core::types::{ClockTime, Flag, ShootDate, ShotDuration, ShotStatus, TransportMode};
use crate::errors::Error;
use crate::extensions::enums::valid_csv;

pub trait ArgMatcher {
    fn matches_variant(actual: &Arg) -> bool;
    fn expected_error(provided: Option<&Arg>) -> Error;
}

fn got(provided: Option<&Arg>) -> String {
    match provided {
        Some(a) => format!("got {a}"),
        None => "got nothing".to_string(),
    }
}

impl ArgMatcher for NameArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::Name(_))
    }
    fn expected_error(provided: Option<&Arg>) -> Error {
        Error::Parse(format!("Expected a quoted name, {}", got(provided)))
    }
}

impl ArgMatcher for IntArg {
    fn matches_variant(a: &Arg) -> bool {
        matches!(a, Arg::Int(_))
    }
    fn expected_error(provided: Option<&Arg>) -> Error {
        Error::Parse(format!("Expected a shot id, {}", got(provided)))
    }
}

impl ArgMatcher for FlagArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::Flag(_))
    }
    fn expected_error(provided: Option<&Arg>) -> Error {
        Error::Parse(format!(
            "Expected a flag, {}. Valid flags: {}",
            got(provided),
            valid_csv::<Flag>()
        ))
    }
}

impl ArgMatcher for LocationArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::Location(_))
    }
    fn expected_error(provided: Option<&Arg>) -> Error {
        Error::Parse(format!(
            "Expected a location as @<place> or @\"<place>\", {}",
            got(provided)
        ))
    }
}

impl ArgMatcher for SceneArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::Scene(_))
    }
    fn expected_error(provided: Option<&Arg>) -> Error {
        Error::Parse(format!("Expected a scene number as #<scene>, {}", got(provided)))
    }
}

impl ArgMatcher for GearArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::Gear(_))
    }
    fn expected_error(provided: Option<&Arg>) -> Error {
        Error::Parse(format!("Expected an equipment id as +<id>, {}", got(provided)))
    }
}

impl ArgMatcher for StatusArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::Status(_))
    }
    fn expected_error(provided: Option<&Arg>) -> Error {
        Error::Parse(format!(
            "Expected a status, {}. Valid statuses: {}",
            got(provided),
            valid_csv::<ShotStatus>()
        ))
    }
}

impl ArgMatcher for ModeArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::Mode(_))
    }
    fn expected_error(provided: Option<&Arg>) -> Error {
        Error::Parse(format!(
            "Expected a transport mode, {}. Valid modes: {}",
            got(provided),
            valid_csv::<TransportMode>()
        ))
    }
}

impl ArgMatcher for TimeSpanArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::TimeSpan(..))
    }
    fn expected_error(provided: Option<&Arg>) -> Error {
        Error::Parse(format!(
            "Expected a time window <start>-<end>, {}. {}",
            got(provided),
            ClockTime::usage()
        ))
    }
}

impl ArgMatcher for TimeArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::Time(_))
    }
    fn expected_error(provided: Option<&Arg>) -> Error {
        Error::Parse(format!(
            "Expected a start time, {}. {}",
            got(provided),
            ClockTime::usage()
        ))
    }
}

impl ArgMatcher for DurationArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::Duration(_))
    }
    fn expected_error(provided: Option<&Arg>) -> Error {
        Error::Parse(format!(
            "Expected a duration, {}. {}",
            got(provided),
            ShotDuration::usage()
        ))
    }
}

impl ArgMatcher for DateArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::Date(_))
    }
    fn expected_error(provided: Option<&Arg>) -> Error {
        Error::Parse(format!(
            "Expected a valid date, {}. {}",
            got(provided),
            ShootDate::usage()
        ))
    }
}
