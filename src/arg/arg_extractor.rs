use crate::arg::arg_matcher::ArgMatcher;
use crate::arg::args::{
    Arg, DateArg, DurationArg, GearArg, IntArg, LocationArg, ModeArg, NameArg, SceneArg,
    StatusArg, TimeArg, TimeSpanArg,
};
use crate::core::types::{ClockTime, ShootDate, ShotDuration, ShotStatus, TransportMode};
use crate::errors::Result;

pub trait ArgExtractor<'a>: ArgMatcher {
    type Out;

    fn try_extract(actual: &'a Arg) -> Option<Self::Out>;
}

/// The argument at `idx`, or the matcher's error when it is missing or of
/// another kind.
pub fn extract_at<'a, E: ArgExtractor<'a>>(args: &'a [Arg], idx: usize) -> Result<E::Out> {
    let a = args.get(idx);
    a.and_then(E::try_extract)
        .ok_or_else(|| E::expected_error(a))
}

pub fn find_first<'a, E: ArgExtractor<'a>>(args: &'a [Arg]) -> Option<E::Out> {
    args.iter().find_map(E::try_extract)
}

pub fn find_all<'a, E: ArgExtractor<'a>>(args: &'a [Arg]) -> Vec<E::Out> {
    args.iter().filter_map(E::try_extract).collect()
}

impl<'a> ArgExtractor<'a> for NameArg {
    type Out = &'a str;
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::Name(s) => Some(s),
            _ => None,
        }
    }
}

impl<'a> ArgExtractor<'a> for IntArg {
    type Out = i32;
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl<'a> ArgExtractor<'a> for LocationArg {
    type Out = &'a str;
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::Location(s) => Some(s),
            _ => None,
        }
    }
}

impl<'a> ArgExtractor<'a> for SceneArg {
    type Out = &'a str;
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::Scene(s) => Some(s),
            _ => None,
        }
    }
}

impl<'a> ArgExtractor<'a> for GearArg {
    type Out = &'a str;
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::Gear(s) => Some(s),
            _ => None,
        }
    }
}

impl<'a> ArgExtractor<'a> for StatusArg {
    type Out = ShotStatus; // Copy
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::Status(s) => Some(*s),
            _ => None,
        }
    }
}

impl<'a> ArgExtractor<'a> for ModeArg {
    type Out = TransportMode; // Copy
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::Mode(m) => Some(*m),
            _ => None,
        }
    }
}

impl<'a> ArgExtractor<'a> for TimeSpanArg {
    type Out = (ClockTime, ClockTime);
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::TimeSpan(s, e) => Some((*s, *e)),
            _ => None,
        }
    }
}

impl<'a> ArgExtractor<'a> for TimeArg {
    type Out = ClockTime;
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::Time(t) => Some(*t),
            _ => None,
        }
    }
}

impl<'a> ArgExtractor<'a> for DurationArg {
    type Out = ShotDuration;
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::Duration(d) => Some(*d),
            _ => None,
        }
    }
}

impl<'a> ArgExtractor<'a> for DateArg {
    type Out = ShootDate;
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::Date(d) => Some(*d),
            _ => None,
        }
    }
}
