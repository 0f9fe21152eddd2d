use crate::extensions::enums::valid_csv;
use std::fmt;
use std::marker::PhantomData;

use crate::core::aliases::EquipmentId;
use crate::core::types::{
    ClockTime, Flag, ShootDate, ShotDuration, ShotStatus, TransportMode,
};
use crate::errors::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Flag(Flag),
    Int(i32),
    Name(String),
    Date(ShootDate),
    Time(ClockTime),
    TimeSpan(ClockTime, ClockTime),
    Duration(ShotDuration),
    Location(String),
    Scene(String),
    Gear(EquipmentId),
    Status(ShotStatus),
    Mode(TransportMode),
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Flag(x) => write!(f, "{x}"),
            Arg::Int(x) => write!(f, "{x}"),
            Arg::Name(x) => write!(f, "\"{x}\""),
            Arg::Date(x) => write!(f, "{x}"),
            Arg::Time(x) => write!(f, "{x}"),
            Arg::TimeSpan(a, b) => write!(f, "{a}-{b}"),
            Arg::Duration(x) => write!(f, "{x}"),
            Arg::Location(x) if x.contains(char::is_whitespace) => write!(f, "@\"{x}\""),
            Arg::Location(x) => write!(f, "@{x}"),
            Arg::Scene(x) => write!(f, "#{x}"),
            Arg::Gear(x) => write!(f, "+{x}"),
            Arg::Status(x) => write!(f, "{x}"),
            Arg::Mode(x) => write!(f, "{x}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TokenStream {
    toks: Vec<String>,
    i: usize,
}
impl TokenStream {
    pub fn new(raw: &[String]) -> Self {
        Self {
            toks: raw.to_vec(),
            i: 0,
        }
    }
    pub fn eof(&self) -> bool {
        self.i >= self.toks.len()
    }
    pub fn peek(&self) -> Result<&str> {
        self.toks
            .get(self.i)
            .map(|s| s.as_str())
            .ok_or_else(|| Error::Parse("EOF".into()))
    }
    pub fn next(&mut self) -> Result<String> {
        let s = self.peek()?.to_string();
        self.i += 1;
        Ok(s)
    }
}

pub trait SingleTokenArg {
    fn accepts(tok: &str) -> bool;
    fn new(tok: &str) -> Result<Arg>;
}

pub trait MultiTokenArg: SingleTokenArg {
    fn starts_sequence(tok: &str) -> bool;
}

pub trait ArgFactory {
    fn can_start(&self, tok: &str) -> bool;
    fn parse(&self, ts: &mut TokenStream) -> Result<Arg>;
}

pub struct SingleTokenFactory<A: SingleTokenArg>(PhantomData<A>);
impl<A: SingleTokenArg> SingleTokenFactory<A> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}
impl<A: SingleTokenArg> ArgFactory for SingleTokenFactory<A> {
    fn can_start(&self, tok: &str) -> bool {
        A::accepts(tok)
    }
    fn parse(&self, ts: &mut TokenStream) -> Result<Arg> {
        let tok = ts.next()?;
        A::new(&tok)
    }
}

/// Joins tokens until the argument accepts them (a closing quote, usually).
pub struct MultiTokenFactory<A: MultiTokenArg>(PhantomData<A>);
impl<A: MultiTokenArg> MultiTokenFactory<A> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}
impl<A: MultiTokenArg> ArgFactory for MultiTokenFactory<A> {
    fn can_start(&self, tok: &str) -> bool {
        A::starts_sequence(tok)
    }
    fn parse(&self, ts: &mut TokenStream) -> Result<Arg> {
        let mut buf: Vec<String> = vec![ts.next()?];
        loop {
            let joined = buf.join(" ");
            if A::accepts(&joined) || ts.eof() {
                return A::new(&joined);
            }
            buf.push(ts.next()?);
        }
    }
}

fn is_quote(c: char) -> bool {
    c == '\'' || c == '"'
}

/// Text between matching quotes, if `value` is fully quoted and non-empty.
pub(crate) fn unquote(value: &str) -> Option<&str> {
    let q = value.chars().next().filter(|c| is_quote(*c))?;
    if value.len() < 2 || !value.ends_with(q) {
        return None;
    }
    let inner = &value[1..value.len() - 1];
    (!inner.trim().is_empty()).then_some(inner)
}

pub struct NameArg;
impl MultiTokenArg for NameArg {
    fn starts_sequence(value: &str) -> bool {
        value.starts_with(is_quote)
    }
}

impl SingleTokenArg for NameArg {
    fn accepts(value: &str) -> bool {
        unquote(value).is_some()
    }
    fn new(value: &str) -> Result<Arg> {
        match unquote(value) {
            Some(inner) => Ok(Arg::Name(inner.to_string())),
            None => Err(Error::Parse(
                "Name must contain text wrapped in single or double quotes.".into(),
            )),
        }
    }
}

/// `@Studio` or `@"Main Street"`.
pub struct LocationArg;
impl MultiTokenArg for LocationArg {
    fn starts_sequence(tok: &str) -> bool {
        tok.starts_with('@')
    }
}

impl SingleTokenArg for LocationArg {
    fn accepts(value: &str) -> bool {
        match value.strip_prefix('@') {
            Some(rest) if rest.starts_with(is_quote) => unquote(rest).is_some(),
            Some(rest) => !rest.is_empty() && !rest.contains(is_quote),
            None => false,
        }
    }
    fn new(value: &str) -> Result<Arg> {
        if !Self::accepts(value) {
            return Err(Error::Parse(format!(
                "Invalid location: '{}'. Use @<place> or @\"<place with spaces>\".",
                value
            )));
        }
        let rest = &value[1..];
        let place = unquote(rest).unwrap_or(rest);
        Ok(Arg::Location(place.trim().to_string()))
    }
}

fn tagged_word(value: &str, tag: char) -> Option<&str> {
    let rest = value.strip_prefix(tag)?;
    let ok = !rest.is_empty()
        && rest
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '/'));
    ok.then_some(rest)
}

/// `#12A`
pub struct SceneArg;
impl SingleTokenArg for SceneArg {
    fn accepts(value: &str) -> bool {
        tagged_word(value, '#').is_some()
    }
    fn new(value: &str) -> Result<Arg> {
        tagged_word(value, '#')
            .map(|s| Arg::Scene(s.to_string()))
            .ok_or_else(|| {
                Error::Parse(format!(
                    "Invalid scene number: '{}'. Expected '#<scene>' (e.g., #12A).",
                    value
                ))
            })
    }
}

/// `+cam-a`
pub struct GearArg;
impl SingleTokenArg for GearArg {
    fn accepts(value: &str) -> bool {
        tagged_word(value, '+').is_some()
    }
    fn new(value: &str) -> Result<Arg> {
        tagged_word(value, '+')
            .map(|s| Arg::Gear(s.to_string()))
            .ok_or_else(|| {
                Error::Parse(format!(
                    "Invalid equipment id: '{}'. Expected '+<id>' (e.g., +cam-a).",
                    value
                ))
            })
    }
}

pub struct FlagArg;
impl SingleTokenArg for FlagArg {
    fn accepts(value: &str) -> bool {
        Flag::try_from(value).is_ok()
    }
    fn new(value: &str) -> Result<Arg> {
        Ok(Arg::Flag(Flag::try_from(value).map_err(|_| {
            Error::Parse(format!(
                "Invalid flag: {}. Valid flags: {}",
                value,
                valid_csv::<Flag>()
            ))
        })?))
    }
}

pub struct StatusArg;
impl SingleTokenArg for StatusArg {
    fn accepts(value: &str) -> bool {
        ShotStatus::try_from(value).is_ok()
    }
    fn new(value: &str) -> Result<Arg> {
        Ok(Arg::Status(ShotStatus::try_from(value)?))
    }
}

pub struct ModeArg;
impl SingleTokenArg for ModeArg {
    fn accepts(value: &str) -> bool {
        TransportMode::try_from(value).is_ok()
    }
    fn new(value: &str) -> Result<Arg> {
        Ok(Arg::Mode(TransportMode::try_from(value)?))
    }
}

pub struct IntArg;
impl SingleTokenArg for IntArg {
    fn accepts(value: &str) -> bool {
        !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
    }
    fn new(value: &str) -> Result<Arg> {
        value
            .parse::<i32>()
            .map(Arg::Int)
            .map_err(|_| Error::Parse(format!("Expected an integer, got '{}'", value)))
    }
}

/// `09:00-10:30`; the end may fall on the next day.
pub struct TimeSpanArg;
impl TimeSpanArg {
    fn split(value: &str) -> Option<(ClockTime, ClockTime)> {
        let (a, b) = value.split_once('-')?;
        Some((
            ClockTime::try_from_str(a).ok()?,
            ClockTime::try_from_str(b).ok()?,
        ))
    }
}
impl SingleTokenArg for TimeSpanArg {
    fn accepts(value: &str) -> bool {
        Self::split(value).is_some()
    }
    fn new(value: &str) -> Result<Arg> {
        let (a, b) = Self::split(value).ok_or_else(|| {
            Error::Parse(format!(
                "Invalid time window: '{}'. Expected <start>-<end>, e.g. 09:00-10:30.",
                value
            ))
        })?;
        Ok(Arg::TimeSpan(a, b))
    }
}

pub struct TimeArg;
impl SingleTokenArg for TimeArg {
    fn accepts(value: &str) -> bool {
        ClockTime::try_from_str(value).is_ok()
    }
    fn new(value: &str) -> Result<Arg> {
        Ok(Arg::Time(ClockTime::try_from_str(value)?))
    }
}

/// Requires a unit (`2h`, `1.5h`, `90m`) so bare numbers stay ids.
pub struct DurationArg;
impl SingleTokenArg for DurationArg {
    fn accepts(value: &str) -> bool {
        let v = value.trim().to_ascii_lowercase();
        (v.ends_with('h') || v.ends_with('m')) && ShotDuration::try_from_str(&v).is_ok()
    }
    fn new(value: &str) -> Result<Arg> {
        Ok(Arg::Duration(ShotDuration::try_from_str(value)?))
    }
}

pub struct DateArg;
impl SingleTokenArg for DateArg {
    fn accepts(value: &str) -> bool {
        ShootDate::try_from_str(value).is_ok()
    }
    fn new(value: &str) -> Result<Arg> {
        Ok(Arg::Date(ShootDate::try_from_str(value)?))
    }
}
