use crate::errors::{Error, Result};
use crate::extensions::enums::{parse_enum, valid_csv};
use crate::extensions::string::ToDashSeparators;
use chrono::{Datelike, Local, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

pub const MINUTES_PER_DAY: i32 = 24 * 60;
/// Shortest schedulable shot, in minutes.
pub const MIN_SHOT_MINUTES: i32 = 5;
/// Floor for the hand-over between two shots at the same location.
pub const MIN_SETUP_MINUTES: i32 = 20;
/// Longest schedulable shot: one full day.
pub const MAX_SHOT_MINUTES: i32 = MINUTES_PER_DAY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum GlobalCommand {
    #[strum(serialize = "config", to_string = "config")]
    Config,
    #[strum(serialize = "plan", to_string = "plan")]
    Plan,
    #[strum(serialize = "check", to_string = "check")]
    Check,
    #[strum(serialize = "log", to_string = "log")]
    Log,
    #[strum(serialize = "save", to_string = "save")]
    Save,
    #[strum(serialize = "read", to_string = "read")]
    Read,
    #[strum(serialize = "man", to_string = "man")]
    Man,
}

impl GlobalCommand {
    pub fn try_from(s: &str) -> Result<Self> {
        parse_enum(s, "global command")
    }
}

/// Commands that act on one shot, or add a new one (`shot`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum ShotAction {
    #[strum(serialize = "shot", to_string = "shot")]
    Add,
    #[strum(serialize = "mod", to_string = "mod")]
    Modify,
    #[strum(serialize = "del", to_string = "del")]
    Delete,
    #[strum(serialize = "retake", to_string = "retake")]
    Retake,
    #[strum(serialize = "toggle", to_string = "toggle")]
    Toggle,
}

impl ShotAction {
    pub fn try_from(s: &str) -> Result<Self> {
        parse_enum(s, "shot action")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum GearAction {
    #[strum(serialize = "gear", to_string = "gear")]
    Assign,
    #[strum(serialize = "ungear", to_string = "ungear")]
    Unassign,
    #[strum(serialize = "prep", to_string = "prep")]
    Prepare,
    #[strum(serialize = "unprep", to_string = "unprep")]
    Unprepare,
}

impl GearAction {
    pub fn try_from(s: &str) -> Result<Self> {
        parse_enum(s, "gear action")
    }

    pub fn past_tense(self) -> &'static str {
        match self {
            GearAction::Assign => "Assigned",
            GearAction::Unassign => "Unassigned",
            GearAction::Prepare => "Prepared",
            GearAction::Unprepare => "Unprepared",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum TypeHelpCommand {
    #[strum(serialize = "date", to_string = "date")]
    Date,
    #[strum(serialize = "time", to_string = "time")]
    Time,
    #[strum(serialize = "duration", to_string = "duration")]
    Duration,
    #[strum(serialize = "modes", to_string = "modes")]
    Modes,
}

impl TypeHelpCommand {
    pub fn try_from(s: &str) -> Result<Self> {
        parse_enum(s, "type help command")
    }

    pub fn usage(&self) -> String {
        match self {
            TypeHelpCommand::Date => ShootDate::usage(),
            TypeHelpCommand::Time => ClockTime::usage(),
            TypeHelpCommand::Duration => ShotDuration::usage(),
            TypeHelpCommand::Modes => TransportMode::usage(),
        }
    }
}

// ---------------------------------------------------------------------------
// Shoot dates
// ---------------------------------------------------------------------------

/// A calendar day. Every date entering the system is normalized to this,
/// so equality, grouping and ordering all compare the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShootDate(pub NaiveDate);

#[derive(Copy, Clone, Debug, EnumIterDerive, AsRefStr, EnumString)]
pub enum DateFormat {
    #[strum(serialize = "%Y-%m-%d")]
    YmdDash,
    #[strum(serialize = "%m-%d-%Y")]
    MdYDash,
    #[strum(serialize = "%Y/%m/%d")]
    YmdSlash,
    #[strum(serialize = "%m/%d/%Y")]
    MdYSlash,
    #[strum(serialize = "%m-%d")]
    MdDash,
    #[strum(serialize = "%m/%d")]
    MdSlash,
    #[strum(serialize = "%b %d %Y")]
    MonDY,
    #[strum(serialize = "%b %d, %Y")]
    MonDCommaY,
    #[strum(serialize = "%b %d")]
    MonD,
}

#[derive(Debug, Clone)]
struct DateParseSpec {
    input: String,
    date_format: DateFormat,
}

impl DateFormat {
    fn build_parse_spec(self, input: &str) -> DateParseSpec {
        let current_year = Local::now().date_naive().year();
        match self {
            DateFormat::YmdDash | DateFormat::YmdSlash => DateParseSpec {
                input: input.to_dash_separators(),
                date_format: DateFormat::YmdDash,
            },
            DateFormat::MdYDash | DateFormat::MdYSlash => DateParseSpec {
                input: input.to_dash_separators(),
                date_format: DateFormat::MdYDash,
            },
            DateFormat::MdDash | DateFormat::MdSlash => DateParseSpec {
                input: format!("{current_year}-{}", input.to_dash_separators()),
                date_format: DateFormat::YmdDash,
            },
            DateFormat::MonDY | DateFormat::MonDCommaY => DateParseSpec {
                input: input.trim().to_owned(),
                date_format: self,
            },
            DateFormat::MonD => DateParseSpec {
                input: format!("{} {current_year}", input.trim()),
                date_format: DateFormat::MonDY,
            },
        }
    }
}

impl ShootDate {
    pub fn usage() -> String {
        let today = Local::now().date_naive();
        let formats = DateFormat::iter()
            .map(|df| today.format(df.as_ref()).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("Supported date formats: {}", formats)
    }

    fn error_message(input: &str) -> String {
        format!("Invalid date format: '{}'. {}", input.trim(), Self::usage())
    }

    pub fn try_from_str(input: &str) -> Result<Self> {
        for f in DateFormat::iter() {
            let spec = f.build_parse_spec(input);
            if let Ok(date) = NaiveDate::parse_from_str(&spec.input, spec.date_format.as_ref()) {
                return Ok(ShootDate(date));
            }
        }
        Err(Error::Parse(Self::error_message(input)))
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(ShootDate)
            .ok_or_else(|| Error::parse(format!("Invalid calendar day: {year}-{month}-{day}")))
    }

    /// Long form used in plan headers, e.g. `Fri, Oct 24 2025`.
    pub fn label(&self) -> String {
        self.0.format("%a, %b %d %Y").to_string()
    }
}

impl fmt::Display for ShootDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl Serialize for ShootDate {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ShootDate {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<ShootDate, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        ShootDate::try_from_str(&s).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Time of day
// ---------------------------------------------------------------------------

/// Minute of the day, always in `[0, 1439]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime(u16);

#[derive(Copy, Clone, Debug, EnumIterDerive, AsRefStr, EnumString)]
pub enum TimeFormat {
    #[strum(serialize = "%H:%M")]
    Hm24,
    #[strum(serialize = "%I:%M%p")]
    HmMeridian,
}

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Builds a time from any minute offset, wrapping into a single day.
    pub fn from_minutes(minutes: i32) -> Self {
        ClockTime(minutes.rem_euclid(MINUTES_PER_DAY) as u16)
    }

    pub fn from_hm(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(Error::Parse(format!(
                "Time out of range: {hour}:{minute:02}. Hours must be 0-23 and minutes 0-59."
            )));
        }
        Ok(ClockTime((hour * 60 + minute) as u16))
    }

    pub fn minutes(self) -> i32 {
        self.0 as i32
    }

    pub fn hour(self) -> u32 {
        (self.0 / 60) as u32
    }

    pub fn minute(self) -> u32 {
        (self.0 % 60) as u32
    }

    /// Strict parse for boundary input: `H:MM`, `HH:MM` or `H:MMam/pm`.
    pub fn try_from_str(s: &str) -> Result<Self> {
        let token = s.trim().to_ascii_uppercase();
        for f in TimeFormat::iter() {
            if let Ok(t) = NaiveTime::parse_from_str(&token, f.as_ref()) {
                return Self::from_hm(t.hour(), t.minute());
            }
        }
        Err(Error::Parse(Self::error_message(s)))
    }

    /// End of a shot starting here, wrapped onto the same clock face.
    pub fn plus(self, duration: ShotDuration) -> Self {
        Self::from_minutes(self.minutes().saturating_add(duration.minutes()))
    }

    pub fn usage() -> String {
        let now = Local::now().time();
        let time = NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap_or_default();
        let formats = TimeFormat::iter()
            .map(|fmt| time.format(fmt.as_ref()).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Supported time formats: {}. Windows are written <start>-<end>, e.g. 08:00-10:30.",
            formats
        )
    }

    fn error_message(input: &str) -> String {
        format!("Invalid time format: '{}'. {}", input.trim(), Self::usage())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<ClockTime, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        ClockTime::try_from_str(&s).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Durations
// ---------------------------------------------------------------------------

/// Elapsed shot time in whole minutes, kept within
/// [`MIN_SHOT_MINUTES`]..=[`MAX_SHOT_MINUTES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShotDuration {
    minutes: i32,
}

impl Default for ShotDuration {
    fn default() -> Self {
        ShotDuration {
            minutes: MIN_SHOT_MINUTES,
        }
    }
}

impl ShotDuration {
    pub fn from_minutes(minutes: i32) -> Self {
        ShotDuration {
            minutes: minutes.clamp(MIN_SHOT_MINUTES, MAX_SHOT_MINUTES),
        }
    }

    pub fn from_hours(hours: f64) -> Self {
        if !hours.is_finite() {
            return Self::default();
        }
        Self::from_minutes((hours * 60.0).round() as i32)
    }

    /// Duration between two clock times. An end before the start crosses
    /// midnight.
    pub fn between(start: ClockTime, end: ClockTime) -> Self {
        let mut minutes = end.minutes() - start.minutes();
        if minutes < 0 {
            minutes += MINUTES_PER_DAY;
        }
        Self::from_minutes(minutes)
    }

    pub fn minutes(self) -> i32 {
        self.minutes
    }

    pub fn hours(self) -> f64 {
        self.minutes as f64 / 60.0
    }

    /// Accepts `2h`, `1.5h`, `90m` or a bare number of hours.
    pub fn try_from_str(s: &str) -> Result<Self> {
        let token = s.trim().to_ascii_lowercase();
        let (number, per_unit) = if let Some(h) = token.strip_suffix('h') {
            (h, 60.0)
        } else if let Some(m) = token.strip_suffix('m') {
            (m, 1.0)
        } else {
            (token.as_str(), 60.0)
        };
        let value: f64 = number
            .trim()
            .parse()
            .map_err(|_| Error::Parse(Self::error_message(s)))?;
        if !value.is_finite() || value <= 0.0 {
            return Err(Error::Parse(format!(
                "Duration must be positive: '{}'.",
                s.trim()
            )));
        }
        let minutes = (value * per_unit).round();
        if minutes > f64::from(MAX_SHOT_MINUTES) {
            return Err(Error::Parse(format!(
                "Duration too long: '{}'. {}",
                s.trim(),
                Self::usage()
            )));
        }
        Ok(Self::from_minutes(minutes as i32))
    }

    pub fn usage() -> String {
        format!(
            "Durations are decimal hours or minutes, e.g. 2h, 1.5h, 90m. Minimum {MIN_SHOT_MINUTES} minutes, maximum {}h.",
            MAX_SHOT_MINUTES / 60
        )
    }

    fn error_message(input: &str) -> String {
        format!("Invalid duration: '{}'. {}", input.trim(), Self::usage())
    }
}

impl fmt::Display for ShotDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = format!("{:.2}", self.hours());
        let hours = hours.trim_end_matches('0').trim_end_matches('.');
        write!(f, "{hours}h")
    }
}

impl Serialize for ShotDuration {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ShotDuration {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<ShotDuration, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        ShotDuration::try_from_str(&s).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Status & transport
// ---------------------------------------------------------------------------

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ShotStatus {
    #[default]
    Pending,
    Done,
}

impl ShotStatus {
    pub fn try_from(s: &str) -> Result<Self> {
        parse_enum(s, "status")
    }

    pub fn toggled(self) -> Self {
        match self {
            ShotStatus::Pending => ShotStatus::Done,
            ShotStatus::Done => ShotStatus::Pending,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    #[default]
    Driving,
    Walking,
    Cycling,
    Train,
    Plane,
    Bus,
}

impl TransportMode {
    pub fn try_from(s: &str) -> Result<Self> {
        parse_enum(s, "transport mode")
    }

    /// Average door-to-door speed used to turn distance into minutes.
    pub fn speed_kmh(self) -> f64 {
        match self {
            TransportMode::Driving => 40.0,
            TransportMode::Walking => 5.0,
            TransportMode::Cycling => 15.0,
            TransportMode::Train => 80.0,
            TransportMode::Plane => 800.0,
            TransportMode::Bus => 30.0,
        }
    }

    /// Next mode in the plan view's cycling order.
    pub fn next(self) -> Self {
        match self {
            TransportMode::Driving => TransportMode::Walking,
            TransportMode::Walking => TransportMode::Bus,
            TransportMode::Bus => TransportMode::Train,
            TransportMode::Train => TransportMode::Plane,
            TransportMode::Plane => TransportMode::Cycling,
            TransportMode::Cycling => TransportMode::Driving,
        }
    }

    pub fn usage() -> String {
        let modes = TransportMode::iter()
            .map(|m| format!("{} ({} km/h)", m, m.speed_kmh()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("Transport modes: {}", modes)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TravelServiceKind {
    #[default]
    Estimate,
    Offline,
}

impl TravelServiceKind {
    pub fn help(&self) -> &'static str {
        match self {
            TravelServiceKind::Estimate => {
                "Deterministic offline distance estimate between two location names."
            }
            TravelServiceKind::Offline => {
                "No travel service; every leg is reported as unknown."
            }
        }
    }

    pub fn try_from(s: &str) -> Result<Self> {
        parse_enum(s, "travel service")
    }
}

// ---------------------------------------------------------------------------
// Booleans & flags
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", serialize = "True", to_string = "True")]
    TextTrue,

    #[strum(serialize = "false", serialize = "False", to_string = "False")]
    TextFalse,
}

impl BoolFormat {
    #[inline]
    fn to_bool(self) -> bool {
        matches!(self, BoolFormat::TextTrue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s.trim()) {
            Ok(fmt) => Ok(Bool(fmt.to_bool())),
            Err(_) => Err(Error::Parse(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Flag {
    #[strum(serialize = "-h", serialize = "-help", to_string = "-h")]
    Help,
}

impl Flag {
    pub fn try_from(s: &str) -> Result<Self> {
        parse_enum(s, "flag")
    }
}
