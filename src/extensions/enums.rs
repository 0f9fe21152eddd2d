use std::str::FromStr;
use strum::IntoEnumIterator;

use crate::errors::{Error, Result};

trait EnumValidCsv: IntoEnumIterator + AsRef<str> + Sized {
    fn valid_csv() -> String {
        Self::iter()
            .map(|v| v.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
impl<T> EnumValidCsv for T where T: IntoEnumIterator + AsRef<str> + Sized {}
pub fn valid_csv<T>() -> String
where
    T: IntoEnumIterator + AsRef<str> + Sized,
{
    <T as EnumValidCsv>::valid_csv()
}

/// Parses a strum enum, reporting the accepted spellings on failure.
/// `label` reads as "Invalid <label>: ...".
pub fn parse_enum<T>(s: &str, label: &str) -> Result<T>
where
    T: FromStr + IntoEnumIterator + AsRef<str>,
{
    T::from_str(s.trim()).map_err(|_| {
        Error::Parse(format!(
            "Invalid {label}: '{}'. Valid values: {}",
            s.trim(),
            valid_csv::<T>()
        ))
    })
}
