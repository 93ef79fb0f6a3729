//! Display formatting for field values.
//!
//! The text field shows its value through a strftime format string.
//! A malformed format is a recoverable error: it is reported once and
//! the field falls back to [`DEFAULT_FORMAT`].

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDateTime;
use thiserror::Error;

/// Display format used when none is configured.
pub const DEFAULT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Error raised when a display format string cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// The strftime string contains an unknown specifier.
    #[error("invalid display format `{0}`")]
    InvalidFormat(String),
}

/// Format `value` with a strftime display format.
pub fn try_format(value: NaiveDateTime, format: &str) -> Result<String, FormatError> {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(FormatError::InvalidFormat(format.to_string()));
    }
    Ok(value.format_with_items(items.into_iter()).to_string())
}

/// Format `value` for the text field.
///
/// Uses `format` when given, [`DEFAULT_FORMAT`] otherwise. A malformed
/// format is logged and the default is used instead.
#[must_use]
pub fn display_value(value: NaiveDateTime, format: Option<&str>) -> String {
    let fmt = format.unwrap_or(DEFAULT_FORMAT);
    match try_format(value, fmt) {
        Ok(text) => text,
        Err(err) => {
            log::warn!("{err}; falling back to `{DEFAULT_FORMAT}`");
            try_format(value, DEFAULT_FORMAT).unwrap_or_default()
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .expect("valid date")
            .and_hms_opt(9, 30, 0)
            .expect("valid time")
    }

    #[test]
    fn formats_with_default() {
        assert_eq!(display_value(sample(), None), "2024-03-01 09:30");
    }

    #[test]
    fn formats_with_custom_format() {
        assert_eq!(display_value(sample(), Some("%d/%m/%Y")), "01/03/2024");
    }

    #[test]
    fn invalid_format_is_an_error() {
        assert_eq!(
            try_format(sample(), "%Q"),
            Err(FormatError::InvalidFormat("%Q".to_string()))
        );
    }

    #[test]
    fn invalid_format_falls_back_to_default() {
        assert_eq!(display_value(sample(), Some("%Q")), "2024-03-01 09:30");
    }
}
