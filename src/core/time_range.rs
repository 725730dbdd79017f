//! Parsing of compact time ranges such as `1h30m`, `+1h` or `-5m`.
//!
//! A time range is an optional sign followed by one or more `<digits>h` / `<digits>m` groups in
//! either order. The sign applies to every group. Units that are not present stay `None` so
//! callers can tell "absent" from "explicit zero".

use crate::core::error::{ErrorCode, Result, StatusError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeRange {
    pub hours: Option<i64>,
    pub minutes: Option<i64>,
}

impl TimeRange {
    /// Total length in seconds, `None` on overflow
    pub fn total_seconds(&self) -> Option<i64> {
        let hours = self.hours.unwrap_or(0).checked_mul(60 * 60)?;
        let minutes = self.minutes.unwrap_or(0).checked_mul(60)?;
        hours.checked_add(minutes)
    }
}

fn invalid_time_range(input: &str) -> StatusError {
    StatusError::user(
        ErrorCode::ParseInvalidTimeRange,
        format!("Invalid time range: {input}"),
    )
}

pub fn parse_time_range(input: &str) -> Result<TimeRange> {
    let (negative, body) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    if body.is_empty() {
        return Err(invalid_time_range(input));
    }

    let mut range = TimeRange::default();
    let mut digits = String::new();

    for ch in body.chars() {
        match ch {
            '0'..='9' => digits.push(ch),
            'h' | 'm' if !digits.is_empty() => {
                let slot = if ch == 'h' {
                    &mut range.hours
                } else {
                    &mut range.minutes
                };
                if slot.is_some() {
                    return Err(invalid_time_range(input));
                }

                let value: i64 = digits.parse().map_err(|_| invalid_time_range(input))?;
                *slot = Some(if negative { -value } else { value });
                digits.clear();
            }
            _ => return Err(invalid_time_range(input)),
        }
    }

    // Trailing digits without a unit
    if !digits.is_empty() {
        return Err(invalid_time_range(input));
    }

    // A non-empty body either fills a unit or fails above
    debug_assert!(range.hours.is_some() || range.minutes.is_some());

    log::debug!("Parsed time range {input:?} into {range:?}");
    Ok(range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_and_minutes() -> Result<()> {
        let range = parse_time_range("1h30m")?;
        assert_eq!(
            range,
            TimeRange {
                hours: Some(1),
                minutes: Some(30)
            }
        );
        Ok(())
    }

    #[test]
    fn test_sign_applies_to_every_group() -> Result<()> {
        let range = parse_time_range("-1h30m")?;
        assert_eq!(range.hours, Some(-1));
        assert_eq!(range.minutes, Some(-30));

        let range = parse_time_range("+2h")?;
        assert_eq!(range.hours, Some(2));
        assert_eq!(range.minutes, None);
        Ok(())
    }

    #[test]
    fn test_units_in_either_order() -> Result<()> {
        let range = parse_time_range("15m2h")?;
        assert_eq!(range.hours, Some(2));
        assert_eq!(range.minutes, Some(15));
        Ok(())
    }

    #[test]
    fn test_explicit_zero_is_not_absent() -> Result<()> {
        let range = parse_time_range("0m")?;
        assert_eq!(range.minutes, Some(0));
        assert_eq!(range.hours, None);
        Ok(())
    }

    #[test]
    fn test_total_seconds() -> Result<()> {
        assert_eq!(parse_time_range("1h1m")?.total_seconds(), Some(3660));
        assert_eq!(parse_time_range("-120m")?.total_seconds(), Some(-7200));
        Ok(())
    }

    #[test]
    fn test_rejects_garbage() {
        for input in ["abc", "", "+", "-", "1", "1h30", "h", "1x", "1h1h", "1h 30m", "+-1h"] {
            let err = parse_time_range(input).unwrap_err();
            assert!(
                err.is_code(ErrorCode::ParseInvalidTimeRange),
                "expected ParseInvalidTimeRange for {input:?}"
            );
        }
    }

    #[test]
    fn test_accepted_ranges_set_a_unit() -> Result<()> {
        for input in ["0h", "-0m", "+7m", "2h", "1m1h"] {
            let range = parse_time_range(input)?;
            assert!(
                range.hours.is_some() || range.minutes.is_some(),
                "no unit set for {input:?}"
            );
        }
        Ok(())
    }

    #[test]
    fn test_rejects_overflowing_numbers() {
        let err = parse_time_range("99999999999999999999m").unwrap_err();
        assert!(err.is_code(ErrorCode::ParseInvalidTimeRange));
    }
}
