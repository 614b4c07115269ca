use hifitime::Epoch;

use crate::spyglass_errors::SpyglassError;

/// Parse a catalog publication date despite its mixed granularity.
///
/// The archive reports publication dates in one of three textual layouts:
/// `YYYY-MM`, `YYYY-MM-DD`, or `YYYY-MM-DD HH:MM`. The matchers are tried from
/// least to most specific and the first strict match wins, so a record keeps
/// whatever precision its source provides. Unspecified components default to
/// the start of the period (first day of the month, midnight).
///
/// Argument
/// --------
/// * `raw`: the publication-date field as found in the catalog
///
/// Return
/// ------
/// * the parsed [`Epoch`], or [`SpyglassError::InvalidPublicationDate`] if the
///   field matches none of the three layouts. The recency sort needs a total
///   order over dates, so this failure is fatal to the run.
pub fn parse_pub_date(raw: &str) -> Result<Epoch, SpyglassError> {
    let trimmed = raw.trim();
    parse_year_month(trimmed)
        .or_else(|| parse_year_month_day(trimmed))
        .or_else(|| parse_full_timestamp(trimmed))
        .ok_or_else(|| SpyglassError::InvalidPublicationDate(raw.to_string()))
}

/// Strict `YYYY-MM` matcher.
fn parse_year_month(s: &str) -> Option<Epoch> {
    let mut parts = s.split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u8 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Epoch::maybe_from_gregorian_utc(year, month, 1, 0, 0, 0, 0).ok()
}

/// Strict `YYYY-MM-DD` matcher.
fn parse_year_month_day(s: &str) -> Option<Epoch> {
    let (year, month, day) = split_ymd(s)?;
    Epoch::maybe_from_gregorian_utc(year, month, day, 0, 0, 0, 0).ok()
}

/// Strict `YYYY-MM-DD HH:MM` matcher.
fn parse_full_timestamp(s: &str) -> Option<Epoch> {
    let (date, time) = s.split_once(' ')?;
    let (year, month, day) = split_ymd(date)?;
    let (hour, minute) = time.split_once(':')?;
    let hour: u8 = hour.parse().ok()?;
    let minute: u8 = minute.parse().ok()?;
    Epoch::maybe_from_gregorian_utc(year, month, day, hour, minute, 0, 0).ok()
}

fn split_ymd(s: &str) -> Option<(i32, u8, u8)> {
    let mut parts = s.split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u8 = parts.next()?.parse().ok()?;
    let day: u8 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((year, month, day))
}

#[cfg(test)]
mod pub_date_test {
    use super::*;

    #[test]
    fn test_year_month() {
        let epoch = parse_pub_date("2016-05").unwrap();
        assert_eq!(epoch, Epoch::from_gregorian_utc(2016, 5, 1, 0, 0, 0, 0));
    }

    #[test]
    fn test_year_month_day() {
        let epoch = parse_pub_date("2016-05-23").unwrap();
        assert_eq!(epoch, Epoch::from_gregorian_utc(2016, 5, 23, 0, 0, 0, 0));
    }

    #[test]
    fn test_full_timestamp() {
        let epoch = parse_pub_date("2016-05-23 14:30").unwrap();
        assert_eq!(epoch, Epoch::from_gregorian_utc(2016, 5, 23, 14, 30, 0, 0));
    }

    #[test]
    fn test_precision_is_retained() {
        let coarse = parse_pub_date("2016-05").unwrap();
        let fine = parse_pub_date("2016-05-23").unwrap();
        assert!(fine > coarse);
    }

    #[test]
    fn test_surrounding_whitespace() {
        let epoch = parse_pub_date(" 2016-05 ").unwrap();
        assert_eq!(epoch, Epoch::from_gregorian_utc(2016, 5, 1, 0, 0, 0, 0));
    }

    #[test]
    fn test_unparsable_dates_are_fatal() {
        assert!(parse_pub_date("2016").is_err());
        assert!(parse_pub_date("May 2016").is_err());
        assert!(parse_pub_date("2016-13").is_err());
        assert!(parse_pub_date("2016-05-23T14:30").is_err());
        assert!(parse_pub_date("").is_err());
    }
}
