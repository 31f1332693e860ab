//! UTC datetime handling for feed timestamps.
//!
//! Feeds need two textual forms of the same instant: RFC 2822 for RSS
//! `<pubDate>` elements and RFC 3339 for JSON Feed `date_published`
//! fields. `DateTimeUtc` covers both without pulling in a timezone
//! database: input offsets are folded into UTC at parse time and every
//! accessor works on the UTC calendar fields.
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTimeUtc::parse("2024-06-15T14:30:45+02:00").unwrap();
//! assert_eq!(dt.to_rfc2822(), "Sat, 15 Jun 2024 12:30:45 GMT");
//! ```

/// A calendar instant, always expressed in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Parse an ISO 8601 date or datetime.
    ///
    /// Accepted shapes: `YYYY-MM-DD`, optionally followed by
    /// `THH:MM[:SS[.fraction]]` and a `Z` or `±HH[:]MM` offset.
    /// Offsets are normalized into UTC; fractional seconds are accepted
    /// and dropped. Returns `None` for anything else, including
    /// calendar-invalid dates.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();

        // Date part: "YYYY-MM-DD"
        if bytes.len() < 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }
        let mut dt = Self::new(
            digits4(&bytes[0..4])?,
            digits2(&bytes[5..7])?,
            digits2(&bytes[8..10])?,
            0,
            0,
            0,
        );

        let rest = &bytes[10..];
        if rest.is_empty() {
            return dt.is_valid().then_some(dt);
        }

        // Time part: "THH:MM" at minimum
        if !matches!(rest[0], b'T' | b't' | b' ') || rest.len() < 6 {
            return None;
        }
        let time = &rest[1..];
        if time[2] != b':' {
            return None;
        }
        dt.hour = digits2(&time[0..2])?;
        dt.minute = digits2(&time[3..5])?;

        let mut idx = 5;
        if time.len() >= 8 && time[5] == b':' {
            dt.second = digits2(&time[6..8])?;
            idx = 8;

            // Fractional seconds carry no weight in feed output
            if time.len() > idx && time[idx] == b'.' {
                let frac = time[idx + 1..]
                    .iter()
                    .take_while(|b| b.is_ascii_digit())
                    .count();
                if frac == 0 {
                    return None;
                }
                idx += 1 + frac;
            }
        }

        if !dt.is_valid() {
            return None;
        }

        let offset = parse_offset(&time[idx..])?;
        if offset == 0 {
            Some(dt)
        } else {
            Some(Self::from_unix_timestamp(dt.to_unix_timestamp() - offset))
        }
    }

    /// Convert seconds since the Unix epoch into UTC calendar fields.
    ///
    /// Years outside `0..=9999` saturate; pubDate years are four digits.
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn from_unix_timestamp(secs: i64) -> Self {
        let days = secs.div_euclid(86_400);
        let rem = secs.rem_euclid(86_400);
        let (year, month, day) = civil_from_days(days);

        Self {
            year: year.clamp(0, 9999) as u16,
            month,
            day,
            hour: (rem / 3600) as u8,
            minute: (rem / 60 % 60) as u8,
            second: (rem % 60) as u8,
        }
    }

    pub fn to_unix_timestamp(self) -> i64 {
        let days = days_from_civil(i64::from(self.year), i64::from(self.month), i64::from(self.day));
        days * 86_400
            + i64::from(self.hour) * 3600
            + i64::from(self.minute) * 60
            + i64::from(self.second)
    }

    /// Format as RFC 2822 for RSS `<pubDate>`.
    ///
    /// Returns: `Day, DD Mon YYYY HH:MM:SS GMT`
    pub fn to_rfc2822(self) -> String {
        const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
        const MONTHS: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];

        format!(
            "{}, {:02} {} {:04} {:02}:{:02}:{:02} GMT",
            WEEKDAYS[self.weekday_index()],
            self.day,
            MONTHS[(self.month - 1) as usize],
            self.year,
            self.hour,
            self.minute,
            self.second
        )
    }

    /// Format as RFC 3339 (ISO 8601) for JSON Feed dates.
    ///
    /// Returns: `YYYY-MM-DDTHH:MM:SSZ`
    pub fn to_rfc3339(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }

    const fn is_valid(self) -> bool {
        self.month >= 1
            && self.month <= 12
            && self.day >= 1
            && self.day <= days_in_month(self.year, self.month)
            && self.hour < 24
            && self.minute < 60
            && self.second < 60
    }

    // 1970-01-01 (day zero) was a Thursday
    #[inline]
    #[allow(clippy::cast_sign_loss)] // rem_euclid(7) is always 0-6
    fn weekday_index(self) -> usize {
        let days = days_from_civil(i64::from(self.year), i64::from(self.month), i64::from(self.day));
        (days + 4).rem_euclid(7) as usize
    }
}

#[inline]
#[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
const fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[inline]
const fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Days since 1970-01-01 for a civil date (Gregorian, proleptic).
const fn days_from_civil(y: i64, m: i64, d: i64) -> i64 {
    let y = if m <= 2 { y - 1 } else { y };
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = y - era * 400;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of `days_from_civil`: (year, month, day) for a day number.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + 719_468;
    let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    (if m <= 2 { y + 1 } else { y }, m as u8, d as u8)
}

/// Parse a trailing UTC designator or numeric offset into seconds.
///
/// Empty input means no offset was given; the instant is taken as UTC.
fn parse_offset(tz: &[u8]) -> Option<i64> {
    match tz {
        [] | [b'Z'] | [b'z'] => Some(0),
        [sign @ (b'+' | b'-'), rest @ ..] => {
            let (hours, minutes) = match rest.len() {
                2 => (digits2(&rest[0..2])?, 0),
                4 => (digits2(&rest[0..2])?, digits2(&rest[2..4])?),
                5 if rest[2] == b':' => (digits2(&rest[0..2])?, digits2(&rest[3..5])?),
                _ => return None,
            };
            if hours > 23 || minutes > 59 {
                return None;
            }
            let secs = i64::from(hours) * 3600 + i64::from(minutes) * 60;
            Some(if *sign == b'-' { -secs } else { secs })
        }
        _ => None,
    }
}

/// Parse 2-digit ASCII number
#[inline]
fn digits2(bytes: &[u8]) -> Option<u8> {
    match bytes {
        &[a, b] if a.is_ascii_digit() && b.is_ascii_digit() => Some((a - b'0') * 10 + (b - b'0')),
        _ => None,
    }
}

/// Parse 4-digit ASCII number
#[inline]
fn digits4(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    let mut i = 0;
    while i < 4 {
        if !bytes[i].is_ascii_digit() {
            return None;
        }
        result = result * 10 + u16::from(bytes[i] - b'0');
        i += 1;
    }
    Some(result)
}
