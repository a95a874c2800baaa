//! Microsecond-precision points in time.

use std::fmt;

use time::OffsetDateTime;

/// Microseconds since the Unix epoch (UTC).
///
/// Negative counts are instants before the epoch. The zero value is both the
/// epoch and the "invalid" timestamp; nothing distinguishes the two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(transparent)]
pub struct Timestamp(i64);

const _: () = assert!(std::mem::size_of::<Timestamp>() == std::mem::size_of::<i64>());

impl Timestamp {
    pub const MICROS_PER_SECOND: i64 = 1_000_000;

    /// Samples the system wall clock.
    #[must_use]
    pub fn now() -> Self {
        let now = OffsetDateTime::now_utc();
        Self(now.unix_timestamp() * Self::MICROS_PER_SECOND + i64::from(now.microsecond()))
    }

    /// The zero timestamp, used to mean "not set".
    #[must_use]
    pub const fn invalid() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn from_micros(micros: i64) -> Self {
        Self(micros)
    }

    /// Returns the raw microsecond count.
    ///
    /// Callers that need ordering compare these counts directly.
    #[must_use]
    pub const fn micros(&self) -> i64 {
        self.0
    }

    /// Returns false for the zero timestamp.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0 != 0
    }

    /// Whole seconds and the leftover microseconds, both truncated toward
    /// zero. For negative counts the remainder is negative too.
    const fn split(&self) -> (i64, i64) {
        (
            self.0 / Self::MICROS_PER_SECOND,
            self.0 % Self::MICROS_PER_SECOND,
        )
    }

    /// Renders `"<seconds>.<micros>"` with six-digit microseconds.
    ///
    /// Pre-epoch instants with a fractional part keep the sign on both
    /// halves: `-1_500_000` renders as `"-1.-500000"`.
    #[must_use]
    pub fn to_sec_dot_micro_string(&self) -> String {
        let (secs, micros) = self.split();
        format!("{}.{:06}", secs, micros)
    }

    /// Renders the UTC calendar time as `"YYYY-MM-DD HH:MM:SS"`, with a
    /// `".UUUUUU"` suffix when `show_microseconds` is set.
    #[must_use]
    pub fn to_formatted_string(&self, show_microseconds: bool) -> String {
        let (secs, micros) = self.split();
        // Every i64 microsecond count is within the `large-dates` range.
        let utc = OffsetDateTime::from_unix_timestamp(secs).unwrap_or(OffsetDateTime::UNIX_EPOCH);

        let date = format!(
            "{:4}-{:02}-{:02} {:02}:{:02}:{:02}",
            utc.year(),
            u8::from(utc.month()),
            utc.day(),
            utc.hour(),
            utc.minute(),
            utc.second(),
        );

        if show_microseconds {
            format!("{}.{:06}", date, micros)
        } else {
            date
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Timestamp {
    fn from(micros: i64) -> Self {
        Self(micros)
    }
}

impl From<Timestamp> for i64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl serde::Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let micros = i64::deserialize(deserializer)?;
        Ok(Self(micros))
    }
}
