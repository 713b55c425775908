use std::ops::Deref;

use chrono::{DateTime, Utc};

use crate::error::DecodeError;
use crate::message::Message;
use crate::metav1::Timestamp;

const NANOS_PER_SECOND: i32 = 1_000_000_000;

/// A point in time with nanosecond precision, serialized as a [`Timestamp`].
///
/// The default value is the Unix epoch, which is what an empty
/// Timestamp message decodes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(DateTime<Utc>);

impl Default for Time {
    fn default() -> Self {
        Time(DateTime::UNIX_EPOCH)
    }
}

impl Time {
    pub fn new(time: DateTime<Utc>) -> Self {
        Time(time)
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// The wire representation of this time.
    pub fn to_timestamp(&self) -> Timestamp {
        Timestamp {
            seconds: self.0.timestamp(),
            // always below 2_000_000_000, also during leap seconds
            nanos: self.0.timestamp_subsec_nanos() as i32,
        }
    }
}

impl Deref for Time {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl From<DateTime<Utc>> for Time {
    fn from(time: DateTime<Utc>) -> Self {
        Time(time)
    }
}

impl From<Time> for DateTime<Utc> {
    fn from(time: Time) -> Self {
        time.0
    }
}

/// Converts seconds and nanoseconds since the epoch.
///
/// Nanoseconds outside of `0..1_000_000_000` are carried over into the
/// seconds, so `{seconds: 1, nanos: -1}` is 0.999999999s after the epoch.
impl TryFrom<Timestamp> for Time {
    type Error = DecodeError;

    fn try_from(ts: Timestamp) -> Result<Self, DecodeError> {
        let out_of_range = || DecodeError::TimestampOutOfRange {
            seconds: ts.seconds,
            nanos: ts.nanos,
        };
        let seconds = ts
            .seconds
            .checked_add(ts.nanos.div_euclid(NANOS_PER_SECOND).into())
            .ok_or_else(out_of_range)?;
        let nanos = ts.nanos.rem_euclid(NANOS_PER_SECOND) as u32;
        DateTime::from_timestamp(seconds, nanos)
            .map(Time)
            .ok_or_else(out_of_range)
    }
}

impl Message for Time {
    const NAME: &'static str = "Time";

    fn unmarshal(&mut self, src: &[u8]) -> Result<(), DecodeError> {
        let ts = Timestamp::decode(src)?;
        *self = Time::try_from(ts)?;
        Ok(())
    }
}
