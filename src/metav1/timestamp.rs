use crate::error::DecodeError;
use crate::message::{for_each_field, skip_field, Message};

/// Timestamp is the wire representation of [`Time`](crate::Time):
/// seconds and nanoseconds since the Unix epoch.
///
/// Producers keep `nanos` within `0..=999_999_999`, also for negative
/// `seconds`. This is not checked when decoding.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp {
    /// Seconds of UTC time since 1970-01-01T00:00:00Z. (field 1)
    pub seconds: i64,
    /// Non-negative fractions of a second at nanosecond resolution. (field 2)
    pub nanos: i32,
}

impl Message for Timestamp {
    const NAME: &'static str = "Timestamp";

    fn unmarshal(&mut self, src: &[u8]) -> Result<(), DecodeError> {
        *self = Timestamp::default();

        for_each_field(Self::NAME, src, |field| {
            match field.number {
                1 => self.seconds = field.read_int64(Self::NAME, "seconds")?,
                2 => self.nanos = field.read_int32(Self::NAME, "nanos")?,
                _ => skip_field(Self::NAME, &field),
            }
            Ok(())
        })
    }
}
