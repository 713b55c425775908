use thiserror::Error;

/// Errors of the low level wire reader.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// Found tag that is either not valid protobuf or unsupported
    #[error("invalid field tag")]
    InvalidTag,
    /// Field number must be between 1 and 536,870,911
    #[error("invalid field number {0}")]
    InvalidFieldNumber(u64),
    #[error("unsupported wire type {0}")]
    UnsupportedWireType(u8),
    #[error("error decoding varint")]
    ErrorDecodingVarint,
    /// The remaining data is not long enough to read the expected length
    #[error("unexpected end of data")]
    UnexpectedEndOfData,
}

/// A failure to decode a message into its typed representation.
///
/// Errors of nested messages are wrapped in [`DecodeError::Nested`], once per
/// level, so the outermost error names the type the caller asked for and
/// [`DecodeError::innermost`] names the type that actually failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The next field header (or its payload) could not be read.
    #[error("cannot read next field in {message} message")]
    Malformed {
        message: &'static str,
        #[source]
        source: WireError,
    },
    /// A known field number carried a value of the wrong wire type.
    #[error("cannot read {message}.{field} (field {number}) as {expected}")]
    InvalidField {
        message: &'static str,
        field: &'static str,
        number: u32,
        expected: &'static str,
    },
    #[error("cannot unmarshal {message}.{field}")]
    Nested {
        message: &'static str,
        field: &'static str,
        #[source]
        source: Box<DecodeError>,
    },
    #[error("timestamp {seconds}s {nanos}ns is out of range")]
    TimestampOutOfRange { seconds: i64, nanos: i32 },
}

impl DecodeError {
    /// The name of the message type this error was raised for.
    /// For nested errors this is the outermost type.
    pub fn message(&self) -> &'static str {
        match self {
            DecodeError::Malformed { message, .. }
            | DecodeError::InvalidField { message, .. }
            | DecodeError::Nested { message, .. } => *message,
            DecodeError::TimestampOutOfRange { .. } => "Time",
        }
    }

    /// The error at the end of the nesting chain.
    pub fn innermost(&self) -> &DecodeError {
        self.chain().last().unwrap_or(self)
    }

    /// Iterates over the error and its nested causes, outermost first.
    pub fn chain(&self) -> impl Iterator<Item = &DecodeError> {
        std::iter::successors(Some(self), |&err| match err {
            DecodeError::Nested { source, .. } => Some(source.as_ref()),
            _ => None,
        })
    }

    pub(crate) fn nested(message: &'static str, field: &'static str, source: DecodeError) -> Self {
        DecodeError::Nested {
            message,
            field,
            source: Box::new(source),
        }
    }
}
