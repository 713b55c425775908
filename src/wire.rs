use crate::error::WireError;
use crate::slice_reader::SliceReader;
use crate::varint::read_unsigned_varint;

/// Largest field number allowed by protobuf (2^29 - 1)
const MAX_FIELD_NUMBER: u64 = 536_870_911;

/// A raw value as found on the wire.
///
/// Variable length values borrow from the input buffer, nothing is copied
/// until one of the typed accessors of [`Field`] is used.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum WireValue<'a> {
    /// Unknown varint (wire type = 0).
    Varint(u64),

    /// A 64-bit value (wire type = 1). Used for fixed64, sfixed64, double.
    I64([u8; 8]),

    /// Unknown variable length value (wire type = 2).
    VariableLength(&'a [u8]),

    /// A 32-bit value (wire type = 5). Used for fixed32, sfixed32, float.
    I32([u8; 4]),
}

impl WireValue<'_> {
    pub fn wire_type(&self) -> u8 {
        match self {
            WireValue::Varint(_) => 0,
            WireValue::I64(_) => 1,
            WireValue::VariableLength(_) => 2,
            WireValue::I32(_) => 5,
        }
    }
}

/// One tagged field.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Field<'a> {
    pub number: u32,
    pub value: WireValue<'a>,
}

impl<'a> Field<'a> {
    /// Gets the value as a string. This returns None if
    /// - the value type is not variable length
    /// - the data is not valid UTF-8
    pub fn as_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.as_bytes()?).ok()
    }

    /// Gets the value as bytes. This returns None if the value type is not variable length.
    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        match self.value {
            WireValue::VariableLength(data) => Some(data),
            _ => None,
        }
    }

    /// Gets the data of an embedded message. On the wire this is the same as [`Field::as_bytes`].
    #[inline]
    pub fn as_message(&self) -> Option<&'a [u8]> {
        self.as_bytes()
    }

    pub fn as_uint64(&self) -> Option<u64> {
        match self.value {
            WireValue::Varint(value) => Some(value),
            _ => None,
        }
    }

    /// Interprets a varint as protobuf `int64`.
    pub fn as_int64(&self) -> Option<i64> {
        self.as_uint64().map(|value| value as i64)
    }

    /// Interprets a varint as protobuf `int32`. Values outside the i32 range
    /// are truncated, which is how protobuf parsers treat them.
    pub fn as_int32(&self) -> Option<i32> {
        self.as_uint64().map(|value| value as i32)
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_uint64().map(|value| value != 0)
    }
}

/// Splits a buffer into its tagged fields, one at a time.
///
/// ## Example
///
/// ```
/// use kubeproto::wire::{FieldReader, WireValue};
///
/// // field 1: varint 150, field 2: "hi"
/// let data = [0x08, 0x96, 0x01, 0x12, 0x02, b'h', b'i'];
/// let mut reader = FieldReader::new(&data);
///
/// let field = reader.next_field().unwrap().unwrap();
/// assert_eq!(field.number, 1);
/// assert_eq!(field.value, WireValue::Varint(150));
///
/// let field = reader.next_field().unwrap().unwrap();
/// assert_eq!(field.number, 2);
/// assert_eq!(field.as_str(), Some("hi"));
///
/// assert!(reader.next_field().unwrap().is_none());
/// ```
pub struct FieldReader<'a> {
    reader: SliceReader<'a>,
}

impl<'a> FieldReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            reader: SliceReader::new(data),
        }
    }

    /// Number of bytes not consumed yet
    pub fn remaining(&self) -> usize {
        self.reader.len()
    }

    /// Reads the next field. Returns `Ok(None)` once the buffer is exhausted.
    pub fn next_field(&mut self) -> Result<Option<Field<'a>>, WireError> {
        if self.reader.is_empty() {
            return Ok(None);
        }

        let tag = read_unsigned_varint(&mut self.reader).ok_or(WireError::InvalidTag)?;
        let field_number = tag >> 3;
        if field_number == 0 || field_number > MAX_FIELD_NUMBER {
            return Err(WireError::InvalidFieldNumber(field_number));
        }
        let wire_type = (tag & 0x07) as u8;
        let value = read_value(&mut self.reader, wire_type)?;

        Ok(Some(Field {
            number: field_number as u32,
            value,
        }))
    }
}

fn read_value<'a>(data: &mut SliceReader<'a>, wire_type: u8) -> Result<WireValue<'a>, WireError> {
    let value = match wire_type {
        0 => WireValue::Varint(read_unsigned_varint(data).ok_or(WireError::ErrorDecodingVarint)?),
        1 => WireValue::I64(
            data.read_array::<8>()
                .ok_or(WireError::UnexpectedEndOfData)?,
        ),
        2 => {
            let length = read_unsigned_varint(data).ok_or(WireError::ErrorDecodingVarint)?;
            let length = usize::try_from(length).map_err(|_| WireError::UnexpectedEndOfData)?;
            let consumed = data.read(length).ok_or(WireError::UnexpectedEndOfData)?;
            WireValue::VariableLength(consumed)
        }
        // group start/end (deprecated, unsupported)
        // SGROUP = 3,
        // EGROUP = 4,
        5 => WireValue::I32(
            data.read_array::<4>()
                .ok_or(WireError::UnexpectedEndOfData)?,
        ),
        _ => return Err(WireError::UnsupportedWireType(wire_type)),
    };
    Ok(value)
}
