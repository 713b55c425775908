use crate::error::DecodeError;
use crate::wire::{Field, FieldReader};

/// A type that can be decoded from protobuf bytes.
///
/// Decoding always starts by resetting the target to its default state, so
/// decoding into a value that was used before never leaves stale data behind.
/// Allocations owned by the target (strings, byte buffers, lists) are kept
/// where possible.
///
/// ## Example
///
/// ```
/// use kubeproto::{Message, TypeMeta};
///
/// // kind: "Pod", apiVersion: "v1"
/// let data = [0x0a, 0x03, b'P', b'o', b'd', 0x12, 0x02, b'v', b'1'];
/// let mut type_meta = TypeMeta::decode(&data).unwrap();
/// assert_eq!(type_meta.kind, "Pod");
/// assert_eq!(type_meta.api_version, "v1");
///
/// type_meta.unmarshal(&[]).unwrap();
/// assert_eq!(type_meta, TypeMeta::default());
/// ```
pub trait Message: Default {
    /// The schema name of the message, used in error messages
    const NAME: &'static str;

    /// Resets `self` and populates it from `src`.
    ///
    /// On error `self` is left in an unspecified, partially decoded state.
    fn unmarshal(&mut self, src: &[u8]) -> Result<(), DecodeError>;

    /// Decodes a new instance from `src`.
    fn decode(src: &[u8]) -> Result<Self, DecodeError> {
        let mut out = Self::default();
        out.unmarshal(src)?;
        Ok(out)
    }
}

/// Calls `handle` for every field in `src`, in wire order.
pub(crate) fn for_each_field<'a>(
    message: &'static str,
    src: &'a [u8],
    mut handle: impl FnMut(Field<'a>) -> Result<(), DecodeError>,
) -> Result<(), DecodeError> {
    let mut reader = FieldReader::new(src);
    while let Some(field) = reader
        .next_field()
        .map_err(|source| DecodeError::Malformed { message, source })?
    {
        handle(field)?;
    }
    Ok(())
}

/// Unknown fields are not an error.
pub(crate) fn skip_field(message: &'static str, field: &Field<'_>) {
    log::trace!(
        "skipping unknown field {} (wire type {}) in {} message",
        field.number,
        field.value.wire_type(),
        message
    );
}

impl<'a> Field<'a> {
    fn invalid(&self, message: &'static str, name: &'static str, expected: &'static str) -> DecodeError {
        DecodeError::InvalidField {
            message,
            field: name,
            number: self.number,
            expected,
        }
    }

    pub(crate) fn read_str(&self, message: &'static str, name: &'static str) -> Result<&'a str, DecodeError> {
        self.as_str().ok_or_else(|| self.invalid(message, name, "string"))
    }

    /// Replaces the contents of `dst`, reusing its allocation.
    pub(crate) fn merge_string(
        &self,
        dst: &mut String,
        message: &'static str,
        name: &'static str,
    ) -> Result<(), DecodeError> {
        let value = self.read_str(message, name)?;
        dst.clear();
        dst.push_str(value);
        Ok(())
    }

    pub(crate) fn read_bytes(&self, message: &'static str, name: &'static str) -> Result<&'a [u8], DecodeError> {
        self.as_bytes().ok_or_else(|| self.invalid(message, name, "bytes"))
    }

    /// Replaces the contents of `dst`, reusing its allocation.
    pub(crate) fn merge_bytes(
        &self,
        dst: &mut Vec<u8>,
        message: &'static str,
        name: &'static str,
    ) -> Result<(), DecodeError> {
        let value = self.read_bytes(message, name)?;
        dst.clear();
        dst.extend_from_slice(value);
        Ok(())
    }

    pub(crate) fn read_bool(&self, message: &'static str, name: &'static str) -> Result<bool, DecodeError> {
        self.as_bool().ok_or_else(|| self.invalid(message, name, "bool"))
    }

    pub(crate) fn read_int32(&self, message: &'static str, name: &'static str) -> Result<i32, DecodeError> {
        self.as_int32().ok_or_else(|| self.invalid(message, name, "int32"))
    }

    pub(crate) fn read_int64(&self, message: &'static str, name: &'static str) -> Result<i64, DecodeError> {
        self.as_int64().ok_or_else(|| self.invalid(message, name, "int64"))
    }

    pub(crate) fn read_message(&self, message: &'static str, name: &'static str) -> Result<&'a [u8], DecodeError> {
        self.as_message().ok_or_else(|| self.invalid(message, name, "message"))
    }
}

/// Decodes an embedded message field into `target`.
pub(crate) fn merge_message<M: Message>(
    target: &mut M,
    field: &Field<'_>,
    message: &'static str,
    name: &'static str,
) -> Result<(), DecodeError> {
    let data = field.read_message(message, name)?;
    target
        .unmarshal(data)
        .map_err(|err| DecodeError::nested(message, name, err))
}

/// Decodes an optional embedded message field. The value is created on first
/// use and decoded in place when the field occurs again.
pub(crate) fn merge_optional_message<M: Message>(
    slot: &mut Option<M>,
    field: &Field<'_>,
    message: &'static str,
    name: &'static str,
) -> Result<(), DecodeError> {
    let data = field.read_message(message, name)?;
    slot.get_or_insert_with(M::default)
        .unmarshal(data)
        .map_err(|err| DecodeError::nested(message, name, err))
}

/// Decodes one element of a repeated message field and appends it.
pub(crate) fn push_message<M: Message>(
    items: &mut Vec<M>,
    field: &Field<'_>,
    message: &'static str,
    name: &'static str,
) -> Result<(), DecodeError> {
    let data = field.read_message(message, name)?;
    let item = M::decode(data).map_err(|err| DecodeError::nested(message, name, err))?;
    items.push(item);
    Ok(())
}
