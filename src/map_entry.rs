//! Protobuf maps are sent as repeated entry messages with the key in field 1
//! and the value in field 2.

use std::collections::BTreeMap;

use crate::error::DecodeError;
use crate::message::{for_each_field, skip_field, Message};
use crate::wire::Field;

#[derive(Debug, Default)]
pub(crate) struct StringEntry {
    key: String,
    value: String,
}

impl Message for StringEntry {
    const NAME: &'static str = "StringEntry";

    fn unmarshal(&mut self, src: &[u8]) -> Result<(), DecodeError> {
        self.key.clear();
        self.value.clear();

        for_each_field(Self::NAME, src, |field| match field.number {
            1 => field.merge_string(&mut self.key, Self::NAME, "key"),
            2 => field.merge_string(&mut self.value, Self::NAME, "value"),
            _ => {
                skip_field(Self::NAME, &field);
                Ok(())
            }
        })
    }
}

#[derive(Debug, Default)]
pub(crate) struct BytesEntry {
    key: String,
    value: Vec<u8>,
}

impl Message for BytesEntry {
    const NAME: &'static str = "BytesEntry";

    fn unmarshal(&mut self, src: &[u8]) -> Result<(), DecodeError> {
        self.key.clear();
        self.value.clear();

        for_each_field(Self::NAME, src, |field| match field.number {
            1 => field.merge_string(&mut self.key, Self::NAME, "key"),
            2 => field.merge_bytes(&mut self.value, Self::NAME, "value"),
            _ => {
                skip_field(Self::NAME, &field);
                Ok(())
            }
        })
    }
}

/// Decodes one `map<string, string>` entry into `map`. Later keys win.
pub(crate) fn insert_string_entry(
    map: &mut BTreeMap<String, String>,
    field: &Field<'_>,
    message: &'static str,
    name: &'static str,
) -> Result<(), DecodeError> {
    let data = field.read_message(message, name)?;
    let entry = StringEntry::decode(data).map_err(|err| DecodeError::nested(message, name, err))?;
    map.insert(entry.key, entry.value);
    Ok(())
}

/// Decodes one `map<string, bytes>` entry into `map`. Later keys win.
pub(crate) fn insert_bytes_entry(
    map: &mut BTreeMap<String, Vec<u8>>,
    field: &Field<'_>,
    message: &'static str,
    name: &'static str,
) -> Result<(), DecodeError> {
    let data = field.read_message(message, name)?;
    let entry = BytesEntry::decode(data).map_err(|err| DecodeError::nested(message, name, err))?;
    map.insert(entry.key, entry.value);
    Ok(())
}
