use crate::error::DecodeError;
use crate::message::{for_each_field, skip_field, Message};

/// FieldsV1 stores a set of fields in a trie-like structure, serialized as JSON.
///
/// The format is defined by sigs.k8s.io/structured-merge-diff. The bytes are
/// carried as they are and never parsed here.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct FieldsV1 {
    /// The underlying serialization of this object. (field 1)
    pub raw: Vec<u8>,
}

impl Message for FieldsV1 {
    const NAME: &'static str = "FieldsV1";

    fn unmarshal(&mut self, src: &[u8]) -> Result<(), DecodeError> {
        self.raw.clear();

        for_each_field(Self::NAME, src, |field| match field.number {
            1 => field.merge_bytes(&mut self.raw, Self::NAME, "raw"),
            _ => {
                skip_field(Self::NAME, &field);
                Ok(())
            }
        })
    }
}
