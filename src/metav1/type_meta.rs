use crate::error::DecodeError;
use crate::message::{for_each_field, skip_field, Message};

/// TypeMeta describes an individual object with strings representing the type
/// of the object and its API schema version.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct TypeMeta {
    /// The REST resource this object represents, in CamelCase. (field 1)
    pub kind: String,
    /// The versioned schema of this representation of an object. (field 2)
    pub api_version: String,
}

impl Message for TypeMeta {
    const NAME: &'static str = "TypeMeta";

    fn unmarshal(&mut self, src: &[u8]) -> Result<(), DecodeError> {
        self.kind.clear();
        self.api_version.clear();

        for_each_field(Self::NAME, src, |field| match field.number {
            1 => field.merge_string(&mut self.kind, Self::NAME, "kind"),
            2 => field.merge_string(&mut self.api_version, Self::NAME, "apiVersion"),
            _ => {
                skip_field(Self::NAME, &field);
                Ok(())
            }
        })
    }
}
