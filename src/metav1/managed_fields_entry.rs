use crate::error::DecodeError;
use crate::message::{for_each_field, merge_optional_message, skip_field, Message};
use crate::metav1::{FieldsV1, Time};

/// ManagedFieldsEntry records which fields of an object a manager owns, and
/// the group version of the resource the field set applies to.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct ManagedFieldsEntry {
    /// Identifier of the workflow managing these fields. (field 1)
    pub manager: String,
    /// The operation that created this entry, `Apply` or `Update`. (field 2)
    pub operation: String,
    /// Version of the resource this field set applies to. (field 3)
    pub api_version: String,
    /// When the entry was last changed. (field 4)
    pub time: Option<Time>,
    // field 5 is reserved
    /// Discriminator for the fields format. Only "FieldsV1" exists. (field 6)
    pub fields_type: String,
    /// (field 7)
    pub fields_v1: Option<FieldsV1>,
    /// The subresource used to update the object, empty for the main
    /// resource. (field 8)
    pub subresource: String,
}

impl Message for ManagedFieldsEntry {
    const NAME: &'static str = "ManagedFieldsEntry";

    fn unmarshal(&mut self, src: &[u8]) -> Result<(), DecodeError> {
        self.manager.clear();
        self.operation.clear();
        self.api_version.clear();
        self.time = None;
        self.fields_type.clear();
        self.fields_v1 = None;
        self.subresource.clear();

        for_each_field(Self::NAME, src, |field| match field.number {
            1 => field.merge_string(&mut self.manager, Self::NAME, "manager"),
            2 => field.merge_string(&mut self.operation, Self::NAME, "operation"),
            3 => field.merge_string(&mut self.api_version, Self::NAME, "apiVersion"),
            4 => merge_optional_message(&mut self.time, &field, Self::NAME, "time"),
            6 => field.merge_string(&mut self.fields_type, Self::NAME, "fieldsType"),
            7 => merge_optional_message(&mut self.fields_v1, &field, Self::NAME, "fieldsV1"),
            8 => field.merge_string(&mut self.subresource, Self::NAME, "subresource"),
            _ => {
                skip_field(Self::NAME, &field);
                Ok(())
            }
        })
    }
}
