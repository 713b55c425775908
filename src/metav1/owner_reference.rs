use crate::error::DecodeError;
use crate::message::{for_each_field, skip_field, Message};

/// OwnerReference contains enough information to identify an owning object.
///
/// `controller` and `block_owner_deletion` are tri-state: `None` means the
/// field was not sent, which is not the same as an explicit `false`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct OwnerReference {
    /// API version of the referent. (field 5)
    pub api_version: String,
    /// Kind of the referent. (field 1)
    pub kind: String,
    /// Name of the referent. (field 3)
    pub name: String,
    /// UID of the referent. (field 4)
    pub uid: String,
    /// If true, this reference points to the managing controller. (field 6)
    pub controller: Option<bool>,
    /// If true, and the owner has the "foregroundDeletion" finalizer, the
    /// owner cannot be deleted until this reference is removed. (field 7)
    pub block_owner_deletion: Option<bool>,
}

impl Message for OwnerReference {
    const NAME: &'static str = "OwnerReference";

    fn unmarshal(&mut self, src: &[u8]) -> Result<(), DecodeError> {
        self.api_version.clear();
        self.kind.clear();
        self.name.clear();
        self.uid.clear();
        self.controller = None;
        self.block_owner_deletion = None;

        for_each_field(Self::NAME, src, |field| {
            match field.number {
                1 => field.merge_string(&mut self.kind, Self::NAME, "kind")?,
                3 => field.merge_string(&mut self.name, Self::NAME, "name")?,
                4 => field.merge_string(&mut self.uid, Self::NAME, "uid")?,
                5 => field.merge_string(&mut self.api_version, Self::NAME, "apiVersion")?,
                6 => self.controller = Some(field.read_bool(Self::NAME, "controller")?),
                7 => {
                    self.block_owner_deletion =
                        Some(field.read_bool(Self::NAME, "blockOwnerDeletion")?)
                }
                _ => skip_field(Self::NAME, &field),
            }
            Ok(())
        })
    }
}
