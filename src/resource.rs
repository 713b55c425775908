//! Top level API objects.
//!
//! Resources do not carry their own `kind` and `apiVersion` in the protobuf
//! encoding used here, so the decoder stamps them from [`KNOWN_KINDS`].

use crate::error::DecodeError;
use crate::message::{for_each_field, merge_message, Message};
use crate::metav1::{ObjectMeta, TypeMeta};
use crate::wire::Field;

/// The fixed `kind` and `apiVersion` of a resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeIdentity {
    pub kind: &'static str,
    pub api_version: &'static str,
}

impl TypeIdentity {
    /// Overwrites `type_meta` with this identity.
    pub fn stamp(&self, type_meta: &mut TypeMeta) {
        type_meta.kind.clear();
        type_meta.kind.push_str(self.kind);
        type_meta.api_version.clear();
        type_meta.api_version.push_str(self.api_version);
    }
}

impl From<TypeIdentity> for TypeMeta {
    fn from(identity: TypeIdentity) -> Self {
        TypeMeta {
            kind: identity.kind.to_string(),
            api_version: identity.api_version.to_string(),
        }
    }
}

pub const POD: TypeIdentity = TypeIdentity {
    kind: "Pod",
    api_version: "v1",
};

pub const CONFIG_MAP: TypeIdentity = TypeIdentity {
    kind: "ConfigMap",
    api_version: "v1",
};

/// All resource types this crate can decode.
pub static KNOWN_KINDS: &[TypeIdentity] = &[POD, CONFIG_MAP];

/// Looks up the identity of a resource type by its kind.
///
/// ```
/// use kubeproto::resource::identity_for;
///
/// assert_eq!(identity_for("Pod").unwrap().api_version, "v1");
/// assert!(identity_for("pod").is_none());
/// ```
pub fn identity_for(kind: &str) -> Option<&'static TypeIdentity> {
    KNOWN_KINDS.iter().find(|identity| identity.kind == kind)
}

/// A top level API object: a [`TypeMeta`] fixed by its type and an
/// [`ObjectMeta`] in field 1.
pub trait Resource: Message {
    const IDENTITY: TypeIdentity;

    fn type_meta(&self) -> &TypeMeta;

    fn metadata(&self) -> &ObjectMeta;
}

/// Decoding shared by all resources: stamps `identity` into `type_meta`,
/// decodes field 1 into `metadata` and passes every other field to `merge`.
///
/// Callers reset their own fields before.
pub(crate) fn unmarshal_resource<'a>(
    identity: &TypeIdentity,
    type_meta: &mut TypeMeta,
    metadata: &mut ObjectMeta,
    src: &'a [u8],
    mut merge: impl FnMut(Field<'a>) -> Result<(), DecodeError>,
) -> Result<(), DecodeError> {
    identity.stamp(type_meta);
    // an empty buffer only resets
    metadata.unmarshal(&[])?;

    for_each_field(identity.kind, src, |field| match field.number {
        1 => merge_message(&mut *metadata, &field, identity.kind, "metadata"),
        _ => merge(field),
    })
    .inspect_err(|err| log::debug!("failed to decode {}: {}", identity.kind, err))
}
