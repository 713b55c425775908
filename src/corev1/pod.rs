use crate::error::DecodeError;
use crate::message::{skip_field, Message};
use crate::metav1::{ObjectMeta, TypeMeta};
use crate::resource::{unmarshal_resource, Resource, TypeIdentity, POD};

/// Pod is a collection of containers that can run on a host.
///
/// Only the object metadata is decoded; `spec` (field 2) and `status`
/// (field 3) are skipped.
///
/// ## Example
///
/// ```
/// use kubeproto::{Message, Pod};
///
/// // metadata { name: "web" }
/// let data = [0x0a, 0x05, 0x0a, 0x03, b'w', b'e', b'b'];
/// let pod = Pod::decode(&data).unwrap();
/// assert_eq!(pod.type_meta.kind, "Pod");
/// assert_eq!(pod.type_meta.api_version, "v1");
/// assert_eq!(pod.metadata.name, "web");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pod {
    /// Always `Pod`, `v1`
    pub type_meta: TypeMeta,
    /// (field 1)
    pub metadata: ObjectMeta,
}

impl Default for Pod {
    fn default() -> Self {
        Pod {
            type_meta: POD.into(),
            metadata: ObjectMeta::default(),
        }
    }
}

impl Message for Pod {
    const NAME: &'static str = POD.kind;

    fn unmarshal(&mut self, src: &[u8]) -> Result<(), DecodeError> {
        unmarshal_resource(
            &Self::IDENTITY,
            &mut self.type_meta,
            &mut self.metadata,
            src,
            |field| {
                skip_field(Self::NAME, &field);
                Ok(())
            },
        )
    }
}

impl Resource for Pod {
    const IDENTITY: TypeIdentity = POD;

    fn type_meta(&self) -> &TypeMeta {
        &self.type_meta
    }

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}
