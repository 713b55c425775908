//! A minimal protobuf decoder for Kubernetes API objects and their metadata.
//!
//! Every type implements [`Message`], which decodes protobuf bytes into an
//! existing value or a new one. Decoding follows the same rules for all types:
//!
//! - The target is reset to its default before any field is read.
//! - Unknown field numbers are skipped.
//! - A known field with the wrong wire type is an error naming the type and field.
//! - Errors of embedded messages are wrapped with the enclosing type and field.
//! - Optional values (e.g. [`OwnerReference::controller`]) are `None` when the
//!   field is absent from the wire, which is not the same as a zero value.
//!
//! Top level resources like [`Pod`] do not read `kind` and `apiVersion` from
//! the wire. Those are fixed per type, see [`resource::KNOWN_KINDS`].
//!
//! ## Example
//!
//! ```
//! use kubeproto::{Message, Pod};
//! use hex_literal::hex;
//!
//! // metadata { name: "web", namespace: "prod", ownerReferences { kind: "ReplicaSet", controller: false } }
//! let data = hex!("0a1b 0a03776562 1a0470726f64 6a0e0a0a5265706c6963615365743000");
//! let pod = Pod::decode(&data).unwrap();
//! assert_eq!(pod.type_meta.kind, "Pod");
//! assert_eq!(pod.metadata.name, "web");
//! assert_eq!(pod.metadata.namespace, "prod");
//! assert_eq!(pod.metadata.owner_references[0].kind, "ReplicaSet");
//! assert_eq!(pod.metadata.owner_references[0].controller, Some(false));
//! assert_eq!(pod.metadata.owner_references[0].block_owner_deletion, None);
//! ```
//!
//! ## Non goals
//! - Encoding
//! - JSON
//! - Validation of field values beyond their wire type

pub mod corev1;
mod error;
mod map_entry;
mod message;
pub mod metav1;
pub mod resource;
mod slice_reader;
#[cfg(test)]
mod test_encoder;
mod varint;
pub mod wire;

pub use corev1::{ConfigMap, Pod};
pub use error::{DecodeError, WireError};
pub use message::Message;
pub use metav1::{
    FieldsV1, ManagedFieldsEntry, ObjectMeta, OwnerReference, Time, Timestamp, TypeMeta,
};
pub use resource::{Resource, TypeIdentity};
