//! Types of the `meta.k8s.io/v1` API group shared by all resources.

mod fields_v1;
mod managed_fields_entry;
mod object_meta;
mod owner_reference;
mod time;
mod timestamp;
mod type_meta;

pub use fields_v1::FieldsV1;
pub use managed_fields_entry::ManagedFieldsEntry;
pub use object_meta::ObjectMeta;
pub use owner_reference::OwnerReference;
pub use time::Time;
pub use timestamp::Timestamp;
pub use type_meta::TypeMeta;
