use std::collections::BTreeMap;

use crate::error::DecodeError;
use crate::map_entry::{insert_bytes_entry, insert_string_entry};
use crate::message::{skip_field, Message};
use crate::metav1::{ObjectMeta, TypeMeta};
use crate::resource::{unmarshal_resource, Resource, TypeIdentity, CONFIG_MAP};

/// ConfigMap holds configuration data for pods to consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigMap {
    /// Always `ConfigMap`, `v1`
    pub type_meta: TypeMeta,
    /// (field 1)
    pub metadata: ObjectMeta,
    /// UTF-8 configuration values. (field 2)
    pub data: BTreeMap<String, String>,
    /// Binary configuration values. (field 3)
    pub binary_data: BTreeMap<String, Vec<u8>>,
    /// If set to true, the data cannot be updated. (field 4)
    pub immutable: Option<bool>,
}

impl Default for ConfigMap {
    fn default() -> Self {
        ConfigMap {
            type_meta: CONFIG_MAP.into(),
            metadata: ObjectMeta::default(),
            data: BTreeMap::new(),
            binary_data: BTreeMap::new(),
            immutable: None,
        }
    }
}

impl Message for ConfigMap {
    const NAME: &'static str = CONFIG_MAP.kind;

    fn unmarshal(&mut self, src: &[u8]) -> Result<(), DecodeError> {
        self.data.clear();
        self.binary_data.clear();
        self.immutable = None;

        unmarshal_resource(
            &Self::IDENTITY,
            &mut self.type_meta,
            &mut self.metadata,
            src,
            |field| match field.number {
                2 => insert_string_entry(&mut self.data, &field, Self::NAME, "data"),
                3 => insert_bytes_entry(&mut self.binary_data, &field, Self::NAME, "binaryData"),
                4 => {
                    self.immutable = Some(field.read_bool(Self::NAME, "immutable")?);
                    Ok(())
                }
                _ => {
                    skip_field(Self::NAME, &field);
                    Ok(())
                }
            },
        )
    }
}

impl Resource for ConfigMap {
    const IDENTITY: TypeIdentity = CONFIG_MAP;

    fn type_meta(&self) -> &TypeMeta {
        &self.type_meta
    }

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}
