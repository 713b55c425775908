use std::collections::BTreeMap;

use crate::error::DecodeError;
use crate::map_entry::insert_string_entry;
use crate::message::{for_each_field, merge_optional_message, push_message, skip_field, Message};
use crate::metav1::{ManagedFieldsEntry, OwnerReference, Time};

/// ObjectMeta is metadata that all persisted resources must have.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ObjectMeta {
    /// (field 1)
    pub name: String,
    /// Prefix the server uses to generate a unique name. (field 2)
    pub generate_name: String,
    /// (field 3)
    pub namespace: String,
    /// Deprecated. (field 4)
    pub self_link: String,
    /// (field 5)
    pub uid: String,
    /// Opaque value for optimistic concurrency. (field 6)
    pub resource_version: String,
    /// Sequence number of the desired state. (field 7)
    pub generation: i64,
    /// (field 8)
    pub creation_timestamp: Option<Time>,
    /// Set when a graceful deletion was requested. (field 9)
    pub deletion_timestamp: Option<Time>,
    /// (field 10)
    pub deletion_grace_period_seconds: Option<i64>,
    /// (field 11)
    pub labels: BTreeMap<String, String>,
    /// (field 12)
    pub annotations: BTreeMap<String, String>,
    /// Objects this object depends on, in wire order. (field 13)
    pub owner_references: Vec<OwnerReference>,
    /// (field 14)
    pub finalizers: Vec<String>,
    /// (field 17)
    pub managed_fields: Vec<ManagedFieldsEntry>,
}

impl Message for ObjectMeta {
    const NAME: &'static str = "ObjectMeta";

    fn unmarshal(&mut self, src: &[u8]) -> Result<(), DecodeError> {
        self.name.clear();
        self.generate_name.clear();
        self.namespace.clear();
        self.self_link.clear();
        self.uid.clear();
        self.resource_version.clear();
        self.generation = 0;
        self.creation_timestamp = None;
        self.deletion_timestamp = None;
        self.deletion_grace_period_seconds = None;
        self.labels.clear();
        self.annotations.clear();
        self.owner_references.clear();
        self.finalizers.clear();
        self.managed_fields.clear();

        for_each_field(Self::NAME, src, |field| match field.number {
            1 => field.merge_string(&mut self.name, Self::NAME, "name"),
            2 => field.merge_string(&mut self.generate_name, Self::NAME, "generateName"),
            3 => field.merge_string(&mut self.namespace, Self::NAME, "namespace"),
            4 => field.merge_string(&mut self.self_link, Self::NAME, "selfLink"),
            5 => field.merge_string(&mut self.uid, Self::NAME, "uid"),
            6 => field.merge_string(&mut self.resource_version, Self::NAME, "resourceVersion"),
            7 => {
                self.generation = field.read_int64(Self::NAME, "generation")?;
                Ok(())
            }
            8 => merge_optional_message(
                &mut self.creation_timestamp,
                &field,
                Self::NAME,
                "creationTimestamp",
            ),
            9 => merge_optional_message(
                &mut self.deletion_timestamp,
                &field,
                Self::NAME,
                "deletionTimestamp",
            ),
            10 => {
                let seconds = field.read_int64(Self::NAME, "deletionGracePeriodSeconds")?;
                self.deletion_grace_period_seconds = Some(seconds);
                Ok(())
            }
            11 => insert_string_entry(&mut self.labels, &field, Self::NAME, "labels"),
            12 => insert_string_entry(&mut self.annotations, &field, Self::NAME, "annotations"),
            13 => push_message(&mut self.owner_references, &field, Self::NAME, "ownerReferences"),
            14 => {
                let finalizer = field.read_str(Self::NAME, "finalizers")?;
                self.finalizers.push(finalizer.to_owned());
                Ok(())
            }
            17 => push_message(&mut self.managed_fields, &field, Self::NAME, "managedFields"),
            _ => {
                skip_field(Self::NAME, &field);
                Ok(())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_encoder::WireWriter;
    use crate::{FieldsV1, Timestamp};

    fn time(seconds: i64) -> WireWriter {
        WireWriter::new().int64(1, seconds)
    }

    fn label(key: &str, value: &str) -> WireWriter {
        WireWriter::new().string(1, key).string(2, value)
    }

    fn sample() -> Vec<u8> {
        let owner = WireWriter::new()
            .string(1, "ReplicaSet")
            .string(3, "web-7d4b9c")
            .string(4, "5f0c6a0e")
            .string(5, "apps/v1")
            .bool(6, true);
        let managed = WireWriter::new()
            .string(1, "kube-controller-manager")
            .string(2, "Update")
            .string(3, "v1")
            .message(4, &time(1_700_000_100))
            .string(6, "FieldsV1")
            .message(7, &WireWriter::new().bytes(1, br#"{"f:metadata":{}}"#));
        WireWriter::new()
            .string(1, "web-7d4b9c-x2v8q")
            .string(2, "web-7d4b9c-")
            .string(3, "default")
            .string(5, "0b6e0a7c")
            .string(6, "48213")
            .int64(7, 3)
            .message(8, &time(1_700_000_000))
            .message(11, &label("app", "web"))
            .message(11, &label("pod-template-hash", "7d4b9c"))
            .message(12, &label("kubernetes.io/psp", "restricted"))
            .message(13, &owner)
            .string(14, "foregroundDeletion")
            .string(14, "example.com/cleanup")
            .message(17, &managed)
            .into_vec()
    }

    #[test]
    fn decode_works() {
        let meta = ObjectMeta::decode(&sample()).unwrap();
        assert_eq!(meta.name, "web-7d4b9c-x2v8q");
        assert_eq!(meta.generate_name, "web-7d4b9c-");
        assert_eq!(meta.namespace, "default");
        assert_eq!(meta.self_link, "");
        assert_eq!(meta.uid, "0b6e0a7c");
        assert_eq!(meta.resource_version, "48213");
        assert_eq!(meta.generation, 3);
        assert_eq!(
            meta.creation_timestamp.unwrap().to_timestamp(),
            Timestamp {
                seconds: 1_700_000_000,
                nanos: 0
            }
        );
        assert_eq!(meta.deletion_timestamp, None);
        assert_eq!(meta.deletion_grace_period_seconds, None);
        assert_eq!(meta.labels.len(), 2);
        assert_eq!(meta.labels["pod-template-hash"], "7d4b9c");
        assert_eq!(meta.annotations["kubernetes.io/psp"], "restricted");
        assert_eq!(meta.owner_references.len(), 1);
        assert_eq!(meta.owner_references[0].kind, "ReplicaSet");
        assert_eq!(meta.owner_references[0].controller, Some(true));
        assert_eq!(meta.owner_references[0].block_owner_deletion, None);
        assert_eq!(meta.finalizers, ["foregroundDeletion", "example.com/cleanup"]);
        assert_eq!(meta.managed_fields.len(), 1);
        let entry = &meta.managed_fields[0];
        assert_eq!(entry.manager, "kube-controller-manager");
        assert_eq!(
            entry.fields_v1,
            Some(FieldsV1 {
                raw: br#"{"f:metadata":{}}"#.to_vec()
            })
        );
    }

    #[test]
    fn deletion_fields_work() {
        let data = WireWriter::new()
            .message(9, &time(1_700_000_500))
            .int64(10, 0)
            .into_vec();
        let meta = ObjectMeta::decode(&data).unwrap();
        assert!(meta.deletion_timestamp.is_some());
        assert_eq!(meta.deletion_grace_period_seconds, Some(0));
        assert_eq!(meta.creation_timestamp, None);
    }

    #[test]
    fn unmarshal_resets() {
        let mut meta = ObjectMeta::decode(&sample()).unwrap();
        meta.unmarshal(&[]).unwrap();
        assert_eq!(meta, ObjectMeta::default());

        // lists are replaced, not appended to
        let data = sample();
        meta.unmarshal(&data).unwrap();
        meta.unmarshal(&data).unwrap();
        assert_eq!(meta.owner_references.len(), 1);
        assert_eq!(meta.finalizers.len(), 2);
    }

    #[test]
    fn nested_errors_name_the_path() {
        let broken_owner = WireWriter::new().uint64(1, 1);
        let data = WireWriter::new()
            .string(1, "web")
            .message(13, &broken_owner)
            .into_vec();
        let err = ObjectMeta::decode(&data).unwrap_err();
        let path: Vec<_> = err.chain().map(DecodeError::message).collect();
        assert_eq!(path, ["ObjectMeta", "OwnerReference"]);
        assert_eq!(
            err.to_string(),
            "cannot unmarshal ObjectMeta.ownerReferences"
        );
    }

    #[test]
    fn wrong_wire_type_fails() {
        let data = WireWriter::new().string(7, "3").into_vec();
        let err = ObjectMeta::decode(&data).unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidField {
                message: "ObjectMeta",
                field: "generation",
                number: 7,
                expected: "int64",
            }
        );
    }
}
