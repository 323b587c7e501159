use chrono::{DateTime, FixedOffset};
use lazy_static::lazy_static;
use odatamodel_core::{
    DiscriminatorRegistry, FieldRegistry, FieldRegistryBuilder,
    discriminator::DiscriminatorRegistryError, impl_model, model_family,
};

use crate::{AndroidDeviceOwnerCompliancePolicy, Entity, entity::ENTITY_FIELDS, tags};

/// This is the base class for Compliance policy. Compliance policies are platform specific and
/// individual per-platform compliance policies inherit from here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceCompliancePolicy {
    pub base: Entity,
    /// DateTime the object was created.
    pub created_date_time: Option<DateTime<FixedOffset>>,
    /// Admin provided description of the Device Configuration.
    pub description: Option<String>,
    /// Admin provided name of the device configuration.
    pub display_name: Option<String>,
    /// DateTime the object was last modified.
    pub last_modified_date_time: Option<DateTime<FixedOffset>>,
    /// List of Scope Tags for this Entity instance.
    pub role_scope_tag_ids: Option<Vec<String>>,
    /// Version of the device configuration.
    pub version: Option<i32>,
}

impl DeviceCompliancePolicy {
    pub fn new() -> Self {
        Self::default()
    }
}

lazy_static! {
    pub(crate) static ref DEVICE_COMPLIANCE_POLICY_FIELDS: FieldRegistry<DeviceCompliancePolicy> =
        FieldRegistryBuilder::<DeviceCompliancePolicy>::extending(&*ENTITY_FIELDS)
            .primitive("createdDateTime", |m| &m.created_date_time, |m| &mut m.created_date_time)
            .primitive("description", |m| &m.description, |m| &mut m.description)
            .primitive("displayName", |m| &m.display_name, |m| &mut m.display_name)
            .primitive(
                "lastModifiedDateTime",
                |m| &m.last_modified_date_time,
                |m| &mut m.last_modified_date_time,
            )
            .collection_of_primitives(
                "roleScopeTagIds",
                |m| &m.role_scope_tag_ids,
                |m| &mut m.role_scope_tag_ids,
            )
            .primitive("version", |m| &m.version, |m| &mut m.version)
            .build();
    static ref DEVICE_COMPLIANCE_POLICY_FAMILY: DiscriminatorRegistry<AnyDeviceCompliancePolicy> =
        device_compliance_policy_family().unwrap();
}

impl_model!(DeviceCompliancePolicy: Entity, base, fields = DEVICE_COMPLIANCE_POLICY_FIELDS);

model_family! {
    #[derive(Clone, PartialEq)]
    pub enum AnyDeviceCompliancePolicy: DeviceCompliancePolicy {
        DeviceCompliancePolicy,
        AndroidDeviceOwnerCompliancePolicy,
    }
    registry = DEVICE_COMPLIANCE_POLICY_FAMILY;
}

pub fn device_compliance_policy_family()
-> Result<DiscriminatorRegistry<AnyDeviceCompliancePolicy>, DiscriminatorRegistryError> {
    Ok(DiscriminatorRegistry::builder(|| {
        AnyDeviceCompliancePolicy::DeviceCompliancePolicy(DeviceCompliancePolicy::new())
    })
    .register(tags::ANDROID_DEVICE_OWNER_COMPLIANCE_POLICY, || {
        AnyDeviceCompliancePolicy::AndroidDeviceOwnerCompliancePolicy(
            AndroidDeviceOwnerCompliancePolicy::new(),
        )
    })?
    .build())
}
