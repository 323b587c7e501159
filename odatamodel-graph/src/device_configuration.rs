use chrono::{DateTime, FixedOffset};
use lazy_static::lazy_static;
use odatamodel_core::{
    DiscriminatorRegistry, FieldRegistry, FieldRegistryBuilder,
    discriminator::DiscriminatorRegistryError, impl_model, model_family,
};

use crate::{
    AppleExpeditedCheckinConfigurationBase, Entity, IosExpeditedCheckinConfiguration,
    SettingStateDeviceSummary, entity::ENTITY_FIELDS, tags,
};

/// Device Configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceConfiguration {
    pub base: Entity,
    /// DateTime the object was created.
    pub created_date_time: Option<DateTime<FixedOffset>>,
    /// Admin provided description of the Device Configuration.
    pub description: Option<String>,
    /// Device Configuration Setting State Device Summary
    pub device_setting_state_summaries: Option<Vec<SettingStateDeviceSummary>>,
    /// Admin provided name of the device configuration.
    pub display_name: Option<String>,
    /// DateTime the object was last modified.
    pub last_modified_date_time: Option<DateTime<FixedOffset>>,
    /// List of Scope Tags for this Entity instance.
    pub role_scope_tag_ids: Option<Vec<String>>,
    /// Indicates whether or not the underlying Device Configuration supports the
    /// assignment of scope tags.
    pub supports_scope_tags: Option<bool>,
    /// Version of the device configuration.
    pub version: Option<i32>,
}

impl DeviceConfiguration {
    pub fn new() -> Self {
        Self::default()
    }
}

lazy_static! {
    pub(crate) static ref DEVICE_CONFIGURATION_FIELDS: FieldRegistry<DeviceConfiguration> =
        FieldRegistryBuilder::<DeviceConfiguration>::extending(&*ENTITY_FIELDS)
            .primitive("createdDateTime", |m| &m.created_date_time, |m| &mut m.created_date_time)
            .primitive("description", |m| &m.description, |m| &mut m.description)
            .collection_of_objects(
                "deviceSettingStateSummaries",
                |m| &m.device_setting_state_summaries,
                |m| &mut m.device_setting_state_summaries,
            )
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
            .primitive(
                "supportsScopeTags",
                |m| &m.supports_scope_tags,
                |m| &mut m.supports_scope_tags,
            )
            .primitive("version", |m| &m.version, |m| &mut m.version)
            .build();
    static ref DEVICE_CONFIGURATION_FAMILY: DiscriminatorRegistry<AnyDeviceConfiguration> =
        device_configuration_family().unwrap();
}

impl_model!(DeviceConfiguration: Entity, base, fields = DEVICE_CONFIGURATION_FIELDS);

model_family! {
    /// A device configuration of any known profile type.
    #[derive(Clone, PartialEq)]
    pub enum AnyDeviceConfiguration: DeviceConfiguration {
        DeviceConfiguration,
        AppleExpeditedCheckinConfigurationBase,
        IosExpeditedCheckinConfiguration,
    }
    registry = DEVICE_CONFIGURATION_FAMILY;
}

pub fn device_configuration_family()
-> Result<DiscriminatorRegistry<AnyDeviceConfiguration>, DiscriminatorRegistryError> {
    Ok(
        DiscriminatorRegistry::builder(|| {
            AnyDeviceConfiguration::DeviceConfiguration(DeviceConfiguration::new())
        })
        .register(tags::APPLE_EXPEDITED_CHECKIN_CONFIGURATION_BASE, || {
            AnyDeviceConfiguration::AppleExpeditedCheckinConfigurationBase(
                AppleExpeditedCheckinConfigurationBase::new(),
            )
        })?
        .register(tags::IOS_EXPEDITED_CHECKIN_CONFIGURATION, || {
            AnyDeviceConfiguration::IosExpeditedCheckinConfiguration(
                IosExpeditedCheckinConfiguration::new(),
            )
        })?
        .build(),
    )
}
