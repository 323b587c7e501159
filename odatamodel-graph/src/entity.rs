use lazy_static::lazy_static;
use odatamodel_core::{
    AdditionalData, DiscriminatorRegistry, FieldRegistry, ODATA_TYPE_KEY,
    discriminator::DiscriminatorRegistryError, impl_model, model_family,
};

use crate::{
    AndroidDeviceOwnerCompliancePolicy, AppleExpeditedCheckinConfigurationBase,
    DeviceCompliancePolicy, DeviceConfiguration, IosExpeditedCheckinConfiguration,
    SettingStateDeviceSummary, tags,
};

/// Root of every entity type. Owns the additional-data bag of all types derived from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entity {
    /// The unique identifier for an entity. Read-only.
    pub id: Option<String>,
    /// The `@odata.type` of the instance, set by the constructors of concrete types.
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl Entity {
    pub fn new() -> Self {
        Self::default()
    }
}

lazy_static! {
    pub(crate) static ref ENTITY_FIELDS: FieldRegistry<Entity> = FieldRegistry::<Entity>::builder()
        .primitive("id", |m| &m.id, |m| &mut m.id)
        .primitive(ODATA_TYPE_KEY, |m| &m.odata_type, |m| &mut m.odata_type)
        .build();
    static ref ENTITY_FAMILY: DiscriminatorRegistry<AnyEntity> = entity_family().unwrap();
}

impl_model!(Entity, fields = ENTITY_FIELDS);

model_family! {
    /// Any entity type known to this crate.
    #[derive(Clone, PartialEq)]
    pub enum AnyEntity: Entity {
        Entity,
        DeviceConfiguration,
        AppleExpeditedCheckinConfigurationBase,
        IosExpeditedCheckinConfiguration,
        SettingStateDeviceSummary,
        DeviceCompliancePolicy,
        AndroidDeviceOwnerCompliancePolicy,
    }
    registry = ENTITY_FAMILY;
}

pub fn entity_family() -> Result<DiscriminatorRegistry<AnyEntity>, DiscriminatorRegistryError> {
    Ok(DiscriminatorRegistry::builder(|| AnyEntity::Entity(Entity::new()))
        .register(tags::DEVICE_CONFIGURATION, || {
            AnyEntity::DeviceConfiguration(DeviceConfiguration::new())
        })?
        .register(tags::APPLE_EXPEDITED_CHECKIN_CONFIGURATION_BASE, || {
            AnyEntity::AppleExpeditedCheckinConfigurationBase(
                AppleExpeditedCheckinConfigurationBase::new(),
            )
        })?
        .register(tags::IOS_EXPEDITED_CHECKIN_CONFIGURATION, || {
            AnyEntity::IosExpeditedCheckinConfiguration(IosExpeditedCheckinConfiguration::new())
        })?
        .register(tags::SETTING_STATE_DEVICE_SUMMARY, || {
            AnyEntity::SettingStateDeviceSummary(SettingStateDeviceSummary::new())
        })?
        .register(tags::DEVICE_COMPLIANCE_POLICY, || {
            AnyEntity::DeviceCompliancePolicy(DeviceCompliancePolicy::new())
        })?
        .register(tags::ANDROID_DEVICE_OWNER_COMPLIANCE_POLICY, || {
            AnyEntity::AndroidDeviceOwnerCompliancePolicy(AndroidDeviceOwnerCompliancePolicy::new())
        })?
        .build())
}
