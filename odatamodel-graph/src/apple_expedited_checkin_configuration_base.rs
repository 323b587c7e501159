use lazy_static::lazy_static;
use odatamodel_core::{
    DiscriminatorRegistry, FieldRegistry, FieldRegistryBuilder,
    discriminator::DiscriminatorRegistryError, impl_model, model_family,
};

use crate::{
    DeviceConfiguration, IosExpeditedCheckinConfiguration,
    device_configuration::DEVICE_CONFIGURATION_FIELDS, tags,
};

/// Experimental profile to increase the rate of device check-ins per day of iOS/iPadOS and
/// macOS devices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppleExpeditedCheckinConfigurationBase {
    pub base: DeviceConfiguration,
    /// Gets or sets whether to enable expedited device check-ins.
    pub enable_expedited_checkin: Option<bool>,
}

impl AppleExpeditedCheckinConfigurationBase {
    pub fn new() -> Self {
        let mut m = Self::default();
        m.odata_type = Some(tags::APPLE_EXPEDITED_CHECKIN_CONFIGURATION_BASE.to_string());
        m
    }
}

lazy_static! {
    pub(crate) static ref APPLE_EXPEDITED_CHECKIN_CONFIGURATION_BASE_FIELDS: FieldRegistry<AppleExpeditedCheckinConfigurationBase> =
        FieldRegistryBuilder::<AppleExpeditedCheckinConfigurationBase>::extending(
            &*DEVICE_CONFIGURATION_FIELDS
        )
        .primitive(
            "enableExpeditedCheckin",
            |m| &m.enable_expedited_checkin,
            |m| &mut m.enable_expedited_checkin,
        )
        .build();
    static ref APPLE_EXPEDITED_CHECKIN_CONFIGURATION_FAMILY: DiscriminatorRegistry<AnyAppleExpeditedCheckinConfiguration> =
        apple_expedited_checkin_configuration_family().unwrap();
}

impl_model!(
    AppleExpeditedCheckinConfigurationBase: DeviceConfiguration,
    base,
    fields = APPLE_EXPEDITED_CHECKIN_CONFIGURATION_BASE_FIELDS
);

model_family! {
    #[derive(Clone, PartialEq)]
    pub enum AnyAppleExpeditedCheckinConfiguration: AppleExpeditedCheckinConfigurationBase {
        AppleExpeditedCheckinConfigurationBase,
        IosExpeditedCheckinConfiguration,
    }
    registry = APPLE_EXPEDITED_CHECKIN_CONFIGURATION_FAMILY;
}

pub fn apple_expedited_checkin_configuration_family() -> Result<
    DiscriminatorRegistry<AnyAppleExpeditedCheckinConfiguration>,
    DiscriminatorRegistryError,
> {
    Ok(DiscriminatorRegistry::builder(|| {
        AnyAppleExpeditedCheckinConfiguration::AppleExpeditedCheckinConfigurationBase(
            AppleExpeditedCheckinConfigurationBase::new(),
        )
    })
    .register(tags::IOS_EXPEDITED_CHECKIN_CONFIGURATION, || {
        AnyAppleExpeditedCheckinConfiguration::IosExpeditedCheckinConfiguration(
            IosExpeditedCheckinConfiguration::new(),
        )
    })?
    .build())
}
