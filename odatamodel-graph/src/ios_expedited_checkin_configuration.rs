use lazy_static::lazy_static;
use odatamodel_core::{FieldRegistry, FieldRegistryBuilder, impl_model};

use crate::{
    AppleExpeditedCheckinConfigurationBase,
    apple_expedited_checkin_configuration_base::APPLE_EXPEDITED_CHECKIN_CONFIGURATION_BASE_FIELDS,
    tags,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IosExpeditedCheckinConfiguration {
    pub base: AppleExpeditedCheckinConfigurationBase,
}

impl IosExpeditedCheckinConfiguration {
    pub fn new() -> Self {
        let mut m = Self::default();
        m.odata_type = Some(tags::IOS_EXPEDITED_CHECKIN_CONFIGURATION.to_string());
        m
    }
}

lazy_static! {
    // no fields of its own
    static ref IOS_EXPEDITED_CHECKIN_CONFIGURATION_FIELDS: FieldRegistry<IosExpeditedCheckinConfiguration> =
        FieldRegistryBuilder::<IosExpeditedCheckinConfiguration>::extending(
            &*APPLE_EXPEDITED_CHECKIN_CONFIGURATION_BASE_FIELDS
        )
        .build();
}

impl_model!(
    IosExpeditedCheckinConfiguration: AppleExpeditedCheckinConfigurationBase,
    base,
    fields = IOS_EXPEDITED_CHECKIN_CONFIGURATION_FIELDS
);
