/*!
Microsoft Graph beta device management models.

Every type here derives from [Entity]. Abstract bases that have registered
subtypes come with a family enum (`Any*`) which picks the concrete type from
the payload's `@odata.type` when decoded:

```
use odatamodel_graph::AnyDeviceConfiguration;

let config: AnyDeviceConfiguration = odatamodel_core::deserialize_from_str(
    r##"{"@odata.type": "#microsoft.graph.iosExpeditedCheckinConfiguration", "displayName": "fast"}"##,
)
.unwrap();
assert!(matches!(config, AnyDeviceConfiguration::IosExpeditedCheckinConfiguration(_)));
assert_eq!(config.display_name.as_deref(), Some("fast"));
```
*/

mod android_device_owner_compliance_policy;
mod android_device_owner_required_password_type;
mod apple_expedited_checkin_configuration_base;
mod device_compliance_policy;
mod device_configuration;
mod device_threat_protection_level;
mod entity;
mod ios_expedited_checkin_configuration;
mod setting_state_device_summary;

pub mod tags;

pub use android_device_owner_compliance_policy::AndroidDeviceOwnerCompliancePolicy;
pub use android_device_owner_required_password_type::AndroidDeviceOwnerRequiredPasswordType;
pub use apple_expedited_checkin_configuration_base::{
    AnyAppleExpeditedCheckinConfiguration, AppleExpeditedCheckinConfigurationBase,
    apple_expedited_checkin_configuration_family,
};
pub use device_compliance_policy::{
    AnyDeviceCompliancePolicy, DeviceCompliancePolicy, device_compliance_policy_family,
};
pub use device_configuration::{
    AnyDeviceConfiguration, DeviceConfiguration, device_configuration_family,
};
pub use device_threat_protection_level::DeviceThreatProtectionLevel;
pub use entity::{AnyEntity, Entity, entity_family};
pub use ios_expedited_checkin_configuration::IosExpeditedCheckinConfiguration;
pub use setting_state_device_summary::SettingStateDeviceSummary;
