//! `@odata.type` values of the concrete types in this crate.

pub const DEVICE_CONFIGURATION: &str = "#microsoft.graph.deviceConfiguration";
pub const APPLE_EXPEDITED_CHECKIN_CONFIGURATION_BASE: &str =
    "#microsoft.graph.appleExpeditedCheckinConfigurationBase";
pub const IOS_EXPEDITED_CHECKIN_CONFIGURATION: &str =
    "#microsoft.graph.iosExpeditedCheckinConfiguration";
pub const SETTING_STATE_DEVICE_SUMMARY: &str = "#microsoft.graph.settingStateDeviceSummary";
pub const DEVICE_COMPLIANCE_POLICY: &str = "#microsoft.graph.deviceCompliancePolicy";
pub const ANDROID_DEVICE_OWNER_COMPLIANCE_POLICY: &str =
    "#microsoft.graph.androidDeviceOwnerCompliancePolicy";
