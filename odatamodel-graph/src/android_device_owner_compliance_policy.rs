use lazy_static::lazy_static;
use odatamodel_core::{FieldRegistry, FieldRegistryBuilder, impl_model};

use crate::{
    AndroidDeviceOwnerRequiredPasswordType, DeviceCompliancePolicy, DeviceThreatProtectionLevel,
    device_compliance_policy::DEVICE_COMPLIANCE_POLICY_FIELDS, tags,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AndroidDeviceOwnerCompliancePolicy {
    pub base: DeviceCompliancePolicy,
    /// MDATP Require Mobile Threat Protection minimum risk level to report noncompliance.
    pub advanced_threat_protection_required_security_level: Option<DeviceThreatProtectionLevel>,
    /// Require that devices have enabled device threat protection.
    pub device_threat_protection_enabled: Option<bool>,
    /// Require Mobile Threat Protection minimum risk level to report noncompliance.
    pub device_threat_protection_required_security_level: Option<DeviceThreatProtectionLevel>,
    pub min_android_security_patch_level: Option<String>,
    pub os_maximum_version: Option<String>,
    pub os_minimum_version: Option<String>,
    /// Number of days before the password expires. Valid values 1 to 365
    pub password_expiration_days: Option<i32>,
    /// Minimum password length. Valid values 4 to 16
    pub password_minimum_length: Option<i32>,
    pub password_minimum_letter_characters: Option<i32>,
    pub password_minimum_lower_case_characters: Option<i32>,
    pub password_minimum_non_letter_characters: Option<i32>,
    pub password_minimum_numeric_characters: Option<i32>,
    pub password_minimum_symbol_characters: Option<i32>,
    pub password_minimum_upper_case_characters: Option<i32>,
    pub password_minutes_of_inactivity_before_lock: Option<i32>,
    /// Number of previous passwords to block. Valid values 1 to 24
    pub password_previous_password_count_to_block: Option<i32>,
    /// Require a password to unlock device.
    pub password_required: Option<bool>,
    pub password_required_type: Option<AndroidDeviceOwnerRequiredPasswordType>,
    pub security_require_intune_app_integrity: Option<bool>,
    pub security_require_safety_net_attestation_basic_integrity: Option<bool>,
    pub security_require_safety_net_attestation_certified_device: Option<bool>,
    /// Require encryption on Android devices.
    pub storage_require_encryption: Option<bool>,
}

impl AndroidDeviceOwnerCompliancePolicy {
    pub fn new() -> Self {
        let mut m = Self::default();
        m.odata_type = Some(tags::ANDROID_DEVICE_OWNER_COMPLIANCE_POLICY.to_string());
        m
    }
}

lazy_static! {
    static ref ANDROID_DEVICE_OWNER_COMPLIANCE_POLICY_FIELDS: FieldRegistry<AndroidDeviceOwnerCompliancePolicy> =
        FieldRegistryBuilder::<AndroidDeviceOwnerCompliancePolicy>::extending(
            &*DEVICE_COMPLIANCE_POLICY_FIELDS
        )
        .enumeration(
            "advancedThreatProtectionRequiredSecurityLevel",
            |m| &m.advanced_threat_protection_required_security_level,
            |m| &mut m.advanced_threat_protection_required_security_level,
        )
        .primitive(
            "deviceThreatProtectionEnabled",
            |m| &m.device_threat_protection_enabled,
            |m| &mut m.device_threat_protection_enabled,
        )
        .enumeration(
            "deviceThreatProtectionRequiredSecurityLevel",
            |m| &m.device_threat_protection_required_security_level,
            |m| &mut m.device_threat_protection_required_security_level,
        )
        .primitive(
            "minAndroidSecurityPatchLevel",
            |m| &m.min_android_security_patch_level,
            |m| &mut m.min_android_security_patch_level,
        )
        .primitive("osMaximumVersion", |m| &m.os_maximum_version, |m| &mut m.os_maximum_version)
        .primitive("osMinimumVersion", |m| &m.os_minimum_version, |m| &mut m.os_minimum_version)
        .primitive(
            "passwordExpirationDays",
            |m| &m.password_expiration_days,
            |m| &mut m.password_expiration_days,
        )
        .primitive(
            "passwordMinimumLength",
            |m| &m.password_minimum_length,
            |m| &mut m.password_minimum_length,
        )
        .primitive(
            "passwordMinimumLetterCharacters",
            |m| &m.password_minimum_letter_characters,
            |m| &mut m.password_minimum_letter_characters,
        )
        .primitive(
            "passwordMinimumLowerCaseCharacters",
            |m| &m.password_minimum_lower_case_characters,
            |m| &mut m.password_minimum_lower_case_characters,
        )
        .primitive(
            "passwordMinimumNonLetterCharacters",
            |m| &m.password_minimum_non_letter_characters,
            |m| &mut m.password_minimum_non_letter_characters,
        )
        .primitive(
            "passwordMinimumNumericCharacters",
            |m| &m.password_minimum_numeric_characters,
            |m| &mut m.password_minimum_numeric_characters,
        )
        .primitive(
            "passwordMinimumSymbolCharacters",
            |m| &m.password_minimum_symbol_characters,
            |m| &mut m.password_minimum_symbol_characters,
        )
        .primitive(
            "passwordMinimumUpperCaseCharacters",
            |m| &m.password_minimum_upper_case_characters,
            |m| &mut m.password_minimum_upper_case_characters,
        )
        .primitive(
            "passwordMinutesOfInactivityBeforeLock",
            |m| &m.password_minutes_of_inactivity_before_lock,
            |m| &mut m.password_minutes_of_inactivity_before_lock,
        )
        .primitive(
            "passwordPreviousPasswordCountToBlock",
            |m| &m.password_previous_password_count_to_block,
            |m| &mut m.password_previous_password_count_to_block,
        )
        .primitive("passwordRequired", |m| &m.password_required, |m| &mut m.password_required)
        .enumeration(
            "passwordRequiredType",
            |m| &m.password_required_type,
            |m| &mut m.password_required_type,
        )
        .primitive(
            "securityRequireIntuneAppIntegrity",
            |m| &m.security_require_intune_app_integrity,
            |m| &mut m.security_require_intune_app_integrity,
        )
        .primitive(
            "securityRequireSafetyNetAttestationBasicIntegrity",
            |m| &m.security_require_safety_net_attestation_basic_integrity,
            |m| &mut m.security_require_safety_net_attestation_basic_integrity,
        )
        .primitive(
            "securityRequireSafetyNetAttestationCertifiedDevice",
            |m| &m.security_require_safety_net_attestation_certified_device,
            |m| &mut m.security_require_safety_net_attestation_certified_device,
        )
        .primitive(
            "storageRequireEncryption",
            |m| &m.storage_require_encryption,
            |m| &mut m.storage_require_encryption,
        )
        .build();
}

impl_model!(
    AndroidDeviceOwnerCompliancePolicy: DeviceCompliancePolicy,
    base,
    fields = ANDROID_DEVICE_OWNER_COMPLIANCE_POLICY_FIELDS
);
