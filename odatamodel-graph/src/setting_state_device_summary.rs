use lazy_static::lazy_static;
use odatamodel_core::{FieldRegistry, FieldRegistryBuilder, impl_model};

use crate::{Entity, entity::ENTITY_FIELDS, tags};

/// Device Compliance Policy and Configuration for a Setting State summary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingStateDeviceSummary {
    pub base: Entity,
    pub compliant_device_count: Option<i32>,
    pub conflict_device_count: Option<i32>,
    pub error_device_count: Option<i32>,
    /// Name of the InstancePath for the setting
    pub instance_path: Option<String>,
    pub non_compliant_device_count: Option<i32>,
    pub not_applicable_device_count: Option<i32>,
    pub remediated_device_count: Option<i32>,
    /// Name of the setting
    pub setting_name: Option<String>,
    pub unknown_device_count: Option<i32>,
}

impl SettingStateDeviceSummary {
    pub fn new() -> Self {
        let mut m = Self::default();
        m.odata_type = Some(tags::SETTING_STATE_DEVICE_SUMMARY.to_string());
        m
    }
}

lazy_static! {
    static ref SETTING_STATE_DEVICE_SUMMARY_FIELDS: FieldRegistry<SettingStateDeviceSummary> =
        FieldRegistryBuilder::<SettingStateDeviceSummary>::extending(&*ENTITY_FIELDS)
            .primitive(
                "compliantDeviceCount",
                |m| &m.compliant_device_count,
                |m| &mut m.compliant_device_count,
            )
            .primitive(
                "conflictDeviceCount",
                |m| &m.conflict_device_count,
                |m| &mut m.conflict_device_count,
            )
            .primitive("errorDeviceCount", |m| &m.error_device_count, |m| &mut m.error_device_count)
            .primitive("instancePath", |m| &m.instance_path, |m| &mut m.instance_path)
            .primitive(
                "nonCompliantDeviceCount",
                |m| &m.non_compliant_device_count,
                |m| &mut m.non_compliant_device_count,
            )
            .primitive(
                "notApplicableDeviceCount",
                |m| &m.not_applicable_device_count,
                |m| &mut m.not_applicable_device_count,
            )
            .primitive(
                "remediatedDeviceCount",
                |m| &m.remediated_device_count,
                |m| &mut m.remediated_device_count,
            )
            .primitive("settingName", |m| &m.setting_name, |m| &mut m.setting_name)
            .primitive(
                "unknownDeviceCount",
                |m| &m.unknown_device_count,
                |m| &mut m.unknown_device_count,
            )
            .build();
}

impl_model!(SettingStateDeviceSummary: Entity, base, fields = SETTING_STATE_DEVICE_SUMMARY_FIELDS);
