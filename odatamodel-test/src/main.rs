use std::{env, path::Path};

use odatamodel::{
    AdditionalDataHolder,
    graph::{AnyEntity, Entity},
};


fn type_name(entity: &AnyEntity) -> &'static str {
    match entity {
        AnyEntity::Entity(_) => "Entity",
        AnyEntity::DeviceConfiguration(_) => "DeviceConfiguration",
        AnyEntity::AppleExpeditedCheckinConfigurationBase(_) => {
            "AppleExpeditedCheckinConfigurationBase"
        }
        AnyEntity::IosExpeditedCheckinConfiguration(_) => "IosExpeditedCheckinConfiguration",
        AnyEntity::SettingStateDeviceSummary(_) => "SettingStateDeviceSummary",
        AnyEntity::DeviceCompliancePolicy(_) => "DeviceCompliancePolicy",
        AnyEntity::AndroidDeviceOwnerCompliancePolicy(_) => "AndroidDeviceOwnerCompliancePolicy",
    }
}

fn main() -> anyhow::Result<()> {
    let mut paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        paths = vec![
            "test-data/ios_expedited_checkin_configuration.json".to_string(),
            "test-data/android_device_owner_compliance_policy.json".to_string(),
        ];
    }

    for path in paths {
        let entity: AnyEntity = odatamodel::deserialize_from_path(Path::new(&path))?;
        let base: &Entity = &entity;
        println!(
            "{path}: {} (id {:?}, {} unknown properties)",
            type_name(&entity),
            base.id,
            entity.additional_data().len()
        );
        println!("{}", odatamodel::serialize_to_string(&entity)?);
    }
    Ok(())
}
