use odatamodel_core::wire_enum;

wire_enum! {
    /// Mobile threat protection risk level.
    pub enum DeviceThreatProtectionLevel: "deviceThreatProtectionLevel" {
        /// Default value. Not applicable.
        Unavailable = "unavailable",
        Secured = "secured",
        Low = "low",
        Medium = "medium",
        High = "high",
        NotSet = "notSet",
    }
}
