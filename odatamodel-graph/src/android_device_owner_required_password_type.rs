use odatamodel_core::wire_enum;

wire_enum! {
    /// Type of characters required in an Android device owner password.
    pub enum AndroidDeviceOwnerRequiredPasswordType: "androidDeviceOwnerRequiredPasswordType" {
        DeviceDefault = "deviceDefault",
        Required = "required",
        Numeric = "numeric",
        NumericComplex = "numericComplex",
        Alphabetic = "alphabetic",
        Alphanumeric = "alphanumeric",
        AlphanumericWithSymbols = "alphanumericWithSymbols",
        LowSecurityBiometric = "lowSecurityBiometric",
        CustomPassword = "customPassword",
    }
}
