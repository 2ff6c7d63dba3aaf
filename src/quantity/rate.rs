quantity!(
    /// Price of one kilowatt-hour of electricity or gas.
    KilowattHourRate, via: f64, suffix: "$/kWh", precision: 3
);

quantity!(
    /// Price of one liter of tap water.
    LiterRate, via: f64, suffix: "$/L", precision: 3
);
