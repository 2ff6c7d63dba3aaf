quantity!(
    /// US dollars.
    Cost, via: f64, suffix: "$", precision: 3
);
