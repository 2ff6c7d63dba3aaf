use crate::quantity::{currency::Cost, rate::LiterRate, time::Hours};

quantity!(Liters, via: f64, suffix: "L", precision: 1);

quantity!(LitersPerHour, via: f64, suffix: "L/h", precision: 1);

implement_mul!(LitersPerHour, Hours, Liters);
implement_mul!(Liters, LiterRate, Cost);
