quantity!(Hours, via: f64, suffix: "h", precision: 2);

quantity!(Minutes, via: f64, suffix: "min", precision: 0);

impl From<Minutes> for Hours {
    fn from(minutes: Minutes) -> Self {
        Self(minutes.0 / 60.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_from_minutes() {
        assert_abs_diff_eq!(Hours::from(Minutes(90.0)).0, 1.5);
        assert_abs_diff_eq!(Hours::from(Minutes(-30.0)).0, -0.5);
    }
}
