use std::{collections::BTreeMap, str::FromStr};

use crate::{
    device::choice::{Choice, ChoicePolicy},
    prelude::*,
};

#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ValidationError {
    /// Required numeric field is absent or does not parse as a number.
    #[display("missing or invalid value for `{_0}`")]
    MissingOrInvalidField(#[error(not(source))] String),

    /// Enumerated field holds a token the device does not know, reported in strict mode only.
    #[display("unrecognized value `{value}` for `{field}`")]
    UnrecognizedChoice { field: String, value: String },
}

/// Numeric field value.
pub trait Number: FromStr + Copy + Default {
    fn is_valid(self) -> bool;
}

impl Number for f64 {
    fn is_valid(self) -> bool {
        self.is_finite()
    }
}

impl Number for i32 {
    fn is_valid(self) -> bool {
        true
    }
}

/// Free-text field values keyed by metric name, exactly as the user typed them.
///
/// Unknown keys are kept but never read.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawInputs(BTreeMap<String, String>);

impl RawInputs {
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Parse a single required number.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingOrInvalidField`] when the field is absent or malformed.
    pub fn number<T: Number>(&self, name: &str) -> Result<T, ValidationError> {
        self.get(name)
            .and_then(|value| value.trim().parse::<T>().ok())
            .filter(|value| value.is_valid())
            .ok_or_else(|| ValidationError::MissingOrInvalidField(name.to_owned()))
    }

    /// Parse the required numbers in order.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingOrInvalidField`] for the first absent or malformed field.
    pub fn require<T: Number, const N: usize>(
        &self,
        names: [&str; N],
    ) -> Result<[T; N], ValidationError> {
        let mut values = [T::default(); N];
        for (value, name) in values.iter_mut().zip(names) {
            *value = self.number(name)?;
        }
        Ok(values)
    }

    /// Read an enumerated field, lower-cased.
    ///
    /// Absent and blank fields take the default.
    ///
    /// # Errors
    ///
    /// [`ValidationError::UnrecognizedChoice`] for an unknown token under [`ChoicePolicy::Strict`].
    pub fn choice<C: Choice>(
        &self,
        name: &str,
        policy: ChoicePolicy,
    ) -> Result<C, ValidationError> {
        let Some(token) = self.get(name).map(|value| value.trim().to_lowercase()) else {
            return Ok(C::default());
        };
        if token.is_empty() {
            return Ok(C::default());
        }
        match (C::from_token(&token), policy) {
            (Some(choice), _) => Ok(choice),
            (None, ChoicePolicy::Lenient) => {
                debug!(field = name, %token, "unrecognized choice, falling back to the default");
                Ok(C::default())
            }
            (None, ChoicePolicy::Strict) => {
                Err(ValidationError::UnrecognizedChoice { field: name.to_owned(), value: token })
            }
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawInputs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, value)| (name.into(), value.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::choice::FanSpeed;

    #[test]
    fn test_require_ok() {
        let inputs =
            RawInputs::from_iter([("Usage Time", " 60 "), ("Adjusted Temperature", "21.5")]);
        let [time, temperature] =
            inputs.require::<f64, 2>(["Usage Time", "Adjusted Temperature"]).unwrap();
        assert_eq!(time, 60.0);
        assert_eq!(temperature, 21.5);
    }

    #[test]
    fn test_require_reports_first_failure() {
        let inputs = RawInputs::from_iter([("Adjusted Temperature", "warm")]);
        assert_eq!(
            inputs.require::<f64, 2>(["Usage Time", "Adjusted Temperature"]),
            Err(ValidationError::MissingOrInvalidField("Usage Time".to_owned())),
        );
    }

    #[test]
    fn test_require_rejects_non_finite() {
        let inputs = RawInputs::from_iter([("Usage Time", "NaN")]);
        assert!(inputs.number::<f64>("Usage Time").is_err());
    }

    #[test]
    fn test_integer_rejects_fraction() {
        let inputs = RawInputs::from_iter([("Number of Radiators", "2.5")]);
        assert_eq!(
            inputs.number::<i32>("Number of Radiators"),
            Err(ValidationError::MissingOrInvalidField("Number of Radiators".to_owned())),
        );
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let inputs = RawInputs::from_iter([("Usage Time", "10"), ("Colour", "red")]);
        assert_eq!(inputs.require::<f64, 1>(["Usage Time"]), Ok([10.0]));
    }

    #[test]
    fn test_choice_is_case_insensitive() {
        let inputs = RawInputs::from_iter([("Fan Speed", "HIGH")]);
        assert_eq!(inputs.choice("Fan Speed", ChoicePolicy::Strict), Ok(FanSpeed::High));
    }

    #[test]
    fn test_choice_defaults() {
        let inputs = RawInputs::from_iter([("Fan Speed", "turbo"), ("Other", "")]);
        assert_eq!(inputs.choice("Fan Speed", ChoicePolicy::Lenient), Ok(FanSpeed::Low));
        assert_eq!(inputs.choice("Missing", ChoicePolicy::Strict), Ok(FanSpeed::Low));
        assert_eq!(inputs.choice("Other", ChoicePolicy::Strict), Ok(FanSpeed::Low));
        assert_eq!(
            inputs.choice::<FanSpeed>("Fan Speed", ChoicePolicy::Strict),
            Err(ValidationError::UnrecognizedChoice {
                field: "Fan Speed".to_owned(),
                value: "turbo".to_owned(),
            }),
        );
    }
}
