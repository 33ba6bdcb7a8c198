use std::{fmt, str::FromStr};

use crate::validation::{self, Format};

/// A validated label value. Unlike keys, values may be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct LabelValue(String);

impl FromStr for LabelValue {
    type Err = validation::Errors;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Format::LabelValue.validate(input)?;
        Ok(Self(input.to_owned()))
    }
}

impl AsRef<str> for LabelValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LabelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("")]
    #[case("redis")]
    #[case("Tier_1.primary")]
    #[case("7.4.2-54")]
    fn valid_values(#[case] input: &str) {
        assert_eq!(LabelValue::from_str(input).unwrap().as_ref(), input);
    }

    #[rstest]
    #[case("foo-")]
    #[case("tier 1")]
    #[case(&"a".repeat(64))]
    fn invalid_values(#[case] input: &str) {
        assert!(LabelValue::from_str(input).is_err());
    }
}
