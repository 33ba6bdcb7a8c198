use std::{fmt, str::FromStr};

use snafu::{ResultExt, Snafu, ensure};

use crate::validation::{self, Format};

#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum KeyError {
    #[snafu(display("key cannot be empty"))]
    EmptyKey,

    /// Keys like `redislabs.com/nested/name` contain more than one slash.
    #[snafu(display("key contains more than one '/'"))]
    NestedPrefix,

    #[snafu(display("invalid prefix {prefix:?}"))]
    InvalidPrefix {
        source: validation::Errors,
        prefix: String,
    },

    #[snafu(display("invalid name {name:?}"))]
    InvalidName {
        source: validation::Errors,
        name: String,
    },
}

/// The key of a label or annotation: `[<prefix>/]<name>`.
///
/// The prefix is a DNS subdomain like `app.kubernetes.io`, the name a
/// [qualified name](Format::QualifiedName).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Key {
    prefix: Option<String>,
    name: String,
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        ensure!(!input.is_empty(), EmptyKeySnafu);

        let (prefix, name) = match input.split_once('/') {
            Some((prefix, name)) => {
                ensure!(!name.contains('/'), NestedPrefixSnafu);
                (Some(prefix), name)
            }
            None => (None, input),
        };

        if let Some(prefix) = prefix {
            Format::DnsSubdomain
                .validate(prefix)
                .context(InvalidPrefixSnafu { prefix })?;
        }
        Format::QualifiedName
            .validate(name)
            .context(InvalidNameSnafu { name })?;

        Ok(Self {
            prefix: prefix.map(str::to_owned),
            name: name.to_owned(),
        })
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = &self.prefix {
            write!(f, "{prefix}/")?;
        }
        f.write_str(&self.name)
    }
}

impl Key {
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("app.redislabs.com/redis-cluster", Some("app.redislabs.com"), "redis-cluster")]
    #[case("Tier_1.primary", None, "Tier_1.primary")]
    #[case("a/b", Some("a"), "b")]
    fn valid_keys(#[case] input: &str, #[case] prefix: Option<&str>, #[case] name: &str) {
        let key = Key::from_str(input).unwrap();

        assert_eq!(key.prefix(), prefix);
        assert_eq!(key.name(), name);
        assert_eq!(key.to_string(), input);
    }

    #[rstest]
    #[case("", KeyError::EmptyKey)]
    #[case("foo/bar/baz", KeyError::NestedPrefix)]
    fn structurally_invalid_keys(#[case] input: &str, #[case] expected: KeyError) {
        assert_eq!(Key::from_str(input).unwrap_err(), expected);
    }

    #[rstest]
    #[case("/name")]
    #[case("Example.com/name")]
    #[case("example_com/name")]
    #[case(&format!("{}/name", "a".repeat(254)))]
    fn invalid_prefixes(#[case] input: &str) {
        assert!(matches!(
            Key::from_str(input),
            Err(KeyError::InvalidPrefix { .. })
        ));
    }

    #[rstest]
    #[case("example.com/")]
    #[case("bad key")]
    #[case("foo-")]
    #[case("ä")]
    #[case(&"a".repeat(64))]
    fn invalid_names(#[case] input: &str) {
        assert!(matches!(
            Key::from_str(input),
            Err(KeyError::InvalidName { .. })
        ));
    }

    #[test]
    fn error_names_the_segment() {
        let err = Key::from_str("Example.com/name").unwrap_err();
        assert_eq!(err.to_string(), "invalid prefix \"Example.com\"");
    }
}
