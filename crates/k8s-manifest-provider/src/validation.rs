//! Checks for the object metadata formats enforced by the Kubernetes API server.
//!
//! Rendered manifests are never sent to a cluster, so an invalid name would otherwise only surface
//! when the document is applied.
//!
//! The formats follow `apimachinery/pkg/util/validation/validation.go` in the Kubernetes source.

use std::{fmt, sync::LazyLock};

use const_format::concatcp;
use regex::Regex;
use snafu::Snafu;

const DNS_LABEL_FMT: &str = "[a-z0-9]([-a-z0-9]*[a-z0-9])?";
const DNS_SUBDOMAIN_FMT: &str = concatcp!(DNS_LABEL_FMT, "(\\.", DNS_LABEL_FMT, ")*");
const QUALIFIED_NAME_FMT: &str = "([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9]";

static DNS_LABEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concatcp!("^", DNS_LABEL_FMT, "$")).expect("failed to compile DNS label regex")
});

static DNS_SUBDOMAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concatcp!("^", DNS_SUBDOMAIN_FMT, "$"))
        .expect("failed to compile DNS subdomain regex")
});

static QUALIFIED_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concatcp!("^", QUALIFIED_NAME_FMT, "$"))
        .expect("failed to compile qualified name regex")
});

/// A string format of object metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum Format {
    /// A lowercase RFC 1123 label, used for namespaces.
    #[strum(to_string = "DNS label")]
    DnsLabel,

    /// A lowercase RFC 1123 subdomain, used for object names and key prefixes.
    #[strum(to_string = "DNS subdomain")]
    DnsSubdomain,

    /// The name segment of a label or annotation key.
    #[strum(to_string = "qualified name")]
    QualifiedName,

    /// A label value. Same charset as [`Format::QualifiedName`], but may be empty.
    #[strum(to_string = "label value")]
    LabelValue,
}

impl Format {
    pub fn max_length(self) -> usize {
        match self {
            Self::DnsSubdomain => 253,
            Self::DnsLabel | Self::QualifiedName | Self::LabelValue => 63,
        }
    }

    fn regex(self) -> &'static Regex {
        match self {
            Self::DnsLabel => &DNS_LABEL_REGEX,
            Self::DnsSubdomain => &DNS_SUBDOMAIN_REGEX,
            Self::QualifiedName | Self::LabelValue => &QUALIFIED_NAME_REGEX,
        }
    }

    fn rule(self) -> &'static str {
        match self {
            Self::DnsLabel => {
                "must consist of lower case alphanumeric characters or '-', and must start and end with an alphanumeric character"
            }
            Self::DnsSubdomain => {
                "must consist of lower case alphanumeric characters, '-' or '.', and must start and end with an alphanumeric character"
            }
            Self::QualifiedName | Self::LabelValue => {
                "must consist of alphanumeric characters, '-', '_' or '.', and must start and end with an alphanumeric character"
            }
        }
    }

    fn example(self) -> &'static str {
        match self {
            Self::DnsLabel => "redis-prod",
            Self::DnsSubdomain => "rec.redis.example.com",
            Self::QualifiedName => "managed-by",
            Self::LabelValue => "7.4.2-54",
        }
    }

    /// Checks `value` against this format, reporting every violated constraint.
    pub fn validate(self, value: &str) -> Result<(), Errors> {
        if value.is_empty() {
            return match self {
                Self::LabelValue => Ok(()),
                _ => Err(Errors(vec![Error::Empty { format: self }])),
            };
        }

        let mut errors = Vec::new();
        if value.len() > self.max_length() {
            errors.push(Error::TooLong {
                format: self,
                length: value.len(),
                max_length: self.max_length(),
            });
        }
        if !self.regex().is_match(value) {
            errors.push(Error::Mismatch { format: self });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Errors(errors))
        }
    }
}

/// One violated constraint.
#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum Error {
    #[snafu(display("a {format} must not be empty"))]
    Empty { format: Format },

    #[snafu(display("a {format} must be no more than {max_length} bytes, got {length}"))]
    TooLong {
        format: Format,
        length: usize,
        max_length: usize,
    },

    #[snafu(display(
        "a {format} {rule} (e.g. {example:?})",
        rule = format.rule(),
        example = format.example()
    ))]
    Mismatch { format: Format },
}

/// All constraints a value violates. Never empty.
#[derive(Debug, PartialEq, Eq)]
pub struct Errors(Vec<Error>);

impl Errors {
    pub fn iter(&self) -> impl Iterator<Item = &Error> {
        self.0.iter()
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut errors = self.0.iter();
        if let Some(first) = errors.next() {
            write!(f, "{first}")?;
        }
        for error in errors {
            write!(f, ", {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Errors {}

/// Validates the `metadata.name` of an object. Custom resources require a DNS subdomain.
pub fn validate_object_name(name: &str) -> Result<(), Errors> {
    Format::DnsSubdomain.validate(name)
}

/// Validates a namespace, which must be a DNS label.
pub fn validate_namespace_name(namespace: &str) -> Result<(), Errors> {
    Format::DnsLabel.validate(namespace)
}
