//! Validation of label and annotation key/value pairs.
//!
//! Keys are parsed into a [`Key`], label values into a [`LabelValue`]. Both types can only be
//! constructed from valid input.

use std::str::FromStr;

use snafu::{ResultExt, Snafu};

use crate::validation;

mod annotation;
mod key;
mod label;

pub use annotation::*;
pub use key::*;
pub use label::*;

#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum LabelError {
    #[snafu(display("invalid label key"))]
    InvalidKey { source: KeyError },

    #[snafu(display("invalid label value"))]
    InvalidValue { source: validation::Errors },
}

/// Parses both halves of a label.
pub fn parse_label(key: &str, value: &str) -> Result<(Key, LabelValue), LabelError> {
    let key = Key::from_str(key).context(InvalidKeySnafu)?;
    let value = LabelValue::from_str(value).context(InvalidValueSnafu)?;

    Ok((key, value))
}
