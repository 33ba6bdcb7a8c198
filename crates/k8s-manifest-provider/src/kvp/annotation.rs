use std::str::FromStr;

use snafu::{Snafu, ensure};

use super::{Key, KeyError};

/// The total size of all annotation keys and values of a single object.
pub const TOTAL_ANNOTATION_SIZE_LIMIT: usize = 256 * 1024;

#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum AnnotationsError {
    #[snafu(display(
        "annotations are {size} bytes in total but must be no more than {max_size}"
    ))]
    TooLarge { size: usize, max_size: usize },
}

/// Parses an annotation key.
///
/// The API server lowercases annotation keys before checking them, so mixed-case prefixes are
/// accepted here even though they are rejected in label keys.
pub fn parse_annotation_key(key: &str) -> Result<Key, KeyError> {
    Key::from_str(&key.to_ascii_lowercase())
}

/// Checks the combined length of every key and value against [`TOTAL_ANNOTATION_SIZE_LIMIT`].
pub fn validate_annotations_size<'a>(
    annotations: impl IntoIterator<Item = (&'a String, &'a String)>,
) -> Result<(), AnnotationsError> {
    let size = annotations
        .into_iter()
        .map(|(key, value)| key.len() + value.len())
        .sum::<usize>();

    ensure!(
        size <= TOTAL_ANNOTATION_SIZE_LIMIT,
        TooLargeSnafu {
            size,
            max_size: TOTAL_ANNOTATION_SIZE_LIMIT
        }
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Redislabs.com/Managed-By")]
    #[case("kubectl.kubernetes.io/last-applied-configuration")]
    #[case("description")]
    fn mixed_case_keys_are_accepted(#[case] key: &str) {
        assert!(parse_annotation_key(key).is_ok());
    }

    #[test]
    fn invalid_key_is_rejected() {
        assert_eq!(
            parse_annotation_key("a/b/c").unwrap_err(),
            KeyError::NestedPrefix
        );
    }

    #[test]
    fn size_limit_is_inclusive() {
        let mut annotations = BTreeMap::new();
        annotations.insert("k".to_owned(), "v".repeat(TOTAL_ANNOTATION_SIZE_LIMIT - 1));
        assert!(validate_annotations_size(&annotations).is_ok());

        annotations.insert("l".to_owned(), String::new());
        assert_eq!(
            validate_annotations_size(&annotations).unwrap_err(),
            AnnotationsError::TooLarge {
                size: TOTAL_ANNOTATION_SIZE_LIMIT + 1,
                max_size: TOTAL_ANNOTATION_SIZE_LIMIT
            }
        );
    }
}
