//! Utility functions for processing data in the YAML file format

use serde::{Serialize, de::DeserializeOwned};
use snafu::{ResultExt, Snafu};

type Result<T, E = Error> = std::result::Result<T, E>;

/// Represents every error which can be encountered during YAML (de)serialization.
#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("failed to serialize YAML"))]
    SerializeYaml { source: serde_yaml::Error },

    #[snafu(display("failed to deserialize YAML"))]
    DeserializeYaml { source: serde_yaml::Error },

    #[snafu(display("failed to write YAML document separator"))]
    WriteDocumentSeparator { source: std::io::Error },

    #[snafu(display("failed to parse bytes as valid UTF-8 string"))]
    ParseUtf8Bytes { source: std::string::FromUtf8Error },
}

/// Provides configurable options during YAML serialization.
///
/// The default implementation [`SerializeOptions::default()`] enables explicit document and
/// singleton map serialization. Rendered manifests use [`SerializeOptions::manifest()`], which
/// omits the leading document marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Adds leading triple dashes (`---`) to the output string.
    pub explicit_document: bool,

    /// Serialize enum variants as YAML maps using the variant name as the key.
    pub singleton_map: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            explicit_document: true,
            singleton_map: true,
        }
    }
}

impl SerializeOptions {
    /// Options used for the `yaml` output of manifest data sources: a bare document without a
    /// leading `---`.
    pub fn manifest() -> Self {
        Self {
            explicit_document: false,
            ..Self::default()
        }
    }
}

/// Serializes the given data structure and writes it to `writer`.
pub fn serialize<T, W>(value: &T, mut writer: W, options: SerializeOptions) -> Result<()>
where
    T: Serialize,
    W: std::io::Write,
{
    if options.explicit_document {
        writer
            .write_all(b"---\n")
            .context(WriteDocumentSeparatorSnafu)?;
    }

    let mut serializer = serde_yaml::Serializer::new(writer);

    if options.singleton_map {
        serde_yaml::with::singleton_map_recursive::serialize(value, &mut serializer)
            .context(SerializeYamlSnafu)?;
    } else {
        value
            .serialize(&mut serializer)
            .context(SerializeYamlSnafu)?;
    }

    Ok(())
}

/// Serializes the given data structure into a YAML [`String`].
pub fn to_string<T>(value: &T, options: SerializeOptions) -> Result<String>
where
    T: Serialize,
{
    let mut buffer = Vec::new();
    serialize(value, &mut buffer, options)?;

    String::from_utf8(buffer).context(ParseUtf8BytesSnafu)
}

/// Serializes every value as its own document into a single multi-document YAML stream.
///
/// Each document is preceded by `---`, regardless of [`SerializeOptions::explicit_document`].
pub fn to_multi_document_string<'a, T, I>(values: I, options: SerializeOptions) -> Result<String>
where
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let options = SerializeOptions {
        explicit_document: true,
        ..options
    };

    let mut buffer = Vec::new();
    for value in values {
        serialize(value, &mut buffer, options)?;
    }

    String::from_utf8(buffer).context(ParseUtf8BytesSnafu)
}

/// Deserializes a YAML document into `T`.
pub fn from_str<T>(input: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_yaml::from_str(input).context(DeserializeYamlSnafu)
}
