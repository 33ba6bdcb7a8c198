use std::{
    ffi::OsStr,
    io::Read,
    path::{Path, PathBuf},
};

use k8s_manifest_shared::yaml;
use serde_json::Value;
use snafu::{ResultExt, Snafu};

type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("failed to read configuration file {path:?}"))]
    ReadFile {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display("failed to read configuration from stdin"))]
    ReadStdin { source: std::io::Error },

    #[snafu(display("failed to parse configuration as JSON"))]
    ParseJson { source: serde_json::Error },

    #[snafu(display("failed to parse configuration as YAML"))]
    ParseYaml { source: yaml::Error },
}

/// The format of a configuration document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum InputFormat {
    Json,

    /// YAML, which also accepts JSON documents.
    Yaml,
}

impl InputFormat {
    /// Picks the format based on the extension of `path`, falling back to YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(OsStr::to_str) {
            Some(extension) if extension.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }

    /// Parses `input` into a configuration value.
    pub fn parse(self, input: &str) -> Result<Value> {
        match self {
            Self::Json => serde_json::from_str(input).context(ParseJsonSnafu),
            Self::Yaml => yaml::from_str(input).context(ParseYamlSnafu),
        }
    }
}

/// Where the configuration of a data source is read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    Stdin,
    File(PathBuf),
}

impl From<&OsStr> for ConfigSource {
    fn from(s: &OsStr) -> Self {
        if s == "-" {
            Self::Stdin
        } else {
            Self::File(s.into())
        }
    }
}

impl ConfigSource {
    /// The format used when none is given explicitly.
    pub fn detect_format(&self) -> InputFormat {
        match self {
            Self::Stdin => InputFormat::Yaml,
            Self::File(path) => InputFormat::from_path(path),
        }
    }

    /// Reads and parses the configuration, using `format` if given.
    pub fn load(&self, format: Option<InputFormat>) -> Result<Value> {
        let format = format.unwrap_or_else(|| self.detect_format());
        tracing::debug!(source = ?self, %format, "loading configuration");

        let input = match self {
            Self::Stdin => {
                let mut input = String::new();
                std::io::stdin()
                    .read_to_string(&mut input)
                    .context(ReadStdinSnafu)?;
                input
            }
            Self::File(path) => std::fs::read_to_string(path).context(ReadFileSnafu { path })?,
        };

        format.parse(&input)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case("-", ConfigSource::Stdin)]
    #[case("rec.yaml", ConfigSource::File("rec.yaml".into()))]
    #[case("./-", ConfigSource::File("./-".into()))]
    fn config_source_from_argument(#[case] input: &str, #[case] expected: ConfigSource) {
        assert_eq!(ConfigSource::from(OsStr::new(input)), expected);
    }

    #[rstest]
    #[case("rec.json", InputFormat::Json)]
    #[case("REC.JSON", InputFormat::Json)]
    #[case("rec.yaml", InputFormat::Yaml)]
    #[case("rec.yml", InputFormat::Yaml)]
    #[case("rec", InputFormat::Yaml)]
    fn format_from_extension(#[case] path: &str, #[case] expected: InputFormat) {
        assert_eq!(InputFormat::from_path(Path::new(path)), expected);
    }

    #[test]
    fn yaml_accepts_json() {
        let value = InputFormat::Yaml
            .parse(r#"{"metadata": {"name": "x", "namespace": "y"}}"#)
            .unwrap();
        assert_eq!(value, json!({"metadata": {"name": "x", "namespace": "y"}}));
    }

    #[test]
    fn json_rejects_yaml() {
        let result = InputFormat::Json.parse("metadata:\n  name: x\n");
        assert!(matches!(result, Err(Error::ParseJson { .. })));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"spec": {{"nodes": 3}}}}"#).unwrap();

        let source = ConfigSource::File(file.path().to_path_buf());
        assert_eq!(source.detect_format(), InputFormat::Json);
        assert_eq!(source.load(None).unwrap(), json!({"spec": {"nodes": 3}}));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = ConfigSource::File(dir.path().join("missing.yaml"));

        assert!(matches!(source.load(None), Err(Error::ReadFile { .. })));
    }
}
