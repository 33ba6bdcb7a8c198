//! The outputs a [`Tracing`][super::Tracing] instance can write to.

use std::path::PathBuf;

use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::{Builder, InitError, RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// The level filter of one output: a default level, overridable through an environment variable
/// using the usual `EnvFilter` directive syntax.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelSettings {
    pub environment_variable: &'static str,
    pub default_level: LevelFilter,
}

impl LevelSettings {
    pub fn new(environment_variable: &'static str, default_level: impl Into<LevelFilter>) -> Self {
        Self {
            environment_variable,
            default_level: default_level.into(),
        }
    }

    /// Builds the filter, ignoring invalid directives in the environment variable.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::builder()
            .with_env_var(self.environment_variable)
            .with_default_directive(self.default_level.into())
            .from_env_lossy()
    }
}

/// Line format of the console output.
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    /// Human readable lines.
    #[default]
    Plain,

    /// One JSON object per line.
    Json,
}

/// Console output, always written to stderr. Stdout is reserved for command output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleOutput {
    pub level: LevelSettings,
    pub format: Format,
}

/// Rolling JSON log files in `directory`, named `<service name>.<rotation>.<suffix>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileOutput {
    pub level: LevelSettings,
    pub directory: PathBuf,
    pub rotation: Rotation,
    pub filename_suffix: &'static str,

    /// Number of rotated files kept, unlimited when unset.
    pub max_files: Option<usize>,
}

impl FileOutput {
    pub(super) fn appender(&self, service_name: &str) -> Result<RollingFileAppender, InitError> {
        let builder = Builder::new()
            .rotation(self.rotation.clone())
            .filename_prefix(service_name)
            .filename_suffix(self.filename_suffix);

        match self.max_files {
            Some(max_files) => builder.max_log_files(max_files),
            None => builder,
        }
        .build(&self.directory)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("plain", Format::Plain)]
    #[case("json", Format::Json)]
    fn parse_format(#[case] input: &str, #[case] expected: Format) {
        assert_eq!(Format::from_str(input).unwrap(), expected);
        assert_eq!(expected.to_string(), input);
    }

    #[test]
    fn appender_writes_into_directory() {
        let directory = tempfile::tempdir().unwrap();
        let output = FileOutput {
            level: LevelSettings::new("K8S_MANIFEST_TEST_FILE_LOG_LEVEL", LevelFilter::INFO),
            directory: directory.path().to_path_buf(),
            rotation: Rotation::NEVER,
            filename_suffix: "log.json",
            max_files: None,
        };

        output.appender("test").unwrap();
        assert!(directory.path().join("test.log.json").exists());
    }
}
