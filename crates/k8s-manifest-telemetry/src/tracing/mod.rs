//! Installs the global tracing subscriber of the k8s-manifest binaries.
//!
//! Two outputs are supported, each with its own level filter:
//!
//! - console logs on stderr, enabled by default at `WARN`,
//! - rolling JSON log files, enabled by passing a directory, at `INFO`.
//!
//! To get started, see [`Tracing::pre_configured`].

use std::path::PathBuf;

use snafu::{ResultExt as _, Snafu};
use tracing::{level_filters::LevelFilter, subscriber::SetGlobalDefaultError};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{InitError, Rotation},
};
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt};

mod output;

pub use output::*;

type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("failed to create the log file appender"))]
    CreateFileAppender { source: InitError },

    #[snafu(display("unable to set the global default subscriber"))]
    SetGlobalDefaultSubscriber { source: SetGlobalDefaultError },
}

/// The configured outputs, and after [`Tracing::init`] the guard of the file writer.
///
/// Keep the value returned by [`Tracing::init`] alive until the program exits. Dropping it
/// flushes the file writer, log lines emitted afterwards are lost.
///
/// ```
/// use k8s_manifest_telemetry::tracing::{Error, TelemetryOptions, Tracing};
///
/// fn main() -> Result<(), Error> {
///     let _tracing_guard =
///         Tracing::pre_configured("k8s-manifest", TelemetryOptions::default()).init()?;
///
///     tracing::warn!("visible on stderr");
///     Ok(())
/// }
/// ```
pub struct Tracing {
    service_name: &'static str,
    console_output: Option<ConsoleOutput>,
    file_output: Option<FileOutput>,

    file_guard: Option<WorkerGuard>,
}

impl Tracing {
    /// Overrides the console log level, e.g. `CONSOLE_LOG_LEVEL=k8s_manifest_provider=debug`.
    pub const CONSOLE_LOG_LEVEL: &str = "CONSOLE_LOG_LEVEL";
    /// Overrides the file log level.
    pub const FILE_LOG_LEVEL: &str = "FILE_LOG_LEVEL";
    pub const FILE_LOG_SUFFIX: &str = "tracing-rs.json";

    /// A [`Tracing`] instance without any output. Used as the starting point of
    /// [`Tracing::with_console_output`] and [`Tracing::with_file_output`].
    pub fn new(service_name: &'static str) -> Self {
        Self {
            service_name,
            console_output: None,
            file_output: None,
            file_guard: None,
        }
    }

    /// Builds the outputs selected by `options`.
    ///
    /// Console logs default to `WARN`, so that pipelines consuming the rendered YAML only see
    /// problems. File logs default to `INFO`.
    pub fn pre_configured(service_name: &'static str, options: TelemetryOptions) -> Self {
        let TelemetryOptions {
            console_log_disabled,
            console_log_format,
            file_log_directory,
            file_log_rotation_period,
            file_log_max_files,
        } = options;

        let tracing = if console_log_disabled {
            Self::new(service_name)
        } else {
            Self::new(service_name).with_console_output(ConsoleOutput {
                level: LevelSettings::new(Self::CONSOLE_LOG_LEVEL, LevelFilter::WARN),
                format: console_log_format.unwrap_or_default(),
            })
        };

        match file_log_directory {
            Some(directory) => tracing.with_file_output(FileOutput {
                level: LevelSettings::new(Self::FILE_LOG_LEVEL, LevelFilter::INFO),
                directory,
                rotation: file_log_rotation_period.unwrap_or_default().into(),
                filename_suffix: Self::FILE_LOG_SUFFIX,
                max_files: file_log_max_files,
            }),
            None => tracing,
        }
    }

    pub fn with_console_output(self, console_output: ConsoleOutput) -> Self {
        Self {
            console_output: Some(console_output),
            ..self
        }
    }

    pub fn with_file_output(self, file_output: FileOutput) -> Self {
        Self {
            file_output: Some(file_output),
            ..self
        }
    }

    /// Installs the configured outputs as the global default subscriber.
    ///
    /// Nothing is installed when no output is configured.
    pub fn init(mut self) -> Result<Self> {
        let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

        if let Some(ConsoleOutput { level, format }) = &self.console_output {
            let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
            layers.push(match format {
                Format::Plain => layer.with_filter(level.env_filter()).boxed(),
                Format::Json => layer.json().with_filter(level.env_filter()).boxed(),
            });
        }

        if let Some(file_output) = &self.file_output {
            let appender = file_output
                .appender(self.service_name)
                .context(CreateFileAppenderSnafu)?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            self.file_guard = Some(guard);

            layers.push(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_filter(file_output.level.env_filter())
                    .boxed(),
            );
        }

        if !layers.is_empty() {
            tracing::subscriber::set_global_default(tracing_subscriber::registry().with(layers))
                .context(SetGlobalDefaultSubscriberSnafu)?;
        }

        tracing::debug!(
            service.name = self.service_name,
            console.enabled = self.console_output.is_some(),
            file.enabled = self.file_output.is_some(),
            "tracing initialized"
        );

        // Returning self keeps the file writer guard alive
        Ok(self)
    }
}

/// Command line arguments, with environment fallbacks, selecting the outputs of
/// [`Tracing::pre_configured`].
///
/// The clap support requires the `clap` feature.
#[cfg_attr(feature = "clap", derive(clap::Args, PartialEq, Eq))]
#[derive(Debug, Default)]
pub struct TelemetryOptions {
    /// Disable console logs.
    #[cfg_attr(feature = "clap", arg(long, env))]
    pub console_log_disabled: bool,

    /// Console log FORMAT.
    #[cfg_attr(feature = "clap", arg(long, env, value_name = "FORMAT"))]
    pub console_log_format: Option<Format>,

    /// Write JSON log files into DIRECTORY.
    #[cfg_attr(
        feature = "clap",
        arg(long, env, value_name = "DIRECTORY", group = "file_log")
    )]
    pub file_log_directory: Option<PathBuf>,

    /// Time PERIOD after which log files are rolled over.
    #[cfg_attr(
        feature = "clap",
        arg(long, env, value_name = "PERIOD", requires = "file_log")
    )]
    pub file_log_rotation_period: Option<RotationPeriod>,

    /// Maximum NUMBER of rolled over log files to keep.
    #[cfg_attr(
        feature = "clap",
        arg(long, env, value_name = "NUMBER", requires = "file_log")
    )]
    pub file_log_max_files: Option<usize>,
}

#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum RotationPeriod {
    Minutely,
    Hourly,
    Daily,

    #[default]
    Never,
}

impl From<RotationPeriod> for Rotation {
    fn from(value: RotationPeriod) -> Self {
        match value {
            RotationPeriod::Minutely => Self::MINUTELY,
            RotationPeriod::Hourly => Self::HOURLY,
            RotationPeriod::Daily => Self::DAILY,
            RotationPeriod::Never => Self::NEVER,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn new_has_no_outputs() {
        let tracing = Tracing::new("test");

        assert_eq!(tracing.service_name, "test");
        assert_eq!(tracing.console_output, None);
        assert_eq!(tracing.file_output, None);
    }

    #[test]
    fn pre_configured_defaults_to_console_warnings() {
        let tracing = Tracing::pre_configured("test", TelemetryOptions::default());

        assert_eq!(
            tracing.console_output,
            Some(ConsoleOutput {
                level: LevelSettings::new(Tracing::CONSOLE_LOG_LEVEL, LevelFilter::WARN),
                format: Format::Plain,
            })
        );
        assert_eq!(tracing.file_output, None);
    }

    #[test]
    fn pre_configured_file_output() {
        let options = TelemetryOptions {
            console_log_disabled: true,
            console_log_format: None,
            file_log_directory: Some(PathBuf::from("/var/log/k8s-manifest")),
            file_log_rotation_period: Some(RotationPeriod::Daily),
            file_log_max_files: Some(3),
        };
        let tracing = Tracing::pre_configured("test", options);

        assert_eq!(tracing.console_output, None);
        assert_eq!(
            tracing.file_output,
            Some(FileOutput {
                level: LevelSettings::new(Tracing::FILE_LOG_LEVEL, LevelFilter::INFO),
                directory: PathBuf::from("/var/log/k8s-manifest"),
                rotation: Rotation::DAILY,
                filename_suffix: Tracing::FILE_LOG_SUFFIX,
                max_files: Some(3),
            })
        );
    }

    #[test]
    fn init_without_outputs_installs_nothing() {
        let tracing = Tracing::new("test").init().unwrap();
        assert!(tracing.file_guard.is_none());
    }

    #[rstest]
    #[case(RotationPeriod::Minutely, Rotation::MINUTELY)]
    #[case(RotationPeriod::Hourly, Rotation::HOURLY)]
    #[case(RotationPeriod::Daily, Rotation::DAILY)]
    #[case(RotationPeriod::Never, Rotation::NEVER)]
    fn rotation_period_conversion(#[case] period: RotationPeriod, #[case] expected: Rotation) {
        assert_eq!(Rotation::from(period), expected);
    }

    #[cfg(feature = "clap")]
    #[test]
    fn file_options_require_directory() {
        use clap::Parser;

        #[derive(Debug, Parser)]
        struct Opts {
            #[command(flatten)]
            telemetry: TelemetryOptions,
        }

        assert!(Opts::try_parse_from(["test", "--file-log-max-files", "3"]).is_err());

        let opts = Opts::try_parse_from([
            "test",
            "--file-log-directory",
            "/tmp/logs",
            "--file-log-rotation-period",
            "hourly",
        ])
        .unwrap();
        assert_eq!(
            opts.telemetry.file_log_rotation_period,
            Some(RotationPeriod::Hourly)
        );
    }
}
