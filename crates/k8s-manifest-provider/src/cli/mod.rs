//! Command line interface to the [`Provider`], taking the place of a plugin host.
//!
//! ```no_run
//! use clap::Parser;
//! use k8s_manifest_provider::{cli, provider::Provider};
//!
//! #[derive(clap::Parser)]
//! struct Opts {
//!     #[command(subcommand)]
//!     command: cli::Command,
//! }
//!
//! # fn main() -> Result<(), cli::Error> {
//! let opts = Opts::parse();
//! cli::run(opts.command, &Provider::default(), std::io::stdout().lock())?;
//! # Ok(())
//! # }
//! ```
use std::io::Write;

use clap::{Args, Parser};
use snafu::{OptionExt, ResultExt, Snafu, ensure};

use crate::{diagnostics::Diagnostics, provider::Provider, schema::YAML_ATTRIBUTE};

mod config;

pub use config::{ConfigSource, Error as ConfigError, InputFormat};

type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("failed to load the configuration"))]
    LoadConfig { source: ConfigError },

    #[snafu(display("no data source named {type_name:?}, see the list subcommand"))]
    UnknownDataSource { type_name: String },

    #[snafu(display("failed to serialize schema"))]
    SerializeSchema { source: serde_json::Error },

    #[snafu(display("failed to serialize state"))]
    SerializeState { source: serde_json::Error },

    #[snafu(display("data source {type_name:?} reported errors:\n{diagnostics}"))]
    ReadDataSource {
        type_name: String,
        diagnostics: Diagnostics,
    },

    #[snafu(display("data source {type_name:?} did not produce a {attribute:?} attribute"))]
    MissingStateAttribute {
        type_name: String,
        attribute: &'static str,
    },

    #[snafu(display("failed to write output"))]
    WriteOutput { source: std::io::Error },
}

/// The subcommands of the `k8s-manifest` binary.
#[derive(Debug, PartialEq, Eq, Parser)]
pub enum Command {
    /// Print the type names of all data sources.
    List,

    /// Print the JSON schema of a data source, or of the whole provider.
    Schema(SchemaArguments),

    /// Render a manifest from a JSON or YAML configuration.
    Render(RenderArguments),
}

#[derive(Debug, PartialEq, Eq, Args)]
pub struct SchemaArguments {
    /// Type name of the data source. The schemas of all data sources are printed when omitted.
    pub data_source: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Args)]
pub struct RenderArguments {
    /// Type name of the data source, as printed by the list subcommand.
    pub data_source: String,

    /// Configuration of the data source. Use `-` to read it from stdin.
    #[arg(long, short = 'c', value_name = "FILE", default_value = "-", env = "K8S_MANIFEST_CONFIG")]
    pub config: ConfigSource,

    /// Format of the configuration. Detected from the file extension when omitted, stdin defaults
    /// to YAML.
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,

    /// Print the rendered YAML document, or the complete state as JSON.
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    State,
}

/// Runs `command` against `provider`, writing the results to `out`.
pub fn run(command: Command, provider: &Provider, mut out: impl Write) -> Result<()> {
    match command {
        Command::List => {
            for type_name in provider.data_source_type_names() {
                writeln!(out, "{type_name}").context(WriteOutputSnafu)?;
            }
        }
        Command::Schema(SchemaArguments { data_source }) => {
            let schema = match data_source {
                Some(type_name) => serde_json::to_value(
                    provider
                        .data_source_schema(&type_name)
                        .context(UnknownDataSourceSnafu { type_name })?,
                ),
                None => serde_json::to_value(provider.schema()),
            }
            .context(SerializeSchemaSnafu)?;

            serde_json::to_writer_pretty(&mut out, &schema).context(SerializeSchemaSnafu)?;
            writeln!(out).context(WriteOutputSnafu)?;
        }
        Command::Render(arguments) => render(arguments, provider, out)?,
    }

    Ok(())
}

#[tracing::instrument(skip_all, fields(data_source = %arguments.data_source))]
fn render(arguments: RenderArguments, provider: &Provider, mut out: impl Write) -> Result<()> {
    let RenderArguments {
        data_source: type_name,
        config,
        input_format,
        output,
    } = arguments;

    let config = config.load(input_format).context(LoadConfigSnafu)?;
    let response = provider.read_data_source(&type_name, config);

    for diagnostic in response.diagnostics.iter().filter(|d| !d.is_error()) {
        tracing::warn!(%diagnostic, "data source reported a warning");
    }
    ensure!(
        !response.diagnostics.has_error(),
        ReadDataSourceSnafu {
            type_name,
            diagnostics: response.diagnostics,
        }
    );

    match output {
        OutputFormat::Yaml => {
            let yaml = response
                .state_attribute(YAML_ATTRIBUTE)
                .context(MissingStateAttributeSnafu {
                    type_name,
                    attribute: YAML_ATTRIBUTE,
                })?;
            out.write_all(yaml.as_bytes()).context(WriteOutputSnafu)?;
        }
        OutputFormat::State => {
            let state = response.state.context(MissingStateAttributeSnafu {
                type_name,
                attribute: "state",
            })?;
            serde_json::to_writer_pretty(&mut out, &state).context(SerializeStateSnafu)?;
            writeln!(out).context(WriteOutputSnafu)?;
        }
    }

    Ok(())
}
