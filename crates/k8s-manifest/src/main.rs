use clap::Parser;
use k8s_manifest_provider::{
    cli,
    provider::Provider,
    telemetry::tracing::{Error as TracingError, TelemetryOptions, Tracing},
};
use snafu::{ResultExt, Snafu};

const SERVICE_NAME: &str = "k8s-manifest";

#[derive(Debug, Snafu)]
enum Error {
    #[snafu(display("failed to initialize tracing"))]
    InitializeTracing { source: TracingError },

    #[snafu(display("failed to run command"))]
    RunCommand { source: cli::Error },
}

#[derive(Debug, Parser)]
#[command(version, about)]
struct Opts {
    #[command(subcommand)]
    command: cli::Command,

    #[command(flatten)]
    telemetry: TelemetryOptions,
}

#[snafu::report]
fn main() -> Result<(), Error> {
    let Opts { command, telemetry } = Opts::parse();

    // The guard flushes file logs once it is dropped at the end of main
    let _tracing_guard = Tracing::pre_configured(SERVICE_NAME, telemetry)
        .init()
        .context(InitializeTracingSnafu)?;

    let provider = Provider::default();
    tracing::debug!(
        provider.type_name = provider.type_name(),
        data_sources = provider.data_source_type_names().count(),
        "starting"
    );

    cli::run(command, &provider, std::io::stdout().lock()).context(RunCommandSnafu)
}
