mod config;

pub use self::config::*;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;

/// Install the global subscriber: one filter, then the console and file layers.
pub fn initialize_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    if !config.enable {
        return Ok(());
    }
    let mut filter_builder = EnvFilter::builder().with_default_directive(config.level().into());
    if !config.directives_env.is_empty() {
        filter_builder = filter_builder.with_env_var(config.directives_env.as_str());
    }
    let filter = filter_builder.parse_lossy(config.directives.as_str());

    let console = config.console.enable.then(|| {
        let verbose = config.console.verbose;
        tracing_subscriber::fmt::layer()
            .with_file(verbose)
            .with_line_number(verbose)
            .with_thread_ids(verbose)
            .with_target(verbose)
    });
    let file = config.file.enable.then(|| {
        let output = &config.file;
        let appender = RollingFileAppender::new(
            output.rotation.into(),
            &output.directory,
            &output.file_name,
        );
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(appender)
            .with_file(output.verbose)
            .with_line_number(output.verbose)
            .with_thread_ids(output.verbose)
            .with_target(true)
    });
    Registry::default().with(filter).with(console).with(file).try_init()?;
    Ok(())
}
