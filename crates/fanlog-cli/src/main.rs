use clap::Parser;
use eyre::{Context, Result};
use fanlog_core::{ChannelBuilder, Component, DynSink, InputEvent, StructuredSink, TextSink};
use log::info;
use std::io::{self, Write};

mod cli;
mod config;

use cli::Cli;
use config::{Config, LogLevel, SinkKind};

type BoxedSink = Box<dyn DynSink<ChannelBuilder, InputEvent>>;

fn setup_logging(log_level: &LogLevel) {
    let mut builder = env_logger::Builder::new();

    // RUST_LOG があれば優先、なければ config の log_level
    if std::env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    } else {
        builder.filter_level(log_level.as_filter());
    }

    builder.target(env_logger::Target::Stderr).init();
}

/// `config.sinks` の各エントリにつき sink を 1 つ作る（出力先は毎回 `writer()`）
fn build_sinks<W, F>(config: &Config, mut writer: F) -> Vec<BoxedSink>
where
    W: Write + 'static,
    F: FnMut() -> W,
{
    config
        .sinks
        .iter()
        .map(|kind| -> BoxedSink {
            match kind {
                SinkKind::Structured => Box::new(StructuredSink::with_format(
                    writer(),
                    config.structured_format,
                )),
                SinkKind::Text => Box::new(TextSink::new(writer())),
            }
        })
        .collect()
}

fn run_with<W, F>(cli: &Cli, config: &Config, writer: F) -> Result<()>
where
    W: Write + 'static,
    F: FnMut() -> W,
{
    let channel = cli.channel.map(Into::into).unwrap_or_else(|| config.channel_id());
    let severity = cli.severity.unwrap_or(config.severity);
    let required: Vec<&str> = config.required_sinks.iter().map(SinkKind::as_str).collect();

    let mut sinks = build_sinks(config, writer);
    let mut builder = Component::builder(ChannelBuilder::new(channel))
        .severity(severity)
        .expect_kinds(&required);
    for sink in sinks.iter_mut() {
        builder = builder.sink_dyn(sink.as_mut());
    }
    let mut component = builder.build().context("Failed to wire component")?;

    let event = InputEvent::new(cli.length, cli.width, cli.height);
    info!(
        "processing {:?} on channel {} at {} via {:?}",
        event,
        channel,
        severity,
        component.sink_kinds()
    );
    component.process(&event).context("Failed to deliver event")?;

    Ok(())
}

fn run(cli: Cli, config: Config) -> Result<()> {
    run_with(&cli, &config, io::stdout)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(&config.log_level);

    info!("Starting fanlog with config from: {:?}", cli.config);

    run(cli, config).context("Command failed")?;

    Ok(())
}
