//! Decode a length-prefixed stream from a file or standard input.
//!
//! Prints one line per frame and exits non-zero if the stream is malformed
//! or ends inside a frame.

mod cli;

use std::{fmt::Write as _, process::ExitCode};

use clap::Parser;
use framing::{Endianness, FramingBuffer, FramingConfig, stream::pump_with_capacity};
use tokio::io::AsyncRead;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so frame output on stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("framing: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: cli::Cli) -> Result<(), Box<dyn std::error::Error>> {
    install_metrics(&cli)?;

    let config = FramingConfig {
        length_field_size: cli.length_field_size,
        endianness: if cli.little_endian {
            Endianness::Little
        } else {
            Endianness::Big
        },
        signed: !cli.unsigned,
    };
    let mut session = FramingBuffer::from_config(&config)?;

    let hex = cli.hex;
    let mut index = 0usize;
    session.subscribe(move |frame| {
        if hex {
            println!("frame {index}: {} bytes {}", frame.len(), to_hex(frame));
        } else {
            println!("frame {index}: {} bytes", frame.len());
        }
        index += 1;
    });

    let mut source: Box<dyn AsyncRead + Unpin> = match &cli.input {
        Some(path) => Box::new(tokio::fs::File::open(path).await?),
        None => Box::new(tokio::io::stdin()),
    };
    let summary = pump_with_capacity(&mut source, &mut session, cli.chunk_size).await?;
    tracing::info!(
        frames = summary.frames,
        bytes_read = summary.bytes_read,
        "stream decoded"
    );
    Ok(())
}

#[cfg(feature = "metrics")]
fn install_metrics(cli: &cli::Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(addr) = cli.metrics_addr {
        metrics_exporter_prometheus::PrometheusBuilder::new()
            .with_http_listener(addr)
            .install()?;
        tracing::info!(%addr, "serving metrics");
    }
    Ok(())
}

#[cfg(not(feature = "metrics"))]
fn install_metrics(cli: &cli::Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.metrics_addr.is_some() {
        tracing::warn!("built without the metrics feature; ignoring --metrics-addr");
    }
    Ok(())
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
        let _ = write!(out, "{b:02x}");
        out
    })
}
