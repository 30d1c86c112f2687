//! Command line interface for the `framing` binary.
//!
//! Shared with `build.rs`, which renders the man page from this definition,
//! so it only depends on `clap`.

use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;

/// Command line arguments for the `framing` binary.
#[derive(Debug, Parser)]
#[command(
    name = "framing",
    version,
    about = "Split a length-prefixed byte stream into frames"
)]
pub struct Cli {
    /// File to decode; reads standard input when omitted.
    pub input: Option<PathBuf>,

    /// Width of each length field in bytes (1 to 8).
    #[arg(short = 'n', long, default_value_t = 4)]
    pub length_field_size: usize,

    /// Read length fields least significant byte first.
    #[arg(long)]
    pub little_endian: bool,

    /// Treat length fields as unsigned integers.
    #[arg(long)]
    pub unsigned: bool,

    /// Print each frame body as hex.
    #[arg(long)]
    pub hex: bool,

    /// Maximum bytes requested per read.
    #[arg(long, default_value_t = 8192)]
    pub chunk_size: usize,

    /// Serve Prometheus metrics on this address while decoding.
    #[arg(long)]
    pub metrics_addr: Option<SocketAddr>,
}
