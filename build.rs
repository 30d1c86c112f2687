//! Renders the `framing(1)` man page from the clap definition in
//! `src/cli.rs` into `target/generated-man/`.

use std::{fs, path::PathBuf};

use clap::CommandFactory;
use clap_mangen::Man;

#[path = "src/cli.rs"]
mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=src/cli.rs");

    let man_dir = PathBuf::from("target/generated-man");
    fs::create_dir_all(&man_dir)?;

    let mut page = Vec::new();
    Man::new(cli::Cli::command()).render(&mut page)?;
    fs::write(man_dir.join("framing.1"), page)?;

    Ok(())
}
