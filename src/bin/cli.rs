// src/bin/cli.rs
use comparador::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();
    cli::run(cli::Args::parse_args())
}
