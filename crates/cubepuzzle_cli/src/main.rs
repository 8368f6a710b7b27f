//! Command-line interface for turning and flattening a 3x3x3 cube.

mod cli;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    color_eyre::install().expect("error initializing panic handler");

    // Initialize logging.
    env_logger::builder().init();

    let args = cli::Args::parse();
    cli::exec(args)
}
