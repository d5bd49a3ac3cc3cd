use clap::Parser;

use stocktrack_desktop::cli::Args;

fn main() -> anyhow::Result<()> {
    Args::parse().run()
}
