use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = fobforge::config::Cli::parse();
    fobforge::run(cli)
}
