pub mod config;
pub mod error;
pub mod header;
pub mod image;
pub mod keys;
pub mod provision;
pub mod registry;

pub use error::{Error, Result};

pub fn run(cli: config::Cli) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .init();

    match cli.command {
        config::Command::Host(args) => {
            provision::provision_host(&args.secrets_dir)?;
        }
        config::Command::Car(args) => {
            provision::provision_car(&args.secrets_dir, args.car_id, args.strict)?;
        }
        config::Command::Fob(args) => {
            provision::provision_fob(
                &args.secrets_dir,
                provision::FobRequest {
                    car_id: args.car_id,
                    paired: args.paired,
                    pair_pin: args.pair_pin,
                    header_file: args.header_file,
                },
            )?;
        }
    }
    Ok(())
}
