use std::path::PathBuf;

pub const REGISTRY_FILE: &str = "car_secrets.json";
pub const REGISTRY_LOCK_FILE: &str = "car_secrets.lock";
pub const HOST_PRIVKEY_FILE: &str = "host_privkey.PEM";
pub const HOST_PUBKEY_FILE: &str = "host_pubkey.PEM";

pub fn car_image_name(car_id: u32) -> String {
    format!("car_{car_id}_eeprom")
}

pub fn fob_image_name(car_id: u32) -> String {
    format!("fob_{car_id}_eeprom")
}

#[derive(clap::Parser, Debug, Clone)]
#[command(name = "fobforge", about = "Provision fleet key material and EEPROM images")]
pub struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate the deployment-wide host keypair and write both PEM files.
    Host(HostArgs),
    /// Generate a car keypair, register it, and build the car EEPROM image.
    Car(CarArgs),
    /// Build a fob EEPROM image and its firmware secrets header.
    Fob(FobArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct HostArgs {
    #[arg(long)]
    pub secrets_dir: PathBuf,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CarArgs {
    #[arg(long)]
    pub car_id: u32,
    #[arg(long)]
    pub secrets_dir: PathBuf,
    /// Refuse to overwrite an already-registered car id.
    #[arg(long)]
    pub strict: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct FobArgs {
    #[arg(long)]
    pub car_id: u32,
    #[arg(long)]
    pub secrets_dir: PathBuf,
    #[arg(long)]
    pub header_file: PathBuf,
    /// Pairing pin as a hex string, e.g. "c0ffee". Ignored for unpaired fobs.
    #[arg(long)]
    pub pair_pin: Option<String>,
    #[arg(long)]
    pub paired: bool,
}
