use anyhow::Context;
use clap::{Args, ValueEnum};
use kraddr_core::AppConfig;
use kraddr_vworld::{AddressType, GeocodeOptions, VworldClient};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum AddressTypeArg {
    Parcel,
    Road,
}

impl From<AddressTypeArg> for AddressType {
    fn from(arg: AddressTypeArg) -> Self {
        match arg {
            AddressTypeArg::Parcel => AddressType::Parcel,
            AddressTypeArg::Road => AddressType::Road,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct GeocodeArgs {
    pub(crate) address: String,
    #[arg(long, env = "VWORLD_KEY", hide_env_values = true)]
    pub(crate) key: String,
    #[arg(long)]
    pub(crate) version: Option<String>,
    /// e.g. `epsg:4326`
    #[arg(long)]
    pub(crate) crs: Option<String>,
    #[arg(long)]
    pub(crate) refine: Option<bool>,
    #[arg(long)]
    pub(crate) simple: Option<bool>,
    /// `json` or `xml`
    #[arg(long)]
    pub(crate) format: Option<String>,
    #[arg(long = "type", value_enum)]
    pub(crate) address_type: Option<AddressTypeArg>,
}

impl GeocodeArgs {
    pub(crate) fn options(&self) -> GeocodeOptions {
        GeocodeOptions {
            version: self.version.clone(),
            crs: self.crs.clone(),
            refine: self.refine,
            simple: self.simple,
            format: self.format.clone(),
            address_type: self.address_type.map(AddressType::from),
            ..GeocodeOptions::new(self.key.clone())
        }
    }
}

pub(crate) async fn run(args: GeocodeArgs, config: &AppConfig) -> anyhow::Result<()> {
    let client = VworldClient::from_config(config).context("failed to build VWorld client")?;
    let response = client.get_coordinate(&args.address, &args.options()).await?;
    tracing::info!(status = %response.status(), "vworld responded");
    println!("{}", response.text().await?);
    Ok(())
}
