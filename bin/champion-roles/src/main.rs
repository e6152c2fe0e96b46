use anyhow::Context as _;
use champion_roles_mapping::{write_role_mapping, RoleMappingBuilder};
use clap::Parser;
use cli::Cli;
use config::Config;
use ddragon::{DataDragon, GameVersion};
use meraki::MerakiRoleStats;
use std::fs::File;
use std::io::BufWriter;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod config;
mod ddragon;
mod meraki;
#[cfg(test)]
mod test_server;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    setup_tracing_subscriber();
    let cli = Cli::parse();

    info!("Loading configuration");
    let mut config = Config::load(cli.config.as_ref()).await?;
    cli.apply_overrides(&mut config);
    let region = config.region()?;

    let client = reqwest::Client::new();
    let builder = RoleMappingBuilder::new(
        MerakiRoleStats::new(client.clone(), config.role_stats_url),
        DataDragon::new(client, config.locale, config.patch.map(GameVersion))
            .with_base_url(config.ddragon_url),
        region,
    );
    let mapping = builder
        .build(config.threshold)
        .await
        .context("Failed to build role mapping")?;

    // Only touch the output once everything was fetched
    info!("Writing role mapping to {}", config.output_path.display());
    let file = File::create(&config.output_path)
        .with_context(|| format!("Failed to create {}", config.output_path.display()))?;
    write_role_mapping(&mapping, BufWriter::new(file)).context("Failed to write role mapping")?;

    println!("Role mapping saved to {}", config.output_path.display());
    Ok(())
}

fn setup_tracing_subscriber() {
    let layer = fmt::layer()
        .pretty()
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(layer)
        .with(EnvFilter::from_default_env())
        .init();
}
