mod cli;
mod tables;

use anyhow::{Context, Result};
use clap::{Parser, crate_version};
use gridnet::Client;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Args, Command},
    tables::{build_device_table, build_smart_bridge_table},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .compact()
        .init();

    let args = Args::parse();
    info!(version = crate_version!(), host = %args.connection.host, "starting…");

    let command = args.command;
    args.connection.new_client().scoped(async |client| run(client, command).await).await?;

    info!("done!");
    Ok(())
}

async fn run(client: &Client, command: Command) -> Result<()> {
    match command {
        Command::Device => {
            let device = client.device().await.context("failed to fetch the device")?;
            println!("{}", build_device_table(&device));
        }
        Command::SmartBridge => {
            let smart_bridge =
                client.smart_bridge().await.context("failed to fetch the meter reading")?;
            println!("{}", build_smart_bridge_table(&smart_bridge));
        }
        Command::All => {
            let (device, smart_bridge) = tokio::try_join!(client.device(), client.smart_bridge())
                .context("failed to fetch the device and the meter reading")?;
            println!("{}", build_device_table(&device));
            println!("{}", build_smart_bridge_table(&smart_bridge));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::{Router, routing::get};
    use tokio::net::TcpListener;

    use super::*;

    #[tokio::test]
    async fn test_all_fails_on_meter_reading() -> Result<()> {
        // language=json
        const INFO: &str = r#"{"id": "1", "model": "SBWF3102", "fw": "1.7.21", "mf": "NET2GRID"}"#;

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let host = listener.local_addr()?.to_string();
        let router = Router::new().route("/info", get(|| async { INFO }));
        tokio::spawn(async move { axum::serve(listener, router).await });

        let client = Client::builder().host(host).variant(gridnet::Variant::PureEnergie).build();
        let error = run(&client, Command::All).await.unwrap_err();
        assert_eq!(error.to_string(), "failed to fetch the device and the meter reading");
        assert!(error.chain().any(|cause| cause.to_string().contains("404")));
        Ok(())
    }
}
