use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use mydesk::RoomCode;
use mydesk::server::{DEFAULT_PORT, ServerConfig, SignalingServer};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mydesk")]
#[command(about = "Signaling server for MyDesk remote desktop sessions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the signaling server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Interface to bind.
        #[arg(long, default_value = "0.0.0.0")]
        host: IpAddr,

        /// Seconds between expiry sweeps.
        #[arg(long, default_value_t = 600)]
        sweep_interval: u64,

        /// Seconds after which a room with no viewers is expired.
        #[arg(long, default_value_t = 3600)]
        room_max_age: u64,
    },

    /// Print freshly generated room codes.
    RoomCode {
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mydesk=info,mydesk_server=info".into()),
        )
        .init();

    match Cli::parse().command {
        Commands::Serve {
            port,
            host,
            sweep_interval,
            room_max_age,
        } => {
            let config = ServerConfig::default()
                .with_bind_addr(SocketAddr::new(host, port))
                .with_sweep_interval(Duration::from_secs(sweep_interval))
                .with_room_max_age(Duration::from_secs(room_max_age));

            let server = SignalingServer::new(config);
            let listener = server.bind().await?;
            let addr = listener.local_addr()?;
            print_banner(addr);

            server
                .serve(listener, async {
                    let _ = tokio::signal::ctrl_c().await;
                })
                .await
                .context("Signaling server stopped with an error")?;

            println!("{}", "Signaling server stopped.".yellow());
        }

        Commands::RoomCode { count } => {
            for _ in 0..count {
                println!("{}", RoomCode::generate());
            }
        }
    }

    Ok(())
}

fn print_banner(addr: SocketAddr) {
    println!("{}", "MyDesk Signaling Server started".green().bold());
    println!("   Listening: {}", addr.to_string().cyan());
    println!("   WebSocket: {}", format!("ws://{}/ws", addr).cyan());
    println!("   Status:    {}", "Ready".green());
}
