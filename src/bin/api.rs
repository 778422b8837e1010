//! Repoboard API server binary.
//!
//! This binary creates the concrete in-memory store and passes it to the
//! API server. The API layer remains agnostic of the storage backend.

use std::net::IpAddr;

use clap::Parser;
use miette::Diagnostic;
use repoboard::api::{self, ApiError, Config};
use repoboard::store::MemoryStore;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("API server error: {0}")]
    #[diagnostic(code(repoboard::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "repoboard-api")]
#[command(author, version, about = "Repoboard API server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();

    // The collection starts empty and lives exactly as long as the process
    let store = MemoryStore::new();

    api::run(
        Config {
            host: cli.host,
            port: cli.port,
        },
        store,
    )
    .await?;

    Ok(())
}
