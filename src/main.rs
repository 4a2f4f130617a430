//! Brother's Fitness AI gateway

use std::io::BufRead;

use anyhow::Context;
use brofit_gateway::auth::hash_password;
use brofit_gateway::server::builder::{Args, Command, run_server};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    match args.command {
        Some(Command::HashPassword) => {
            let mut password = String::new();
            std::io::stdin()
                .lock()
                .read_line(&mut password)
                .context("failed to read password from stdin")?;
            let hash = hash_password(password.trim_end_matches(['\r', '\n']))?;
            println!("{}", hash);
            Ok(())
        }
        Some(Command::Serve) | None => run_server(args).await.context("gateway failed"),
    }
}
