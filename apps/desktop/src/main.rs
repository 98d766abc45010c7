use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use client_core::{find_suggestions, DeputyClient, HttpApi, ProfileLookup};

/// Headless lookup of a deputy profile, for scripting and debugging.
#[derive(Parser, Debug)]
struct Args {
    /// Backend endpoint; falls back to meinbundestag.toml / API_URL.
    #[arg(long)]
    api_url: Option<String>,
    /// Display name of the deputy to resolve.
    #[arg(long)]
    name: String,
    /// Print the resolved profile as JSON instead of a summary.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = client_core::load_settings();
    if let Some(api_url) = args.api_url {
        settings.api_url = api_url;
    }

    let api = Arc::new(HttpApi::new(&settings.api_url)?);
    let client = DeputyClient::new(api);
    tracing::info!(api_url = %settings.api_url, query = %args.name, "resolving deputy profile");

    let deputies = client.load_deputies().await?;
    println!("{} deputies available", deputies.len());

    match client.resolve_profile(&args.name).await? {
        ProfileLookup::Found(profile) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                println!("{} ({})", profile.display_name(), profile.id);
                if let Some(party) = &profile.party {
                    println!("Party: {party}");
                }
                println!(
                    "Speeches: {}, questions: {}, votes: {}, sidejobs: {}",
                    profile.speeches.len(),
                    profile.questions.len(),
                    profile.votes.len(),
                    profile.sidejobs.len()
                );
            }
        }
        ProfileLookup::NotFound { query } => {
            println!("No profile found for '{query}'");
            let suggestions = find_suggestions(&deputies, &query);
            if !suggestions.is_empty() {
                println!("Closest matches: {}", suggestions.join(", "));
            }
        }
    }

    Ok(())
}
