//! Small terminal client for the asset backend, useful for scripting and
//! for poking a deployment without the GUI.

use clap::{Parser, Subcommand};
use medialib_client::AssetClient;
use medialib_core::models::FieldKey;
use medialib_core::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mlib", about = "Media library CLI", version)]
struct Cli {
    /// Backend base URL. Falls back to MEDIALIB_API_URL, then the default.
    #[arg(short, long)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List folders, optionally under a parent folder.
    Folders {
        #[arg(short, long)]
        parent: Option<String>,
    },
    /// List assets, optionally under a parent folder.
    Assets {
        #[arg(short, long)]
        parent: Option<String>,
    },
    /// Search assets by name or label.
    Search { query: String },
    /// Upload an image file.
    Upload { file: PathBuf },
    /// Run the auto-labeling fetch for one asset.
    Labels { id: String, name: String },
    /// Replace one custom-field dimension with a joined label string.
    SetField {
        id: String,
        #[arg(value_parser = parse_field_key)]
        key: FieldKey,
        value: String,
    },
    /// Search the Rocketium catalog. Pages are 1-indexed.
    Rocketium {
        query: String,
        #[arg(short, long, default_value = "1")]
        page: u32,
    },
}

fn parse_field_key(raw: &str) -> Result<FieldKey, String> {
    FieldKey::ALL
        .into_iter()
        .find(|key| key.as_str() == raw.to_ascii_lowercase())
        .ok_or_else(|| format!("expected one of products, colors, tags; got '{}'", raw))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let base_url = cli.server.unwrap_or_else(|| Config::from_env().api_url);
    let client = AssetClient::new(&base_url)?;

    match cli.command {
        Commands::Folders { parent } => {
            for folder in client.list_folders(parent.as_deref())? {
                println!("{:<26} {}", folder.id, folder.name);
            }
        }
        Commands::Assets { parent } => {
            for asset in client.list_assets(parent.as_deref())? {
                println!("{:<26} {:<30} {}", asset.id, asset.name, asset.url);
            }
        }
        Commands::Search { query } => {
            for hit in client.search(&query)? {
                let matched = hit.matched_custom_fields();
                if matched.is_empty() {
                    println!("{:<26} {}", hit.id, hit.name);
                } else {
                    println!("{:<26} {:<30} matched: {}", hit.id, hit.name, matched.join(", "));
                }
            }
        }
        Commands::Upload { file } => {
            let file_name = file
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default();
            let bytes = std::fs::read(&file)?;
            let asset = client.upload(&file_name, bytes)?;
            println!("Uploaded: {} ({})", asset.name, asset.id);
        }
        Commands::Labels { id, name } => {
            let fields = client.fetch_labels(&id, &name)?;
            for key in FieldKey::ALL {
                println!("{:<10} {}", key.as_str(), fields.get(key).unwrap_or("-"));
            }
        }
        Commands::SetField { id, key, value } => {
            let asset = client.update_custom_field(&id, key, &value)?;
            println!(
                "{:<10} {}",
                key.as_str(),
                asset.custom_fields.get(key).unwrap_or("-")
            );
        }
        Commands::Rocketium { query, page } => {
            for entry in client.rocketium_search(&query, page)? {
                println!(
                    "{:<30} {:<12} {}",
                    entry.original_file_name,
                    entry.uploaded_at.format("%Y-%m-%d"),
                    entry.link
                );
            }
        }
    }

    Ok(())
}
