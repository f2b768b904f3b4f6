//! imgdrop CLI - upload an image and print where it ended up
//!
//! ```bash
//! imgdrop upload cat.png           # Upload, print the rendered widget
//! imgdrop upload cat.png --json    # Upload, print the final state as JSON
//! imgdrop target                   # Show the resolved endpoint and preset
//! ```

use clap::{Args, Parser, Subcommand};
use imgdrop::{UploadPhase, LOADING_TEXT};
use imgdrop_cli::{init_logging, render_text, resolve_target, upload_file, TargetOverrides};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "imgdrop")]
#[command(about = "Upload an image to the hosted image service", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload one file
    Upload {
        /// File to upload (nothing happens when omitted)
        file: Option<PathBuf>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Show the resolved upload endpoint and preset
    Target {
        #[command(flatten)]
        target: TargetArgs,
    },
}

#[derive(Args)]
struct TargetArgs {
    /// API root (default: https://api.cloudinary.com)
    #[arg(long)]
    api_base: Option<String>,

    /// Hosting account identifier
    #[arg(long)]
    cloud_name: Option<String>,

    /// Upload preset name
    #[arg(long)]
    preset: Option<String>,
}

impl From<TargetArgs> for TargetOverrides {
    fn from(args: TargetArgs) -> Self {
        TargetOverrides {
            api_base: args.api_base,
            cloud_name: args.cloud_name,
            upload_preset: args.preset,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("⚠️  Logging disabled: {}", e);
    }

    let result = match cli.command {
        Commands::Upload { file, json, target } => cmd_upload(file, json, target.into()).await,
        Commands::Target { target } => cmd_target(target.into()),
    };

    match result {
        Ok(UploadPhase::Failed) => std::process::exit(1),
        Ok(_) => {}
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

async fn cmd_upload(
    file: Option<PathBuf>,
    json: bool,
    overrides: TargetOverrides,
) -> Result<UploadPhase, Box<dyn std::error::Error>> {
    let target = resolve_target(overrides);
    tracing::info!(endpoint = %target.endpoint(), "resolved upload target");

    if file.is_some() && !json {
        eprintln!("{}", LOADING_TEXT);
    }

    let state = upload_file(target, file).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        println!("{}", render_text(&state.view()));
    }

    Ok(state.phase())
}

fn cmd_target(overrides: TargetOverrides) -> Result<UploadPhase, Box<dyn std::error::Error>> {
    let target = resolve_target(overrides);
    println!("endpoint:      {}", target.endpoint());
    println!("upload_preset: {}", target.upload_preset);
    Ok(UploadPhase::Idle)
}
