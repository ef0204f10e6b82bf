//! join-push: CLI host adapter for the Join push API dispatcher.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use join_push::catalog::{ActionKind, Target};
use join_push::dispatcher::{Dispatcher, HostCallbacks};

#[derive(Parser, Debug)]
#[command(name = "join-push", about = "Trigger actions on a remote device via the Join push API")]
struct Args {
    /// Path to join-push.yaml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered devices and configured device groups
    Devices,
    /// Show the actions available for a device
    Actions {
        /// Device id or name
        device: String,
        /// Free-text input the actions would carry
        #[arg(default_value = "")]
        input: String,
    },
    /// Execute an action on a device
    Send {
        /// Device id or name
        device: String,
        /// Action tag: clipboard, notification, download, website, find, speak or app
        action: String,
        /// Free-text input for the action
        #[arg(default_value = "")]
        input: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug,reqwest=info,hyper=info")
    } else {
        EnvFilter::new("info,reqwest=warn,hyper=warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut dispatcher = Dispatcher::new(args.config.as_deref());

    match args.command {
        Command::Devices => {
            for item in dispatcher.on_catalog_request() {
                println!("{:<40} {}", item.label, item.description);
            }
        }
        Command::Actions { device, input } => {
            let chain = [select_device(&dispatcher, &device)?];
            for item in dispatcher.on_suggest(&input, &chain) {
                println!("{:<40} {}", item.label, item.description);
            }
        }
        Command::Send { device, action, input } => {
            let kind = ActionKind::from_tag(&action)
                .ok_or_else(|| format!("Unknown action '{action}'"))?;

            let chain = [select_device(&dispatcher, &device)?];
            let suggestions = dispatcher.on_suggest(&input, &chain);
            let item = suggestions
                .into_iter()
                .find(|item| item.target == Target::Action(kind))
                .ok_or_else(|| format!("Action '{action}' is disabled in configuration"))?;

            info!("Executing: {}", item.label);
            dispatcher.on_execute(&item, None);
        }
    }

    Ok(())
}

/// Resolve a device argument (id or display name) to its catalog item.
fn select_device(
    dispatcher: &Dispatcher,
    device: &str,
) -> Result<join_push::catalog::Item, String> {
    dispatcher
        .devices()
        .iter()
        .find(|d| d.id == device || d.name == device)
        .map(|d| join_push::catalog::Item {
            label: format!("Join: {}", d.name),
            description: format!("Select action for {}", d.name),
            target: Target::Device(d.id.clone()),
        })
        .ok_or_else(|| format!("Unknown device '{device}' (try `join-push devices`)"))
}
