//! orgctl - command-line client for the InfluxDB v2 Organizations API

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;

use cli::member::Role;
use cli::{Cli, Commands, GlobalOptions, MemberCommands, OrgCommands, SecretCommands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Logs go to stderr. `RUST_LOG` applies unless `--debug` is set.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_module("orgctl", log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);
    log::debug!("Debug mode enabled");

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("orgctl version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Org(org_cmd) => match org_cmd {
            OrgCommands::List { args } => cli::org::list(&args, &opts).await,
            OrgCommands::Get { org_ref } => cli::org::get(org_ref.as_deref(), &opts).await,
            OrgCommands::Create { name, description } => {
                cli::org::create(&name, description.as_deref(), &opts).await
            }
            OrgCommands::Update {
                org_ref,
                name,
                description,
            } => {
                cli::org::update(
                    org_ref.as_deref(),
                    name.as_deref(),
                    description.as_deref(),
                    &opts,
                )
                .await
            }
            OrgCommands::Delete {
                org_ref,
                yes,
                dry_run,
            } => cli::org::delete(&org_ref, yes, dry_run, &opts).await,
            OrgCommands::Set { org_ref } => cli::org::set(&org_ref, &opts).await,
        },
        Commands::Secret(secret_cmd) => match secret_cmd {
            SecretCommands::List => cli::secret::list(&opts).await,
            SecretCommands::Set { secrets } => cli::secret::set(&secrets, &opts).await,
            SecretCommands::Delete {
                keys,
                yes,
                dry_run,
            } => cli::secret::delete(&keys, yes, dry_run, &opts).await,
        },
        Commands::Member(cmd) => run_member(Role::Member, cmd, &opts).await,
        Commands::Owner(cmd) => run_member(Role::Owner, cmd, &opts).await,
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}

async fn run_member(role: Role, cmd: MemberCommands, opts: &GlobalOptions) -> Result<()> {
    match cmd {
        MemberCommands::List => cli::member::list(role, opts).await,
        MemberCommands::Add { user_id, name } => {
            cli::member::add(role, &user_id, name.as_deref(), opts).await
        }
        MemberCommands::Remove { user_id, yes } => {
            cli::member::remove(role, &user_id, yes, opts).await
        }
    }
}
