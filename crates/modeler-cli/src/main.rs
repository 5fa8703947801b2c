//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers which delegate to `AppCore`.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use modeler_cli::error::exit_code_for;
use modeler_cli::handlers::add::AddArgs;
use modeler_cli::handlers::serve::ServeArgs;
use modeler_cli::{Cli, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before reading RUST_LOG
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(u8::try_from(exit_code_for(&e)).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // No command provided - show help
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Paths => {
            handlers::paths::execute()?;
        }
        Commands::Serve {
            port,
            bind,
            user_header,
            allow_origins,
        } => {
            handlers::serve::execute(ServeArgs {
                port,
                bind,
                user_header,
                allow_origins,
            })
            .await?;
        }
        Commands::Forms {
            reference_id,
            user,
            filter,
            json,
        } => {
            let ctx = bootstrap().await?;
            handlers::forms::execute(&ctx, reference_id, &user, filter.as_deref(), json).await?;
        }
        Commands::Add {
            name,
            user,
            model_type,
            reference_id,
            description,
            comment,
        } => {
            let ctx = bootstrap().await?;
            let args = AddArgs {
                name,
                user,
                model_type,
                reference_id,
                description,
                comment,
            };
            handlers::add::execute(&ctx, args).await?;
        }
        Commands::Relate {
            parent,
            child,
            relation_type,
        } => {
            let ctx = bootstrap().await?;
            handlers::relate::execute(&ctx, parent, child, relation_type).await?;
        }
    }

    Ok(())
}
