//! Main commands enum.
//!
//! This module defines the available commands for the CLI tool.

use std::net::IpAddr;

use clap::Subcommand;
use modeler_axum::{DEFAULT_PORT, DEFAULT_USER_HEADER};
use modeler_core::ModelType;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show resolved data paths
    Paths,

    /// Start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_PORT, env = "MODELER_PORT")]
        port: u16,
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: IpAddr,
        /// Trusted header carrying the current user id
        #[arg(long, default_value = DEFAULT_USER_HEADER, env = "MODELER_USER_HEADER")]
        user_header: String,
        /// Allowed CORS origin (repeatable). All origins are allowed when omitted
        #[arg(long = "allow-origin")]
        allow_origins: Vec<String>,
    },

    /// List the forms available to an app
    Forms {
        /// Reference id of the app being edited
        #[arg(long)]
        reference_id: i64,
        /// User whose standalone forms are included
        #[arg(short, long)]
        user: String,
        /// Case-insensitive name/description filter (2+ characters)
        #[arg(short, long)]
        filter: Option<String>,
        /// Print the response envelope as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a model to the store
    Add {
        #[arg(short, long)]
        name: String,
        /// Owner of the model
        #[arg(short, long)]
        user: String,
        /// Model type: bpmn, legacy-process, form, app, decision-table
        #[arg(short = 't', long = "type")]
        model_type: ModelType,
        /// Link the model to a reference id
        #[arg(long)]
        reference_id: Option<i64>,
        #[arg(short, long)]
        description: Option<String>,
        /// Free-text comment stored with the model
        #[arg(long)]
        comment: Option<String>,
    },

    /// Link a child model under a parent model
    Relate {
        #[arg(long)]
        parent: i64,
        #[arg(long)]
        child: i64,
        /// Relation kind, e.g. form-model
        #[arg(long)]
        relation_type: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use crate::parser::Cli;
    use clap::Parser;

    use super::*;

    #[test]
    fn serve_defaults() {
        let cli = Cli::parse_from(["modeler", "serve"]);
        let Some(Commands::Serve {
            port,
            bind,
            user_header,
            allow_origins,
        }) = cli.command
        else {
            panic!("expected serve");
        };
        assert_eq!(port, DEFAULT_PORT);
        assert_eq!(bind, IpAddr::from([127, 0, 0, 1]));
        assert_eq!(user_header, DEFAULT_USER_HEADER);
        assert!(allow_origins.is_empty());
    }

    #[test]
    fn add_parses_model_type() {
        let cli = Cli::parse_from([
            "modeler",
            "add",
            "--name",
            "Invoice Form",
            "--user",
            "kermit",
            "--type",
            "form",
            "--reference-id",
            "42",
            "--comment",
            "first draft",
        ]);
        let Some(Commands::Add {
            model_type,
            reference_id,
            comment,
            ..
        }) = cli.command
        else {
            panic!("expected add");
        };
        assert_eq!(model_type, ModelType::Form);
        assert_eq!(reference_id, Some(42));
        assert_eq!(comment.as_deref(), Some("first draft"));
    }

    #[test]
    fn add_rejects_unknown_type() {
        let result = Cli::try_parse_from([
            "modeler", "add", "--name", "x", "--user", "u", "--type", "chart",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn forms_requires_reference_and_user() {
        assert!(Cli::try_parse_from(["modeler", "forms", "--user", "kermit"]).is_err());
        let cli = Cli::parse_from([
            "modeler",
            "forms",
            "--reference-id",
            "42",
            "--user",
            "kermit",
            "--filter",
            "inv",
            "--json",
        ]);
        assert!(matches!(
            cli.command,
            Some(Commands::Forms { reference_id: 42, json: true, .. })
        ));
    }
}
