//! Command-line argument parsing with clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command-line client for the control-plane API.
#[derive(Parser, Debug, Clone)]
#[command(name = "cf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of `$CF_HOME/.cf/config.json`.
    #[arg(long, env = "CF_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show or set the API endpoint.
    Api {
        /// Endpoint URL, starting with https:// or http://
        url: Option<String>,
    },

    /// Log in with a username and password.
    Auth { username: String, password: String },

    /// Forget the stored tokens and target.
    Logout,

    /// Show or set the targeted org and space.
    Target {
        #[arg(short = 'o', long = "org")]
        organization: Option<String>,

        #[arg(short = 's', long)]
        space: Option<String>,
    },

    /// List apps in the targeted space.
    Apps,

    /// Show health and status of an app.
    App { name: String },

    /// Rename an app.
    Rename { app: String, new_name: String },

    /// List routes.
    Routes,

    /// List orgs.
    Orgs,

    /// List spaces in the targeted org.
    Spaces,

    /// Show recent crash events of an app.
    Events { app: String },

    /// Create a service instance from an offering and plan.
    #[command(name = "create-service")]
    CreateService { offering: String, plan: String, name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_target_flags() {
        let cli = Cli::try_parse_from(["cf", "target", "-o", "my-org", "-s", "dev"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Target { organization: Some("my-org".into()), space: Some("dev".into()) }
        );
    }

    #[test]
    fn parses_create_service_positionals() {
        let cli = Cli::try_parse_from(["cf", "create-service", "mysql", "small", "db"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::CreateService { offering: "mysql".into(), plan: "small".into(), name: "db".into() }
        );
    }

    #[test]
    fn rename_requires_both_names() {
        assert!(Cli::try_parse_from(["cf", "rename", "web"]).is_err());
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["cf", "orgs", "--config", "/tmp/cf.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/cf.json")));
    }
}
