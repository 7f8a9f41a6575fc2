//! CLI command implementations
//!
//! - [`target`] - endpoint, login and org/space targeting
//! - [`apps`] - app listing, status, rename and events
//! - [`listings`] - orgs, spaces and routes
//! - [`services`] - service instance creation

pub mod apps;
pub mod listings;
pub mod services;
pub mod target;

use std::io::Write;

use cfkit_core::requirements::{self, Requirement};
use cfkit_infra::RepositoryLocator;
use tracing::debug;

use crate::cli::Commands;
use crate::error::CliError;
use crate::ui::Ui;

/// Preconditions checked before a command touches the network.
///
/// `target` checks its own, depending on which flags were passed.
pub fn requirements_for(command: &Commands) -> &'static [Requirement] {
    match command {
        Commands::Api { .. } | Commands::Auth { .. } | Commands::Logout | Commands::Target { .. } => &[],
        Commands::Orgs | Commands::Routes => &[Requirement::Login],
        Commands::Spaces => &[Requirement::Login, Requirement::TargetedOrganization],
        Commands::Apps
        | Commands::App { .. }
        | Commands::Rename { .. }
        | Commands::Events { .. }
        | Commands::CreateService { .. } => &[Requirement::Login, Requirement::TargetedSpace],
    }
}

pub async fn run<W: Write>(
    command: Commands,
    locator: &RepositoryLocator,
    ui: &mut Ui<W>,
) -> Result<(), CliError> {
    let required = requirements_for(&command);
    requirements::check_all(required, &locator.session().snapshot())?;
    debug!(?required, "requirements met");

    match command {
        Commands::Api { url } => target::api(locator, ui, url.as_deref()).await,
        Commands::Auth { username, password } => {
            target::auth(locator, ui, &username, &password).await
        }
        Commands::Logout => target::logout(locator, ui),
        Commands::Target { organization, space } => {
            target::target(locator, ui, organization.as_deref(), space.as_deref()).await
        }
        Commands::Apps => apps::apps(locator, ui).await,
        Commands::App { name } => apps::app(locator, ui, &name).await,
        Commands::Rename { app, new_name } => apps::rename(locator, ui, &app, &new_name).await,
        Commands::Events { app } => apps::events(locator, ui, &app).await,
        Commands::Orgs => listings::orgs(locator, ui).await,
        Commands::Spaces => listings::spaces(locator, ui).await,
        Commands::Routes => listings::routes(locator, ui).await,
        Commands::CreateService { offering, plan, name } => {
            services::create_service(locator, ui, &offering, &plan, &name).await
        }
    }
}

/// `in org <org> / space <space>` for progress lines.
fn space_context(locator: &RepositoryLocator) -> String {
    let session = locator.session();
    format!("in org {} / space {}", session.organization().name, session.space().name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_commands_need_login_and_space() {
        assert_eq!(
            requirements_for(&Commands::Apps),
            &[Requirement::Login, Requirement::TargetedSpace]
        );
        assert_eq!(
            requirements_for(&Commands::Spaces),
            &[Requirement::Login, Requirement::TargetedOrganization]
        );
    }

    #[test]
    fn session_commands_have_no_preconditions() {
        assert!(requirements_for(&Commands::Logout).is_empty());
        assert!(requirements_for(&Commands::Api { url: None }).is_empty());
    }
}
