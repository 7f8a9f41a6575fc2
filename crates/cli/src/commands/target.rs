//! Endpoint, login and targeting commands

use std::io::Write;

use cfkit_core::Requirement;
use cfkit_domain::SpaceFields;
use cfkit_infra::RepositoryLocator;

use crate::error::CliError;
use crate::ui::Ui;

pub async fn api<W: Write>(
    locator: &RepositoryLocator,
    ui: &mut Ui<W>,
    url: Option<&str>,
) -> Result<(), CliError> {
    if let Some(url) = url {
        ui.say(format!("Setting api endpoint to {url}..."))?;
        locator.endpoint_repository().update_endpoint(url).await?;
        ui.ok()?;
    }

    show_api(locator, ui)
}

fn show_api<W: Write>(locator: &RepositoryLocator, ui: &mut Ui<W>) -> Result<(), CliError> {
    let config = locator.session().snapshot();
    if config.target.is_empty() {
        return ui.say("No API endpoint targeted.");
    }
    ui.say(format!("API endpoint: {} (API version: {})", config.target, config.api_version))
}

pub async fn auth<W: Write>(
    locator: &RepositoryLocator,
    ui: &mut Ui<W>,
    username: &str,
    password: &str,
) -> Result<(), CliError> {
    let target = locator.session().target();
    if target.is_empty() {
        return Err(CliError::Usage(
            "No API endpoint targeted. Use 'cf api' to set an endpoint.".into(),
        ));
    }

    ui.say(format!("API endpoint: {target}"))?;
    ui.say("Authenticating...")?;
    locator.authentication_repository().authenticate(username, password).await?;
    ui.ok()?;
    ui.say("Use 'cf target' to view or set your target org and space")
}

pub fn logout<W: Write>(locator: &RepositoryLocator, ui: &mut Ui<W>) -> Result<(), CliError> {
    ui.say("Logging out...")?;
    locator.session().update(|config| config.clear_session());
    locator.config_repository().clear_session()?;
    ui.ok()
}

pub async fn target<W: Write>(
    locator: &RepositoryLocator,
    ui: &mut Ui<W>,
    organization: Option<&str>,
    space: Option<&str>,
) -> Result<(), CliError> {
    let session = locator.session();
    if organization.is_some() || space.is_some() {
        Requirement::Login.check(&session.snapshot())?;
    }

    if let Some(name) = organization {
        let org = locator.organization_repository().find_by_name(name).await?;
        let config = session.update(|config| {
            config.organization_fields = org.fields.clone();
            config.space_fields = SpaceFields::default();
            config.clone()
        });
        locator.config_repository().save(&config)?;
    }

    if let Some(name) = space {
        Requirement::TargetedOrganization.check(&session.snapshot())?;
        let space = locator.space_repository().find_by_name(name).await?;
        let config = session.update(|config| {
            config.space_fields = space.fields.clone();
            config.clone()
        });
        locator.config_repository().save(&config)?;
    }

    show_target(locator, ui)
}

fn show_target<W: Write>(locator: &RepositoryLocator, ui: &mut Ui<W>) -> Result<(), CliError> {
    let config = locator.session().snapshot();
    show_api(locator, ui)?;

    if config.has_organization() {
        ui.say(format!("Org:   {}", config.organization_fields.name))?;
    } else {
        ui.say("Org:   No org targeted, use 'cf target -o ORG'")?;
    }

    if config.has_space() {
        ui.say(format!("Space: {}", config.space_fields.name))
    } else {
        ui.say("Space: No space targeted, use 'cf target -s SPACE'")
    }
}
