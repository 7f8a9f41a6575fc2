//! Paginated listings: orgs, spaces and routes

use std::io::Write;

use cfkit_domain::Route;
use cfkit_infra::RepositoryLocator;

use crate::error::CliError;
use crate::ui::Ui;

pub async fn orgs<W: Write>(locator: &RepositoryLocator, ui: &mut Ui<W>) -> Result<(), CliError> {
    ui.say("Getting orgs...")?;
    let orgs = locator.organization_repository().list_orgs().collect().await?;
    ui.ok()?;

    if orgs.is_empty() {
        return ui.say("No orgs found");
    }

    let rows: Vec<Vec<String>> = orgs.into_iter().map(|org| vec![org.fields.name]).collect();
    ui.table(&["name"], &rows)
}

pub async fn spaces<W: Write>(locator: &RepositoryLocator, ui: &mut Ui<W>) -> Result<(), CliError> {
    ui.say(format!("Getting spaces in org {}...", locator.session().organization().name))?;
    let spaces = locator.space_repository().list_spaces().collect().await?;
    ui.ok()?;

    if spaces.is_empty() {
        return ui.say("No spaces found");
    }

    let rows: Vec<Vec<String>> = spaces.into_iter().map(|space| vec![space.fields.name]).collect();
    ui.table(&["name"], &rows)
}

pub async fn routes<W: Write>(locator: &RepositoryLocator, ui: &mut Ui<W>) -> Result<(), CliError> {
    ui.say("Getting routes...")?;
    let routes = locator.route_repository().list_routes().collect().await?;
    ui.ok()?;

    if routes.is_empty() {
        return ui.say("No routes found");
    }

    let rows: Vec<Vec<String>> = routes.iter().map(route_row).collect();
    ui.table(&["host", "domain", "apps"], &rows)
}

fn route_row(route: &Route) -> Vec<String> {
    let apps: Vec<&str> = route.apps.iter().map(|app| app.name.as_str()).collect();
    vec![route.summary.fields.host.clone(), route.summary.domain.name.clone(), apps.join(", ")]
}
