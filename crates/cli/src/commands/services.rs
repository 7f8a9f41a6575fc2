//! Service commands

use std::io::Write;

use cfkit_infra::RepositoryLocator;
use tracing::info;

use super::space_context;
use crate::error::CliError;
use crate::ui::Ui;

/// Creating an instance that already exists with the same plan is not an
/// error: the command succeeds and warns.
pub async fn create_service<W: Write>(
    locator: &RepositoryLocator,
    ui: &mut Ui<W>,
    offering_label: &str,
    plan_name: &str,
    name: &str,
) -> Result<(), CliError> {
    ui.say(format!("Creating service {name} {}...", space_context(locator)))?;

    let repo = locator.service_repository();
    let offerings = repo.get_service_offerings().await?;

    let offering = offerings
        .iter()
        .find(|offering| offering.fields.label == offering_label)
        .ok_or_else(|| CliError::Usage(format!("Could not find offering with name {offering_label}")))?;
    let plan = offering
        .plans
        .iter()
        .find(|plan| plan.name == plan_name)
        .ok_or_else(|| CliError::Usage(format!("Could not find plan with name {plan_name}")))?;

    let already_exists = repo.create_service_instance(name, &plan.guid).await?;
    ui.ok()?;

    if already_exists {
        info!(%name, "service instance already existed");
        ui.warn(format!("Service {name} already exists"))?;
    }
    Ok(())
}
