//! App commands

use std::io::Write;

use cfkit_domain::{AppSummary, ApplicationInstance, Event};
use cfkit_infra::RepositoryLocator;

use super::space_context;
use crate::error::CliError;
use crate::ui::{format_bytes, format_megabytes, Ui};

pub async fn apps<W: Write>(locator: &RepositoryLocator, ui: &mut Ui<W>) -> Result<(), CliError> {
    ui.say(format!("Getting apps {}...", space_context(locator)))?;
    let apps = locator.app_summary_repository().summaries_in_current_space().await?;
    ui.ok()?;

    if apps.is_empty() {
        return ui.say("No apps found");
    }

    let rows: Vec<Vec<String>> = apps.iter().map(app_row).collect();
    ui.table(&["name", "state", "instances", "memory", "disk", "urls"], &rows)
}

fn app_row(summary: &AppSummary) -> Vec<String> {
    let app = &summary.app;
    vec![
        app.name.clone(),
        app.state.clone(),
        format!("{}/{}", app.running_instances, app.instances),
        format_megabytes(app.memory),
        format_megabytes(app.disk_quota),
        urls(summary),
    ]
}

fn urls(summary: &AppSummary) -> String {
    summary.route_summaries.iter().map(|route| route.url()).collect::<Vec<_>>().join(", ")
}

pub async fn app<W: Write>(
    locator: &RepositoryLocator,
    ui: &mut Ui<W>,
    name: &str,
) -> Result<(), CliError> {
    ui.say(format!("Showing health and status for app {name} {}...", space_context(locator)))?;

    let app = locator.application_repository().find_by_name(name).await?;
    let summary = locator.app_summary_repository().get_summary(&app.fields.guid).await?;
    ui.ok()?;

    let fields = &summary.app;
    ui.say(format!("state: {}", fields.state))?;
    ui.say(format!("instances: {}/{}", fields.running_instances, fields.instances))?;
    ui.say(format!("usage: {} x {} instances", format_megabytes(fields.memory), fields.instances))?;
    ui.say(format!("urls: {}", urls(&summary)))?;
    ui.say("")?;

    if summary.instances.is_empty() {
        return ui.say("There are no running instances of this app.");
    }

    let rows: Vec<Vec<String>> =
        summary.instances.iter().enumerate().map(|(index, instance)| instance_row(index, instance)).collect();
    ui.table(&["", "state", "since", "cpu", "memory", "disk"], &rows)
}

fn instance_row(index: usize, instance: &ApplicationInstance) -> Vec<String> {
    vec![
        format!("#{index}"),
        instance.state.to_string(),
        instance.since.map(|since| since.format("%Y-%m-%d %I:%M:%S %p").to_string()).unwrap_or_default(),
        format!("{:.1}%", instance.cpu_usage * 100.0),
        format!("{} of {}", format_bytes(instance.mem_usage), format_bytes(instance.mem_quota)),
        format!("{} of {}", format_bytes(instance.disk_usage), format_bytes(instance.disk_quota)),
    ]
}

pub async fn rename<W: Write>(
    locator: &RepositoryLocator,
    ui: &mut Ui<W>,
    name: &str,
    new_name: &str,
) -> Result<(), CliError> {
    let repo = locator.application_repository();
    let app = repo.find_by_name(name).await?;

    ui.say(format!("Renaming app {name} to {new_name} {}...", space_context(locator)))?;
    repo.rename(&app.fields.guid, new_name).await?;
    ui.ok()
}

pub async fn events<W: Write>(
    locator: &RepositoryLocator,
    ui: &mut Ui<W>,
    name: &str,
) -> Result<(), CliError> {
    let app = locator.application_repository().find_by_name(name).await?;
    ui.say(format!("Getting events for app {name} {}...", space_context(locator)))?;

    let events = locator.app_events_repository().list_events(&app.fields.guid).collect().await?;
    ui.ok()?;

    if events.is_empty() {
        return ui.say(format!("No events for app {name}"));
    }

    let rows: Vec<Vec<String>> = events.iter().map(event_row).collect();
    ui.table(&["time", "instance", "description", "exit status"], &rows)
}

fn event_row(event: &Event) -> Vec<String> {
    vec![
        event.timestamp.format("%Y-%m-%d %H:%M:%S %z").to_string(),
        event.instance_index.to_string(),
        event.exit_description.clone(),
        event.exit_status.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use cfkit_domain::{ApplicationFields, DomainFields, InstanceState, RouteFields, RouteSummary};

    use super::*;

    #[test]
    fn app_row_shows_instances_and_urls() {
        let summary = AppSummary {
            app: ApplicationFields {
                name: "web".into(),
                state: "started".into(),
                instances: 3,
                running_instances: 2,
                memory: 1024,
                disk_quota: 512,
                ..Default::default()
            },
            route_summaries: vec![RouteSummary {
                fields: RouteFields { guid: "r".into(), host: "www".into() },
                domain: DomainFields { name: "example.com".into(), ..Default::default() },
            }],
            ..Default::default()
        };

        assert_eq!(app_row(&summary), ["web", "started", "2/3", "1G", "512M", "www.example.com"]);
    }

    #[test]
    fn instance_row_formats_usage() {
        let instance = ApplicationInstance {
            state: InstanceState::Running,
            since: Utc.timestamp_opt(0, 0).single(),
            cpu_usage: 0.125,
            mem_usage: 64 * 1024 * 1024,
            mem_quota: 256 * 1024 * 1024,
            ..Default::default()
        };

        let row = instance_row(0, &instance);
        assert_eq!(row[0], "#0");
        assert_eq!(row[1], "running");
        assert_eq!(row[2], "1970-01-01 12:00:00 AM");
        assert_eq!(row[3], "12.5%");
        assert_eq!(row[4], "64M of 256M");
    }
}
