//! `cf` commands end to end against a mock control plane
//!
//! **Coverage:**
//! - Requirement failures stop a command before any request
//! - Paginated listings rendered as tables
//! - Targeting persists to the config file
//! - Idempotent service creation warns instead of failing

use std::sync::Arc;

use cfkit_cli::cli::Commands;
use cfkit_cli::commands;
use cfkit_cli::ui::Ui;
use cfkit_cli::CliError;
use cfkit_core::{ConfigRepository, RequirementError, Session};
use cfkit_domain::{Configuration, OrganizationFields, SpaceFields};
use cfkit_infra::{HttpClient, JsonConfigStore, RepositoryLocator};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Harness {
    locator: RepositoryLocator,
    store: Arc<JsonConfigStore>,
    _dir: TempDir,
}

fn harness(config: Configuration) -> Harness {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(JsonConfigStore::new(dir.path().join("config.json")));
    let locator =
        RepositoryLocator::new(Session::new(config), HttpClient::new().unwrap(), store.clone());
    Harness { locator, store, _dir: dir }
}

fn logged_in(server: &MockServer) -> Configuration {
    Configuration {
        target: server.uri(),
        api_version: "2.0.0".into(),
        authorization_endpoint: server.uri(),
        access_token: "bearer token".into(),
        refresh_token: "refresh".into(),
        ..Default::default()
    }
}

fn targeted(server: &MockServer) -> Configuration {
    Configuration {
        organization_fields: OrganizationFields::new("my-org-guid", "my-org"),
        space_fields: SpaceFields::new("my-space-guid", "dev"),
        ..logged_in(server)
    }
}

async fn run(harness: &Harness, command: Commands) -> (Result<(), CliError>, String) {
    let mut ui = Ui::new(Vec::new());
    let result = commands::run(command, &harness.locator, &mut ui).await;
    (result, String::from_utf8(ui.into_inner()).unwrap())
}

fn named(guid: &str, name: &str) -> serde_json::Value {
    json!({ "metadata": { "guid": guid }, "entity": { "name": name } })
}

#[tokio::test]
async fn apps_requires_login_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let harness = harness(Configuration { target: server.uri(), ..Default::default() });
    let (result, output) = run(&harness, Commands::Apps).await;

    assert!(matches!(result, Err(CliError::Requirement(RequirementError::NotLoggedIn))));
    assert!(output.is_empty());
}

#[tokio::test]
async fn orgs_lists_every_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next_url": null,
            "resources": [named("org-2", "second-org")]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next_url": "/v2/organizations?page=2",
            "resources": [named("org-1", "first")]
        })))
        .mount(&server)
        .await;

    let harness = harness(logged_in(&server));
    let (result, output) = run(&harness, Commands::Orgs).await;

    result.unwrap();
    assert_eq!(output, "Getting orgs...\nOK\n\nname\nfirst\nsecond-org\n");
}

#[tokio::test]
async fn target_org_persists_and_clears_space() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .and(query_param("q", "name:other-org"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resources": [named("other-guid", "other-org")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let harness = harness(targeted(&server));
    let (result, output) = run(
        &harness,
        Commands::Target { organization: Some("Other-Org".into()), space: None },
    )
    .await;

    result.unwrap();
    assert!(output.contains("Org:   other-org"));
    assert!(output.contains("Space: No space targeted"));

    let saved = harness.store.load().unwrap();
    assert_eq!(saved.organization_fields.guid, "other-guid");
    assert!(saved.space_fields.guid.is_empty());
}

#[tokio::test]
async fn existing_service_instance_warns() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resources": [{
                "metadata": { "guid": "offering-guid" },
                "entity": {
                    "label": "mysql",
                    "service_plans": [named("plan-guid", "small")]
                }
            }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/service_instances"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "code": 60002, "description": "The service instance name is taken: db" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/spaces/my-space-guid/service_instances"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resources": [{
                "metadata": { "guid": "instance-guid" },
                "entity": {
                    "name": "db",
                    "service_plan": named("plan-guid", "small")
                }
            }]
        })))
        .mount(&server)
        .await;

    let harness = harness(targeted(&server));
    let (result, output) = run(
        &harness,
        Commands::CreateService { offering: "mysql".into(), plan: "small".into(), name: "db".into() },
    )
    .await;

    result.unwrap();
    assert!(output.ends_with("OK\n\nService db already exists\n"));
}

#[tokio::test]
async fn unknown_plan_fails_without_creating() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resources": [{
                "metadata": { "guid": "offering-guid" },
                "entity": { "label": "mysql", "service_plans": [] }
            }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let harness = harness(targeted(&server));
    let (result, _) = run(
        &harness,
        Commands::CreateService { offering: "mysql".into(), plan: "huge".into(), name: "db".into() },
    )
    .await;

    assert_eq!(result.unwrap_err().to_string(), "Could not find plan with name huge");
}
