use std::env;
use std::process;

use github_export_cli::client::{org_repos_url, GithubClient};
use github_export_cli::config::ExportRules;
use github_export_cli::constants::{
    ACCESS_TOKEN_VAR, ISSUES_PATH, MEMBERS_PATH, TECH_LIST_PATH, TEAMS_PATH, TOPICS_ACCEPT,
};
use github_export_cli::error::{ExportError, ExportResult};
use github_export_cli::issues::fetch_issues;
use github_export_cli::logging::{init_logging, log_info};
use github_export_cli::models::Repository;
use github_export_cli::publish::publish;
use github_export_cli::teams::{fetch_public_members, fetch_teams};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> ExportResult<()> {
    let _ = init_logging();

    // Preflight: no network activity without a token.
    let token = env::var(ACCESS_TOKEN_VAR).unwrap_or_default();
    if token.is_empty() {
        return Err(ExportError::MissingToken);
    }

    let rules = ExportRules::default();
    let client = GithubClient::new(&token);

    let mut repos: Vec<Repository> = Vec::new();
    for org in &rules.orgs {
        // The topics preview media type populates each repo's topic tags.
        repos.extend(
            client
                .get_paged::<Repository>(&org_repos_url(org), Some(TOPICS_ACCEPT))
                .await?,
        );
    }
    println!("Got {} GitHub repos", repos.len());
    log_info(&format!("fetched {} repos across {} orgs", repos.len(), rules.orgs.len()));

    let issues = fetch_issues(&client, &rules, &repos).await?;
    println!("Got {} issues", issues.len());

    let teams = fetch_teams(&client, &rules.community_org).await?;
    println!("Got {} teams", teams.len());

    let members = fetch_public_members(&client, &rules.community_org).await?;
    println!("Got {} members", members.len());

    // Each artifact is published on its own; an earlier commit stands
    // even if a later one fails.
    publish(&client, &rules, ISSUES_PATH, &serde_json::to_string(&issues)?).await?;
    publish(&client, &rules, TEAMS_PATH, &serde_yaml::to_string(&teams)?).await?;
    publish(&client, &rules, MEMBERS_PATH, &serde_yaml::to_string(&members)?).await?;
    publish(&client, &rules, TECH_LIST_PATH, &serde_yaml::to_string(&rules.tech_list)?).await?;

    log_info("export run complete");

    Ok(())
}
