use lazy_static::lazy_static;
use regex::Regex;

use crate::client::{repo_issues_url, GithubClient};
use crate::config::ExportRules;
use crate::error::ExportResult;
use crate::logging::log_debug;
use crate::models::{ExportedIssue, RawIssue, Repository};

lazy_static! {
    /// Repository names that are really one of the public websites.
    static ref WEBSITE_NAME: Regex = Regex::new(r"\.italia\.it|\.gov\.it|\.governo\.it").unwrap();
}

/// Fetch and classify the exportable issues of every repository.
///
/// Repositories keep their input order; within a repository, issues keep
/// the order the platform returned them in.
pub async fn fetch_issues(
    client: &GithubClient,
    rules: &ExportRules,
    repos: &[Repository],
) -> ExportResult<Vec<ExportedIssue>> {
    let mut issues = Vec::new();

    for repo in repos {
        if skip_repository(repo, rules) {
            log_debug(&format!("skipping {}", repo.full_name));
            continue;
        }

        let raw: Vec<RawIssue> = client.get_paged(&repo_issues_url(&repo.full_name), None).await?;
        issues.extend(classify_repo(repo, &raw, rules));
    }

    Ok(issues)
}

/// A repository contributes nothing when it has no open issues or sits on
/// the exclusion list.
fn skip_repository(repo: &Repository, rules: &ExportRules) -> bool {
    repo.open_issues_count == 0 || rules.excluded_repos.contains(&repo.full_name)
}

/// Turn a repository's raw issue listing into exported records.
pub fn classify_repo(
    repo: &Repository,
    raw_issues: &[RawIssue],
    rules: &ExportRules,
) -> Vec<ExportedIssue> {
    let mut out = Vec::new();

    for issue in raw_issues {
        // Pull requests show up in the same listing.
        if issue.pull_request.is_some() {
            continue;
        }

        let mut labels: Vec<String> = issue.labels.iter().map(|l| l.name.clone()).collect();

        // Capitalized labels sort before lowercase ones, so a
        // "Hacktoberfest" label outranks "bug" when the type picks the
        // first match below.
        labels.sort();

        if !labels.iter().any(|l| rules.qualifying_labels.contains(l)) {
            continue;
        }

        let issue_type = labels
            .iter()
            .find(|l| rules.issue_types.contains(*l))
            .cloned()
            .unwrap_or_default();

        // The qualifying labels only gate inclusion; the website never
        // displays them.
        let emitted: Vec<String> = labels
            .iter()
            .filter(|l| !rules.qualifying_labels.contains(*l))
            .cloned()
            .collect();

        out.push(ExportedIssue {
            created_at: issue.created_at.clone(),
            url: issue.html_url.clone(),
            title: issue.title.clone(),
            name: repo.name.clone(),
            language: matched_technologies(&repo.topics, rules),
            repository_url: repo.html_url.clone(),
            labels: emitted,
            issue_type,
            subproject: repo.name.clone(),
            project: project_for(&repo.name, rules),
        });
    }

    out
}

/// Intersection of the recognized technology list and the repository's
/// topic tags, in technology-list order.
fn matched_technologies(topics: &[String], rules: &ExportRules) -> Vec<String> {
    rules
        .tech_list
        .iter()
        .filter(|tech| topics.contains(*tech))
        .cloned()
        .collect()
}

/// Derive the website project tag for a repository name.
///
/// A known name prefix wins (with dashes removed), then the website
/// domain patterns, then the catch-all tag. Exactly one rule applies.
fn project_for(repo_name: &str, rules: &ExportRules) -> String {
    if let Some(prefix) = rules
        .project_prefixes
        .iter()
        .find(|p| repo_name.starts_with(p.as_str()))
    {
        prefix.replace('-', "")
    } else if WEBSITE_NAME.is_match(repo_name) {
        "website".to_string()
    } else {
        "other".to_string()
    }
}
