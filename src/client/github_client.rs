use std::io::{self, Write};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::constants::{GITHUB_API_URL, PER_PAGE};
use crate::error::ExportResult;
use crate::export_error;

pub struct GithubClient {
    client: reqwest::Client,
}

impl GithubClient {
    pub fn new(access_token: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("token {}", access_token))
                .expect("Invalid access token format"),
        );

        let client = reqwest::Client::builder()
            .user_agent("github-export/1.0 (reqwest)")
            .default_headers(headers)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch every page of a collection endpoint.
    ///
    /// Requests 100 items per page starting from page 1 and stops as soon
    /// as a page comes back short. An optional Accept media type can be
    /// merged in per call (e.g. the topics preview for repositories).
    pub async fn get_paged<T: DeserializeOwned>(
        &self,
        url: &str,
        accept: Option<&str>,
    ) -> ExportResult<Vec<T>> {
        let mut results = Vec::new();
        let mut page: u32 = 1;

        loop {
            let mut request = self.client.get(url).query(&[
                ("per_page", PER_PAGE.to_string()),
                ("page", page.to_string()),
                ("type", "public".to_string()),
            ]);
            if let Some(accept) = accept {
                request = request.header(ACCEPT, accept);
            }

            progress_mark();
            let response = request.send().await?;
            if !response.status().is_success() {
                return Err(export_error!(ApiError, "HTTP {} for {}", response.status(), url));
            }

            let items: Vec<T> = response.json().await?;
            let received = items.len();
            results.extend(items);

            match next_page(received, page) {
                Some(next) => page = next,
                None => break,
            }
        }

        Ok(results)
    }

    /// Fetch a single-object resource, returned immediately, unpaged.
    pub async fn get_one<T: DeserializeOwned>(&self, url: &str) -> ExportResult<T> {
        progress_mark();
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(export_error!(ApiError, "HTTP {} for {}", response.status(), url));
        }

        Ok(response.json().await?)
    }

    /// PUT a JSON body; used by the publisher's conditional content update.
    ///
    /// A stale revision marker makes the API reject the write, which
    /// surfaces here as the usual fatal status error.
    pub async fn put_json(&self, url: &str, body: &Value) -> ExportResult<Value> {
        let response = self.client.put(url).json(body).send().await?;
        if !response.status().is_success() {
            return Err(export_error!(ApiError, "HTTP {} for {}", response.status(), url));
        }

        Ok(response.json().await?)
    }
}

/// One informational progress marker per request.
fn progress_mark() {
    print!(".");
    let _ = io::stdout().flush();
}

/// Page counter advance: a short page ends the loop.
fn next_page(received: usize, page: u32) -> Option<u32> {
    if received < PER_PAGE {
        None
    } else {
        Some(page + 1)
    }
}

pub fn org_repos_url(org: &str) -> String {
    format!("{}/orgs/{}/repos", GITHUB_API_URL, org)
}

pub fn org_teams_url(org: &str) -> String {
    format!("{}/orgs/{}/teams", GITHUB_API_URL, org)
}

pub fn org_public_members_url(org: &str) -> String {
    format!("{}/orgs/{}/public_members", GITHUB_API_URL, org)
}

pub fn repo_issues_url(full_name: &str) -> String {
    format!("{}/repos/{}/issues", GITHUB_API_URL, full_name)
}

pub fn team_members_url(team_url: &str) -> String {
    format!("{}/members", team_url)
}

pub fn contents_url(data_repo: &str, path: &str) -> String {
    format!("{}/repos/{}/contents/{}", GITHUB_API_URL, data_repo, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_page_advances_on_full_page() {
        assert_eq!(next_page(100, 1), Some(2));
        assert_eq!(next_page(100, 7), Some(8));
    }

    #[test]
    fn test_next_page_stops_on_short_page() {
        assert_eq!(next_page(99, 1), None);
        assert_eq!(next_page(37, 4), None);
        assert_eq!(next_page(0, 2), None);
    }

    #[test]
    fn test_org_routes() {
        assert_eq!(org_repos_url("italia"), "https://api.github.com/orgs/italia/repos");
        assert_eq!(org_teams_url("italia"), "https://api.github.com/orgs/italia/teams");
        assert_eq!(
            org_public_members_url("italia"),
            "https://api.github.com/orgs/italia/public_members"
        );
    }

    #[test]
    fn test_repo_issues_route() {
        assert_eq!(
            repo_issues_url("italia/spid-lifecycle"),
            "https://api.github.com/repos/italia/spid-lifecycle/issues"
        );
    }

    #[test]
    fn test_team_members_route_hangs_off_team_url() {
        assert_eq!(
            team_members_url("https://api.github.com/teams/42"),
            "https://api.github.com/teams/42/members"
        );
    }

    #[test]
    fn test_contents_route() {
        assert_eq!(
            contents_url("bfabio/developers.italia.it-data", "github_issues.json"),
            "https://api.github.com/repos/bfabio/developers.italia.it-data/contents/github_issues.json"
        );
    }
}
