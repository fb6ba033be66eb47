use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An issue as returned by the repository issue listing.
///
/// Pull requests show up in the same collection; `pull_request` is the
/// marker field distinguishing them.
#[derive(Debug, Deserialize, Clone)]
pub struct RawIssue {
    pub created_at: String,
    pub html_url: String,
    pub title: String,
    pub labels: Vec<RawLabel>,
    pub pull_request: Option<Value>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawLabel {
    pub name: String,
}

/// An issue record as published in `github_issues.json`.
///
/// Field order matches the document the website consumes.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ExportedIssue {
    pub created_at: String,
    /// The issue's web URL, used as its identity by the website.
    pub url: String,
    pub title: String,
    /// Owning repository name.
    pub name: String,
    /// Technologies matched between the repository topics and the
    /// recognized technology list.
    pub language: Vec<String>,
    pub repository_url: String,
    /// Sorted labels, with the qualifying filter labels removed.
    pub labels: Vec<String>,
    #[serde(rename = "type")]
    pub issue_type: String,
    pub subproject: String,
    /// Derived project category shown by the website.
    pub project: String,
}
