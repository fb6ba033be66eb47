use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Repository {
    pub name: String,
    /// Full name in `organization/repo` form.
    pub full_name: String,
    pub open_issues_count: u64,
    /// Topic tags set by the maintainers. Only populated when the request
    /// carries the topics preview media type.
    #[serde(default)]
    pub topics: Vec<String>,
    pub html_url: String,
}
