use crate::constants::{
    COMMUNITY_ORG, DATA_BRANCH, DATA_REPO, EXCLUDED_REPOS, ISSUE_TYPES, ORGS, PROJECT_PREFIXES,
    QUALIFYING_LABELS, TECH_LIST,
};

/// The immutable rule set driving an export run.
///
/// Every component takes this by reference, so tests can swap in a
/// different rule set without touching the static defaults.
#[derive(Debug, Clone)]
pub struct ExportRules {
    /// Organizations whose repositories feed the issue export.
    pub orgs: Vec<String>,
    /// Organization whose teams and public members are exported.
    pub community_org: String,
    /// Repository name prefixes mapping to a website project tag.
    pub project_prefixes: Vec<String>,
    /// Recognized technology slugs, sorted lexically.
    pub tech_list: Vec<String>,
    /// Labels marking an issue as eligible for export.
    pub qualifying_labels: Vec<String>,
    /// Labels the website renders as an issue type.
    pub issue_types: Vec<String>,
    /// Repositories skipped by full name.
    pub excluded_repos: Vec<String>,
    /// Data repository the derived documents are committed to.
    pub data_repo: String,
    pub branch: String,
}

impl Default for ExportRules {
    fn default() -> Self {
        ExportRules {
            orgs: to_strings(ORGS),
            community_org: COMMUNITY_ORG.to_string(),
            project_prefixes: to_strings(PROJECT_PREFIXES),
            tech_list: to_strings(TECH_LIST),
            qualifying_labels: to_strings(QUALIFYING_LABELS),
            issue_types: to_strings(ISSUE_TYPES),
            excluded_repos: to_strings(EXCLUDED_REPOS),
            data_repo: DATA_REPO.to_string(),
            branch: DATA_BRANCH.to_string(),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
