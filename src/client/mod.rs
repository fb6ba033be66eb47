pub mod github_client;

pub use github_client::{
    contents_url, org_public_members_url, org_repos_url, org_teams_url, repo_issues_url,
    team_members_url, GithubClient,
};
