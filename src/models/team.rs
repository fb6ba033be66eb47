use serde::{Deserialize, Serialize};

/// A team as listed by the organization teams endpoint, with its member
/// roster filled in by the resolver.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Team {
    pub id: u64,
    pub name: String,
    pub slug: String,
    /// API URL of the team; member listings hang off it.
    pub url: String,
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

/// The four-field member projection published with each team.
///
/// The output is version-controlled; keeping only the fields the website
/// renders avoids commit churn on unrelated profile changes.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TeamMember {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
}

/// A member as listed on a team: just enough to fetch the full profile.
#[derive(Debug, Deserialize, Clone)]
pub struct MemberRef {
    pub login: String,
    pub url: String,
}
