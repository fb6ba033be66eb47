use serde_json::Value;

use crate::client::{org_public_members_url, org_teams_url, team_members_url, GithubClient};
use crate::error::ExportResult;
use crate::models::{MemberRef, Team, TeamMember};

/// Fetch an organization's teams with their member rosters resolved.
///
/// Team and member order is whatever the platform returned; nothing is
/// re-sorted.
pub async fn fetch_teams(client: &GithubClient, org: &str) -> ExportResult<Vec<Team>> {
    let mut teams: Vec<Team> = client.get_paged(&org_teams_url(org), None).await?;

    for team in &mut teams {
        let roster: Vec<MemberRef> = client.get_paged(&team_members_url(&team.url), None).await?;

        // The team listing only carries login and URLs; the full profile
        // has the display name. Deserializing it into TeamMember keeps
        // exactly the four projected fields.
        let mut members = Vec::with_capacity(roster.len());
        for member in &roster {
            members.push(client.get_one::<TeamMember>(&member.url).await?);
        }
        team.members = members;
    }

    Ok(teams)
}

/// Fetch an organization's public members with their full platform fields.
///
/// The members artifact publishes the records unprojected, so they stay
/// raw JSON values.
pub async fn fetch_public_members(client: &GithubClient, org: &str) -> ExportResult<Vec<Value>> {
    client.get_paged(&org_public_members_url(org), None).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_projection_keeps_four_fields() {
        // A full profile carries far more than the website needs; the
        // projection must drop everything else.
        let profile = json!({
            "login": "octocat",
            "id": 583231,
            "name": "The Octocat",
            "company": "GitHub",
            "blog": "https://github.blog",
            "location": "San Francisco",
            "avatar_url": "https://avatars.githubusercontent.com/u/583231",
            "html_url": "https://github.com/octocat",
            "followers": 4000,
            "following": 9
        });

        let member: TeamMember = serde_json::from_value(profile).unwrap();
        assert_eq!(member.login, "octocat");
        assert_eq!(member.name.as_deref(), Some("The Octocat"));

        let yaml = serde_yaml::to_string(&member).unwrap();
        let keys: serde_yaml::Mapping = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(keys.len(), 4);
    }

    #[test]
    fn test_profile_projection_handles_null_name() {
        let profile = json!({
            "login": "ghost",
            "name": null,
            "avatar_url": "https://avatars.githubusercontent.com/u/10137",
            "html_url": "https://github.com/ghost"
        });

        let member: TeamMember = serde_json::from_value(profile).unwrap();
        assert!(member.name.is_none());
    }

    #[test]
    fn test_team_listing_deserializes_without_members() {
        let listing = json!({
            "id": 42,
            "name": "Developers",
            "slug": "developers",
            "url": "https://api.github.com/organizations/1/team/42",
            "privacy": "closed"
        });

        let team: Team = serde_json::from_value(listing).unwrap();
        assert_eq!(team.id, 42);
        assert!(team.members.is_empty());
    }
}
