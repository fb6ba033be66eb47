use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use colored::*;
use serde::Deserialize;
use serde_json::json;

use crate::client::{contents_url, GithubClient};
use crate::config::ExportRules;
use crate::error::{ErrorContext, ExportResult};
use crate::logging::log_info;

/// Contents-API read result: the current payload plus the revision
/// marker required for a conditional update.
#[derive(Debug, Deserialize)]
struct ContentsFile {
    content: String,
    sha: String,
}

/// Commit `new_content` at `path` in the data repository, but only when
/// it differs from what is already there.
///
/// The write carries the previously read revision marker, so a
/// concurrent update makes the API reject it; that conflict is fatal for
/// the run and is not retried.
pub async fn publish(
    client: &GithubClient,
    rules: &ExportRules,
    path: &str,
    new_content: &str,
) -> ExportResult<()> {
    let url = contents_url(&rules.data_repo, path);

    let current: ContentsFile = client.get_one(&url).await?;
    let existing = decode_content(&current.content)?;

    if !needs_update(&existing, new_content) {
        println!("{} {}", path.bold(), "unchanged".dimmed());
        log_info(&format!("{} unchanged", path));
        return Ok(());
    }

    println!("Updating {}...", path.bold());
    log_info(&format!("updating {} (sha {})", path, current.sha));

    let body = json!({
        "message": commit_message(path),
        "content": STANDARD.encode(new_content),
        "sha": current.sha,
        "branch": rules.branch,
    });
    client.put_json(&url, &body).await?;

    Ok(())
}

fn needs_update(existing: &str, new_content: &str) -> bool {
    existing != new_content
}

/// Decode a contents-API payload: base64, wrapped with embedded newlines.
fn decode_content(encoded: &str) -> ExportResult<String> {
    let compact: String = encoded.split_whitespace().collect();
    let bytes = STANDARD
        .decode(compact.as_bytes())
        .context("Invalid base64 in remote file")?;
    String::from_utf8(bytes).context("Remote file is not valid UTF-8")
}

fn commit_message(path: &str) -> String {
    format!(":robot: Update {}", path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_content_strips_payload_newlines() {
        // The API wraps base64 payloads at 60 columns.
        let wrapped = "eyJjcmVhdGVkX2F0IjoiMjAxOC0xMC0wMVQwOTowMDowMFoi\nfQ==\n";
        let decoded = decode_content(wrapped).unwrap();
        assert_eq!(decoded, r#"{"created_at":"2018-10-01T09:00:00Z"}"#);
    }

    #[test]
    fn test_decode_content_rejects_garbage() {
        assert!(decode_content("not base64 at all!").is_err());
    }

    #[test]
    fn test_encode_decode_round_trip_means_second_run_is_a_noop() {
        // Identical upstream data published twice: the second run reads
        // back what the first one wrote and must decide "unchanged".
        let content = "- android\n- angular\n";
        let stored = STANDARD.encode(content);
        let read_back = decode_content(&stored).unwrap();
        assert!(!needs_update(&read_back, content));
    }

    #[test]
    fn test_needs_update_on_any_difference() {
        assert!(needs_update("[]", "[{}]"));
        assert!(!needs_update("[]", "[]"));
    }

    #[test]
    fn test_commit_message_template() {
        assert_eq!(commit_message("github_issues.json"), ":robot: Update github_issues.json");
    }
}
