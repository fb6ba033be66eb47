pub const GITHUB_API_URL: &str = "https://api.github.com";
pub const ACCESS_TOKEN_VAR: &str = "GH_ACCESS_TOKEN";

/// Media type enabling the repository `topics` field (preview-only).
pub const TOPICS_ACCEPT: &str = "application/vnd.github.mercy-preview+json";

pub const PER_PAGE: usize = 100;

/// Organizations whose repositories feed the issue export.
pub const ORGS: &[&str] = &["teamdigitale", "italia"];

/// Organization whose teams and public members are exported.
pub const COMMUNITY_ORG: &str = "italia";

/// Project prefixes the website can translate to a user-friendly string.
pub const PROJECT_PREFIXES: &[&str] = &[
    "spid-",
    "18app",
    "anpr-",
    "daf-",
    "dati-",
    "pianotriennale-",
    "lg-",
    "design-",
    "security-",
    "cie-",
];

/// Technologies shown in the website UI, sorted lexically.
pub const TECH_LIST: &[&str] = &[
    "android",
    "angular",
    "ansible",
    "arduino",
    "bootstrap",
    "cpp",
    "csharp",
    "design",
    "django",
    "docker",
    "dotnet",
    "frontend",
    "html",
    "ios",
    "java",
    "joomla",
    "magento",
    "metabase",
    "perl",
    "php",
    "python",
    "react",
    "scala",
    "wordpress",
];

/// Only issues carrying at least one of these labels are exported.
pub const QUALIFYING_LABELS: &[&str] = &["help wanted", "Hacktoberfest"];

/// Labels the UI can render as an issue type.
pub const ISSUE_TYPES: &[&str] = &["bug", "enhancement", "new project", "Hacktoberfest"];

/// Repositories ignored by full name (`organization/repo`).
pub const EXCLUDED_REPOS: &[&str] = &[];

/// Data repository the derived documents are committed to.
pub const DATA_REPO: &str = "bfabio/developers.italia.it-data";
pub const DATA_BRANCH: &str = "main";

// Output artifact paths inside the data repository.
pub const ISSUES_PATH: &str = "github_issues.json";
pub const TEAMS_PATH: &str = "github_teams.yml";
pub const MEMBERS_PATH: &str = "github_members.yml";
pub const TECH_LIST_PATH: &str = "github_tech_list.yml";
