use github_profile_viewer::models::{ProfileSummary, Repository};
use github_profile_viewer::types::{GitHubRepo, GitHubUser};
use serde_json::json;

#[test]
fn test_user_payload() {
    let payload = json!({
        "login": "octocat",
        "id": 583231,
        "node_id": "MDQ6VXNlcjU4MzIzMQ==",
        "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
        "html_url": "https://github.com/octocat",
        "repos_url": "https://api.github.com/users/octocat/repos",
        "name": "The Octocat",
        "blog": "",
        "location": null,
        "bio": null,
        "followers": 17000,
        "following": 9,
        "created_at": "2011-01-25T18:44:36Z"
    });

    let user: GitHubUser = serde_json::from_value(payload).expect("Failed to parse user");
    let profile = ProfileSummary::from(user);

    assert_eq!(profile.login, "octocat");
    assert_eq!(profile.display_name(), "The Octocat");
    assert_eq!(profile.bio_or_default(), "No bio available.");
    assert_eq!(profile.website(), None);
    assert_eq!(profile.location(), None);
    assert_eq!(profile.joined(), "Jan 2011");
    assert_eq!(profile.repos_url, "https://api.github.com/users/octocat/repos");
}

#[test]
fn test_user_payload_missing_repos_url_is_rejected() {
    let payload = json!({
        "login": "octocat",
        "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
        "html_url": "https://github.com/octocat",
        "created_at": "2011-01-25T18:44:36Z"
    });

    assert!(serde_json::from_value::<GitHubUser>(payload).is_err());
}

#[test]
fn test_repository_list_payload() {
    let payload = json!([
        {
            "name": "Spoon-Knife",
            "full_name": "octocat/Spoon-Knife",
            "description": "This repo is for demonstration purposes only.",
            "html_url": "https://github.com/octocat/Spoon-Knife",
            "language": "HTML",
            "stargazers_count": 12000,
            "forks_count": 150000
        },
        {
            "name": "octocat.github.io",
            "description": null,
            "html_url": "https://github.com/octocat/octocat.github.io",
            "language": null
        }
    ]);

    let repos: Vec<GitHubRepo> = serde_json::from_value(payload).expect("Failed to parse repos");
    let repos: Vec<Repository> = repos.into_iter().map(Repository::from).collect();

    assert_eq!(repos.len(), 2);
    assert_eq!(repos[0].language.as_deref(), Some("HTML"));
    assert_eq!(repos[0].forks_count, 150000);
    assert_eq!(repos[1].stargazers_count, 0);
    assert_eq!(repos[1].description_or_default(), "No description provided.");
}
