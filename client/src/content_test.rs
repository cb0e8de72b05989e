use std::collections::HashSet;

use super::*;

#[test]
fn nav_links_target_page_anchors() {
    let hrefs: Vec<_> = NAV_LINKS.iter().map(|l| l.href).collect();
    assert_eq!(hrefs, ["#about", "#projects", "#certifications", "#contact"]);
}

#[test]
fn project_list_has_eight_unique_entries() {
    assert_eq!(PROJECTS.len(), 8);
    let names: HashSet<_> = PROJECTS.iter().map(|p| p.name).collect();
    assert_eq!(names.len(), PROJECTS.len());
}

#[test]
fn every_project_links_to_github_and_lists_tech() {
    for project in PROJECTS {
        assert!(project.repo_url.starts_with("https://github.com/"), "{}", project.name);
        assert!(!project.tech.is_empty(), "{}", project.name);
        assert!(!project.summary.contains("  "), "{} summary has a line-break gap", project.name);
    }
}

#[test]
fn only_cinerank_has_a_live_demo() {
    let with_demo: Vec<_> = PROJECTS.iter().filter(|p| p.demo_url.is_some()).map(|p| p.name).collect();
    assert_eq!(with_demo, ["CineRank"]);
}

#[test]
fn certifications_use_https_credentials() {
    assert_eq!(CERTIFICATIONS.len(), 3);
    for cert in CERTIFICATIONS {
        assert!(cert.credential_url.starts_with("https://"), "{}", cert.title);
        assert!(!cert.credential_url.contains(' '), "{}", cert.title);
    }
    assert_eq!(CERTIFICATIONS[0].kind, CertKind::Badge);
}

#[test]
fn skill_groups_cover_four_areas() {
    let titles: Vec<_> = SKILLS.iter().map(|s| s.title).collect();
    assert_eq!(titles, ["Languages & Web", "Backend", "AI & ML", "Tools & DB"]);
}

#[test]
fn profile_static_asset_paths_are_rooted() {
    assert!(PROFILE.resume_path.starts_with('/'));
    assert!(PROFILE.photo_path.starts_with('/'));
    assert_eq!(PROFILE.bio.len(), 2);
}

#[test]
fn profile_mailto_link() {
    assert_eq!(PROFILE.mailto(), "mailto:msubhajyoti62@gmail.com");
}
