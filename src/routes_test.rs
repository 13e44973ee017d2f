use std::collections::HashSet;

use super::*;

#[test]
fn table_has_exactly_the_six_expected_paths() {
    let paths: HashSet<&str> = routes().iter().map(|r| r.path).collect();
    let expected: HashSet<&str> = ["/login", "/register", "/", "/info", "/home", "/profile"].into();
    assert_eq!(routes().len(), 6);
    assert_eq!(paths, expected);
}

#[test]
fn paths_and_pages_are_unique() {
    let paths: HashSet<&str> = routes().iter().map(|r| r.path).collect();
    let pages: HashSet<PageId> = routes().iter().map(|r| r.page).collect();
    assert_eq!(paths.len(), routes().len());
    assert_eq!(pages.len(), routes().len());
}

#[test]
fn lookup_home_yields_forum_page() {
    assert_eq!(lookup("/home"), Some(PageId::ForumPage));
}

#[test]
fn lookup_maps_every_entry() {
    assert_eq!(lookup("/login"), Some(PageId::UserLogin));
    assert_eq!(lookup("/register"), Some(PageId::UserRegister));
    assert_eq!(lookup("/"), Some(PageId::AuthGate));
    assert_eq!(lookup("/info"), Some(PageId::CheckInfo));
    assert_eq!(lookup("/profile"), Some(PageId::ProfilePage));
}

#[test]
fn lookup_unregistered_path_yields_none() {
    assert_eq!(lookup("/forum"), None);
    assert_eq!(lookup("/home/extra"), None);
    assert_eq!(lookup("home"), None);
    assert_eq!(lookup(""), None);
}

#[test]
fn segment_is_path_without_leading_slash() {
    for route in routes() {
        assert_eq!(format!("/{}", route.page.segment()), route.path, "{:?}", route.page);
    }
}

#[test]
fn page_titles_are_distinct() {
    let titles: HashSet<&str> = routes().iter().map(|r| r.page.title()).collect();
    assert_eq!(titles.len(), 6);
    assert_eq!(PageId::ForumPage.title(), "Forum");
}

#[test]
fn route_count_matches_table_and_mounted_routes() {
    assert_eq!(ROUTE_COUNT, routes().len());
    assert_eq!(crate::app::MOUNTED_ROUTES, routes().len());
}
