use super::*;

#[test]
fn recording_navigator_tracks_history_and_current_path() {
    let nav = RecordingNavigator::at("/products");
    assert_eq!(nav.current_path(), "/products");
    assert!(nav.navigations().is_empty());

    nav.navigate("/login");
    nav.navigate("/");
    assert_eq!(nav.current_path(), "/");
    assert_eq!(nav.navigations(), vec!["/login".to_owned(), "/".to_owned()]);
}

#[test]
fn recording_navigator_defaults_to_root() {
    assert_eq!(RecordingNavigator::default().current_path(), "/");
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_navigator_is_inert_without_browser() {
    let nav = BrowserNavigator;
    nav.navigate("/login");
    assert_eq!(nav.current_path(), "/");
}
