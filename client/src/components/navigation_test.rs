use super::*;

#[test]
fn nav_links_point_at_section_anchors() {
    for link in NAV_LINKS {
        assert!(link.href.starts_with('#'), "{} is not an anchor", link.href);
    }
    assert_eq!(NAV_LINKS.first().map(|l| l.href), Some("#home"));
}

#[test]
fn theme_toggle_offers_the_other_mode() {
    assert_eq!(theme_toggle_icon(ThemeMode::Dark), "☀");
    assert_eq!(theme_toggle_icon(ThemeMode::Light), "☾");
    assert_eq!(theme_toggle_label(ThemeMode::Dark), "☀ Light Mode");
    assert_eq!(theme_toggle_label(ThemeMode::Light), "☾ Dark Mode");
}
