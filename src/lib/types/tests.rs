use proptest::{
    prelude::*,
    test_runner::{Config, TestRunner},
};

use super::{ImageUrl, PlainText};

#[test]
fn plain_text_never_contains_tags() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(
            &proptest::collection::vec(("[a-z]{1,5}", "[^<>]{0,8}"), 0..5),
            |parts| {
                let mut html = String::new();
                let mut expected = String::new();
                for (tag, text) in &parts {
                    html.push_str(&format!("<{tag}>{text}</{tag}>"));
                    expected.push_str(text);
                }
                let plain = PlainText::sanitize(&html);
                prop_assert_eq!(plain.as_str(), expected.as_str());
                prop_assert!(!plain.as_str().contains('>'));
                Ok(())
            },
        )
        .unwrap();
}

#[test]
fn image_url_is_rooted_and_fragment_free() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(
            &(
                "https://[a-z]{1,10}\\.org/?",
                "/{0,2}[a-z]{1,8}/[a-z]{1,8}\\.(jpg|png|webp)",
                "(#[A-Za-z0-9:/?=&._-]{0,24})?",
            ),
            |(root, path, fragment)| {
                let rendered = format!("{path}{fragment}");
                let url = ImageUrl::resolve(&rendered, &root).unwrap();
                let expected = format!(
                    "{}/{}",
                    root.trim_end_matches('/'),
                    path.trim_start_matches('/')
                );
                prop_assert_eq!(url.as_str(), expected.as_str());
                prop_assert!(!url.as_str().contains('#'));
                Ok(())
            },
        )
        .unwrap();
}

#[test]
fn image_url_joins_root_with_single_slash() {
    let url = ImageUrl::resolve("images/banner.jpg#cache", "https://example.org/").unwrap();
    assert_eq!(url.as_str(), "https://example.org/images/banner.jpg");

    let url = ImageUrl::resolve("/images/banner.jpg", "https://example.org").unwrap();
    assert_eq!(url.as_str(), "https://example.org/images/banner.jpg");
}

#[test]
fn image_url_strips_media_field_suffix() {
    let rendered = "images/logo.png#joomlaImage://local-images/logo.png?width=1200&height=630";
    let url = ImageUrl::resolve(rendered, "https://example.org/").unwrap();
    assert_eq!(url.as_str(), "https://example.org/images/logo.png");
}

#[test]
fn image_url_keeps_absolute_references() {
    let url = ImageUrl::resolve("https://cdn.example.net/a.jpg#x", "https://example.org/").unwrap();
    assert_eq!(url.as_str(), "https://cdn.example.net/a.jpg");
}

#[test]
fn image_url_rejects_empty_paths() {
    assert_eq!(ImageUrl::resolve("", "https://example.org/"), None);
    assert_eq!(ImageUrl::resolve("#only-fragment", "https://example.org/"), None);
    assert_eq!(ImageUrl::resolve("/", "https://example.org/"), None);
}

#[test]
fn image_url_scheme_check_ignores_case() {
    let url = ImageUrl::resolve("HTTPS://cdn.example.net/a.jpg", "https://example.org/").unwrap();
    assert_eq!(url.as_str(), "HTTPS://cdn.example.net/a.jpg");

    let url = ImageUrl::resolve("Http://cdn.example.net/b.png#v", "https://example.org/").unwrap();
    assert_eq!(url.as_str(), "Http://cdn.example.net/b.png");
}

#[test]
fn image_url_needs_a_root_for_relative_paths() {
    assert_eq!(ImageUrl::resolve("images/a.jpg", ""), None);
    assert_eq!(ImageUrl::resolve("images/a.jpg", " / "), None);

    let url = ImageUrl::resolve("https://cdn.example.net/a.jpg", "").unwrap();
    assert_eq!(url.as_str(), "https://cdn.example.net/a.jpg");
}
