use rstest::rstest;
use tabshell::config::ShellConfig;
use tabshell::shell::intent::{host_label, percent_encode, resolve_input};

#[rstest]
#[case("example.com", "https://example.com")]
#[case("http://example.com", "http://example.com")]
#[case("https://example.com", "https://example.com")]
#[case("sub.domain.com/path?x=1", "https://sub.domain.com/path?x=1")]
#[case("  example.com  ", "https://example.com")]
#[case("openai gpt", "https://www.google.com/search?q=openai+gpt")]
#[case("tabs", "https://www.google.com/search?q=tabs")]
fn test_resolve_input(#[case] input: &str, #[case] expected: &str) {
    let config = ShellConfig::default();
    assert_eq!(resolve_input(input, &config), expected);
}

#[rstest]
#[case(
    "http://localhost",
    "https://www.google.com/search?q=http%3A%2F%2Flocalhost"
)]
#[case(
    "https://intranet",
    "https://www.google.com/search?q=https%3A%2F%2Fintranet"
)]
fn test_dotless_input_is_searched_even_with_scheme(#[case] input: &str, #[case] expected: &str) {
    // The scheme passthrough lives inside the URL branch; without a dot
    // the input is a query, matching the dot-first decision rule.
    let config = ShellConfig::default();
    assert_eq!(resolve_input(input, &config), expected);
}

#[test]
fn test_empty_input_falls_back_to_home() {
    let config = ShellConfig::default();
    assert_eq!(resolve_input("", &config), config.home_url);
    assert_eq!(resolve_input("   ", &config), config.home_url);
}

#[test]
fn test_resolve_input_uses_configured_endpoints() {
    let config = ShellConfig {
        home_url: "https://start.example".to_string(),
        search_endpoint: "https://duckduckgo.com/?q=".to_string(),
        ..ShellConfig::default()
    };
    assert_eq!(resolve_input("", &config), "https://start.example");
    assert_eq!(
        resolve_input("rust wry", &config),
        "https://duckduckgo.com/?q=rust+wry"
    );
}

#[rstest]
#[case("hello world", "hello+world")]
#[case("c++ tutorial", "c%2B%2B+tutorial")]
#[case("a-b_c.d~e", "a-b_c.d~e")]
#[case("50% off?", "50%25+off%3F")]
fn test_percent_encode(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(percent_encode(input), expected);
}

#[rstest]
#[case("https://www.example.com/a/b", "example.com")]
#[case("http://example.com", "example.com")]
#[case("https://docs.rs/wry", "docs.rs")]
fn test_host_label(#[case] url: &str, #[case] expected: &str) {
    assert_eq!(host_label(url), expected);
}
