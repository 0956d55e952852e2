// Property-based tests for the CORS origin allow-list

use pesarelay::middleware::OriginPolicy;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_any_subdomain_matches_wildcard(label in "[a-z0-9][a-z0-9-]{0,30}") {
        let policy = OriginPolicy::new(["https://*.vercel.app"]);
        let origin = format!("https://{}.vercel.app", label);
        prop_assert!(policy.allows(&origin));
    }

    #[test]
    fn test_wildcard_does_not_cross_scheme(label in "[a-z0-9]{1,20}") {
        let policy = OriginPolicy::new(["https://*.vercel.app"]);
        let origin = format!("http://{}.vercel.app", label);
        prop_assert!(!policy.allows(&origin));
    }

    #[test]
    fn test_lookalike_domains_rejected(label in "[a-z0-9]{1,20}") {
        let policy = OriginPolicy::new(["https://*.vercel.app"]);
        let suffixed = format!("https://{}.vercel.app.attacker.net", label);
        let prefixed = format!("https://{}vercel.app", label);
        prop_assert!(!policy.allows(&suffixed));
        prop_assert!(!policy.allows(&prefixed));
    }

    #[test]
    fn test_exact_origin_only_matches_itself(port in 1024u16..65535u16) {
        let policy = OriginPolicy::new(["http://localhost:3000"]);
        let origin = format!("http://localhost:{}", port);
        prop_assert_eq!(policy.allows(&origin), port == 3000);
    }
}

#[test]
fn test_trailing_slash_in_configuration_ignored() {
    let policy = OriginPolicy::new(["https://donate.example.com/"]);
    assert!(policy.allows("https://donate.example.com"));
}

#[test]
fn test_empty_policy_allows_nothing() {
    let policy = OriginPolicy::new(Vec::<String>::new());
    assert!(!policy.allows("http://localhost:3000"));
}
