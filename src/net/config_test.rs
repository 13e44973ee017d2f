use super::*;

#[test]
fn parse_base_url_trims_trailing_slashes() {
    assert_eq!(parse_base_url(Some("http://api.test:9000/")), "http://api.test:9000");
    assert_eq!(parse_base_url(Some("http://api.test//")), "http://api.test");
    assert_eq!(parse_base_url(Some("  http://api.test  ")), "http://api.test");
}

#[test]
fn parse_base_url_falls_back_to_default() {
    assert_eq!(parse_base_url(None), DEFAULT_API_BASE_URL);
    assert_eq!(parse_base_url(Some("")), DEFAULT_API_BASE_URL);
    assert_eq!(parse_base_url(Some("   ")), DEFAULT_API_BASE_URL);
}

#[test]
fn parse_bool_accepts_common_spellings() {
    for val in ["1", "true", "yes", "on", "TRUE", "On", "  yes  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
    for val in ["0", "false", "no", "off", "FALSE", "Off"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_rejects_anything_else() {
    assert_eq!(parse_bool(""), None);
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool("2"), None);
}

#[test]
fn default_targets_local_backend_with_credentials() {
    let cfg = ApiConfig::default();
    assert!(cfg.include_credentials);
    if option_env!("SOCIAL_NET_API_URL").is_none() {
        assert_eq!(cfg.base_url, "http://localhost:8080");
        assert_eq!(cfg.info_url(), "http://localhost:8080/api/info");
    }
}

#[test]
fn builders_override_fields() {
    let cfg = ApiConfig::default()
        .with_base_url("http://127.0.0.1:4000/")
        .with_credentials(false);
    assert_eq!(cfg.base_url, "http://127.0.0.1:4000");
    assert!(!cfg.include_credentials);
    assert_eq!(cfg.info_url(), "http://127.0.0.1:4000/api/info");
}

// The only test that touches process env, so no other test races it.
#[test]
fn from_env_applies_overrides_and_ignores_invalid_values() {
    unsafe {
        std::env::set_var(API_URL_ENV, "https://social.example/");
        std::env::set_var(INCLUDE_CREDENTIALS_ENV, "off");
    }
    let cfg = ApiConfig::from_env();
    assert_eq!(cfg.base_url, "https://social.example");
    assert!(!cfg.include_credentials);

    unsafe { std::env::set_var(INCLUDE_CREDENTIALS_ENV, "sometimes") };
    assert!(ApiConfig::from_env().include_credentials);

    unsafe {
        std::env::remove_var(API_URL_ENV);
        std::env::remove_var(INCLUDE_CREDENTIALS_ENV);
    }
    assert_eq!(ApiConfig::from_env(), ApiConfig::default());
}
