use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_cms_env() {
    unsafe {
        std::env::remove_var("CMS_PROVIDER");
        std::env::remove_var("CMS_BASE_URL");
        std::env::remove_var("CMS_API_KEY_ENV");
        std::env::remove_var("CMS_FIXTURE_DIR");
        std::env::remove_var("CMS_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("CMS_CONNECT_TIMEOUT_SECS");
        std::env::remove_var("TEST_CMS_KEY");
    }
}

// Env-mutating cases share one test so they never race each other.
#[test]
fn from_env_cases() {
    // Defaults to http, which needs a base URL.
    unsafe { clear_cms_env() };
    let err = CmsConfig::from_env().unwrap_err();
    assert!(matches!(&err, CmsError::MissingConfig { var } if var == "CMS_BASE_URL"));

    // Http with defaults.
    unsafe {
        clear_cms_env();
        std::env::set_var("CMS_BASE_URL", "https://cms.example.test/v1/");
    }
    let cfg = CmsConfig::from_env().unwrap();
    assert_eq!(cfg.provider(), CmsProviderKind::Http);
    assert_eq!(
        cfg.source,
        CmsSourceConfig::Http {
            base_url: "https://cms.example.test/v1".into(),
            api_key: None,
            timeouts: CmsTimeouts {
                request_secs: DEFAULT_CMS_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_CMS_CONNECT_TIMEOUT_SECS,
            },
        }
    );

    // Http with key and timeout overrides.
    unsafe {
        clear_cms_env();
        std::env::set_var("CMS_BASE_URL", "https://cms.example.test");
        std::env::set_var("CMS_API_KEY_ENV", "TEST_CMS_KEY");
        std::env::set_var("TEST_CMS_KEY", "token-123");
        std::env::set_var("CMS_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("CMS_CONNECT_TIMEOUT_SECS", "7");
    }
    let cfg = CmsConfig::from_env().unwrap();
    assert_eq!(
        cfg.source,
        CmsSourceConfig::Http {
            base_url: "https://cms.example.test".into(),
            api_key: Some("token-123".into()),
            timeouts: CmsTimeouts { request_secs: 42, connect_secs: 7 },
        }
    );

    // Key variable naming an unset var.
    unsafe {
        clear_cms_env();
        std::env::set_var("CMS_BASE_URL", "https://cms.example.test");
        std::env::set_var("CMS_API_KEY_ENV", "TEST_CMS_KEY");
    }
    let err = CmsConfig::from_env().unwrap_err();
    assert!(matches!(&err, CmsError::MissingConfig { var } if var == "TEST_CMS_KEY"));

    // Garbage or zero timeouts fall back to defaults.
    unsafe {
        clear_cms_env();
        std::env::set_var("CMS_BASE_URL", "https://cms.example.test");
        std::env::set_var("CMS_REQUEST_TIMEOUT_SECS", "soon");
        std::env::set_var("CMS_CONNECT_TIMEOUT_SECS", "0");
    }
    let cfg = CmsConfig::from_env().unwrap();
    assert!(matches!(
        cfg.source,
        CmsSourceConfig::Http {
            timeouts: CmsTimeouts {
                request_secs: DEFAULT_CMS_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_CMS_CONNECT_TIMEOUT_SECS,
            },
            ..
        }
    ));

    // Fixture provider with default and explicit dirs.
    unsafe {
        clear_cms_env();
        std::env::set_var("CMS_PROVIDER", "fixture");
    }
    let cfg = CmsConfig::from_env().unwrap();
    assert_eq!(cfg.provider(), CmsProviderKind::Fixture);
    assert_eq!(cfg.source, CmsSourceConfig::Fixture { dir: PathBuf::from(DEFAULT_FIXTURE_DIR) });

    unsafe { std::env::set_var("CMS_FIXTURE_DIR", "/srv/content") };
    let cfg = CmsConfig::from_env().unwrap();
    assert_eq!(cfg.source, CmsSourceConfig::Fixture { dir: PathBuf::from("/srv/content") });

    // Unknown provider.
    unsafe {
        clear_cms_env();
        std::env::set_var("CMS_PROVIDER", "wix");
    }
    let err = CmsConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("unknown CMS_PROVIDER"));

    unsafe { clear_cms_env() };
}

#[test]
fn parse_provider_defaults_to_http() {
    assert_eq!(parse_provider(None).unwrap(), CmsProviderKind::Http);
    assert_eq!(parse_provider(Some("fixture")).unwrap(), CmsProviderKind::Fixture);
    assert!(parse_provider(Some("HTTP")).is_err());
}
