#[cfg(test)]
mod tests {
    use std::io::Write;
    use tempfile::NamedTempFile;
    use secrecy::ExposeSecret;
    use crate::config::parser::{load_config, parse_config, ConfigError};
    use crate::config::DashboardConfigBuilder;

    // Helper function to create a temporary file with content
    fn create_temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes()).expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_valid_configuration() {
        let config_yaml = r#"
        api:
          endpoint: https://graphql.example.com/
          api_key_env: BLOCKDASH_TEST_KEY_VALID
          timeout_secs: 15
        network: litecoin
        blocks:
          page_size: 25
        stats:
          window_days: 14
          date_format: "%Y/%m/%d"
        explorer:
          latest_limit: 5
        "#;

        std::env::set_var("BLOCKDASH_TEST_KEY_VALID", "secret-key");

        let temp_file = create_temp_file(config_yaml);
        let config = load_config(temp_file.path()).expect("Failed to load valid config");

        assert_eq!(config.api.endpoint, "https://graphql.example.com/");
        assert_eq!(config.api.timeout_secs, 15);
        assert_eq!(config.network, "litecoin");
        assert_eq!(config.blocks.page_size, 25);
        assert_eq!(config.stats.window_days, 14);
        assert_eq!(config.stats.date_format, "%Y/%m/%d");
        assert_eq!(config.explorer.latest_limit, 5);
        assert_eq!(
            config.api.api_key.as_ref().map(|k| k.expose_secret().to_string()),
            Some("secret-key".to_string())
        );
    }

    #[test]
    fn test_empty_configuration_uses_defaults() {
        let config = parse_config("").expect("Empty config should use defaults");

        assert_eq!(config.api.endpoint, "https://graphql.bitquery.io/");
        assert_eq!(config.api.api_key_env, "BITQUERY_API_KEY");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.network, "bitcoin");
        assert_eq!(config.blocks.page_size, 10);
        assert_eq!(config.stats.window_days, 7);
        assert_eq!(config.stats.date_format, "%Y-%m-%d");
        assert_eq!(config.explorer.latest_limit, 10);
    }

    #[test]
    fn test_partial_configuration() {
        let config_yaml = r#"
        stats:
          window_days: 30
        "#;

        let config = parse_config(config_yaml).expect("Failed to parse partial config");
        assert_eq!(config.stats.window_days, 30);
        assert_eq!(config.stats.date_format, "%Y-%m-%d");
        assert_eq!(config.blocks.page_size, 10);
    }

    #[test]
    fn test_missing_api_key_is_not_an_error() {
        let config_yaml = r#"
        api:
          api_key_env: BLOCKDASH_TEST_KEY_SURELY_UNSET
        "#;

        let config = parse_config(config_yaml).expect("Missing key must not fail locally");
        assert!(config.api.api_key.is_none());
    }

    #[test]
    fn test_blank_api_key_is_treated_as_missing() {
        std::env::set_var("BLOCKDASH_TEST_KEY_BLANK", "   ");
        let config_yaml = r#"
        api:
          api_key_env: BLOCKDASH_TEST_KEY_BLANK
        "#;

        let config = parse_config(config_yaml).expect("Failed to parse config");
        assert!(config.api.api_key.is_none());
    }

    #[test]
    fn test_invalid_url() {
        let config_yaml = r#"
        api:
          endpoint: not-a-valid-url
        "#;

        let result = parse_config(config_yaml);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_unsupported_network() {
        let config_yaml = r#"
        network: ethereum
        "#;

        let result = parse_config(config_yaml);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_out_of_range_values() {
        for config_yaml in [
            "api:\n  timeout_secs: 0\n",
            "blocks:\n  page_size: 0\n",
            "blocks:\n  page_size: 1000\n",
            "stats:\n  window_days: 0\n",
            "explorer:\n  latest_limit: 0\n",
        ] {
            let result = parse_config(config_yaml);
            assert!(
                matches!(result, Err(ConfigError::ValidationError(_))),
                "expected validation error for {config_yaml:?}"
            );
        }
    }

    #[test]
    fn test_malformed_yaml() {
        let result = parse_config("blocks: [unclosed");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_wrong_type() {
        let config_yaml = r#"
        blocks:
          page_size: ten
        "#;

        let result = parse_config(config_yaml);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_config("/nonexistent/blockdash/config.yaml");
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_builder_overrides() {
        let config = DashboardConfigBuilder::new()
            .with_endpoint("http://localhost:1234/")
            .with_api_key("abc")
            .with_network("dogecoin")
            .with_page_size(3)
            .with_window_days(2)
            .with_latest_limit(4)
            .with_timeout_secs(5)
            .build();

        assert_eq!(config.api.endpoint, "http://localhost:1234/");
        assert_eq!(config.network, "dogecoin");
        assert_eq!(config.blocks.page_size, 3);
        assert_eq!(config.stats.window_days, 2);
        assert_eq!(config.explorer.latest_limit, 4);
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(
            config.api.api_key.as_ref().map(|k| k.expose_secret().to_string()),
            Some("abc".to_string())
        );
    }
}
