//! Configuration loading integration tests
//!
//! YAML files are written to temporary directories; the environment is
//! injected as a lookup closure so tests never touch process state.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use brofit_gateway::config::{Config, ProviderType};
    use brofit_gateway::utils::error::GatewayError;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    fn write_config(dir: &tempfile::TempDir, yaml: &str) -> PathBuf {
        let path = dir.path().join("gateway.yaml");
        std::fs::write(&path, yaml).unwrap();
        path
    }

    // ==================== Loading ====================

    #[tokio::test]
    async fn test_example_config_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/gateway.yaml.example");
        let config = Config::load_with_env(path, |_| None).await.unwrap();

        assert_eq!(config.server().port, 8000);
        assert_eq!(config.providers().len(), 2);
        assert_eq!(config.pipeline().diet.candidates.len(), 3);
        assert_eq!(config.rate_limit().ai.max_requests, 5);
        assert_eq!(config.rate_limit().contact.window_secs, 3600);
        assert!(!config.auth().login_enabled());
    }

    #[tokio::test]
    async fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_with_env(dir.path().join("absent.yaml"), |_| None)
            .await
            .unwrap();

        assert_eq!(config.server().port, 8000);
        assert_eq!(config.providers()[0].provider_type, ProviderType::Gemini);
        assert_eq!(config.pipeline().chat.candidates[0].model, "gemini-2.0-flash");
    }

    #[tokio::test]
    async fn test_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "server:\n  port: 8080\nrate_limit:\n  ai: { max_requests: 10, window_secs: 60 }\n",
        );

        let config = Config::load_with_env(
            &path,
            env(&[("PORT", "9090"), ("ALLOWED_ORIGINS", "https://brothersfitness.in")]),
        )
        .await
        .unwrap();

        assert_eq!(config.server().port, 9090);
        assert_eq!(config.server().cors.allowed_origins, vec!["https://brothersfitness.in"]);
        assert_eq!(config.rate_limit().ai.max_requests, 10);
    }

    #[tokio::test]
    async fn test_candidates_sorted_by_priority() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"
pipeline:
  chat:
    candidates:
      - { provider: openai, model: gpt-4o-mini, priority: 2 }
      - { provider: gemini, model: gemini-2.0-flash, priority: 1 }
      - { provider: gemini, model: gemini-1.5-flash, priority: 1 }
"#,
        );

        let config = Config::load_with_env(&path, |_| None).await.unwrap();
        let models: Vec<&str> = config
            .pipeline()
            .chat
            .candidates
            .iter()
            .map(|c| c.model.as_str())
            .collect();
        assert_eq!(models, vec!["gemini-2.0-flash", "gemini-1.5-flash", "gpt-4o-mini"]);
    }

    // ==================== Rejection ====================

    #[tokio::test]
    async fn test_invalid_yaml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "server: [not, a, map");
        let err = Config::load_with_env(&path, |_| None).await.unwrap_err();
        assert!(matches!(err, GatewayError::Config(_)));
    }

    #[tokio::test]
    async fn test_zero_quota_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "rate_limit:\n  contact: { max_requests: 0, window_secs: 60 }\n");
        match Config::load_with_env(&path, |_| None).await {
            Err(GatewayError::Config(message)) => assert!(message.contains("rate_limit.contact")),
            other => panic!("Expected config error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_short_jwt_secret_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_with_env(dir.path().join("absent.yaml"), env(&[("JWT_SECRET", "short")]))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("JWT secret"));
    }

    #[tokio::test]
    async fn test_plaintext_admin_password_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_with_env(
            dir.path().join("absent.yaml"),
            env(&[("ADMIN_PASSWORD_HASH", "hunter2")]),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("Argon2"));
    }

    #[test]
    fn test_yaml_dump_skips_secrets() {
        let mut config = Config::default();
        config.gateway.auth.jwt_secret = "s".repeat(40);
        config.gateway.providers[0].api_key = Some("AIza-secret".to_string());

        let yaml = config.to_yaml().unwrap();
        assert!(!yaml.contains("AIza-secret"));
        assert!(!yaml.contains(&"s".repeat(40)));
    }
}
