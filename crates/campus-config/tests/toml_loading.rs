//! Integration tests for layered configuration loading.
//!
//! Uses `figment::Jail` for sandboxed cwd and env var manipulation.

use campus_config::CampusConfig;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

/// Point the user-global config lookup at the jail so the host config never leaks in.
fn isolate_user_config(jail: &mut Jail) {
    let dir = jail.directory().join("xdg");
    jail.set_env("XDG_CONFIG_HOME", dir.display());
}

#[test]
fn loads_api_section_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://catalog.example.com/api"
items_path = "/colleges"
timeout_secs = 3
"#,
        )?;

        let config: CampusConfig = Figment::from(Serialized::defaults(CampusConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://catalog.example.com/api");
        assert_eq!(
            config.api.endpoint_url(),
            "https://catalog.example.com/api/colleges"
        );
        assert_eq!(config.api.timeout_secs, 3);
        assert!(config.api.user_agent.starts_with("campus/"));
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        std::fs::create_dir_all(jail.directory().join(".campus")).expect("create .campus");
        jail.create_file(
            ".campus/config.toml",
            r#"
[general]
default_view = "international"
state_dir = "/var/lib/campus"
"#,
        )?;

        let config = CampusConfig::load().expect("config loads");
        assert_eq!(config.general.default_view, "international");
        assert_eq!(config.general.state_dir, "/var/lib/campus");
        assert_eq!(config.api.items_path, "/items/getItem");
        Ok(())
    });
}

#[test]
fn env_overrides_project_file() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        std::fs::create_dir_all(jail.directory().join(".campus")).expect("create .campus");
        jail.create_file(
            ".campus/config.toml",
            r#"
[api]
base_url = "https://from-file.example.com"
timeout_secs = 9
"#,
        )?;
        jail.set_env("CAMPUS_API__BASE_URL", "https://from-env.example.com");

        let config = CampusConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "https://from-env.example.com");
        assert_eq!(config.api.timeout_secs, 9);
        Ok(())
    });
}

#[test]
fn user_global_file_is_lowest_file_layer() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        std::fs::create_dir_all(jail.directory().join("xdg/campus")).expect("create xdg dir");
        jail.create_file(
            "xdg/campus/config.toml",
            r#"
[api]
base_url = "https://global.example.com"
timeout_secs = 7
"#,
        )?;
        std::fs::create_dir_all(jail.directory().join(".campus")).expect("create .campus");
        jail.create_file(
            ".campus/config.toml",
            r#"
[api]
timeout_secs = 2
"#,
        )?;

        let config = CampusConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "https://global.example.com");
        assert_eq!(config.api.timeout_secs, 2);
        Ok(())
    });
}

#[test]
fn invalid_values_fail_load() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("CAMPUS_API__TIMEOUT_SECS", "0");

        let err = CampusConfig::load().unwrap_err();
        assert!(err.to_string().contains("api.timeout_secs"));
        Ok(())
    });
}

#[test]
fn malformed_env_value_is_a_figment_error() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("CAMPUS_API__TIMEOUT_SECS", "soon");

        let err = CampusConfig::load().unwrap_err();
        assert!(matches!(err, campus_config::ConfigError::Figment(_)));
        Ok(())
    });
}
