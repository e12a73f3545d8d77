//! Integration tests for TOML and environment layering.
//!
//! Uses `figment::Jail` for sandboxed working directory and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use sig_config::{LOCAL_CONFIG_FILE, SignalConfig};

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "/var/lib/signals.db"

[server]
host = "0.0.0.0"
port = 9100
allow_any_origin = false

[general]
default_limit = 25
max_limit = 200
"#,
        )?;

        let config: SignalConfig = Figment::from(Serialized::defaults(SignalConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "/var/lib/signals.db");
        assert_eq!(config.server.bind_addr(), "0.0.0.0:9100");
        assert!(!config.server.allow_any_origin);
        assert_eq!(config.general.default_limit, 25);
        assert_eq!(config.general.max_limit, 200);
        Ok(())
    });
}

#[test]
fn local_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_file(
            LOCAL_CONFIG_FILE,
            r#"
[server]
port = 8088
"#,
        )?;

        let config = SignalConfig::load().expect("config loads");
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.server.host, "127.0.0.1");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            LOCAL_CONFIG_FILE,
            r#"
[database]
path = "from_toml.db"
"#,
        )?;
        jail.set_env("SIGNAL_DATABASE__PATH", "from_env.db");
        jail.set_env("SIGNAL_GENERAL__DEFAULT_LIMIT", "10");

        let config = SignalConfig::load().expect("config loads");
        assert_eq!(config.database.path, "from_env.db");
        assert_eq!(config.general.default_limit, 10);
        Ok(())
    });
}

#[test]
fn invalid_value_from_env_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("SIGNAL_SERVER__PORT", "0");
        let result = SignalConfig::load();
        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn defaults_without_any_source() {
    Jail::expect_with(|_jail| {
        let config = SignalConfig::load().expect("config loads");
        assert_eq!(config.database.path, "signal_equipment.db");
        assert_eq!(config.server.port, 8000);
        Ok(())
    });
}
