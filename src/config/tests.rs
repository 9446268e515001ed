use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_sargam_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("SARGAM_CONFIG_PATH", "/tmp/sargam-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/sargam-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("sargam")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("sargam")
            .join("config.toml")
    );
}

#[test]
fn defaults_match_the_documented_values() {
    let s = Settings::default();
    assert_eq!(s.api.base_url, "https://saavn.dev");
    assert_eq!(s.api.default_query, "punjabi");
    assert_eq!(s.api.max_results, 20);
    assert_eq!(s.playback.volume, 0.5);
    assert!(!s.playback.looping);
    assert_eq!(s.controls.scrub_seconds, 5);
    assert!(s.storage.dir.is_none());
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[api]
base_url = "https://example.test"
default_query = "lofi"
max_results = 5
timeout_secs = 3

[playback]
volume = 0.8
looping = true

[controls]
scrub_seconds = 9
volume_step = 0.1

[storage]
dir = "/tmp/sargam-data"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SARGAM_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("SARGAM__API__MAX_RESULTS");

    let s = Settings::load().unwrap();
    assert_eq!(s.api.base_url, "https://example.test");
    assert_eq!(s.api.default_query, "lofi");
    assert_eq!(s.api.max_results, 5);
    assert_eq!(s.api.timeout_secs, 3);
    assert_eq!(s.playback.volume, 0.8);
    assert!(s.playback.looping);
    assert_eq!(s.controls.scrub_seconds, 9);
    assert_eq!(s.controls.volume_step, 0.1);
    assert_eq!(s.storage.dir.as_deref(), Some("/tmp/sargam-data"));
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[api]
max_results = 5
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SARGAM_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("SARGAM__API__MAX_RESULTS", "7");

    let s = Settings::load().unwrap();
    assert_eq!(s.api.max_results, 7);
}

#[test]
fn validate_rejects_out_of_range_values() {
    let mut s = Settings::default();
    s.playback.volume = 1.5;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.api.max_results = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.api.base_url = "  ".into();
    assert!(s.validate().is_err());
}
