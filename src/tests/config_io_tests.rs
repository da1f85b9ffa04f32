use std::{
    fs,
    path::PathBuf,
    sync::{Mutex, OnceLock},
    time::{SystemTime, UNIX_EPOCH},
};

use crate::config::{self, Config, HotkeyChord, constants::MOD_ALT};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn lock_env() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("rust-telex-tests-{prefix}-{ts}"))
}

fn restore_appdata(old: Option<std::ffi::OsString>) {
    match old {
        Some(v) => unsafe { std::env::set_var("APPDATA", v) },
        None => unsafe { std::env::remove_var("APPDATA") },
    }
}

fn with_appdata(prefix: &str, f: impl FnOnce(&PathBuf)) {
    let _g = lock_env();

    let old = std::env::var_os("APPDATA");
    let dir = unique_temp_dir(prefix);
    fs::create_dir_all(&dir).unwrap();
    unsafe { std::env::set_var("APPDATA", &dir) };

    f(&dir);

    restore_appdata(old);
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn config_path_lives_under_appdata() {
    with_appdata("path", |dir| {
        let path = config::config_path().unwrap();
        assert!(path.starts_with(dir));
        assert!(path.ends_with("RustTelex/config.toml"));
    });
}

#[test]
fn config_save_and_load_roundtrip_via_appdata() {
    with_appdata("roundtrip", |_| {
        let cfg = Config {
            key_remap_enabled: false,
            double_key_revert_enabled: false,
            buffer_timeout_ms: 1500,
            toggle_hotkey: HotkeyChord {
                mods: MOD_ALT,
                vk: Some(u32::from(b'V')),
            },
            syllable_list: Some(PathBuf::from("syllables.txt")),
            ..Default::default()
        };

        config::save(&cfg).unwrap();
        let loaded = config::load().unwrap();

        assert_eq!(loaded, cfg);
    });
}

#[test]
fn config_load_creates_defaults_when_missing() {
    with_appdata("missing", |_| {
        let loaded = config::load().unwrap();
        assert_eq!(loaded, Config::default());
        assert!(config::config_path().unwrap().exists());
    });
}

#[test]
fn config_load_fills_missing_fields_with_defaults() {
    with_appdata("partial", |_| {
        let path = config::config_path().unwrap();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "ime_enabled = false\n").unwrap();

        let loaded = config::load().unwrap();
        assert!(!loaded.ime_enabled);
        assert!(loaded.key_remap_enabled);
        assert_eq!(loaded.buffer_timeout_ms, 2000);
    });
}

#[test]
fn config_load_rejects_invalid_file() {
    with_appdata("invalid-file", |_| {
        let path = config::config_path().unwrap();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "buffer_timeout_ms = 5\n").unwrap();

        assert!(config::load().is_err());
    });
}

#[test]
fn config_save_rejects_invalid_settings() {
    with_appdata("invalid", |_| {
        let cfg = Config {
            toggle_hotkey: HotkeyChord {
                mods: 0,
                vk: Some(u32::from(b'S')),
            },
            ..Default::default()
        };

        let err = config::save(&cfg).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
        assert!(err.to_string().contains("Ctrl, Alt or Win"));
    });
}
