//! Windows shell: a hidden window that owns the tray icon and the message
//! loop, plus the low level hooks feeding [`crate::input::dispatch_key`].
//!
//! Hooks and the window procedure share one [`AppState`] behind a mutex.
//! Nothing that can re-enter a hook (input injection, shell calls, disk I/O)
//! runs while that lock is held.

mod autostart;
pub mod helpers;
mod inject;
mod keyboard;
mod mouse;
mod tray;
mod vk;
mod window;

use std::sync::{
    Mutex, OnceLock,
    atomic::{AtomicIsize, Ordering},
};

use windows::{
    Win32::{
        Foundation::{HWND, LPARAM, LRESULT, WPARAM},
        System::LibraryLoader::GetModuleHandleW,
        UI::WindowsAndMessaging::{
            DefWindowProcW, DestroyWindow, PostMessageW, PostQuitMessage, WM_APP, WM_DESTROY,
        },
    },
    core::{PCWSTR, Result, w},
};

use self::tray::{TrayCommand, TrayEvent, WM_APP_TRAY};
use crate::{
    app::{AppState, Toggle},
    config::{self, Config},
};

/// Posted by the keyboard hook after it changed the settings.
const WM_APP_SETTINGS_CHANGED: u32 = WM_APP + 1;

static APP: OnceLock<Mutex<AppState>> = OnceLock::new();
static MAIN_HWND: AtomicIsize = AtomicIsize::new(0);

/// Runs `f` on the shared state. `None` before startup or after a panic
/// poisoned the lock.
fn with_app<R>(f: impl FnOnce(&mut AppState) -> R) -> Option<R> {
    let cell = APP.get()?;
    match cell.lock() {
        Ok(mut state) => Some(f(&mut state)),
        Err(_) => {
            tracing::warn!("app state lock poisoned");
            None
        }
    }
}

fn main_hwnd() -> Option<HWND> {
    let raw = MAIN_HWND.load(Ordering::Relaxed);
    (raw != 0).then_some(HWND(raw as *mut _))
}

/// Asks the window thread to persist the current settings.
fn notify_settings_changed() {
    let Some(hwnd) = main_hwnd() else {
        return;
    };
    let _ = unsafe { PostMessageW(Some(hwnd), WM_APP_SETTINGS_CHANGED, WPARAM(0), LPARAM(0)) };
}

fn load_config_or_default() -> Config {
    config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load config, using defaults");
        Config::default()
    })
}

fn persist(cfg: &Config) {
    if let Err(e) = config::save(cfg) {
        tracing::warn!(error = %e, "failed to save config");
    }
}

fn sync_autostart(enabled: bool) -> bool {
    match autostart::apply_startup_shortcut(enabled) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = ?e, enabled, "failed to update autostart shortcut");
            false
        }
    }
}

fn refresh_tray(hwnd: HWND) {
    let active = with_app(|state| state.ime_enabled()).unwrap_or(false);
    if let Err(e) = tray::set_active(hwnd, active) {
        tracing::warn!(error = ?e, "tray update failed");
    }
}

fn apply_toggle(hwnd: HWND, toggle: Toggle) {
    let Some(mut cfg) = with_app(|state| state.toggle(toggle)) else {
        return;
    };

    if toggle == Toggle::StartWithWindows && !sync_autostart(cfg.start_with_windows) {
        // Keep the setting in line with what is actually on disk.
        if let Some(reverted) = with_app(|state| state.toggle(toggle)) {
            cfg = reverted;
        }
    }

    persist(&cfg);
    refresh_tray(hwnd);
}

fn on_tray(hwnd: HWND, lparam: LPARAM) -> LRESULT {
    match TrayEvent::from_lparam(lparam) {
        TrayEvent::LeftClick => apply_toggle(hwnd, Toggle::Ime),
        TrayEvent::RightClick => {
            let Some(cfg) = with_app(|state| state.config().clone()) else {
                return LRESULT(0);
            };
            match tray::show_menu(hwnd, &cfg) {
                Ok(Some(TrayCommand::Toggle(toggle))) => apply_toggle(hwnd, toggle),
                Ok(Some(TrayCommand::Exit)) => {
                    let _ = unsafe { DestroyWindow(hwnd) };
                }
                Ok(None) => {}
                Err(e) => tracing::warn!(error = ?e, "tray menu failed"),
            }
        }
        TrayEvent::Other => {}
    }
    LRESULT(0)
}

fn on_settings_changed(hwnd: HWND) -> LRESULT {
    if let Some(cfg) = with_app(|state| state.config().clone()) {
        persist(&cfg);
    }
    refresh_tray(hwnd);
    LRESULT(0)
}

extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    match msg {
        WM_APP_TRAY => on_tray(hwnd, lparam),
        WM_APP_SETTINGS_CHANGED => on_settings_changed(hwnd),
        WM_DESTROY => {
            tray::remove_icon(hwnd);
            unsafe { PostQuitMessage(0) };
            LRESULT(0)
        }
        _ => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
    }
}

/// Loads settings, installs the hooks and the tray icon, then pumps messages
/// until the user picks Exit.
pub fn run() -> Result<()> {
    let cfg = load_config_or_default();
    let start_with_windows = cfg.start_with_windows;
    let ime_enabled = cfg.ime_enabled;

    if APP.set(Mutex::new(AppState::new(cfg))).is_err() {
        tracing::warn!("app state already initialized");
    }

    let class_name = w!("RustTelexHiddenWindow");
    let hinstance = unsafe { GetModuleHandleW(PCWSTR::null())? }.into();

    window::register_class(class_name, hinstance, Some(wndproc))?;
    let hwnd = window::create_hidden_window(class_name, hinstance)?;
    MAIN_HWND.store(hwnd.0 as isize, Ordering::Relaxed);

    keyboard::install()?;
    mouse::install();

    if let Err(e) = tray::ensure_icon(hwnd, ime_enabled) {
        tracing::warn!(error = ?e, "tray ensure_icon failed");
    }

    sync_autostart(start_with_windows);

    tracing::info!(ime_enabled, "rust-telex started");
    let result = window::message_loop();

    keyboard::uninstall();
    mouse::uninstall();
    MAIN_HWND.store(0, Ordering::Relaxed);

    result
}
