use windows::{
    Win32::{
        Foundation::{HWND, LPARAM, POINT},
        UI::{
            Shell::{
                NIF_ICON, NIF_MESSAGE, NIF_SHOWTIP, NIF_TIP, NIM_ADD, NIM_DELETE, NIM_MODIFY,
                NIM_SETVERSION, NOTIFY_ICON_MESSAGE, NOTIFYICON_VERSION_4, NOTIFYICONDATAW,
                Shell_NotifyIconW,
            },
            WindowsAndMessaging::{
                AppendMenuW, CreatePopupMenu, DestroyMenu, GetCursorPos, HICON, HMENU,
                IDI_APPLICATION, LoadIconW, MF_CHECKED, MF_SEPARATOR, MF_STRING, MF_UNCHECKED,
                SetForegroundWindow, TPM_BOTTOMALIGN, TPM_NOANIMATION, TPM_RETURNCMD,
                TPM_RIGHTALIGN, TPM_RIGHTBUTTON, TrackPopupMenu, WM_APP, WM_CONTEXTMENU,
                WM_LBUTTONUP, WM_RBUTTONUP,
            },
        },
    },
    core::{PCWSTR, Result},
};

use super::helpers::{fill_wide, other_error};
use crate::{app::Toggle, config::Config};

pub const WM_APP_TRAY: u32 = WM_APP + 3;
const TRAY_UID: u32 = 1;
const ID_EXIT: u32 = 1001;
const ID_TOGGLE_BASE: u32 = 1100;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum TrayEvent {
    LeftClick,
    RightClick,
    Other,
}

impl TrayEvent {
    /// With `NOTIFYICON_VERSION_4` the mouse message sits in the low word.
    pub(crate) fn from_lparam(lparam: LPARAM) -> Self {
        match (lparam.0 as u32) & 0xFFFF {
            WM_LBUTTONUP => Self::LeftClick,
            WM_RBUTTONUP | WM_CONTEXTMENU => Self::RightClick,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum TrayCommand {
    Toggle(Toggle),
    Exit,
}

fn tooltip(active: bool) -> &'static str {
    if active {
        "RustTelex - Active"
    } else {
        "RustTelex - Inactive"
    }
}

fn shell_notify(action: NOTIFY_ICON_MESSAGE, nid: &NOTIFYICONDATAW, what: &str) -> Result<()> {
    if unsafe { Shell_NotifyIconW(action, nid).as_bool() } {
        Ok(())
    } else {
        Err(other_error(format!("Shell_NotifyIconW returned FALSE: {what}")))
    }
}

fn base_nid(hwnd: HWND) -> Result<NOTIFYICONDATAW> {
    Ok(NOTIFYICONDATAW {
        cbSize: u32::try_from(core::mem::size_of::<NOTIFYICONDATAW>())?,
        hWnd: hwnd,
        uID: TRAY_UID,
        ..Default::default()
    })
}

fn app_icon() -> Result<HICON> {
    unsafe { LoadIconW(None, IDI_APPLICATION) }
}

fn identity_nid(hwnd: HWND, active: bool) -> Result<NOTIFYICONDATAW> {
    let mut nid = base_nid(hwnd)?;
    nid.uCallbackMessage = WM_APP_TRAY;
    nid.uFlags = NIF_MESSAGE | NIF_ICON | NIF_TIP | NIF_SHOWTIP;
    nid.hIcon = app_icon()?;
    fill_wide(&mut nid.szTip, tooltip(active));
    Ok(nid)
}

pub(crate) fn ensure_icon(hwnd: HWND, active: bool) -> Result<()> {
    let mut nid = identity_nid(hwnd, active)?;

    if !unsafe { Shell_NotifyIconW(NIM_ADD, &raw const nid).as_bool() } {
        shell_notify(NIM_MODIFY, &nid, "ensure_icon: NIM_MODIFY after NIM_ADD failure")?;
    }

    nid.Anonymous.uVersion = NOTIFYICON_VERSION_4;
    shell_notify(NIM_SETVERSION, &nid, "ensure_icon: NIM_SETVERSION")
}

/// Updates the tooltip to the current IME state.
pub(crate) fn set_active(hwnd: HWND, active: bool) -> Result<()> {
    let nid = identity_nid(hwnd, active)?;
    shell_notify(NIM_MODIFY, &nid, "set_active")
}

pub(crate) fn remove_icon(hwnd: HWND) {
    if let Ok(nid) = base_nid(hwnd) {
        let _ = unsafe { Shell_NotifyIconW(NIM_DELETE, &raw const nid) };
    }
}

fn append_item(hmenu: HMENU, id: u32, label: &str, checked: Option<bool>) -> Result<()> {
    let wide: Vec<u16> = label.encode_utf16().chain(std::iter::once(0)).collect();
    let check = match checked {
        Some(true) => MF_CHECKED,
        Some(false) | None => MF_UNCHECKED,
    };

    unsafe { AppendMenuW(hmenu, MF_STRING | check, id as usize, PCWSTR(wide.as_ptr())) }
}

fn build_menu(cfg: &Config) -> Result<HMENU> {
    let hmenu = unsafe { CreatePopupMenu() }?;

    for (i, toggle) in (0u32..).zip(Toggle::ALL) {
        append_item(hmenu, ID_TOGGLE_BASE + i, toggle.label(), Some(toggle.get(cfg)))?;
    }
    unsafe { AppendMenuW(hmenu, MF_SEPARATOR, 0, PCWSTR::null()) }?;
    append_item(hmenu, ID_EXIT, "Exit", None)?;

    Ok(hmenu)
}

fn command_for_id(id: u32) -> Option<TrayCommand> {
    if id == ID_EXIT {
        return Some(TrayCommand::Exit);
    }
    let index = usize::try_from(id.checked_sub(ID_TOGGLE_BASE)?).ok()?;
    Toggle::ALL.get(index).copied().map(TrayCommand::Toggle)
}

fn track_at_cursor(hwnd: HWND, hmenu: HMENU) -> u32 {
    let mut pt = POINT { x: 0, y: 0 };
    let _ = unsafe { GetCursorPos(&raw mut pt) };

    // Without this the menu does not close when the user clicks elsewhere.
    let _ = unsafe { SetForegroundWindow(hwnd) };

    let result = unsafe {
        TrackPopupMenu(
            hmenu,
            TPM_RETURNCMD | TPM_BOTTOMALIGN | TPM_RIGHTALIGN | TPM_NOANIMATION | TPM_RIGHTBUTTON,
            pt.x,
            pt.y,
            Some(0),
            hwnd,
            None,
        )
    };
    result.0 as u32
}

/// Shows the context menu and returns the picked command, if any.
pub(crate) fn show_menu(hwnd: HWND, cfg: &Config) -> Result<Option<TrayCommand>> {
    let hmenu = build_menu(cfg)?;
    let cmd = track_at_cursor(hwnd, hmenu);
    let _ = unsafe { DestroyMenu(hmenu) };
    Ok(command_for_id(cmd))
}
