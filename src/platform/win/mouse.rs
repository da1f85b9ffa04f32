use std::sync::atomic::{AtomicIsize, Ordering};

use windows::Win32::{
    Foundation::{LPARAM, LRESULT, WPARAM},
    UI::WindowsAndMessaging::{
        CallNextHookEx, HC_ACTION, HHOOK, SetWindowsHookExW, UnhookWindowsHookEx, WH_MOUSE_LL,
        WM_LBUTTONDBLCLK, WM_LBUTTONDOWN, WM_MBUTTONDBLCLK, WM_MBUTTONDOWN, WM_MOUSEHWHEEL,
        WM_MOUSEWHEEL, WM_RBUTTONDBLCLK, WM_RBUTTONDOWN,
    },
};

use crate::app::AppState;

static HOOK_HANDLE: AtomicIsize = AtomicIsize::new(0);

extern "system" fn proc(code: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    let msg = u32::try_from(wparam.0);

    // Clicks and scrolling may move the caret away from the pending syllable.
    let moves_caret = matches!(
        msg,
        Ok(WM_LBUTTONDOWN
            | WM_LBUTTONDBLCLK
            | WM_RBUTTONDOWN
            | WM_RBUTTONDBLCLK
            | WM_MBUTTONDOWN
            | WM_MBUTTONDBLCLK
            | WM_MOUSEWHEEL
            | WM_MOUSEHWHEEL)
    );

    if code == HC_ACTION.cast_signed() && moves_caret {
        let _ = super::with_app(AppState::on_pointer);
    }

    let h = HOOK_HANDLE.load(Ordering::Relaxed);
    let hook = (h != 0).then_some(HHOOK(h as *mut _));
    unsafe { CallNextHookEx(hook, code, wparam, lparam) }
}

/// Not fatal when it fails: the session still resets on keys and timeout.
pub(crate) fn install() {
    if HOOK_HANDLE.load(Ordering::Relaxed) != 0 {
        return;
    }

    match unsafe { SetWindowsHookExW(WH_MOUSE_LL, Some(proc), None, 0) } {
        Ok(h) => {
            HOOK_HANDLE.store(h.0 as isize, Ordering::Relaxed);
            tracing::info!("WH_MOUSE_LL installed");
        }
        Err(e) => tracing::warn!(error = ?e, "WH_MOUSE_LL install failed"),
    }
}

pub(crate) fn uninstall() {
    let h = HOOK_HANDLE.swap(0, Ordering::Relaxed);
    if h != 0 {
        let _ = unsafe { UnhookWindowsHookEx(HHOOK(h as *mut _)) };
    }
}
