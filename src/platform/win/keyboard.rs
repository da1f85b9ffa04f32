use std::{
    sync::atomic::{AtomicIsize, Ordering},
    time::Instant,
};

use rust_telex_core::{Key, KeyEvent};
use windows::{
    Win32::{
        Foundation::{LPARAM, LRESULT, WPARAM},
        UI::WindowsAndMessaging::{
            CallNextHookEx, HC_ACTION, HHOOK, KBDLLHOOKSTRUCT, LLKHF_INJECTED, SetWindowsHookExW,
            UnhookWindowsHookEx, WH_KEYBOARD_LL,
        },
    },
    core::Result,
};

use super::{
    inject::{self, PendingOutput, SendInputSink},
    vk,
};
use crate::input::{HookDecision, dispatch_key};

static HOOK_HANDLE: AtomicIsize = AtomicIsize::new(0);

fn call_next(code: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    let h = HOOK_HANDLE.load(Ordering::Relaxed);
    let hook = (h != 0).then_some(HHOOK(h as *mut _));
    unsafe { CallNextHookEx(hook, code, wparam, lparam) }
}

extern "system" fn proc(code: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if code != HC_ACTION.cast_signed() {
        return call_next(code, wparam, lparam);
    }

    let Ok(msg) = u32::try_from(wparam.0) else {
        return call_next(code, wparam, lparam);
    };

    let kb = unsafe { &*(lparam.0 as *const KBDLLHOOKSTRUCT) };
    if kb.flags.contains(LLKHF_INJECTED) {
        return call_next(code, wparam, lparam);
    }

    let down = vk::is_keydown_msg(msg);
    if !down && !vk::is_keyup_msg(msg) {
        return call_next(code, wparam, lparam);
    }

    let remap = vk::remap_key_for_vk(kb.vkCode);
    let key = match (vk::key_for_vk(kb.vkCode), remap) {
        (Some(key), _) => key,
        (None, Some(_)) => Key::Other,
        (None, None) => return call_next(code, wparam, lparam),
    };

    let event = KeyEvent {
        key,
        down,
        modifiers: vk::current_modifiers(),
    };

    let mut pending = PendingOutput::default();
    let outcome =
        super::with_app(|state| dispatch_key(state, &event, remap, Instant::now(), &mut pending));
    let Some((decision, changed)) = outcome else {
        return call_next(code, wparam, lparam);
    };

    // Lock released: injected input re-enters this hook.
    pending.flush(&mut SendInputSink);

    if changed.is_some() {
        super::notify_settings_changed();
    }

    match decision {
        HookDecision::Pass => call_next(code, wparam, lparam),
        HookDecision::Swallow => LRESULT(1),
        HookDecision::Remap(target) => {
            let _ = inject::tap(vk::vk_for_remap(target));
            LRESULT(1)
        }
    }
}

pub(crate) fn install() -> Result<()> {
    if HOOK_HANDLE.load(Ordering::Relaxed) != 0 {
        return Ok(());
    }

    let h = unsafe { SetWindowsHookExW(WH_KEYBOARD_LL, Some(proc), None, 0)? };
    HOOK_HANDLE.store(h.0 as isize, Ordering::Relaxed);
    tracing::info!("WH_KEYBOARD_LL installed");
    Ok(())
}

pub(crate) fn uninstall() {
    let h = HOOK_HANDLE.swap(0, Ordering::Relaxed);
    if h != 0 {
        let _ = unsafe { UnhookWindowsHookEx(HHOOK(h as *mut _)) };
    }
}
