//! Virtual key translation between the hook and the engine's key model.

use rust_telex_core::{Key, Modifiers};
use windows::Win32::UI::{
    Input::KeyboardAndMouse::{
        GetAsyncKeyState, GetKeyState, VIRTUAL_KEY, VK_CAPITAL, VK_CONTROL, VK_LWIN, VK_MENU,
        VK_OEM_3, VK_RWIN, VK_SHIFT, VK_TAB,
    },
    WindowsAndMessaging::{WM_KEYDOWN, WM_KEYUP, WM_SYSKEYDOWN, WM_SYSKEYUP},
};

use crate::input::RemapKey;

pub(crate) fn is_keydown_msg(msg: u32) -> bool {
    msg == WM_KEYDOWN || msg == WM_SYSKEYDOWN
}

pub(crate) fn is_keyup_msg(msg: u32) -> bool {
    msg == WM_KEYUP || msg == WM_SYSKEYUP
}

/// Engine key for `vk`. `None` for keys that only change modifier state.
pub(crate) fn key_for_vk(vk: u32) -> Option<Key> {
    let key = match vk {
        0x41..=0x5A => {
            let ch = u8::try_from(vk).map_or('\0', char::from);
            Key::letter(ch)
        }
        0x08 => Key::Backspace,
        0x1B => Key::Escape,
        0x20 => Key::Space,
        0x0D => Key::Enter,
        0x21 => Key::PageUp,
        0x22 => Key::PageDown,
        0x23 => Key::End,
        0x24 => Key::Home,
        0x25 => Key::Left,
        0x26 => Key::Up,
        0x27 => Key::Right,
        0x28 => Key::Down,
        // Shift, Ctrl, Alt (generic and sided), Win, CapsLock.
        0x10..=0x12 | 0xA0..=0xA5 | 0x5B | 0x5C | 0x14 => return None,
        _ => Key::Other,
    };
    Some(key)
}

pub(crate) fn remap_key_for_vk(vk: u32) -> Option<RemapKey> {
    match vk {
        x if x == u32::from(VK_OEM_3.0) => Some(RemapKey::Grave),
        x if x == u32::from(VK_CAPITAL.0) => Some(RemapKey::CapsLock),
        x if x == u32::from(VK_TAB.0) => Some(RemapKey::Tab),
        _ => None,
    }
}

pub(crate) const fn vk_for_remap(key: RemapKey) -> VIRTUAL_KEY {
    match key {
        RemapKey::Grave => VK_OEM_3,
        RemapKey::CapsLock => VK_CAPITAL,
        RemapKey::Tab => VK_TAB,
    }
}

fn held(vk: VIRTUAL_KEY) -> bool {
    unsafe { GetAsyncKeyState(i32::from(vk.0)) } < 0
}

/// Modifier state at the moment the hook runs.
pub(crate) fn current_modifiers() -> Modifiers {
    let caps_lock = unsafe { GetKeyState(i32::from(VK_CAPITAL.0)) } & 1 != 0;

    Modifiers {
        shift: held(VK_SHIFT),
        caps_lock,
        ctrl: held(VK_CONTROL),
        alt: held(VK_MENU),
        meta: held(VK_LWIN) || held(VK_RWIN),
    }
}
