//! Synthetic keyboard input via `SendInput`.
//!
//! Everything sent here carries `LLKHF_INJECTED` when it passes through our
//! own hook, which lets it through untouched.

use rust_telex_core::OutputSink;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    INPUT, INPUT_0, INPUT_KEYBOARD, KEYBD_EVENT_FLAGS, KEYBDINPUT, KEYEVENTF_KEYUP,
    KEYEVENTF_UNICODE, SendInput, VIRTUAL_KEY, VK_BACK,
};

fn input_struct_size_i32() -> Option<i32> {
    i32::try_from(std::mem::size_of::<INPUT>()).ok()
}

fn keyboard_input(vk: VIRTUAL_KEY, scan: u16, flags: KEYBD_EVENT_FLAGS) -> INPUT {
    INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: vk,
                wScan: scan,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}

fn send(inputs: &[INPUT]) -> bool {
    if inputs.is_empty() {
        return true;
    }
    let Some(input_size) = input_struct_size_i32() else {
        return false;
    };

    let sent = unsafe { SendInput(inputs, input_size) } as usize;
    if sent != inputs.len() {
        tracing::warn!(sent, expected = inputs.len(), "SendInput dropped events");
        return false;
    }
    true
}

/// Presses and releases `vk`.
pub(crate) fn tap(vk: VIRTUAL_KEY) -> bool {
    send(&[
        keyboard_input(vk, 0, KEYBD_EVENT_FLAGS::default()),
        keyboard_input(vk, 0, KEYEVENTF_KEYUP),
    ])
}

pub(crate) fn send_backspaces(count: usize) -> bool {
    let inputs: Vec<INPUT> = (0..count)
        .flat_map(|_| {
            [
                keyboard_input(VK_BACK, 0, KEYBD_EVENT_FLAGS::default()),
                keyboard_input(VK_BACK, 0, KEYEVENTF_KEYUP),
            ]
        })
        .collect();
    send(&inputs)
}

/// Types `text` as `KEYEVENTF_UNICODE` events, one down/up pair per UTF-16 unit.
pub(crate) fn send_text_unicode(text: &str) -> bool {
    let inputs: Vec<INPUT> = text
        .encode_utf16()
        .flat_map(|unit| {
            [
                keyboard_input(VIRTUAL_KEY(0), unit, KEYEVENTF_UNICODE),
                keyboard_input(VIRTUAL_KEY(0), unit, KEYEVENTF_UNICODE | KEYEVENTF_KEYUP),
            ]
        })
        .collect();
    send(&inputs)
}

/// Sink writing straight into the foreground application.
pub(crate) struct SendInputSink;

impl OutputSink for SendInputSink {
    fn send_backspaces(&mut self, count: usize) {
        let _ = send_backspaces(count);
    }

    fn send_text(&mut self, text: &str) {
        let _ = send_text_unicode(text);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Op {
    Backspaces(usize),
    Text(String),
}

/// Output collected while the state lock is held, flushed after release.
#[derive(Debug, Default)]
pub(crate) struct PendingOutput {
    ops: Vec<Op>,
}

impl PendingOutput {
    pub(crate) fn flush<S: OutputSink + ?Sized>(self, sink: &mut S) {
        for op in self.ops {
            match op {
                Op::Backspaces(n) => sink.send_backspaces(n),
                Op::Text(text) => sink.send_text(&text),
            }
        }
    }
}

impl OutputSink for PendingOutput {
    fn send_backspaces(&mut self, count: usize) {
        self.ops.push(Op::Backspaces(count));
    }

    fn send_text(&mut self, text: &str) {
        self.ops.push(Op::Text(text.to_string()));
    }
}
