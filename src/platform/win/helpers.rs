use std::{ffi::OsStr, os::windows::ffi::OsStrExt};

use windows::{
    Win32::{
        Foundation::{CloseHandle, ERROR_ALREADY_EXISTS, GetLastError, HANDLE},
        System::Threading::CreateMutexW,
    },
    core::{Error, HRESULT, Result, w},
};

/// Retrieve the last OS error as a `windows::core::Error`.
pub fn last_error() -> Error {
    Error::from_hresult(HRESULT::from_win32(unsafe { GetLastError() }.0))
}

/// Wraps a non Win32 failure so it can travel through `windows::core::Result`.
pub fn other_error(message: impl Into<String>) -> Error {
    let message: String = message.into();
    Error::new(HRESULT(0x8000_4005_u32.cast_signed()), message)
}

/// Holds the named mutex that marks a running instance.
pub struct SingleInstanceGuard(HANDLE);

impl Drop for SingleInstanceGuard {
    fn drop(&mut self) {
        let _ = unsafe { CloseHandle(self.0) };
    }
}

/// Claims the single instance mutex. `None` when another instance owns it.
pub fn single_instance_guard() -> Result<Option<SingleInstanceGuard>> {
    let h = unsafe { CreateMutexW(None, false, w!("Local\\RustTelex_SingleInstance"))? };
    let guard = SingleInstanceGuard(h);

    if unsafe { GetLastError() } == ERROR_ALREADY_EXISTS {
        return Ok(None);
    }

    Ok(Some(guard))
}

/// NUL terminated UTF-16 copy of `s`.
pub fn to_wide(s: &OsStr) -> Vec<u16> {
    s.encode_wide().chain(std::iter::once(0)).collect()
}

pub fn wide_to_string(buf: &[u16]) -> String {
    let end = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    String::from_utf16_lossy(&buf[..end])
}

/// Copies `s` into a fixed Win32 buffer, truncating and always terminating.
pub fn fill_wide(dst: &mut [u16], s: &str) {
    if let Some((last, body)) = dst.split_last_mut() {
        for (d, ch) in body
            .iter_mut()
            .zip(s.encode_utf16().chain(std::iter::repeat(0)))
        {
            *d = ch;
        }
        *last = 0;
    }
}
