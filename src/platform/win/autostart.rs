//! "Start with Windows" as a marked shortcut in the user's Startup folder.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use windows::{
    Win32::{
        System::Com::{
            CLSCTX_INPROC_SERVER, COINIT_APARTMENTTHREADED, CoCreateInstance, CoInitializeEx,
            CoTaskMemFree, CoUninitialize, IPersistFile, STGM, STGM_READ,
        },
        UI::Shell::{
            FOLDERID_Startup, IShellLinkW, KF_FLAG_DEFAULT, SHGetKnownFolderPath, ShellLink,
        },
    },
    core::{Interface, PCWSTR, Result},
};

use super::helpers::{other_error, to_wide, wide_to_string};

const SHORTCUT_MARKER: &str = "RustTelex Autostart Shortcut";
const SHORTCUT_FILE_NAME: &str = "RustTelex.lnk";

/// Removes our shortcuts, then recreates one when `enabled`.
pub(crate) fn apply_startup_shortcut(enabled: bool) -> Result<()> {
    let _com = ComApartment::init()?;

    let startup_dir = startup_folder_path()?;
    let removed = remove_marked_shortcuts(&startup_dir)?;

    if !enabled {
        if removed > 0 {
            tracing::info!(removed, "autostart shortcut removed");
        }
        return Ok(());
    }

    let exe = std::env::current_exe().map_err(|e| other_error(e.to_string()))?;
    let exe = std::fs::canonicalize(&exe).unwrap_or(exe);

    let link = startup_dir.join(SHORTCUT_FILE_NAME);
    create_shortcut(&link, &exe)?;
    tracing::info!(link = %link.display(), "autostart shortcut created");

    Ok(())
}

struct ComApartment;

impl ComApartment {
    fn init() -> Result<Self> {
        unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED).ok()? };
        Ok(Self)
    }
}

impl Drop for ComApartment {
    fn drop(&mut self) {
        unsafe { CoUninitialize() };
    }
}

fn startup_folder_path() -> Result<PathBuf> {
    let raw = unsafe { SHGetKnownFolderPath(&FOLDERID_Startup, KF_FLAG_DEFAULT, None)? };
    let path = unsafe { raw.to_string() }.map_err(|e| other_error(e.to_string()));

    unsafe { CoTaskMemFree(Some(raw.0 as _)) };

    path.map(PathBuf::from)
}

fn is_lnk(p: &Path) -> bool {
    p.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("lnk"))
}

fn remove_marked_shortcuts(dir: &Path) -> Result<usize> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| other_error(format!("Failed to read startup dir: {e}")))?;

    let mut removed = 0;
    for path in entries.flatten().map(|ent| ent.path()) {
        if is_lnk(&path) && shortcut_has_marker(&path)? && std::fs::remove_file(&path).is_ok() {
            removed += 1;
        }
    }

    Ok(removed)
}

fn shortcut_has_marker(path: &Path) -> Result<bool> {
    let shell_link: IShellLinkW =
        unsafe { CoCreateInstance(&ShellLink, None, CLSCTX_INPROC_SERVER)? };
    let persist: IPersistFile = shell_link.cast()?;

    let wide = to_wide(path.as_os_str());
    unsafe { persist.Load(PCWSTR(wide.as_ptr()), STGM(STGM_READ.0))? };

    let mut buf = [0u16; 512];
    unsafe { shell_link.GetDescription(&mut buf)? };

    Ok(wide_to_string(&buf) == SHORTCUT_MARKER)
}

fn create_shortcut(link_path: &Path, exe_path: &Path) -> Result<()> {
    let shell_link: IShellLinkW =
        unsafe { CoCreateInstance(&ShellLink, None, CLSCTX_INPROC_SERVER)? };

    let exe_w = to_wide(exe_path.as_os_str());
    unsafe { shell_link.SetPath(PCWSTR(exe_w.as_ptr()))? };

    if let Some(dir) = exe_path.parent() {
        let dir_w = to_wide(dir.as_os_str());
        unsafe { shell_link.SetWorkingDirectory(PCWSTR(dir_w.as_ptr()))? };
    }

    let desc_w = to_wide(OsStr::new(SHORTCUT_MARKER));
    unsafe { shell_link.SetDescription(PCWSTR(desc_w.as_ptr()))? };

    let persist: IPersistFile = shell_link.cast()?;
    let link_w = to_wide(link_path.as_os_str());
    unsafe { persist.Save(PCWSTR(link_w.as_ptr()), true)? };

    Ok(())
}
