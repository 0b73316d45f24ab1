//! Native file-selection dialog backed by rfd

use std::path::PathBuf;

use csvcatlib::{CsvcatError, FileChooser};

/// Multi-file picker using the platform's native dialog.
///
/// The dialog is filtered to `.csv` files with an "all files" escape
/// hatch. Dismissing the dialog yields an empty selection; an
/// environment that cannot show a dialog at all yields
/// `ChooserUnavailable`.
pub struct NativeChooser;

impl FileChooser for NativeChooser {
    fn choose_files(&self) -> csvcatlib::Result<Vec<PathBuf>> {
        if let Some(reason) = unavailable_reason() {
            return Err(CsvcatError::ChooserUnavailable(reason));
        }

        let picked = rfd::FileDialog::new()
            .set_title("Select CSV Files")
            .add_filter("CSV Files", &["csv"])
            .add_filter("All Files", &["*"])
            .pick_files();

        // None means the user dismissed the dialog.
        Ok(picked.unwrap_or_default())
    }
}

/// Check up front whether a dialog can be shown at all.
///
/// rfd's synchronous API reports cancellation and failure identically,
/// so a missing display would otherwise be indistinguishable from the
/// user pressing Cancel. On unix desktops (macOS aside) a dialog needs
/// an X or Wayland display to attach to.
#[cfg(all(unix, not(target_os = "macos")))]
fn unavailable_reason() -> Option<String> {
    let has_display = std::env::var_os("DISPLAY").is_some_and(|v| !v.is_empty())
        || std::env::var_os("WAYLAND_DISPLAY").is_some_and(|v| !v.is_empty());
    if has_display {
        None
    } else {
        Some("no display found; pass file paths as arguments instead".to_string())
    }
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn unavailable_reason() -> Option<String> {
    None
}
