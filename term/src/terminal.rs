//! The delegate interfaces the embedding application implements to receive
//! callbacks from a `TerminalState` as it processes escape sequences that
//! have effects outside of the screen model itself: bells, title changes,
//! clipboard access, downloads and device-control requests.

pub use termwiz::escape::osc::ProgressState;

/// Things the terminal wants to tell the embedding application about.
/// Delivered via `AlertHandler::alert`; none of these carry enough
/// information on their own to be acted on without re-reading the
/// relevant piece of `TerminalState` (title, palette, progress, ...).
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// BEL was received
    Bell,
    /// The color palette (or one of the dynamic colors) changed
    PaletteChanged,
    /// OSC 0/1/2 updated the window or icon title; re-read `get_title()`
    TitleMaybeChanged,
    /// OSC 9 or OSC 777 requested a desktop notification
    ToastNotification {
        title: Option<String>,
        body: String,
        focus: bool,
    },
    /// Output arrived while the terminal pane did not have focus
    OutputSinceFocusLost,
}

/// Receives `Alert`s as they are raised while processing terminal output.
pub trait AlertHandler {
    fn alert(&mut self, alert: Alert);
}

/// Identifies which X11-style selection buffer a clipboard operation
/// targets; `Clipboard` itself is agnostic to whether the embedding
/// application backs these with one shared buffer or several.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardSelection {
    Clipboard,
    PrimarySelection,
}

/// Backs OSC 52 clipboard read/write requests. `set_contents(None, ...)`
/// clears the selection; the terminal never reads the clipboard back
/// through this trait (OSC 52 queries are intentionally not answered,
/// matching xterm's default `disallowedWindowOps` posture).
pub trait Clipboard: std::fmt::Debug {
    fn set_contents(
        &self,
        selection: ClipboardSelection,
        data: Option<String>,
    ) -> anyhow::Result<()>;
}

/// Backs iTerm2 `File=` downloads (OSC 1337) that are not inline images;
/// the caller hands over the fully decoded payload once the escape
/// sequence has been parsed.
pub trait DownloadHandler {
    fn save_to_downloads(&self, name: Option<String>, data: Vec<u8>);
}

/// Handles device-control strings (DCS) that `TerminalState` does not
/// interpret itself, such as application-specific DECRQSS extensions.
pub trait DeviceControlHandler {
    fn handle_device_control(&mut self, mode: termwiz::escape::DeviceControlMode);
}

/// The current state of the OSC 9;4 (ConEmu/Windows Terminal) taskbar
/// progress report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Progress {
    pub state: ProgressState,
    /// The last-reported percentage, clamped to 0..=100. Only meaningful
    /// when `state` is `Normal` or `Error`; `None` means no percentage
    /// has been reported yet (eg. `Indeterminate`).
    pub progress: Option<u8>,
}
