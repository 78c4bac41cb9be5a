//! The terminal model: escape sequence interpretation, screen/scrollback
//! buffers, selection and the delegate interfaces an embedding application
//! implements to receive title/clipboard/bell/etc. callbacks.

use std::ops::Range;

pub use termwiz::cell::CellAttributes;
pub use termwiz::surface::Line;

pub mod color;
pub mod config;
pub mod input;
pub mod selection;
mod screen;
pub mod terminal;
pub mod terminalstate;

pub use crate::config::TerminalConfiguration;
pub use crate::terminal::{
    Alert, AlertHandler, Clipboard, ClipboardSelection, DeviceControlHandler, DownloadHandler,
    Progress, ProgressState,
};
pub use crate::terminalstate::TerminalState;
pub use screen::Screen;

/// Represents the index into screen.lines.  Index 0 is the top of
/// the scrollback (if any).  The index of the top of the visible screen
/// depends on the terminal dimensions and the scrollback size.
pub type PhysRowIndex = usize;

/// Represents an index into the visible portion of the screen.
/// Value 0 is the first visible row.  `VisibleRowIndex` needs to be
/// resolved into a `PhysRowIndex` to obtain an actual row.  It is not
/// valid to have a negative `VisibleRowIndex` value so this type logically
/// should be unsigned, however, having a different sign is helpful to
/// have the compiler catch accidental arithmetic performed between
/// `PhysRowIndex` and `VisibleRowIndex`.
pub type VisibleRowIndex = i64;

/// An index that remains stable across scrolling: index 0 is always
/// the first line that ever appeared at the top of the scrollback,
/// no matter how much has since scrolled off. Used by the selection
/// and search modules to refer to a row that survives a resize or a
/// burst of new output.
pub type StableRowIndex = i64;

/// An index relative to the top of the scrollback (negative values
/// reach above the top of the visible screen into history; 0 and up
/// match `VisibleRowIndex`).
pub type ScrollbackOrVisibleRowIndex = i64;

/// range.contains(), but that is unstable
pub(crate) fn in_range<T: PartialOrd>(value: T, range: &Range<T>) -> bool {
    value >= range.start && value < range.end
}

/// Position allows referring to an absolute visible row number
/// or a position relative to some existing row number (typically
/// where the cursor is located).  Both of the cases are represented
/// as signed numbers so that the math and error checking for out
/// of range values can be deferred to the point where we execute
/// the request.
#[derive(Debug, Clone, Copy)]
pub enum Position {
    Absolute(VisibleRowIndex),
    Relative(i64),
}

/// Describes the location and shape of the cursor in the visible
/// portion of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    pub x: usize,
    pub y: VisibleRowIndex,
    pub shape: termwiz::surface::CursorShape,
    pub visibility: termwiz::surface::CursorVisibility,
}

impl Default for CursorPosition {
    fn default() -> CursorPosition {
        CursorPosition {
            x: 0,
            y: 0,
            shape: termwiz::surface::CursorShape::default(),
            visibility: termwiz::surface::CursorVisibility::Visible,
        }
    }
}

#[allow(dead_code)]
pub const CSI: &str = "\x1b[";
#[allow(dead_code)]
pub const OSC: &str = "\x1b]";
#[allow(dead_code)]
pub const ST: &str = "\x1b\\";
#[allow(dead_code)]
pub const DCS: &str = "\x1bP";
