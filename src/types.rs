//! Value types handed across the [`Dispatch`](crate::Dispatch) boundary.

use crate::id::VtId;

/// Region selector for erase operations (the ED/EL parameter).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EraseType {
    /// Erase from the cursor to the end of the region.
    #[default]
    ToEnd = 0,
    /// Erase from the beginning of the region to the cursor.
    FromBeginning = 1,
    /// Erase the whole region.
    All = 2,
    /// Erase the scrollback (xterm extension to ED).
    Scrollback = 3,
}

/// How a line feed interacts with the column position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineFeedType {
    /// Move down and return to the first column (NEL).
    WithReturn,
    /// Move down and keep the column (IND).
    WithoutReturn,
    /// Plain LF/VT/FF; whether the column resets depends on LNM.
    DependsOnMode,
}

/// DECSCUSR cursor styles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorStyle {
    /// Restore the cursor to the user-configured default.
    #[default]
    UserDefault,
    BlinkingBlock,
    SteadyBlock,
    BlinkingUnderline,
    SteadyUnderline,
    BlinkingBar,
    SteadyBar,
    /// A style number this engine does not know; the dispatcher decides.
    Unknown(u16),
}

impl CursorStyle {
    pub(crate) fn from_raw(raw: usize) -> Self {
        match raw {
            0 => Self::UserDefault,
            1 => Self::BlinkingBlock,
            2 => Self::SteadyBlock,
            3 => Self::BlinkingUnderline,
            4 => Self::SteadyUnderline,
            5 => Self::BlinkingBar,
            6 => Self::SteadyBar,
            other => Self::Unknown(other as u16),
        }
    }
}

/// DSR queries the output engine accepts; everything else is rejected at
/// parameter extraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceStatusType {
    OperatingStatus = 5,
    CursorPositionReport = 6,
}

/// DTTERM window manipulation functions the engine lets through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowManipulationType {
    RefreshWindow = 7,
    ResizeWindowInCharacters = 8,
}

/// TBC clear types with defined meaning. The extractor passes other
/// values through untouched.
pub const TAB_CLEAR_CURRENT_COLUMN: usize = 0;
pub const TAB_CLEAR_ALL_COLUMNS: usize = 3;

/// Character set names with dedicated VT52 handling.
pub const DEC_SPECIAL_GRAPHICS: VtId = VtId::of(b"0");
pub const ASCII_CHARSET: VtId = VtId::of(b"B");

/// Coding systems selectable through `ESC % ...`.
pub const CODING_SYSTEM_ISO2022: VtId = VtId::of(b"@");
pub const CODING_SYSTEM_UTF8: VtId = VtId::of(b"G");
