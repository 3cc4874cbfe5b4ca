//! Output-side dispatch engine for VT/ANSI escape sequences.
//!
//! The engine sits between a lower escape-sequence state machine and a
//! terminal implementation. The state machine tokenizes the byte stream
//! an application writes and calls one [`Engine`] action per recognized
//! unit (a printable run, a C0 control, an ESC/CSI/OSC/VT52 sequence);
//! the engine validates parameters and drives the matching [`Dispatch`]
//! capability. Sequences the engine does not understand are either eaten
//! or, when a [`TtyConnection`] is attached because the emulator is
//! itself sitting on top of a real terminal, forwarded upstream verbatim.
//!
//! The engine is synchronous and single-threaded; every action runs to
//! completion on the caller's thread and reports success as a `bool`.

mod ascii;
mod color;
mod dispatch;
mod engine;
mod id;
mod mode;
mod osc;
mod params;
mod sgr;
mod types;

pub use color::{COLOR_INVALID, PackedColor, pack_rgb};
pub use dispatch::Dispatch;
pub use engine::{Engine, FlushToTerminal, TtyConnection};
pub use id::{VtId, VtIdBuilder, csi, esc, vt52};
pub use mode::{NamedPrivateMode, PrivateMode};
pub use osc::{OscError, codes as osc_codes};
pub use params::ParamError;
pub use sgr::{GraphicsOption, NamedGraphicsOption};
pub use types::{
    ASCII_CHARSET, CODING_SYSTEM_ISO2022, CODING_SYSTEM_UTF8, CursorStyle, DeviceStatusType,
    EraseType, LineFeedType, TAB_CLEAR_ALL_COLUMNS, TAB_CLEAR_CURRENT_COLUMN,
    WindowManipulationType,
};
