//! ASCII control characters the engine cares about.

pub const NUL: char = '\u{00}';
pub const BEL: char = '\u{07}';
pub const BS: char = '\u{08}';
pub const HT: char = '\u{09}';
pub const LF: char = '\u{0A}';
pub const VT: char = '\u{0B}';
pub const FF: char = '\u{0C}';
pub const CR: char = '\u{0D}';
pub const SO: char = '\u{0E}';
pub const SI: char = '\u{0F}';

/// First graphical character; everything below is a control.
pub const SPACE: char = '\u{20}';
