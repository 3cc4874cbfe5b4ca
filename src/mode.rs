//! DEC private modes carried by DECSET/DECRST.

/// Wrapper for a private mode number. The engine conveys every number it
/// is given; names exist for the modes the dispatcher is expected to
/// recognize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrivateMode {
    /// Known private mode.
    Named(NamedPrivateMode),
    /// Unidentified private mode, passed through raw.
    Unknown(u16),
}

impl PrivateMode {
    pub(crate) fn from_raw(mode: u16) -> Self {
        match mode {
            1 => Self::Named(NamedPrivateMode::CursorKeys),
            2 => Self::Named(NamedPrivateMode::AnsiMode),
            3 => Self::Named(NamedPrivateMode::ColumnMode),
            5 => Self::Named(NamedPrivateMode::ScreenMode),
            6 => Self::Named(NamedPrivateMode::Origin),
            7 => Self::Named(NamedPrivateMode::AutoWrap),
            12 => Self::Named(NamedPrivateMode::BlinkingCursor),
            25 => Self::Named(NamedPrivateMode::ShowCursor),
            40 => Self::Named(NamedPrivateMode::ColumnModeSupport),
            1000 => Self::Named(NamedPrivateMode::ReportMouseClicks),
            1002 => Self::Named(NamedPrivateMode::ReportCellMouseMotion),
            1003 => Self::Named(NamedPrivateMode::ReportAllMouseMotion),
            1005 => Self::Named(NamedPrivateMode::Utf8ExtendedMouse),
            1006 => Self::Named(NamedPrivateMode::SgrExtendedMouse),
            1007 => Self::Named(NamedPrivateMode::AlternateScroll),
            1049 => Self::Named(NamedPrivateMode::AlternateScreenBuffer),
            9001 => Self::Named(NamedPrivateMode::Win32Input),
            _ => Self::Unknown(mode),
        }
    }

    /// Get the raw mode number.
    pub fn raw(self) -> u16 {
        match self {
            Self::Named(named) => named as u16,
            Self::Unknown(mode) => mode,
        }
    }
}

impl From<NamedPrivateMode> for PrivateMode {
    fn from(value: NamedPrivateMode) -> Self {
        Self::Named(value)
    }
}

/// Private modes with a name.
#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NamedPrivateMode {
    /// DECCKM - Cursor Keys Mode.
    CursorKeys = 1,
    /// DECANM - ANSI Mode; resetting it drops the terminal into VT52.
    AnsiMode = 2,
    /// DECCOLM - 80/132 column mode.
    ColumnMode = 3,
    /// DECSCNM - Screen (reverse video) Mode.
    ScreenMode = 5,
    /// DECOM - Origin Mode.
    Origin = 6,
    /// DECAWM - Autowrap Mode.
    AutoWrap = 7,
    /// ATT610 - start/stop cursor blinking.
    BlinkingCursor = 12,
    /// DECTCEM - Text Cursor Enable Mode.
    ShowCursor = 25,
    /// xterm resource toggling DECCOLM support.
    ColumnModeSupport = 40,
    ReportMouseClicks = 1000,
    ReportCellMouseMotion = 1002,
    ReportAllMouseMotion = 1003,
    Utf8ExtendedMouse = 1005,
    SgrExtendedMouse = 1006,
    AlternateScroll = 1007,
    AlternateScreenBuffer = 1049,
    /// win32-input-mode.
    Win32Input = 9001,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_raw_values() {
        for raw in [1u16, 2, 3, 5, 6, 7, 12, 25, 40, 1000, 1049, 9001] {
            assert_eq!(PrivateMode::from_raw(raw).raw(), raw);
        }
        assert_eq!(PrivateMode::from_raw(4242), PrivateMode::Unknown(4242));
        assert_eq!(PrivateMode::Unknown(4242).raw(), 4242);
    }
}
