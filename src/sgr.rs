//! SGR option codes.
//!
//! The engine only conveys these to the dispatcher; what an option does to
//! the character attributes is the dispatcher's business.

/// Wrapper for one SGR option code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphicsOption {
    /// Known option code.
    Named(NamedGraphicsOption),
    /// Unidentified option, passed through raw.
    Unknown(u16),
}

impl GraphicsOption {
    pub(crate) fn from_raw(option: u16) -> Self {
        use NamedGraphicsOption::*;
        let named = match option {
            0 => Off,
            1 => BoldBright,
            2 => RgbColorOrFaint,
            3 => Italics,
            4 => Underline,
            5 => BlinkOrXterm256Index,
            6 => RapidBlink,
            7 => Negative,
            8 => Invisible,
            9 => CrossedOut,
            21 => DoublyUnderlined,
            22 => NotBoldOrFaint,
            23 => NotItalics,
            24 => NoUnderline,
            25 => Steady,
            27 => Positive,
            28 => Visible,
            29 => NotCrossedOut,
            30 => ForegroundBlack,
            31 => ForegroundRed,
            32 => ForegroundGreen,
            33 => ForegroundYellow,
            34 => ForegroundBlue,
            35 => ForegroundMagenta,
            36 => ForegroundCyan,
            37 => ForegroundWhite,
            38 => ForegroundExtended,
            39 => ForegroundDefault,
            40 => BackgroundBlack,
            41 => BackgroundRed,
            42 => BackgroundGreen,
            43 => BackgroundYellow,
            44 => BackgroundBlue,
            45 => BackgroundMagenta,
            46 => BackgroundCyan,
            47 => BackgroundWhite,
            48 => BackgroundExtended,
            49 => BackgroundDefault,
            53 => Overline,
            55 => NoOverline,
            90 => BrightForegroundBlack,
            91 => BrightForegroundRed,
            92 => BrightForegroundGreen,
            93 => BrightForegroundYellow,
            94 => BrightForegroundBlue,
            95 => BrightForegroundMagenta,
            96 => BrightForegroundCyan,
            97 => BrightForegroundWhite,
            100 => BrightBackgroundBlack,
            101 => BrightBackgroundRed,
            102 => BrightBackgroundGreen,
            103 => BrightBackgroundYellow,
            104 => BrightBackgroundBlue,
            105 => BrightBackgroundMagenta,
            106 => BrightBackgroundCyan,
            107 => BrightBackgroundWhite,
            other => return Self::Unknown(other),
        };
        Self::Named(named)
    }

    /// Get the raw option code.
    pub fn raw(self) -> u16 {
        match self {
            Self::Named(named) => named as u16,
            Self::Unknown(option) => option,
        }
    }
}

impl Default for GraphicsOption {
    fn default() -> Self {
        Self::Named(NamedGraphicsOption::Off)
    }
}

impl From<NamedGraphicsOption> for GraphicsOption {
    fn from(value: NamedGraphicsOption) -> Self {
        Self::Named(value)
    }
}

/// SGR options with a name.
#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NamedGraphicsOption {
    Off = 0,
    BoldBright = 1,
    /// 2 introduces an extended color, but is also Faint (ISO 6429).
    RgbColorOrFaint = 2,
    Italics = 3,
    Underline = 4,
    /// 5 introduces an indexed color, but is also Blink.
    BlinkOrXterm256Index = 5,
    RapidBlink = 6,
    Negative = 7,
    Invisible = 8,
    CrossedOut = 9,
    DoublyUnderlined = 21,
    NotBoldOrFaint = 22,
    NotItalics = 23,
    NoUnderline = 24,
    Steady = 25,
    Positive = 27,
    Visible = 28,
    NotCrossedOut = 29,
    ForegroundBlack = 30,
    ForegroundRed = 31,
    ForegroundGreen = 32,
    ForegroundYellow = 33,
    ForegroundBlue = 34,
    ForegroundMagenta = 35,
    ForegroundCyan = 36,
    ForegroundWhite = 37,
    ForegroundExtended = 38,
    ForegroundDefault = 39,
    BackgroundBlack = 40,
    BackgroundRed = 41,
    BackgroundGreen = 42,
    BackgroundYellow = 43,
    BackgroundBlue = 44,
    BackgroundMagenta = 45,
    BackgroundCyan = 46,
    BackgroundWhite = 47,
    BackgroundExtended = 48,
    BackgroundDefault = 49,
    Overline = 53,
    NoOverline = 55,
    BrightForegroundBlack = 90,
    BrightForegroundRed = 91,
    BrightForegroundGreen = 92,
    BrightForegroundYellow = 93,
    BrightForegroundBlue = 94,
    BrightForegroundMagenta = 95,
    BrightForegroundCyan = 96,
    BrightForegroundWhite = 97,
    BrightBackgroundBlack = 100,
    BrightBackgroundRed = 101,
    BrightBackgroundGreen = 102,
    BrightBackgroundYellow = 103,
    BrightBackgroundBlue = 104,
    BrightBackgroundMagenta = 105,
    BrightBackgroundCyan = 106,
    BrightBackgroundWhite = 107,
}
