//! Compact identifiers for escape and control sequences.

use std::fmt;
use std::fmt::Write;

/// Identifier of an escape or control sequence: the intermediate bytes
/// followed by the final byte, packed into a `u64` with the first byte in
/// the low bits.
///
/// `ESC ( B` packs as `VtId::of(b"(B")`, `CSI ? h` as `VtId::of(b"?h")`,
/// and a plain `CSI H` as `VtId::of(b"H")`. The engine only ever compares
/// ids against the closed sets of codes in [`esc`], [`csi`], and [`vt52`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VtId(pub(crate) u64);

impl VtId {
    /// Pack a byte sequence into an id. At most eight bytes fit; real
    /// sequences use one or two.
    pub const fn of(sequence: &[u8]) -> Self {
        let mut value = 0u64;
        let mut i = sequence.len();
        while i > 0 {
            i -= 1;
            value = (value << 8) | sequence[i] as u64;
        }
        Self(value)
    }

    /// The first byte of the sequence: the lone intermediate, or the final
    /// byte when there are no intermediates.
    pub const fn first(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// The identifier with the first `offset` bytes dropped. Charset
    /// designations use this to split the selecting intermediate from the
    /// character set name.
    pub const fn subsequence(self, offset: u32) -> Self {
        if offset >= 8 {
            Self(0)
        } else {
            Self(self.0 >> (offset * 8))
        }
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for VtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut value = self.0;
        while value != 0 {
            f.write_char((value & 0xFF) as u8 as char)?;
            value >>= 8;
        }
        Ok(())
    }
}

/// Accumulates intermediate bytes while the lower state machine walks a
/// sequence, then resolves the final byte into a [`VtId`].
#[derive(Clone, Copy, Debug, Default)]
pub struct VtIdBuilder {
    accumulator: u64,
    shift: u32,
}

impl VtIdBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.accumulator = 0;
        self.shift = 0;
    }

    /// Append one intermediate. When there is no room left for the final
    /// byte the accumulator collapses to zero, yielding an id with all
    /// zero intermediates that no known code matches.
    pub fn add_intermediate(&mut self, byte: u8) {
        if self.shift + 8 >= u64::BITS {
            self.accumulator = 0;
        } else {
            self.accumulator += (byte as u64) << self.shift;
            self.shift += 8;
        }
    }

    pub fn finalize(&self, final_byte: u8) -> VtId {
        VtId(self.accumulator + ((final_byte as u64) << self.shift))
    }
}

/// Simple escape sequences recognized by the output engine.
pub mod esc {
    use super::VtId;

    pub const DECSC_CURSOR_SAVE: VtId = VtId::of(b"7");
    pub const DECRC_CURSOR_RESTORE: VtId = VtId::of(b"8");
    pub const DECKPAM_KEYPAD_APPLICATION_MODE: VtId = VtId::of(b"=");
    pub const DECKPNM_KEYPAD_NUMERIC_MODE: VtId = VtId::of(b">");
    pub const IND_INDEX: VtId = VtId::of(b"D");
    pub const NEL_NEXT_LINE: VtId = VtId::of(b"E");
    pub const HTS_HORIZONTAL_TAB_SET: VtId = VtId::of(b"H");
    pub const RI_REVERSE_LINE_FEED: VtId = VtId::of(b"M");
    pub const SS2_SINGLE_SHIFT: VtId = VtId::of(b"N");
    pub const SS3_SINGLE_SHIFT: VtId = VtId::of(b"O");
    pub const ST_STRING_TERMINATOR: VtId = VtId::of(b"\\");
    pub const RIS_RESET_TO_INITIAL_STATE: VtId = VtId::of(b"c");
    pub const LS2_LOCKING_SHIFT: VtId = VtId::of(b"n");
    pub const LS3_LOCKING_SHIFT: VtId = VtId::of(b"o");
    pub const LS1R_LOCKING_SHIFT: VtId = VtId::of(b"~");
    pub const LS2R_LOCKING_SHIFT: VtId = VtId::of(b"}");
    pub const LS3R_LOCKING_SHIFT: VtId = VtId::of(b"|");
    pub const DECALN_SCREEN_ALIGNMENT_PATTERN: VtId = VtId::of(b"#8");
}

/// Control sequences recognized by the output engine.
pub mod csi {
    use super::VtId;

    pub const ICH_INSERT_CHARACTER: VtId = VtId::of(b"@");
    pub const CUU_CURSOR_UP: VtId = VtId::of(b"A");
    pub const CUD_CURSOR_DOWN: VtId = VtId::of(b"B");
    pub const CUF_CURSOR_FORWARD: VtId = VtId::of(b"C");
    pub const CUB_CURSOR_BACKWARD: VtId = VtId::of(b"D");
    pub const CNL_CURSOR_NEXT_LINE: VtId = VtId::of(b"E");
    pub const CPL_CURSOR_PREV_LINE: VtId = VtId::of(b"F");
    pub const CHA_CURSOR_HORIZONTAL_ABSOLUTE: VtId = VtId::of(b"G");
    pub const CUP_CURSOR_POSITION: VtId = VtId::of(b"H");
    pub const CHT_CURSOR_FORWARD_TAB: VtId = VtId::of(b"I");
    pub const ED_ERASE_DISPLAY: VtId = VtId::of(b"J");
    pub const EL_ERASE_LINE: VtId = VtId::of(b"K");
    pub const IL_INSERT_LINE: VtId = VtId::of(b"L");
    pub const DL_DELETE_LINE: VtId = VtId::of(b"M");
    pub const DCH_DELETE_CHARACTER: VtId = VtId::of(b"P");
    pub const SU_SCROLL_UP: VtId = VtId::of(b"S");
    pub const SD_SCROLL_DOWN: VtId = VtId::of(b"T");
    pub const ECH_ERASE_CHARACTERS: VtId = VtId::of(b"X");
    pub const CBT_CURSOR_BACK_TAB: VtId = VtId::of(b"Z");
    pub const HPA_HORIZONTAL_POSITION_ABSOLUTE: VtId = VtId::of(b"`");
    pub const HPR_HORIZONTAL_POSITION_RELATIVE: VtId = VtId::of(b"a");
    pub const REP_REPEAT_CHARACTER: VtId = VtId::of(b"b");
    pub const DA_DEVICE_ATTRIBUTES: VtId = VtId::of(b"c");
    pub const DA2_SECONDARY_DEVICE_ATTRIBUTES: VtId = VtId::of(b">c");
    pub const DA3_TERTIARY_DEVICE_ATTRIBUTES: VtId = VtId::of(b"=c");
    pub const VPA_VERTICAL_LINE_POSITION_ABSOLUTE: VtId = VtId::of(b"d");
    pub const VPR_VERTICAL_POSITION_RELATIVE: VtId = VtId::of(b"e");
    pub const HVP_HORIZONTAL_VERTICAL_POSITION: VtId = VtId::of(b"f");
    pub const TBC_TAB_CLEAR: VtId = VtId::of(b"g");
    pub const DECSET_PRIVATE_MODE_SET: VtId = VtId::of(b"?h");
    pub const DECRST_PRIVATE_MODE_RESET: VtId = VtId::of(b"?l");
    pub const SGR_SET_GRAPHICS_RENDITION: VtId = VtId::of(b"m");
    pub const DSR_DEVICE_STATUS_REPORT: VtId = VtId::of(b"n");
    pub const DECSTBM_SET_SCROLLING_REGION: VtId = VtId::of(b"r");
    /// Overlaps with DECLRMM/DECSLRM, which this engine does not speak.
    pub const ANSISYSSC_CURSOR_SAVE: VtId = VtId::of(b"s");
    /// Overlaps with DECSLPP, which this engine does not speak.
    pub const DTTERM_WINDOW_MANIPULATION: VtId = VtId::of(b"t");
    pub const ANSISYSRC_CURSOR_RESTORE: VtId = VtId::of(b"u");
    pub const DECSCUSR_SET_CURSOR_STYLE: VtId = VtId::of(b" q");
    pub const DECSTR_SOFT_RESET: VtId = VtId::of(b"!p");
}

/// VT52 sequences recognized while the terminal is in VT52 mode.
pub mod vt52 {
    use super::VtId;

    pub const CURSOR_UP: VtId = VtId::of(b"A");
    pub const CURSOR_DOWN: VtId = VtId::of(b"B");
    pub const CURSOR_RIGHT: VtId = VtId::of(b"C");
    pub const CURSOR_LEFT: VtId = VtId::of(b"D");
    pub const ENTER_GRAPHICS_MODE: VtId = VtId::of(b"F");
    pub const EXIT_GRAPHICS_MODE: VtId = VtId::of(b"G");
    pub const CURSOR_TO_HOME: VtId = VtId::of(b"H");
    pub const REVERSE_LINE_FEED: VtId = VtId::of(b"I");
    pub const ERASE_TO_END_OF_SCREEN: VtId = VtId::of(b"J");
    pub const ERASE_TO_END_OF_LINE: VtId = VtId::of(b"K");
    pub const DIRECT_CURSOR_ADDRESS: VtId = VtId::of(b"Y");
    pub const IDENTIFY: VtId = VtId::of(b"Z");
    pub const ENTER_ALTERNATE_KEYPAD_MODE: VtId = VtId::of(b"=");
    pub const EXIT_ALTERNATE_KEYPAD_MODE: VtId = VtId::of(b">");
    pub const EXIT_VT52_MODE: VtId = VtId::of(b"<");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_first_byte_low() {
        let id = VtId::of(b"#8");
        assert_eq!(id.first(), b'#');
        assert_eq!(id.subsequence(1), VtId::of(b"8"));
        assert_eq!(id.subsequence(2), VtId::of(b""));
        assert!(id.subsequence(2).is_empty());
    }

    #[test]
    fn single_byte_ids_differ_from_prefixed_ones() {
        assert_ne!(VtId::of(b"c"), VtId::of(b">c"));
        assert_ne!(VtId::of(b">c"), VtId::of(b"=c"));
        assert_eq!(VtId::of(b"h").first(), b'h');
        assert_eq!(VtId::of(b"?h").first(), b'?');
    }

    #[test]
    fn builder_matches_packed_constants() {
        let mut builder = VtIdBuilder::new();
        builder.add_intermediate(b'?');
        assert_eq!(builder.finalize(b'h'), csi::DECSET_PRIVATE_MODE_SET);

        builder.clear();
        assert_eq!(builder.finalize(b'A'), csi::CUU_CURSOR_UP);

        builder.clear();
        builder.add_intermediate(b'#');
        assert_eq!(builder.finalize(b'8'), esc::DECALN_SCREEN_ALIGNMENT_PATTERN);
    }

    #[test]
    fn builder_overflow_yields_unmatchable_id() {
        let mut builder = VtIdBuilder::new();
        for _ in 0..8 {
            builder.add_intermediate(b'!');
        }
        let id = builder.finalize(b'p');
        assert_ne!(id, csi::DECSTR_SOFT_RESET);
        assert_eq!(id.first(), 0);
    }

    #[test]
    fn display_prints_sequence_bytes() {
        assert_eq!(csi::DECSET_PRIVATE_MODE_SET.to_string(), "?h");
        assert_eq!(esc::DECALN_SCREEN_ALIGNMENT_PATTERN.to_string(), "#8");
    }
}
