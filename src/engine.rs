//! The action router driven by the lower state machine.

use std::fmt;
use std::iter;

use log::debug;

use crate::ascii;
use crate::color::COLOR_INVALID;
use crate::dispatch::Dispatch;
use crate::id::{VtId, csi, esc, vt52};
use crate::mode::NamedPrivateMode;
use crate::osc::{self, ClipboardRequest};
use crate::params;
use crate::sgr::GraphicsOption;
use crate::types::{ASCII_CHARSET, DEC_SPECIAL_GRAPHICS, EraseType, LineFeedType};

/// Upstream terminal sink, used when this emulator is an intermediary pty
/// and has to forward sequences it does not handle itself.
pub trait TtyConnection {
    /// Write text through to the attached terminal. Returns whether the
    /// write went through.
    fn write_terminal(&mut self, text: &str) -> bool;
}

/// Callback asking the lower state machine to replay the sequence it is
/// currently processing through [`Engine::pass_through_string`].
pub type FlushToTerminal = Box<dyn FnMut() -> bool>;

/// Output-side VT engine: receives tokenized actions from the lower state
/// machine and turns each recognized sequence into a [`Dispatch`] call.
///
/// Every action method returns whether the sequence was handled. When a
/// terminal connection is installed, a sequence that was not handled is
/// replayed upstream verbatim and the upstream verdict is returned
/// instead.
pub struct Engine<D> {
    dispatch: D,
    tty_connection: Option<Box<dyn TtyConnection>>,
    flush_to_terminal: Option<FlushToTerminal>,
    /// Last graphical character given to print/print_string, NUL whenever
    /// any other action has run since. Consumed only by REP.
    last_printed_char: char,
    /// Reused across CSI dispatches so SGR-heavy output does not
    /// reallocate per sequence. Holds nothing meaningful between calls.
    graphics_options: Vec<GraphicsOption>,
}

impl<D: fmt::Debug> fmt::Debug for Engine<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("dispatch", &self.dispatch)
            .field("tty_connection", &self.tty_connection.is_some())
            .field("last_printed_char", &self.last_printed_char)
            .finish_non_exhaustive()
    }
}

impl<D: Dispatch> Engine<D> {
    /// Create an engine around the dispatcher that will receive the
    /// semantic commands.
    pub fn new(dispatch: D) -> Self {
        Self {
            dispatch,
            tty_connection: None,
            flush_to_terminal: None,
            last_printed_char: ascii::NUL,
            graphics_options: Vec::new(),
        }
    }

    pub fn dispatch(&self) -> &D {
        &self.dispatch
    }

    pub fn dispatch_mut(&mut self) -> &mut D {
        &mut self.dispatch
    }

    pub fn into_dispatch(self) -> D {
        self.dispatch
    }

    /// Set up another terminal as the real tty behind this engine. Both
    /// halves are installed together: `connection` receives the raw text
    /// of sequences this engine does not understand, and
    /// `flush_to_terminal` asks the lower state machine to replay the
    /// sequence it is currently processing through
    /// [`pass_through_string`](Self::pass_through_string).
    pub fn set_terminal_connection(
        &mut self,
        connection: Box<dyn TtyConnection>,
        flush_to_terminal: FlushToTerminal,
    ) {
        self.tty_connection = Some(connection);
        self.flush_to_terminal = Some(flush_to_terminal);
    }

    /// Drop the pass-through pair; unrecognized sequences are eaten again.
    pub fn clear_terminal_connection(&mut self) {
        self.tty_connection = None;
        self.flush_to_terminal = None;
    }

    /// Respond to a C0 control character. Always succeeds; controls the
    /// terminal has no handling for are printed.
    pub fn execute(&mut self, ch: char) -> bool {
        match ch {
            // Applications write NUL expecting nothing to happen; letting
            // it through would pad the buffer with blanks.
            ascii::NUL => {},
            ascii::BEL => {
                self.dispatch.warning_bell();
                // An attached terminal gets to ring its bell too.
                if let Some(flush) = self.flush_to_terminal.as_mut() {
                    flush();
                }
            },
            ascii::BS => {
                self.dispatch.cursor_backward(1);
            },
            ascii::HT => {
                self.dispatch.forward_tab(1);
            },
            ascii::CR => {
                self.dispatch.carriage_return();
            },
            // LF, VT, and FF are identical in function.
            ascii::LF | ascii::VT | ascii::FF => {
                self.dispatch.line_feed(LineFeedType::DependsOnMode);
            },
            ascii::SI => {
                self.dispatch.locking_shift(0);
            },
            ascii::SO => {
                self.dispatch.locking_shift(1);
            },
            other => self.dispatch.print(other),
        }

        self.clear_last_char();
        true
    }

    /// Identical to [`execute`](Self::execute); the output engine does not
    /// care that the control arrived in the Escape state.
    pub fn execute_from_escape(&mut self, ch: char) -> bool {
        self.execute(ch)
    }

    /// Render one character. A graphical character is remembered for REP.
    pub fn print(&mut self, ch: char) -> bool {
        if ch >= ascii::SPACE {
            self.last_printed_char = ch;
        }
        self.dispatch.print(ch);
        true
    }

    /// Render a run of characters. The trailing graphical character, if
    /// any, is remembered for REP.
    pub fn print_string(&mut self, string: &str) -> bool {
        let Some(last) = string.chars().last() else {
            return true;
        };
        if last >= ascii::SPACE {
            self.last_printed_char = last;
        }
        self.dispatch.print_string(string);
        true
    }

    /// Hand a sequence this engine did not understand to the attached
    /// terminal. Without a connection this engine is the terminal device,
    /// and the string is eaten.
    pub fn pass_through_string(&mut self, string: &str) -> bool {
        match self.tty_connection.as_mut() {
            Some(connection) => {
                let success = connection.write_terminal(string);
                if !success {
                    debug!("tty connection rejected {} passed-through chars", string.len());
                }
                success
            },
            None => true,
        }
    }

    /// Dispatch a simple escape sequence.
    pub fn esc_dispatch(&mut self, id: VtId) -> bool {
        let success = match id {
            // 7-bit string terminator; nothing to do.
            esc::ST_STRING_TERMINATOR => true,
            esc::DECSC_CURSOR_SAVE => self.dispatch.cursor_save_state(),
            esc::DECRC_CURSOR_RESTORE => self.dispatch.cursor_restore_state(),
            esc::DECKPAM_KEYPAD_APPLICATION_MODE => self.dispatch.set_keypad_mode(true),
            esc::DECKPNM_KEYPAD_NUMERIC_MODE => self.dispatch.set_keypad_mode(false),
            esc::NEL_NEXT_LINE => self.dispatch.line_feed(LineFeedType::WithReturn),
            esc::IND_INDEX => self.dispatch.line_feed(LineFeedType::WithoutReturn),
            esc::RI_REVERSE_LINE_FEED => self.dispatch.reverse_line_feed(),
            esc::HTS_HORIZONTAL_TAB_SET => self.dispatch.horizontal_tab_set(),
            esc::RIS_RESET_TO_INITIAL_STATE => self.dispatch.hard_reset(),
            esc::SS2_SINGLE_SHIFT => self.dispatch.single_shift(2),
            esc::SS3_SINGLE_SHIFT => self.dispatch.single_shift(3),
            esc::LS2_LOCKING_SHIFT => self.dispatch.locking_shift(2),
            esc::LS3_LOCKING_SHIFT => self.dispatch.locking_shift(3),
            esc::LS1R_LOCKING_SHIFT => self.dispatch.locking_shift_right(1),
            esc::LS2R_LOCKING_SHIFT => self.dispatch.locking_shift_right(2),
            esc::LS3R_LOCKING_SHIFT => self.dispatch.locking_shift_right(3),
            esc::DECALN_SCREEN_ALIGNMENT_PATTERN => self.dispatch.screen_alignment_pattern(),
            _ => self.designate_charset(id),
        };

        let success = self.flush_on_failure(success);
        self.clear_last_char();
        success
    }

    /// Charset designations key on the first intermediate; the rest of the
    /// id names the character set.
    fn designate_charset(&mut self, id: VtId) -> bool {
        let charset = id.subsequence(1);
        match id.first() {
            b'%' => self.dispatch.designate_coding_system(charset),
            b'(' => self.dispatch.designate_94_charset(0, charset),
            b')' => self.dispatch.designate_94_charset(1, charset),
            b'*' => self.dispatch.designate_94_charset(2, charset),
            b'+' => self.dispatch.designate_94_charset(3, charset),
            b'-' => self.dispatch.designate_96_charset(1, charset),
            b'.' => self.dispatch.designate_96_charset(2, charset),
            b'/' => self.dispatch.designate_96_charset(3, charset),
            _ => {
                debug!("unrecognized escape sequence {id}");
                false
            },
        }
    }

    /// Dispatch a VT52 sequence.
    pub fn vt52_esc_dispatch(&mut self, id: VtId, parameters: &[usize]) -> bool {
        let success = match id {
            vt52::CURSOR_UP => self.dispatch.cursor_up(1),
            vt52::CURSOR_DOWN => self.dispatch.cursor_down(1),
            vt52::CURSOR_RIGHT => self.dispatch.cursor_forward(1),
            vt52::CURSOR_LEFT => self.dispatch.cursor_backward(1),
            vt52::ENTER_GRAPHICS_MODE => {
                self.dispatch.designate_94_charset(0, DEC_SPECIAL_GRAPHICS)
            },
            vt52::EXIT_GRAPHICS_MODE => self.dispatch.designate_94_charset(0, ASCII_CHARSET),
            vt52::CURSOR_TO_HOME => self.dispatch.cursor_position(1, 1),
            vt52::REVERSE_LINE_FEED => self.dispatch.reverse_line_feed(),
            vt52::ERASE_TO_END_OF_SCREEN => self.dispatch.erase_in_display(EraseType::ToEnd),
            vt52::ERASE_TO_END_OF_LINE => self.dispatch.erase_in_line(EraseType::ToEnd),
            vt52::DIRECT_CURSOR_ADDRESS => match parameters {
                // Addresses arrive as raw characters, biased so that a
                // space is address 1.
                [line, column, ..] => self
                    .dispatch
                    .cursor_position(vt52_address(*line), vt52_address(*column)),
                _ => false,
            },
            vt52::IDENTIFY => self.dispatch.vt52_device_attributes(),
            vt52::ENTER_ALTERNATE_KEYPAD_MODE => self.dispatch.set_keypad_mode(true),
            vt52::EXIT_ALTERNATE_KEYPAD_MODE => self.dispatch.set_keypad_mode(false),
            vt52::EXIT_VT52_MODE => self
                .dispatch
                .set_private_modes(&[NamedPrivateMode::AnsiMode.into()]),
            _ => {
                debug!("unrecognized vt52 sequence {id}");
                false
            },
        };

        self.clear_last_char();
        success
    }

    /// Dispatch a control sequence. Parameters are extracted first; only a
    /// cleanly extracted sequence reaches the dispatcher.
    pub fn csi_dispatch(&mut self, id: VtId, parameters: &[usize]) -> bool {
        self.graphics_options.clear();

        let success = match id {
            csi::CUU_CURSOR_UP => {
                self.try_dispatch(params::cursor_distance(parameters), |d, n| d.cursor_up(n))
            },
            csi::CUD_CURSOR_DOWN => {
                self.try_dispatch(params::cursor_distance(parameters), |d, n| d.cursor_down(n))
            },
            csi::CUF_CURSOR_FORWARD => self
                .try_dispatch(params::cursor_distance(parameters), |d, n| {
                    d.cursor_forward(n)
                }),
            csi::CUB_CURSOR_BACKWARD => self
                .try_dispatch(params::cursor_distance(parameters), |d, n| {
                    d.cursor_backward(n)
                }),
            csi::CNL_CURSOR_NEXT_LINE => self
                .try_dispatch(params::cursor_distance(parameters), |d, n| {
                    d.cursor_next_line(n)
                }),
            csi::CPL_CURSOR_PREV_LINE => self
                .try_dispatch(params::cursor_distance(parameters), |d, n| {
                    d.cursor_prev_line(n)
                }),
            csi::CHA_CURSOR_HORIZONTAL_ABSOLUTE | csi::HPA_HORIZONTAL_POSITION_ABSOLUTE => self
                .try_dispatch(params::cursor_distance(parameters), |d, n| {
                    d.cursor_horizontal_position_absolute(n)
                }),
            csi::VPA_VERTICAL_LINE_POSITION_ABSOLUTE => self
                .try_dispatch(params::cursor_distance(parameters), |d, n| {
                    d.vertical_line_position_absolute(n)
                }),
            csi::HPR_HORIZONTAL_POSITION_RELATIVE => self
                .try_dispatch(params::cursor_distance(parameters), |d, n| {
                    d.horizontal_position_relative(n)
                }),
            csi::VPR_VERTICAL_POSITION_RELATIVE => self
                .try_dispatch(params::cursor_distance(parameters), |d, n| {
                    d.vertical_position_relative(n)
                }),
            csi::CUP_CURSOR_POSITION | csi::HVP_HORIZONTAL_VERTICAL_POSITION => self
                .try_dispatch(params::xy_position(parameters), |d, (line, column)| {
                    d.cursor_position(line, column)
                }),
            csi::DECSTBM_SET_SCROLLING_REGION => self.try_dispatch(
                params::top_bottom_margins(parameters),
                |d, (top, bottom)| d.set_top_bottom_scrolling_margins(top, bottom),
            ),
            csi::ICH_INSERT_CHARACTER => self
                .try_dispatch(params::cursor_distance(parameters), |d, n| {
                    d.insert_character(n)
                }),
            csi::DCH_DELETE_CHARACTER => self
                .try_dispatch(params::cursor_distance(parameters), |d, n| {
                    d.delete_character(n)
                }),
            csi::ECH_ERASE_CHARACTERS => self
                .try_dispatch(params::cursor_distance(parameters), |d, n| {
                    d.erase_characters(n)
                }),
            csi::ED_ERASE_DISPLAY => self
                .try_dispatch(params::erase_operation(parameters), |d, t| {
                    d.erase_in_display(t)
                }),
            csi::EL_ERASE_LINE => self
                .try_dispatch(params::erase_operation(parameters), |d, t| {
                    d.erase_in_line(t)
                }),
            csi::DECSET_PRIVATE_MODE_SET => self
                .try_dispatch(params::private_modes(parameters), |d, modes| {
                    d.set_private_modes(&modes)
                }),
            csi::DECRST_PRIVATE_MODE_RESET => self
                .try_dispatch(params::private_modes(parameters), |d, modes| {
                    d.reset_private_modes(&modes)
                }),
            csi::SGR_SET_GRAPHICS_RENDITION => {
                params::graphics_options(parameters, &mut self.graphics_options);
                self.dispatch.set_graphics_rendition(&self.graphics_options)
            },
            csi::DSR_DEVICE_STATUS_REPORT => self
                .try_dispatch(params::device_status(parameters), |d, status| {
                    d.device_status_report(status)
                }),
            csi::DA_DEVICE_ATTRIBUTES => self
                .try_dispatch(params::verify_device_attributes(parameters), |d, ()| {
                    d.device_attributes()
                }),
            csi::DA2_SECONDARY_DEVICE_ATTRIBUTES => self
                .try_dispatch(params::verify_device_attributes(parameters), |d, ()| {
                    d.secondary_device_attributes()
                }),
            csi::DA3_TERTIARY_DEVICE_ATTRIBUTES => self
                .try_dispatch(params::verify_device_attributes(parameters), |d, ()| {
                    d.tertiary_device_attributes()
                }),
            csi::SU_SCROLL_UP => {
                self.try_dispatch(params::scroll_distance(parameters), |d, n| d.scroll_up(n))
            },
            csi::SD_SCROLL_DOWN => {
                self.try_dispatch(params::scroll_distance(parameters), |d, n| d.scroll_down(n))
            },
            csi::IL_INSERT_LINE => {
                self.try_dispatch(params::scroll_distance(parameters), |d, n| d.insert_line(n))
            },
            csi::DL_DELETE_LINE => {
                self.try_dispatch(params::scroll_distance(parameters), |d, n| d.delete_line(n))
            },
            csi::ANSISYSSC_CURSOR_SAVE => self
                .try_dispatch(params::verify_no_parameters(parameters), |d, ()| {
                    d.cursor_save_state()
                }),
            csi::ANSISYSRC_CURSOR_RESTORE => self
                .try_dispatch(params::verify_no_parameters(parameters), |d, ()| {
                    d.cursor_restore_state()
                }),
            csi::CHT_CURSOR_FORWARD_TAB => {
                self.try_dispatch(params::tab_distance(parameters), |d, n| d.forward_tab(n))
            },
            csi::CBT_CURSOR_BACK_TAB => {
                self.try_dispatch(params::tab_distance(parameters), |d, n| d.backwards_tab(n))
            },
            csi::TBC_TAB_CLEAR => {
                self.try_dispatch(params::tab_clear_type(parameters), |d, t| d.tab_clear(t))
            },
            csi::DTTERM_WINDOW_MANIPULATION => {
                // Everything after the function code rides along.
                let remaining = parameters.get(1..).unwrap_or_default();
                self.try_dispatch(
                    params::window_manipulation_type(parameters),
                    |d, function| d.window_manipulation(function, remaining),
                )
            },
            csi::REP_REPEAT_CHARACTER => self.repeat_last_char(parameters),
            csi::DECSCUSR_SET_CURSOR_STYLE => self
                .try_dispatch(params::cursor_style(parameters), |d, style| {
                    d.set_cursor_style(style)
                }),
            csi::DECSTR_SOFT_RESET => self.dispatch.soft_reset(),
            _ => {
                debug!("unrecognized csi sequence {id}");
                false
            },
        };

        let success = self.flush_on_failure(success);
        self.clear_last_char();
        success
    }

    /// REP prints the remembered graphical character again. Handled
    /// entirely here rather than in the dispatcher: every implementation
    /// would express it the same way, in calls that are already part of
    /// the interface. Nothing remembered means nothing to repeat, which is
    /// not an error.
    fn repeat_last_char(&mut self, parameters: &[usize]) -> bool {
        match params::repeat_count(parameters) {
            Ok(count) => {
                if self.last_printed_char != ascii::NUL {
                    let text: String = iter::repeat_n(self.last_printed_char, count).collect();
                    self.dispatch.print_string(&text);
                }
                true
            },
            Err(err) => {
                debug!("rejected REP parameters: {err}");
                false
            },
        }
    }

    /// Dispatch an operating system command. The terminator (BEL or ST)
    /// makes no difference to the handling.
    pub fn osc_dispatch(&mut self, _terminator: char, code: usize, payload: &str) -> bool {
        let success = match code {
            osc::codes::SET_ICON_AND_WINDOW_TITLE
            | osc::codes::SET_WINDOW_ICON
            | osc::codes::SET_WINDOW_TITLE => self
                .try_dispatch(osc::parse_title(payload), |d, title| {
                    d.set_window_title(title)
                }),
            osc::codes::SET_COLOR => self.try_dispatch(
                osc::parse_color_table_entry(payload),
                |d, (index, color)| d.set_color_table_entry(index, color),
            ),
            osc::codes::SET_FOREGROUND_COLOR => self
                .try_dispatch(osc::parse_color_spec(payload), |d, color| {
                    d.set_default_foreground(color)
                }),
            osc::codes::SET_BACKGROUND_COLOR => self
                .try_dispatch(osc::parse_color_spec(payload), |d, color| {
                    d.set_default_background(color)
                }),
            osc::codes::SET_CURSOR_COLOR => self
                .try_dispatch(osc::parse_color_spec(payload), |d, color| {
                    d.set_cursor_color(color)
                }),
            osc::codes::SET_CLIPBOARD => self
                .try_dispatch(osc::parse_clipboard(payload), |d, request| match request {
                    ClipboardRequest::Set(content) => d.set_clipboard(&content),
                    // Queries want the clipboard sent back. This engine
                    // does not answer them, and that is not a failure.
                    ClipboardRequest::Query => true,
                }),
            osc::codes::RESET_CURSOR_COLOR => self.dispatch.set_cursor_color(COLOR_INVALID),
            osc::codes::HYPERLINK => self
                .try_dispatch(osc::parse_hyperlink(payload), |d, link| {
                    if link.uri.is_empty() {
                        d.end_hyperlink()
                    } else {
                        d.add_hyperlink(&link.uri, &link.id)
                    }
                }),
            other => {
                debug!("unrecognized osc code {other}");
                false
            },
        };

        let success = self.flush_on_failure(success);
        self.clear_last_char();
        success
    }

    /// SS3 sequences are an input-side concern; the output engine
    /// recognizes none of them.
    pub fn ss3_dispatch(&mut self, _ch: char, _parameters: &[usize]) -> bool {
        self.clear_last_char();
        false
    }

    /// The lower state machine dropped its accumulated sequence state.
    /// Nothing here depends on it.
    pub fn clear(&mut self) -> bool {
        true
    }

    /// A character was eaten without effect. REP may still follow, so the
    /// remembered character survives.
    pub fn ignore(&mut self) -> bool {
        true
    }

    /// An SS3 prefix dispatches immediately rather than opening a control
    /// sequence.
    pub const fn parse_control_sequence_after_ss3(&self) -> bool {
        false
    }

    /// Sequence state persists across ProcessString calls; dispatch
    /// happens only when a sequence actually completes.
    pub const fn flush_at_end_of_string(&self) -> bool {
        false
    }

    /// Controls encountered in the Escape state execute immediately
    /// without returning to ground.
    pub const fn dispatch_control_chars_from_escape(&self) -> bool {
        false
    }

    /// Intermediates accumulate in the Escape state; charset designations
    /// need them.
    pub const fn dispatch_intermediates_from_escape(&self) -> bool {
        false
    }

    /// Run the extracted value through `action`, or report the rejection.
    fn try_dispatch<T, E: fmt::Display>(
        &mut self,
        extracted: Result<T, E>,
        action: impl FnOnce(&mut D, T) -> bool,
    ) -> bool {
        match extracted {
            Ok(value) => action(&mut self.dispatch, value),
            Err(err) => {
                debug!("rejected sequence: {err}");
                false
            },
        }
    }

    /// A sequence that was not handled goes to the attached terminal when
    /// there is one; its verdict replaces ours.
    fn flush_on_failure(&mut self, success: bool) -> bool {
        if success {
            return true;
        }
        match self.flush_to_terminal.as_mut() {
            Some(flush) => flush(),
            None => false,
        }
    }

    fn clear_last_char(&mut self) {
        self.last_printed_char = ascii::NUL;
    }
}

/// VT52 direct cursor addresses are ASCII-biased: a space is address 1.
fn vt52_address(raw: usize) -> usize {
    raw.saturating_sub(0x20) + 1
}
