//! The capability set the engine drives.

use crate::color::PackedColor;
use crate::id::VtId;
use crate::mode::PrivateMode;
use crate::sgr::GraphicsOption;
use crate::types::{
    CursorStyle, DeviceStatusType, EraseType, LineFeedType, WindowManipulationType,
};

/// Receiver of the semantic terminal commands the engine extracts from the
/// escape sequence stream.
///
/// Every capability reports success as a `bool`; the engine treats `false`
/// as "this sequence was not handled" and, when a terminal connection is
/// attached, forwards the raw sequence upstream instead. The defaults all
/// report failure, so a partial implementation automatically leaves the
/// sequences it does not care about to the pass-through path.
///
/// [`print`](Self::print) and [`print_string`](Self::print_string) are the
/// exception: rendering text cannot meaningfully fail, so they return
/// nothing and default to dropping the text.
pub trait Dispatch {
    // Text flow.
    fn print(&mut self, _ch: char) {}
    fn print_string(&mut self, _string: &str) {}
    fn carriage_return(&mut self) -> bool {
        false
    }
    fn line_feed(&mut self, _kind: LineFeedType) -> bool {
        false
    }
    fn reverse_line_feed(&mut self) -> bool {
        false
    }

    // Cursor motion.
    fn cursor_up(&mut self, _distance: usize) -> bool {
        false
    }
    fn cursor_down(&mut self, _distance: usize) -> bool {
        false
    }
    fn cursor_forward(&mut self, _distance: usize) -> bool {
        false
    }
    fn cursor_backward(&mut self, _distance: usize) -> bool {
        false
    }
    fn cursor_next_line(&mut self, _distance: usize) -> bool {
        false
    }
    fn cursor_prev_line(&mut self, _distance: usize) -> bool {
        false
    }
    fn cursor_horizontal_position_absolute(&mut self, _column: usize) -> bool {
        false
    }
    fn vertical_line_position_absolute(&mut self, _line: usize) -> bool {
        false
    }
    fn horizontal_position_relative(&mut self, _distance: usize) -> bool {
        false
    }
    fn vertical_position_relative(&mut self, _distance: usize) -> bool {
        false
    }
    /// Move to an absolute (line, column), both one-based.
    fn cursor_position(&mut self, _line: usize, _column: usize) -> bool {
        false
    }
    fn cursor_save_state(&mut self) -> bool {
        false
    }
    fn cursor_restore_state(&mut self) -> bool {
        false
    }

    // Editing.
    fn insert_character(&mut self, _count: usize) -> bool {
        false
    }
    fn delete_character(&mut self, _count: usize) -> bool {
        false
    }
    fn erase_characters(&mut self, _count: usize) -> bool {
        false
    }
    fn insert_line(&mut self, _count: usize) -> bool {
        false
    }
    fn delete_line(&mut self, _count: usize) -> bool {
        false
    }
    fn erase_in_display(&mut self, _erase_type: EraseType) -> bool {
        false
    }
    fn erase_in_line(&mut self, _erase_type: EraseType) -> bool {
        false
    }
    fn scroll_up(&mut self, _distance: usize) -> bool {
        false
    }
    fn scroll_down(&mut self, _distance: usize) -> bool {
        false
    }

    // Tabs.
    fn forward_tab(&mut self, _tabs: usize) -> bool {
        false
    }
    fn backwards_tab(&mut self, _tabs: usize) -> bool {
        false
    }
    fn horizontal_tab_set(&mut self) -> bool {
        false
    }
    fn tab_clear(&mut self, _clear_type: usize) -> bool {
        false
    }

    // Modes and margins.
    fn set_private_modes(&mut self, _modes: &[PrivateMode]) -> bool {
        false
    }
    fn reset_private_modes(&mut self, _modes: &[PrivateMode]) -> bool {
        false
    }
    /// `true` selects keypad application mode, `false` numeric mode.
    fn set_keypad_mode(&mut self, _application: bool) -> bool {
        false
    }
    /// Margins are one-based; zero means "edge of the screen".
    fn set_top_bottom_scrolling_margins(&mut self, _top: usize, _bottom: usize) -> bool {
        false
    }

    // Rendering.
    fn set_graphics_rendition(&mut self, _options: &[GraphicsOption]) -> bool {
        false
    }
    fn set_cursor_style(&mut self, _style: CursorStyle) -> bool {
        false
    }
    fn set_color_table_entry(&mut self, _index: usize, _color: PackedColor) -> bool {
        false
    }
    fn set_default_foreground(&mut self, _color: PackedColor) -> bool {
        false
    }
    fn set_default_background(&mut self, _color: PackedColor) -> bool {
        false
    }
    /// [`COLOR_INVALID`](crate::COLOR_INVALID) asks for the color to be
    /// reset.
    fn set_cursor_color(&mut self, _color: PackedColor) -> bool {
        false
    }

    // Reports.
    fn device_attributes(&mut self) -> bool {
        false
    }
    fn secondary_device_attributes(&mut self) -> bool {
        false
    }
    fn tertiary_device_attributes(&mut self) -> bool {
        false
    }
    fn vt52_device_attributes(&mut self) -> bool {
        false
    }
    fn device_status_report(&mut self, _status: DeviceStatusType) -> bool {
        false
    }

    // Character sets.
    fn designate_coding_system(&mut self, _coding_system: VtId) -> bool {
        false
    }
    /// Designate a 94-character set into G0..=G3.
    fn designate_94_charset(&mut self, _gset: usize, _charset: VtId) -> bool {
        false
    }
    /// Designate a 96-character set into G1..=G3.
    fn designate_96_charset(&mut self, _gset: usize, _charset: VtId) -> bool {
        false
    }
    fn locking_shift(&mut self, _gset: usize) -> bool {
        false
    }
    fn locking_shift_right(&mut self, _gset: usize) -> bool {
        false
    }
    fn single_shift(&mut self, _gset: usize) -> bool {
        false
    }

    // Everything else.
    fn warning_bell(&mut self) -> bool {
        false
    }
    fn hard_reset(&mut self) -> bool {
        false
    }
    fn soft_reset(&mut self) -> bool {
        false
    }
    fn screen_alignment_pattern(&mut self) -> bool {
        false
    }
    /// `parameters` is everything after the function code.
    fn window_manipulation(
        &mut self,
        _function: WindowManipulationType,
        _parameters: &[usize],
    ) -> bool {
        false
    }
    fn set_window_title(&mut self, _title: &str) -> bool {
        false
    }
    fn set_clipboard(&mut self, _content: &str) -> bool {
        false
    }
    /// An empty `id` means the link carries no explicit id.
    fn add_hyperlink(&mut self, _uri: &str, _id: &str) -> bool {
        false
    }
    fn end_hyperlink(&mut self) -> bool {
        false
    }
}
