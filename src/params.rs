//! CSI parameter extractors.
//!
//! Pure functions from the numeric parameter list to a typed value. The
//! lower state machine has already split the parameters; an omitted
//! parameter arrives as a zero. None of these functions keep a reference
//! to the slice.

use thiserror::Error;

use crate::mode::PrivateMode;
use crate::sgr::GraphicsOption;
use crate::types::{CursorStyle, DeviceStatusType, EraseType, WindowManipulationType};

/// Why a parameter list was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParamError {
    /// More parameters than the sequence accepts.
    #[error("unexpected parameter count {0}")]
    Arity(usize),
    /// A parameter value outside the accepted set.
    #[error("parameter value {0} not accepted here")]
    Value(usize),
    /// A sequence that needs at least one parameter got none.
    #[error("missing required parameter")]
    Missing,
    /// DECSTBM margins with the bottom above the top.
    #[error("scrolling margins {top};{bottom} are inverted")]
    InvertedMargins { top: usize, bottom: usize },
}

pub(crate) const DEFAULT_CURSOR_DISTANCE: usize = 1;
pub(crate) const DEFAULT_SCROLL_DISTANCE: usize = 1;
pub(crate) const DEFAULT_TAB_DISTANCE: usize = 1;
pub(crate) const DEFAULT_REPEAT_COUNT: usize = 1;
pub(crate) const DEFAULT_LINE: usize = 1;
pub(crate) const DEFAULT_COLUMN: usize = 1;
pub(crate) const DEFAULT_TAB_CLEAR_TYPE: usize = 0;

/// At most one parameter; empty and zero both mean `default`.
fn one_or_default(parameters: &[usize], default: usize) -> Result<usize, ParamError> {
    let value = match parameters {
        [] => default,
        [value] => *value,
        _ => return Err(ParamError::Arity(parameters.len())),
    };
    Ok(if value == 0 { default } else { value })
}

/// Distance for a cursor movement or character edit.
pub(crate) fn cursor_distance(parameters: &[usize]) -> Result<usize, ParamError> {
    one_or_default(parameters, DEFAULT_CURSOR_DISTANCE)
}

/// Distance for scrolling and line insertion/deletion.
pub(crate) fn scroll_distance(parameters: &[usize]) -> Result<usize, ParamError> {
    one_or_default(parameters, DEFAULT_SCROLL_DISTANCE)
}

/// Tab stop count for CHT/CBT.
pub(crate) fn tab_distance(parameters: &[usize]) -> Result<usize, ParamError> {
    one_or_default(parameters, DEFAULT_TAB_DISTANCE)
}

/// Repeat count for REP.
pub(crate) fn repeat_count(parameters: &[usize]) -> Result<usize, ParamError> {
    one_or_default(parameters, DEFAULT_REPEAT_COUNT)
}

/// (line, column) for CUP/HVP. Missing and zero coordinates become 1.
pub(crate) fn xy_position(parameters: &[usize]) -> Result<(usize, usize), ParamError> {
    let (line, column) = match parameters {
        [] => (DEFAULT_LINE, DEFAULT_COLUMN),
        [line] => (*line, DEFAULT_COLUMN),
        [line, column] => (*line, *column),
        _ => return Err(ParamError::Arity(parameters.len())),
    };
    Ok((
        if line == 0 { DEFAULT_LINE } else { line },
        if column == 0 { DEFAULT_COLUMN } else { column },
    ))
}

/// (top, bottom) for DECSTBM. Zero stands for "edge of the screen", so a
/// lone top margin (`[3;r`), a lone bottom margin (`[;3r`), and no margins
/// at all are all legal; a bottom below the top is not.
pub(crate) fn top_bottom_margins(parameters: &[usize]) -> Result<(usize, usize), ParamError> {
    let (top, bottom) = match parameters {
        [] => (0, 0),
        [top] => (*top, 0),
        [top, bottom] => (*top, *bottom),
        _ => return Err(ParamError::Arity(parameters.len())),
    };
    if bottom > 0 && bottom < top {
        return Err(ParamError::InvertedMargins { top, bottom });
    }
    Ok((top, bottom))
}

/// Erase kind for ED/EL.
pub(crate) fn erase_operation(parameters: &[usize]) -> Result<EraseType, ParamError> {
    match parameters {
        [] => Ok(EraseType::default()),
        [0] => Ok(EraseType::ToEnd),
        [1] => Ok(EraseType::FromBeginning),
        [2] => Ok(EraseType::All),
        [3] => Ok(EraseType::Scrollback),
        [other] => Err(ParamError::Value(*other)),
        _ => Err(ParamError::Arity(parameters.len())),
    }
}

/// Private mode list for DECSET/DECRST. Setting nothing at all is not a
/// thing.
pub(crate) fn private_modes(parameters: &[usize]) -> Result<Vec<PrivateMode>, ParamError> {
    if parameters.is_empty() {
        return Err(ParamError::Missing);
    }
    Ok(parameters
        .iter()
        .map(|&p| PrivateMode::from_raw(p as u16))
        .collect())
}

/// SGR options, appended to `options`. An empty parameter list is the
/// lone default option. Never fails; unknown codes travel as raw numbers.
pub(crate) fn graphics_options(parameters: &[usize], options: &mut Vec<GraphicsOption>) {
    if parameters.is_empty() {
        options.push(GraphicsOption::default());
    } else {
        options.extend(parameters.iter().map(|&p| GraphicsOption::from_raw(p as u16)));
    }
}

/// Status kind for DSR. Only the operating status and cursor position
/// queries exist on the output side.
pub(crate) fn device_status(parameters: &[usize]) -> Result<DeviceStatusType, ParamError> {
    match parameters {
        [] => Err(ParamError::Missing),
        [5] => Ok(DeviceStatusType::OperatingStatus),
        [6] => Ok(DeviceStatusType::CursorPositionReport),
        [other] => Err(ParamError::Value(*other)),
        _ => Err(ParamError::Arity(parameters.len())),
    }
}

/// DA/DA2/DA3 accept no parameters or a single 0.
pub(crate) fn verify_device_attributes(parameters: &[usize]) -> Result<(), ParamError> {
    match parameters {
        [] | [0] => Ok(()),
        [other] => Err(ParamError::Value(*other)),
        _ => Err(ParamError::Arity(parameters.len())),
    }
}

pub(crate) fn verify_no_parameters(parameters: &[usize]) -> Result<(), ParamError> {
    if parameters.is_empty() {
        Ok(())
    } else {
        Err(ParamError::Arity(parameters.len()))
    }
}

/// Clear type for TBC; any single value rides through.
pub(crate) fn tab_clear_type(parameters: &[usize]) -> Result<usize, ParamError> {
    match parameters {
        [] => Ok(DEFAULT_TAB_CLEAR_TYPE),
        [value] => Ok(*value),
        _ => Err(ParamError::Arity(parameters.len())),
    }
}

/// Function code for DTTERM window manipulation. Only the refresh and
/// character resize functions are let through.
pub(crate) fn window_manipulation_type(
    parameters: &[usize],
) -> Result<WindowManipulationType, ParamError> {
    match parameters.first().copied() {
        None => Err(ParamError::Missing),
        Some(7) => Ok(WindowManipulationType::RefreshWindow),
        Some(8) => Ok(WindowManipulationType::ResizeWindowInCharacters),
        Some(other) => Err(ParamError::Value(other)),
    }
}

/// Cursor style for DECSCUSR; empty means the user default.
pub(crate) fn cursor_style(parameters: &[usize]) -> Result<CursorStyle, ParamError> {
    match parameters {
        [] => Ok(CursorStyle::default()),
        [raw] => Ok(CursorStyle::from_raw(*raw)),
        _ => Err(ParamError::Arity(parameters.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::NamedPrivateMode;
    use crate::sgr::NamedGraphicsOption;

    #[test]
    fn distances_default_and_promote_zero() {
        let cases: Vec<(&[usize], Result<usize, ParamError>)> = vec![
            (&[], Ok(1)),
            (&[0], Ok(1)),
            (&[1], Ok(1)),
            (&[5], Ok(5)),
            (&[1024], Ok(1024)),
            (&[2, 3], Err(ParamError::Arity(2))),
        ];

        for (parameters, expected) in cases {
            assert_eq!(cursor_distance(parameters), expected);
            assert_eq!(scroll_distance(parameters), expected);
            assert_eq!(tab_distance(parameters), expected);
            assert_eq!(repeat_count(parameters), expected);
        }
    }

    #[test]
    fn xy_position_defaults_each_coordinate() {
        let cases: Vec<(&[usize], Result<(usize, usize), ParamError>)> = vec![
            (&[], Ok((1, 1))),
            (&[7], Ok((7, 1))),
            (&[0, 5], Ok((1, 5))),
            (&[5, 0], Ok((5, 1))),
            (&[3, 4], Ok((3, 4))),
            (&[1, 2, 3], Err(ParamError::Arity(3))),
        ];

        for (parameters, expected) in cases {
            assert_eq!(xy_position(parameters), expected);
        }
    }

    #[test]
    fn margins_accept_partial_pairs_and_reject_inverted_ones() {
        assert_eq!(top_bottom_margins(&[]), Ok((0, 0)));
        assert_eq!(top_bottom_margins(&[3]), Ok((3, 0)));
        assert_eq!(top_bottom_margins(&[0, 3]), Ok((0, 3)));
        assert_eq!(top_bottom_margins(&[3, 10]), Ok((3, 10)));
        assert_eq!(
            top_bottom_margins(&[10, 3]),
            Err(ParamError::InvertedMargins { top: 10, bottom: 3 })
        );
        assert_eq!(top_bottom_margins(&[1, 2, 3]), Err(ParamError::Arity(3)));
    }

    #[test]
    fn erase_operation_accepts_the_four_kinds() {
        assert_eq!(erase_operation(&[]), Ok(EraseType::ToEnd));
        assert_eq!(erase_operation(&[0]), Ok(EraseType::ToEnd));
        assert_eq!(erase_operation(&[1]), Ok(EraseType::FromBeginning));
        assert_eq!(erase_operation(&[2]), Ok(EraseType::All));
        assert_eq!(erase_operation(&[3]), Ok(EraseType::Scrollback));
        assert_eq!(erase_operation(&[9]), Err(ParamError::Value(9)));
        assert_eq!(erase_operation(&[0, 1]), Err(ParamError::Arity(2)));
    }

    #[test]
    fn private_modes_require_at_least_one() {
        assert_eq!(private_modes(&[]), Err(ParamError::Missing));
        assert_eq!(
            private_modes(&[25, 1049, 4242]),
            Ok(vec![
                NamedPrivateMode::ShowCursor.into(),
                NamedPrivateMode::AlternateScreenBuffer.into(),
                PrivateMode::Unknown(4242),
            ])
        );
    }

    #[test]
    fn graphics_options_default_to_off() {
        let mut options = Vec::new();
        graphics_options(&[], &mut options);
        assert_eq!(options, vec![GraphicsOption::default()]);

        options.clear();
        graphics_options(&[1, 31, 4242], &mut options);
        assert_eq!(
            options,
            vec![
                NamedGraphicsOption::BoldBright.into(),
                NamedGraphicsOption::ForegroundRed.into(),
                GraphicsOption::Unknown(4242),
            ]
        );
    }

    #[test]
    fn device_status_rejects_everything_but_os_and_cpr() {
        assert_eq!(device_status(&[5]), Ok(DeviceStatusType::OperatingStatus));
        assert_eq!(device_status(&[6]), Ok(DeviceStatusType::CursorPositionReport));
        assert_eq!(device_status(&[]), Err(ParamError::Missing));
        assert_eq!(device_status(&[7]), Err(ParamError::Value(7)));
        assert_eq!(device_status(&[5, 6]), Err(ParamError::Arity(2)));
    }

    #[test]
    fn device_attributes_accept_empty_or_single_zero() {
        assert_eq!(verify_device_attributes(&[]), Ok(()));
        assert_eq!(verify_device_attributes(&[0]), Ok(()));
        assert_eq!(verify_device_attributes(&[1]), Err(ParamError::Value(1)));
        assert_eq!(verify_device_attributes(&[0, 0]), Err(ParamError::Arity(2)));
    }

    #[test]
    fn window_manipulation_accepts_refresh_and_resize_only() {
        assert_eq!(
            window_manipulation_type(&[7]),
            Ok(WindowManipulationType::RefreshWindow)
        );
        assert_eq!(
            window_manipulation_type(&[8, 24, 80]),
            Ok(WindowManipulationType::ResizeWindowInCharacters)
        );
        assert_eq!(window_manipulation_type(&[]), Err(ParamError::Missing));
        assert_eq!(window_manipulation_type(&[1]), Err(ParamError::Value(1)));
    }

    #[test]
    fn cursor_style_defaults_and_passes_unknown_numbers() {
        assert_eq!(cursor_style(&[]), Ok(CursorStyle::UserDefault));
        assert_eq!(cursor_style(&[0]), Ok(CursorStyle::UserDefault));
        assert_eq!(cursor_style(&[2]), Ok(CursorStyle::SteadyBlock));
        assert_eq!(cursor_style(&[6]), Ok(CursorStyle::SteadyBar));
        assert_eq!(cursor_style(&[9]), Ok(CursorStyle::Unknown(9)));
        assert_eq!(cursor_style(&[1, 2]), Err(ParamError::Arity(2)));
    }

    #[test]
    fn tab_clear_type_passes_values_through() {
        assert_eq!(tab_clear_type(&[]), Ok(0));
        assert_eq!(tab_clear_type(&[3]), Ok(3));
        assert_eq!(tab_clear_type(&[7]), Ok(7));
        assert_eq!(tab_clear_type(&[0, 3]), Err(ParamError::Arity(2)));
    }
}
