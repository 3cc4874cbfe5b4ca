//! OSC payload parsing.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use memchr::memchr;
use thiserror::Error;

use crate::color::{self, PackedColor};

/// OSC code numbers recognized by the output engine.
pub mod codes {
    pub const SET_ICON_AND_WINDOW_TITLE: usize = 0;
    pub const SET_WINDOW_ICON: usize = 1;
    pub const SET_WINDOW_TITLE: usize = 2;
    pub const SET_COLOR: usize = 4;
    pub const HYPERLINK: usize = 8;
    pub const SET_FOREGROUND_COLOR: usize = 10;
    pub const SET_BACKGROUND_COLOR: usize = 11;
    pub const SET_CURSOR_COLOR: usize = 12;
    pub const SET_CLIPBOARD: usize = 52;
    pub const RESET_CURSOR_COLOR: usize = 112;
}

/// Why an OSC payload was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OscError {
    #[error("empty window title")]
    EmptyTitle,
    #[error("malformed color spec")]
    BadColorSpec,
    #[error("malformed color table entry")]
    BadColorTable,
    #[error("clipboard payload is not `Pc;Pd` with base64 data")]
    BadClipboard,
    #[error("hyperlink payload has no `;` separator")]
    BadHyperlink,
}

/// Title for OSC 0/1/2: the payload verbatim. An empty payload is
/// rejected rather than clearing the title.
pub(crate) fn parse_title(payload: &str) -> Result<&str, OscError> {
    if payload.is_empty() {
        Err(OscError::EmptyTitle)
    } else {
        Ok(payload)
    }
}

/// Color-table entry for OSC 4: `<index>;rgb:<spec>`.
pub(crate) fn parse_color_table_entry(payload: &str) -> Result<(usize, PackedColor), OscError> {
    color::parse_color_table_entry(payload).ok_or(OscError::BadColorTable)
}

/// Bare color spec for OSC 10/11/12.
pub(crate) fn parse_color_spec(payload: &str) -> Result<PackedColor, OscError> {
    color::parse_color_spec(payload).ok_or(OscError::BadColorSpec)
}

/// What an OSC 52 payload asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ClipboardRequest {
    /// `Pd` was `?`: send the clipboard contents back.
    Query,
    /// Store the decoded content.
    Set(String),
}

/// Clipboard payload `Pc;Pd`. The selector `Pc` is ignored; `Pd` is
/// either `?` or base64 data decoding to UTF-8.
pub(crate) fn parse_clipboard(payload: &str) -> Result<ClipboardRequest, OscError> {
    let separator = memchr(b';', payload.as_bytes()).ok_or(OscError::BadClipboard)?;
    let data = &payload[separator + 1..];
    if data == "?" {
        return Ok(ClipboardRequest::Query);
    }

    let decoded = BASE64.decode(data).map_err(|_| OscError::BadClipboard)?;
    String::from_utf8(decoded)
        .map(ClipboardRequest::Set)
        .map_err(|_| OscError::BadClipboard)
}

/// A parsed OSC 8 payload. An empty URI closes the hyperlink.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct HyperlinkRequest {
    pub id: String,
    pub uri: String,
}

const HYPERLINK_ID_PARAMETER: &str = "id=";

/// Hyperlink payload `params;uri`. A lone `;` closes the link; otherwise
/// the URI is everything after the first separator and the id is whatever
/// follows `id=` in the params section.
pub(crate) fn parse_hyperlink(payload: &str) -> Result<HyperlinkRequest, OscError> {
    let separator = memchr(b';', payload.as_bytes()).ok_or(OscError::BadHyperlink)?;

    let mut request = HyperlinkRequest::default();
    if payload.len() != 1 {
        request.uri = payload[separator + 1..].to_string();
        let params = &payload[..separator];
        if let Some(id_pos) = params.find(HYPERLINK_ID_PARAMETER) {
            request.id = params[id_pos + HYPERLINK_ID_PARAMETER.len()..].to_string();
        }
    }
    Ok(request)
}
