use crate::models::Page;

/// Decode an opaque pagination token into the offset it points at
///
/// Tokens are the decimal offset of the next page. An absent or empty token
/// means the first page. Offsets must fit a non-negative SQL BIGINT.
pub fn decode_token(token: Option<&str>) -> Result<usize, String> {
    match token.map(str::trim) {
        None | Some("") => Ok(0),
        Some(raw) => raw
            .parse::<i64>()
            .ok()
            .filter(|offset| *offset >= 0)
            .and_then(|offset| usize::try_from(offset).ok())
            .ok_or_else(|| raw.to_string()),
    }
}

pub fn encode_token(offset: usize) -> String {
    offset.to_string()
}

/// Token for the page after `page`, given how many rows it returned
///
/// A short page means the end was reached.
pub fn next_token(page: Page, returned: usize) -> Option<String> {
    (returned >= page.limit).then(|| encode_token(page.next_offset()))
}
