//! Reads a rendered listing (plain or VHDL) back into words.

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ListingError {
    #[error("line {line}: invalid literal `{token}`")]
    InvalidLiteral { line: usize, token: String },
    #[error("line {line}: word literal `{token}` splits a byte group")]
    SplitByteGroup { line: usize, token: String },
    #[error("{count} trailing byte(s) do not make a whole word")]
    TrailingBytes { count: usize },
}

fn hex_digits(s: &str, max: usize) -> Option<u32> {
    if s.is_empty() || s.len() > max || !s.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(s, 16).ok()
}

fn quoted<'a>(token: &'a str, prefix: &str) -> Option<&'a str> {
    token.strip_prefix(prefix)?.strip_suffix('"')
}

pub fn parse_listing(text: &str) -> Result<Vec<u32>, ListingError> {
    let mut words = Vec::new();
    let mut pending: Vec<u8> = Vec::with_capacity(4);

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let body = raw.trim().trim_start_matches('(').trim_end_matches(')');
        for token in body.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let invalid = || ListingError::InvalidLiteral { line, token: token.to_string() };
            if let Some(digits) = quoted(token, "8ux\"") {
                let byte = hex_digits(digits, 2).ok_or_else(invalid)?;
                pending.push(byte as u8);
                if pending.len() == 4 {
                    words.push(u32::from_be_bytes([pending[0], pending[1], pending[2], pending[3]]));
                    pending.clear();
                }
                continue;
            }
            if !pending.is_empty() {
                return Err(ListingError::SplitByteGroup { line, token: token.to_string() });
            }
            let digits = quoted(token, "x\"")
                .or_else(|| token.strip_prefix("0x"))
                .unwrap_or(token);
            words.push(hex_digits(digits, 8).ok_or_else(invalid)?);
        }
    }

    if !pending.is_empty() {
        return Err(ListingError::TrailingBytes { count: pending.len() });
    }
    Ok(words)
}
