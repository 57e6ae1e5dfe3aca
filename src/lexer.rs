use crate::error::AsmError;

/// Characters that start a comment running to end of line.
pub const COMMENT_MARKERS: &[char] = &[';', '#'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement<'a> {
    /// Lower-cased mnemonic.
    pub mnemonic: String,
    /// Trimmed operand tokens, in source order.
    pub operands: Vec<&'a str>,
}

/// A non-empty source line: an instruction, a comment, or both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line<'a> {
    pub statement: Option<Statement<'a>>,
    pub comment: Option<&'a str>,
}

/// Splits one source line. Blank lines yield `Ok(None)`.
pub fn lex_line(text: &str) -> Result<Option<Line<'_>>, AsmError> {
    let (code, comment) = match text.find(COMMENT_MARKERS) {
        Some(p) => (&text[..p], Some(text[p + 1..].trim())),
        None => (text, None),
    };
    let code = code.trim();
    if code.is_empty() {
        return Ok(comment.map(|c| Line { statement: None, comment: Some(c) }));
    }

    let (mnemonic, rest) = match code.split_once(char::is_whitespace) {
        Some((m, r)) => (m, r.trim()),
        None => (code, ""),
    };
    let operands: Vec<&str> = if rest.is_empty() {
        Vec::new()
    } else {
        rest.split(',').map(str::trim).collect()
    };
    if let Some(pos) = operands.iter().position(|o| o.is_empty()) {
        return Err(AsmError::Lex {
            detail: format!("operand {} of {} is empty", pos + 1, operands.len()),
        });
    }

    Ok(Some(Line {
        statement: Some(Statement { mnemonic: mnemonic.to_ascii_lowercase(), operands }),
        comment,
    }))
}
