use serde::Serialize;

use crate::operand::ImmField;

/// Coarse classification of an [`AsmError`], handy for matching in callers
/// and for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    Lex,
    InvalidRegister,
    InvalidImmediate,
    ImmediateOutOfRange,
    UnknownMnemonic,
    ArityMismatch,
    InvalidOperand,
    UnknownDirective,
}

/// A line-scoped assembly error. None of these abort a run; the facade
/// collects them into [`Diagnostic`]s.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    #[error("malformed operand list: {detail}")]
    Lex { detail: String },
    #[error("invalid register `{token}`")]
    InvalidRegister { token: String },
    #[error("invalid immediate `{token}`")]
    InvalidImmediate { token: String },
    #[error("immediate {value} does not fit the {field}")]
    ImmediateOutOfRange { value: i64, field: ImmField },
    #[error("unknown mnemonic `{mnemonic}`")]
    UnknownMnemonic { mnemonic: String },
    #[error("`{mnemonic}` takes {expected} operand(s), found {found}")]
    ArityMismatch {
        mnemonic: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("invalid operand `{token}`, expected {expected}")]
    InvalidOperand {
        token: String,
        expected: &'static str,
    },
    #[error("unknown assembler directive `{directive}`")]
    UnknownDirective { directive: String },
}

impl AsmError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AsmError::Lex { .. } => ErrorKind::Lex,
            AsmError::InvalidRegister { .. } => ErrorKind::InvalidRegister,
            AsmError::InvalidImmediate { .. } => ErrorKind::InvalidImmediate,
            AsmError::ImmediateOutOfRange { .. } => ErrorKind::ImmediateOutOfRange,
            AsmError::UnknownMnemonic { .. } => ErrorKind::UnknownMnemonic,
            AsmError::ArityMismatch { .. } => ErrorKind::ArityMismatch,
            AsmError::InvalidOperand { .. } => ErrorKind::InvalidOperand,
            AsmError::UnknownDirective { .. } => ErrorKind::UnknownDirective,
        }
    }
}

/// An error tied to the source line that produced it.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {error} (`{}`)", .text.trim())]
pub struct Diagnostic {
    /// 1-based source line number.
    pub line: usize,
    /// The raw line as it appeared in the source.
    pub text: String,
    pub error: AsmError,
}

impl Diagnostic {
    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }
}

/// A failed run: every diagnostic, in source order, and no machine code.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("assembly failed with {} error(s):\n{}", .diagnostics.len(), join_lines(.diagnostics))]
pub struct AssemblyFailure {
    pub diagnostics: Vec<Diagnostic>,
}

impl AssemblyFailure {
    pub fn kinds(&self) -> Vec<ErrorKind> {
        self.diagnostics.iter().map(Diagnostic::kind).collect()
    }
}

fn join_lines(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| format!("  {d}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_lists_every_diagnostic() {
        let failure = AssemblyFailure {
            diagnostics: vec![
                Diagnostic {
                    line: 2,
                    text: "  frob $1 ".into(),
                    error: AsmError::UnknownMnemonic { mnemonic: "frob".into() },
                },
                Diagnostic {
                    line: 5,
                    text: "add $1, $2".into(),
                    error: AsmError::ArityMismatch { mnemonic: "add", expected: 3, found: 2 },
                },
            ],
        };
        let text = failure.to_string();
        assert!(text.starts_with("assembly failed with 2 error(s):"));
        assert!(text.contains("line 2: unknown mnemonic `frob` (`frob $1`)"));
        assert!(text.contains("line 5: `add` takes 3 operand(s), found 2"));
        assert_eq!(failure.kinds(), vec![ErrorKind::UnknownMnemonic, ErrorKind::ArityMismatch]);
    }
}
