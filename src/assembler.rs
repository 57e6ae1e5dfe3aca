use serde::Serialize;
use tracing::{debug, trace};

use crate::config::Options;
use crate::encoder::encode_statement;
use crate::error::{AsmError, AssemblyFailure, Diagnostic};
use crate::hazard;
use crate::lexer::lex_line;
use crate::program::{EncodedInstruction, Program};
use crate::render::render;

/// A successful run: the final word sequence and its rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assembly {
    pub program: Program,
    pub text: String,
}

/// What one source line contributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct LineOutput {
    word: Option<u32>,
    /// `Some(on)` when the line carries a `pragma nops_on|nops_off`.
    nops: Option<bool>,
}

fn parse_pragma(comment: &str) -> Result<Option<bool>, AsmError> {
    let mut words = comment.split_whitespace();
    if words.next() != Some("pragma") {
        return Ok(None);
    }
    let directive = words.collect::<Vec<_>>().join(" ");
    match directive.as_str() {
        "nops_on" => Ok(Some(true)),
        "nops_off" => Ok(Some(false)),
        _ => Err(AsmError::UnknownDirective { directive }),
    }
}

fn assemble_line(text: &str) -> Result<LineOutput, AsmError> {
    let Some(line) = lex_line(text)? else {
        return Ok(LineOutput::default());
    };
    let word = line.statement.as_ref().map(encode_statement).transpose()?;
    let nops = match line.comment {
        Some(c) => parse_pragma(c)?,
        None => None,
    };
    Ok(LineOutput { word, nops })
}

/// Assembles a whole program.
///
/// Every line is processed even after a failure so the caller sees all
/// mistakes at once; any failure fails the run and no words are returned.
/// A `; pragma nops_on|nops_off` comment overrides `opts` for the whole
/// run, the last one winning.
pub fn assemble(source: &str, opts: &Options) -> Result<Assembly, AssemblyFailure> {
    let mut program = Program::new();
    let mut diagnostics = Vec::new();
    let mut add_nops = opts.add_nops();

    for (idx, text) in source.lines().enumerate() {
        let line = idx + 1;
        match assemble_line(text) {
            Ok(out) => {
                if let Some(word) = out.word {
                    trace!(line, "encoded {word:#010x}");
                    program.push(EncodedInstruction::new(word, line));
                }
                if let Some(on) = out.nops {
                    debug!(line, on, "nops pragma");
                    add_nops = on;
                }
            }
            Err(error) => diagnostics.push(Diagnostic { line, text: text.to_string(), error }),
        }
    }

    if !diagnostics.is_empty() {
        debug!(errors = diagnostics.len(), "assembly failed");
        return Err(AssemblyFailure { diagnostics });
    }

    let program = hazard::apply(program, add_nops);
    let text = render(&program, opts.render_mode());
    debug!(words = program.len(), add_nops, "assembled");
    Ok(Assembly { program, text })
}
