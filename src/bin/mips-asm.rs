use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use mips_asm::{assemble, ErrorKind, Flags, Options, VhdlLayout};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Assemble a MIPS subset into instruction-memory words"
)]
struct Opts {
    /// Input assembly file (reads stdin when omitted)
    #[arg(value_name = "ASMFILE")]
    input: Option<PathBuf>,
    /// Insert four NOPs after every instruction
    #[arg(long)]
    add_nops: bool,
    /// Render as a VHDL array aggregate
    #[arg(long)]
    as_vhdl: bool,
    /// Emit VHDL elements one byte at a time (implies --as-vhdl)
    #[arg(long)]
    bytes: bool,
    /// Comma-separated option list, e.g. "add_nops, as_vhdl"
    #[arg(long, value_name = "LIST")]
    options: Option<String>,
    /// Load options from a JSON file ({"flags": "ADD_NOPS | AS_VHDL", "layout": "Bytes"})
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Output format: text or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write output to file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct DiagnosticOut {
    line: usize,
    text: String,
    kind: ErrorKind,
    detail: String,
}

fn build_options(opts: &Opts) -> Result<Options> {
    let mut options = match &opts.config {
        Some(path) => {
            let txt = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str::<Options>(&txt)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => Options::default(),
    };
    if let Some(list) = &opts.options {
        let listed: Options = list.parse()?;
        options.flags |= listed.flags;
        if listed.layout == VhdlLayout::Bytes {
            options.layout = VhdlLayout::Bytes;
        }
    }
    options.flags.set(Flags::ADD_NOPS, options.add_nops() || opts.add_nops);
    options.flags.set(Flags::AS_VHDL, options.as_vhdl() || opts.as_vhdl || opts.bytes);
    if opts.bytes {
        options.layout = VhdlLayout::Bytes;
    }
    Ok(options)
}

fn emit(out: &Option<PathBuf>, text: &str) -> Result<()> {
    match out {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("writing {}", path.display()))?,
        None => println!("{text}"),
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();
    let options = build_options(&opts)?;

    let source = match &opts.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    match (assemble(&source, &options), opts.format) {
        (Ok(assembly), OutputFormat::Text) => emit(&opts.out, &assembly.text),
        (Ok(assembly), OutputFormat::Json) => {
            emit(&opts.out, &serde_json::to_string_pretty(&assembly)?)
        }
        (Err(failure), OutputFormat::Text) => Err(failure.into()),
        (Err(failure), OutputFormat::Json) => {
            let diags: Vec<DiagnosticOut> = failure
                .diagnostics
                .iter()
                .map(|d| DiagnosticOut {
                    line: d.line,
                    text: d.text.clone(),
                    kind: d.kind(),
                    detail: d.error.to_string(),
                })
                .collect();
            emit(&opts.out, &serde_json::to_string_pretty(&diags)?)?;
            anyhow::bail!("assembly failed with {} error(s)", diags.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_for(args: &[&str]) -> Options {
        let opts = Opts::try_parse_from(std::iter::once("mips-asm").chain(args.iter().copied())).unwrap();
        build_options(&opts).unwrap()
    }

    #[test]
    fn bytes_flag_implies_vhdl() {
        let o = options_for(&["--bytes"]);
        assert!(o.as_vhdl() && !o.add_nops());
        assert_eq!(o.layout, VhdlLayout::Bytes);
    }

    #[test]
    fn flags_and_option_list_merge() {
        let o = options_for(&["--add-nops", "--options", "vhdl_bytes"]);
        assert_eq!(o.flags, Flags::ADD_NOPS | Flags::AS_VHDL);
        assert_eq!(o.layout, VhdlLayout::Bytes);

        assert_eq!(options_for(&[]), Options::default());
    }

    #[test]
    fn config_file_is_the_base_layer() {
        let path = std::env::temp_dir().join("_mips_asm_options.json");
        std::fs::write(&path, r#"{"layout":"Bytes"}"#).unwrap();
        let o = options_for(&["--config", path.to_str().unwrap(), "--as-vhdl"]);
        let _ = std::fs::remove_file(&path);
        assert_eq!(o.flags, Flags::AS_VHDL);
        assert_eq!(o.layout, VhdlLayout::Bytes);
    }

    #[test]
    fn unknown_listed_option_is_an_error() {
        let opts = Opts::try_parse_from(["mips-asm", "--options", "add_nops, colour"]).unwrap();
        assert!(build_options(&opts).is_err());
    }
}
