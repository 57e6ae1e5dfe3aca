use anyhow::Result;
use clap::{Parser, ValueEnum};

use std::fmt::Write as _;
use std::path::Path;

use mips_asm::decoder::Decoder;
use mips_asm::disasm::fmt_decoded;
use mips_asm::isa::mips32::Mips32Decoder;
use mips_disasm::{load_listing, Image};

#[derive(Parser, Debug)]
#[command(author, version, about = "Disassemble a mips-asm listing", long_about = None)]
struct Cli {
    /// Address of the first word (hex or dec)
    #[arg(long, default_value = "0")]
    base: String,
    /// Listing path: plain hex words or a VHDL aggregate
    #[arg(value_name = "LISTING")]
    input: String,
    /// Show the raw instruction word
    #[arg(long)]
    show_words: bool,
    /// Output format: text or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write output to file instead of stdout
    #[arg(long, value_name = "FILE")]
    out: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat { Text, Json }

#[derive(Debug, Clone, serde::Serialize)]
struct InsnOut { addr: u32, word: u32, text: Option<String> }

fn parse_u32(s: &str) -> Result<u32> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Ok(u32::from_str_radix(hex, 16)?)
    } else {
        Ok(s.parse::<u32>()?)
    }
}

fn disassemble(img: &Image) -> Vec<InsnOut> {
    let dec = Mips32Decoder::new();
    img.iter()
        .map(|(addr, word)| InsnOut { addr, word, text: dec.decode(word).map(|d| fmt_decoded(&d)) })
        .collect()
}

fn render_text(insns: &[InsnOut], show_words: bool) -> String {
    let mut buf = String::new();
    for i in insns {
        let text = match &i.text {
            Some(t) => t.clone(),
            None => format!(".word {:#010x}", i.word),
        };
        if show_words {
            let _ = writeln!(buf, "{:#010x}: {:08x}  {}", i.addr, i.word, text);
        } else {
            let _ = writeln!(buf, "{:#010x}: {}", i.addr, text);
        }
    }
    buf
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let base = parse_u32(&cli.base)?;
    let img = load_listing(Path::new(&cli.input), base)?;
    let insns = disassemble(&img);

    let buf = match cli.format {
        OutputFormat::Text => render_text(&insns, cli.show_words),
        OutputFormat::Json => serde_json::to_string_pretty(&insns)?,
    };
    if let Some(path) = cli.out { std::fs::write(path, buf)?; } else { print!("{}", buf); }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_u32_hex_and_dec() {
        assert_eq!(parse_u32("0x10").unwrap(), 0x10);
        assert_eq!(parse_u32("16").unwrap(), 16);
        assert!(parse_u32("zz").is_err());
    }

    #[test]
    fn listing_renders_addresses_and_unknown_words() {
        let img = Image { base: 0x40, words: vec![0x2001_0005, 0xFC00_0000] };
        let text = render_text(&disassemble(&img), true);
        assert_eq!(
            text,
            "0x00000040: 20010005  addi $1, $0, 0x5\n0x00000044: fc000000  .word 0xfc000000\n"
        );
    }
}
