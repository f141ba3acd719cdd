//! Print bitboards as 8x8 binary grids.
//!
//! Usage:
//! `cargo run --bin printbb -- 0xFF00 18446744073709551615`
//! `cargo run --bin printbb -- --truncate 0x1_0000_0000_0000_0001`
//! `cargo run --bin printbb -- --random 3 --seed 42 --verbose`
//!
//! `--legacy-mask` applies the defective `2^64` mask, which renders all zeros.

use std::io::{self, ErrorKind, Write};

use bitboard_print::utils::bitboard_literal::parse_bitboard_literal;
use bitboard_print::utils::bitboard_sample::sample_bitboards;
use bitboard_print::utils::debug_log::log_bitboard_stderr;
use bitboard_print::utils::render_bitboard::write_bitboard;
use bitboard_print::utils::render_config::{
    bitboard_from_wide, MaskMode, OverflowPolicy, RenderConfig,
};

const MAX_RANDOM_BOARDS: usize = 4096;

const USAGE: &str =
    "usage: printbb [--legacy-mask] [--truncate] [--verbose] [--random N [--seed S]] <value>...";

#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    config: RenderConfig,
    verbose: bool,
    random_count: usize,
    seed: u64,
    literals: Vec<String>,
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} expects a value"))
}

fn parse_random_count(raw: &str) -> Result<usize, String> {
    let count = raw
        .parse::<u64>()
        .map_err(|e| format!("--random {raw}: {e}"))?;
    match usize::try_from(count) {
        Ok(count) if count <= MAX_RANDOM_BOARDS => Ok(count),
        _ => Err(format!(
            "--random {raw}: at most {MAX_RANDOM_BOARDS} boards can be sampled"
        )),
    }
}

fn parse_cli(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "--legacy-mask" => cli.config.mask_mode = MaskMode::LegacyHighBit,
            "--truncate" => cli.config.overflow = OverflowPolicy::Truncate,
            "--verbose" | "-v" => cli.verbose = true,
            "--random" => {
                cli.random_count = parse_random_count(flag_value(args, i, arg)?)?;
                i += 1;
            }
            "--seed" => {
                let raw = flag_value(args, i, arg)?;
                cli.seed = raw.parse::<u64>().map_err(|e| format!("--seed {raw}: {e}"))?;
                i += 1;
            }
            // Negative literals such as `-7` fall through to the sign check.
            _ if arg.starts_with("--") => return Err(format!("unknown flag {arg}\n{USAGE}")),
            _ => cli.literals.push(arg.to_owned()),
        }
        i += 1;
    }

    Ok(cli)
}

fn collect_boards(cli: &CliArgs) -> Result<Vec<(String, u64)>, String> {
    let mut boards = Vec::new();

    for literal in &cli.literals {
        let wide = parse_bitboard_literal(literal).map_err(|e| e.to_string())?;
        let bitboard = bitboard_from_wide(wide, &cli.config).map_err(|e| e.to_string())?;
        boards.push((literal.clone(), bitboard));
    }

    for (i, value) in sample_bitboards(cli.random_count, cli.seed)
        .into_iter()
        .enumerate()
    {
        let bitboard =
            bitboard_from_wide(value as i128, &cli.config).map_err(|e| e.to_string())?;
        boards.push((format!("random[{i}] seed={}", cli.seed), bitboard));
    }

    Ok(boards)
}

fn write_boards<W: Write>(out: &mut W, boards: &[(String, u64)], verbose: bool) -> io::Result<()> {
    for (i, (label, bitboard)) in boards.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        if verbose {
            log_bitboard_stderr(label, *bitboard);
        }
        write_bitboard(out, *bitboard)?;
    }
    out.flush()
}

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_cli(&args)?;

    let boards = collect_boards(&cli)?;
    if boards.is_empty() {
        return Err(USAGE.to_owned());
    }

    let stdout = io::stdout();
    let mut lock = stdout.lock();
    match write_boards(&mut lock, &boards, cli.verbose) {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(format!("writing to stdout: {e}")),
        Ok(()) => Ok(()),
    }
}
