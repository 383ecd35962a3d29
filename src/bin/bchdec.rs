//! bchdec - BCH decoder golden reference
//!
//! Decodes reliability blocks with hard or Chase soft-decision decoding and
//! replays hardware pattern files to produce or check expected answers.

use anyhow::{Context, Result};
use bchdec::golden::{compare_answers, parse_answers, run_golden};
use bchdec::pattern::{parse_reliability, read_file, PatternSet};
use bchdec::reporters::{format_element, ConsoleReporter, SilentReporter};
use bchdec::syndrome::{compute_syndromes, verify_codeword};
use bchdec::{BchCode, BchDecoder, DecodeMode, DecoderConfig, FieldRegistry, SUPPORTED_CODES};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::Path;

fn code_arg() -> Arg {
    Arg::new("code")
        .short('c')
        .long("code")
        .help("Code id: 1 = (63,51) m=6, 2 = (255,239) m=8, 3 = (1023,983) m=10")
        .value_name("ID")
        .value_parser(["1", "2", "3"])
}

fn mode_arg() -> Arg {
    Arg::new("mode")
        .short('m')
        .long("mode")
        .help("Decoding mode: hard or soft (Chase)")
        .value_name("MODE")
        .default_value("hard")
}

fn flips_arg() -> Arg {
    Arg::new("flips")
        .short('p')
        .long("flips")
        .help("Least reliable positions perturbed in soft mode")
        .value_name("P")
        .default_value("2")
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = Command::new("bchdec")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Binary BCH hard/soft-decision decoder (golden reference model)")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("decode")
                .visible_alias("d")
                .about("Decode one reliability block")
                .arg(
                    Arg::new("input")
                        .help("File of 64-digit reliability rows")
                        .required(true)
                        .index(1),
                )
                .arg(mode_arg())
                .arg(code_arg().help("Code id (default: run all three codes)"))
                .arg(flips_arg())
                .arg(
                    Arg::new("quiet")
                        .short('q')
                        .long("quiet")
                        .help("Quiet mode - only print the result")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("syndromes")
                .visible_alias("s")
                .about("Print the syndromes of one reliability block")
                .arg(
                    Arg::new("input")
                        .help("File of 64-digit reliability rows")
                        .required(true)
                        .index(1),
                )
                .arg(code_arg().required(true)),
        )
        .subcommand(
            Command::new("golden")
                .visible_alias("g")
                .about("Decode a pattern stream and produce or check answers")
                .arg(
                    Arg::new("patterns")
                        .help("Pattern file with every codeword's reliability rows")
                        .required(true)
                        .index(1),
                )
                .arg(mode_arg())
                .arg(code_arg())
                .arg(flips_arg())
                .arg(
                    Arg::new("pmode")
                        .long("pmode")
                        .help("Per-codeword mode list (0 hard, 1 soft)")
                        .value_name("FILE")
                        .requires("pcode"),
                )
                .arg(
                    Arg::new("pcode")
                        .long("pcode")
                        .help("Per-codeword code-tag list (01, 10, 11)")
                        .value_name("FILE")
                        .requires("pmode"),
                )
                .arg(
                    Arg::new("answers")
                        .short('a')
                        .long("answers")
                        .help("Expected answer file to compare against")
                        .value_name("FILE"),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Write produced answers to this file")
                        .value_name("FILE"),
                )
                .arg(
                    Arg::new("threads")
                        .short('t')
                        .long("threads")
                        .help("Number of CPU threads for computation (0 = auto-detect)")
                        .value_name("N")
                        .default_value("0"),
                )
                .arg(
                    Arg::new("no-parallel")
                        .long("no-parallel")
                        .help("Disable all parallel processing")
                        .action(ArgAction::SetTrue),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("decode", sub_matches)) => handle_decode(sub_matches),
        Some(("syndromes", sub_matches)) => handle_syndromes(sub_matches),
        Some(("golden", sub_matches)) => handle_golden(sub_matches),
        Some((cmd, _)) => {
            eprintln!("Unknown command: {}", cmd);
            std::process::exit(1);
        }
        None => {
            eprintln!("Error: No command specified");
            eprintln!("\nUse 'bchdec --help' for usage information");
            std::process::exit(1);
        }
    }
}

fn selected_code(matches: &ArgMatches) -> Result<Option<BchCode>> {
    matches
        .get_one::<String>("code")
        .map(|id| -> Result<BchCode> {
            let id: u8 = id.parse().context("Invalid code id")?;
            Ok(BchCode::from_id(id)?)
        })
        .transpose()
}

fn selected_mode(matches: &ArgMatches) -> Result<DecodeMode> {
    let mode = matches
        .get_one::<String>("mode")
        .map(String::as_str)
        .unwrap_or("hard");
    Ok(mode.parse()?)
}

fn handle_decode(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let quiet = matches.get_flag("quiet");
    let mode = selected_mode(matches)?;
    let config = DecoderConfig::from_args(matches);

    let reliability = parse_reliability(&read_file(Path::new(input))?)
        .with_context(|| format!("Failed to parse {}", input))?;
    let codes: Vec<BchCode> = match selected_code(matches)? {
        Some(code) => vec![code],
        None => SUPPORTED_CODES.to_vec(),
    };

    let registry = FieldRegistry::new();
    let reporter = ConsoleReporter::new(quiet);
    let mut all_succeeded = true;

    for code in codes {
        let field = registry.field(&code)?;
        let received = reliability.hard_decision(code.n);

        if !quiet {
            println!("{}", "=".repeat(70));
            println!(
                "BCH code {}: {}-decision, primitive polynomial {:#b}",
                code, mode, code.primitive
            );
            println!("{}", "=".repeat(70));
            let ones: Vec<usize> = (0..code.n).filter(|&j| received[j] == 1).collect();
            println!("Received polynomial r(X): {} ones", ones.len());
            if ones.len() <= 20 {
                println!("  Positions with 1: {:?}", ones);
            }
        }

        let decoder = BchDecoder::new(field, &code)?.with_config(config.clone());
        let result = decoder
            .decode_with_reporter(&received, mode, Some(&reliability), &reporter)
            .with_context(|| format!("Failed to decode with code {}", code))?;

        println!("Code {}: {}", code.id, result);
        if let Some(corrected) = &result.corrected {
            if verify_codeword(field, corrected, code.t) {
                println!("  Corrected codeword has all-zero syndromes");
            } else {
                println!("  Warning: corrected codeword still has nonzero syndromes");
            }
        }
        all_succeeded &= result.success;
    }

    if all_succeeded {
        Ok(())
    } else {
        std::process::exit(1);
    }
}

fn handle_syndromes(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let code = selected_code(matches)?.context("A code id is required")?;

    let reliability = parse_reliability(&read_file(Path::new(input))?)
        .with_context(|| format!("Failed to parse {}", input))?;
    let registry = FieldRegistry::new();
    let field = registry.field(&code)?;
    let received = reliability.hard_decision(code.n);
    let syndromes = compute_syndromes(field, &received, code.t);

    println!("Syndromes for code {}:", code);
    for (i, &s) in syndromes.iter().enumerate() {
        println!("  S_{} = {}", i + 1, format_element(field, s));
    }
    if syndromes.iter().all(|&s| s == 0) {
        println!("All syndromes are 0: no errors detected");
    }
    Ok(())
}

fn handle_golden(matches: &ArgMatches) -> Result<()> {
    let patterns = Path::new(
        matches
            .get_one::<String>("patterns")
            .expect("patterns is required"),
    );
    let config = DecoderConfig::from_args(matches);

    let set = match (
        matches.get_one::<String>("pmode"),
        matches.get_one::<String>("pcode"),
    ) {
        (Some(pmode), Some(pcode)) => {
            PatternSet::load_mixed(patterns, Path::new(pmode), Path::new(pcode))?
        }
        _ => {
            let code = selected_code(matches)?
                .context("Either --code or --pmode/--pcode must be given")?;
            PatternSet::load(patterns, code, selected_mode(matches)?)?
        }
    };
    println!("Loaded {} codewords from {}", set.len(), patterns.display());

    bchdec::config::configure_thread_pool(&config);
    let registry = FieldRegistry::new();
    let run = run_golden(&set, &registry, &config, &SilentReporter)
        .context("Golden run failed")?;
    print!("{}", run);

    if let Some(output) = matches.get_one::<String>("output") {
        run.write_answers(Path::new(output))?;
        println!("Answers written to {}", output);
    }

    let Some(answers) = matches.get_one::<String>("answers") else {
        return Ok(());
    };
    let expected = parse_answers(&read_file(Path::new(answers))?)
        .with_context(|| format!("Failed to parse {}", answers))?;
    let actual: Vec<usize> = parse_answers(&run.answer_lines().join("\n"))?;
    let comparison = compare_answers(&actual, &expected);
    print!("{}", comparison);

    if comparison.is_match() {
        Ok(())
    } else {
        std::process::exit(1);
    }
}
