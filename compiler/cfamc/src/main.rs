//! cfam CLI
//!
//! Character-stream scanner for C-family source text.

use std::fmt::Display;
use std::io;

use cfamc::commands::{parse_keywords_options, parse_lex_options, run_keywords, run_lex};

fn main() {
    cfamc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let options = parse_lex_options(&args[2..]).unwrap_or_else(|e| {
                eprintln!("error: {e}");
                eprintln!("Usage: cfam lex <file|-> [options]");
                std::process::exit(1);
            });
            if let Err(e) = run_lex(&options, io::stdout().lock()) {
                fail(e);
            }
        }
        "keywords" => {
            let config = parse_keywords_options(&args[2..]).unwrap_or_else(|e| {
                eprintln!("error: {e}");
                eprintln!("Usage: cfam keywords [--keywords=<path>] [--null=<word>] [--booleans=<true>,<false>]");
                std::process::exit(1);
            });
            if let Err(e) = run_keywords(&config, io::stdout().lock()) {
                fail(e);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("cfam {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn fail(error: impl Display) -> ! {
    eprintln!("error: {error}");
    std::process::exit(1);
}

fn print_usage() {
    println!("cfam: character-stream scanner for C-family source text");
    println!();
    println!("Usage: cfam <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file|->         Print the token stream as (KIND lexeme) lines");
    println!("  keywords             Print the active reserved-word list");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Keyword options (lex, keywords):");
    println!("  --keywords=<path>            Word list replacing the built-in keywords");
    println!("  --null=<word>                Spelling of the null literal (default: null)");
    println!("  --booleans=<true>,<false>    Spellings of the boolean literals");
    println!();
    println!("Lex options:");
    println!("  --summary           Print token counts per kind instead of tokens");
    println!("  --deny-errors       Exit with status 1 if any malformed token is found");
    println!();
    println!("Examples:");
    println!("  cfam lex Program.cs");
    println!("  cat Program.cs | cfam lex -");
    println!("  cfam lex main.toy --keywords=toy.words --null=nil");
    println!("  RUST_LOG=cfam_lexer_core=trace cfam lex Program.cs --summary");
}
