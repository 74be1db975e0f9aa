//! Command-line driver for the expression validator
//!
//! Usage:
//!   exprcheck check `<input>` [--file]                    - Validate an expression
//!   exprcheck tokens `<input>` [--file] [--format `<format>`] - Print the token stream

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::fs;
use std::process;

use exprcheck::expr::lexer::tokenize;
use exprcheck::expr::messages;
use exprcheck::expr::processor::{render_tokens, validate, OutputFormat};

fn main() {
    let matches = Command::new("exprcheck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A validator for a small expression grammar")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("check")
                .about("Validate an expression")
                .arg(
                    Arg::new("input")
                        .help("Expression text, or a path with --file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("file")
                        .long("file")
                        .action(ArgAction::SetTrue)
                        .help("Treat the input as a file path"),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the token stream")
                .arg(
                    Arg::new("input")
                        .help("Expression text, or a path with --file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("file")
                        .long("file")
                        .action(ArgAction::SetTrue)
                        .help("Treat the input as a file path"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('simple' or 'json')")
                        .default_value("simple"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("check", check_matches)) => {
            let input = read_input(check_matches);
            handle_check_command(&input);
        }
        Some(("tokens", tokens_matches)) => {
            let input = read_input(tokens_matches);
            let format = tokens_matches.get_one::<String>("format").unwrap();
            handle_tokens_command(&input, format);
        }
        _ => unreachable!(),
    }
}

/// Resolve the positional input, reading it from disk when --file is set.
fn read_input(matches: &ArgMatches) -> String {
    let input = matches.get_one::<String>("input").unwrap();
    if matches.get_flag("file") {
        match fs::read_to_string(input) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error: failed to read {input}: {e}");
                process::exit(1);
            }
        }
    } else {
        input.clone()
    }
}

/// Handle the check command
fn handle_check_command(input: &str) {
    match validate(input) {
        Ok(()) => println!("{}", messages::VALID_MESSAGE),
        Err(e) => {
            println!("Ошибка: {}", messages::russian(&e));
            process::exit(1);
        }
    }
}

/// Handle the tokens command
fn handle_tokens_command(input: &str, format: &str) {
    let format = match OutputFormat::from_string(format) {
        Ok(format) => format,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let tokens = match tokenize(input) {
        Ok(tokens) => tokens,
        Err(e) => {
            println!("Ошибка: {}", messages::russian(&e));
            process::exit(1);
        }
    };

    match render_tokens(&tokens, format) {
        Ok(dump) => println!("{dump}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
