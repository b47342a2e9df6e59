//! syntree CLI entry point.

use std::env;
use std::process::ExitCode;
use std::str::FromStr;

use syntree_foundation::LanguageCode;
use syntree_parser::ParserConfig;
use syntree_runtime::{
    OutputFormat, Repl, Reply, Session, SessionConfig, TaggerConfig, render_findings,
    setup_logging,
};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    sentences: Vec<String>,
    language: Option<LanguageCode>,
    json: bool,
    seed: Option<u64>,
    no_metadata: bool,
    suffix_tagger: bool,
    batch_mode: bool,
    verbosity: u8,
    show_help: bool,
    show_version: bool,
}

impl CliConfig {
    fn session_config(&self) -> SessionConfig {
        let mut parser = ParserConfig::default().with_metadata(!self.no_metadata);
        if let Some(language) = self.language {
            parser = parser.with_language(language);
        }
        if let Some(seed) = self.seed {
            parser = parser.with_seed(seed);
        }

        let mut config = SessionConfig::default().with_parser(parser);
        if self.json {
            config = config.with_output(OutputFormat::Json);
        }
        if self.suffix_tagger {
            config = config.with_suffix_fallback(Some(TaggerConfig::default()));
        }
        config
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--json" => config.json = true,
            "--no-metadata" => config.no_metadata = true,
            "--suffix-tagger" => config.suffix_tagger = true,
            "-d" | "--debug" => config.verbosity = config.verbosity.saturating_add(1),
            "-l" | "--lang" => {
                i += 1;
                let Some(code) = args.get(i) else {
                    return Err("--lang requires a value".into());
                };
                config.language = Some(LanguageCode::from_str(code)?);
            }
            "--seed" => {
                i += 1;
                let Some(seed) = args.get(i) else {
                    return Err("--seed requires a value".into());
                };
                config.seed = Some(
                    seed.parse()
                        .map_err(|_| format!("invalid --seed value: {seed}"))?,
                );
            }
            arg if arg.starts_with('-') && arg.len() > 1 && arg.chars().skip(1).all(|c| c == 'd') => {
                let extra = u8::try_from(arg.len() - 1).unwrap_or(u8::MAX);
                config.verbosity = config.verbosity.saturating_add(extra);
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            sentence => config.sentences.push(sentence.to_string()),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("syntree {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    setup_logging(config.verbosity);

    let mut session = Session::with_config(config.session_config());

    // Sentences given on the command line are parsed before the REPL starts.
    let mut failed = false;
    for sentence in &config.sentences {
        match session.execute(sentence) {
            Ok(Reply::Output(text)) => print!("{text}"),
            Ok(Reply::Quit) => return Ok(()),
            Err(e) => {
                failed = true;
                eprint!("\x1b[31m{}\x1b[0m", render_findings(&e.to_findings()));
            }
        }
    }

    if config.batch_mode {
        if failed {
            return Err("one or more sentences failed to parse".into());
        }
        return Ok(());
    }

    let mut repl = Repl::new()?.with_session(session);
    if !config.sentences.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1msyntree\x1b[0m - Rule-based syntax trees for short sentences

\x1b[1mUSAGE:\x1b[0m
    syntree [OPTIONS] [SENTENCES...]

\x1b[1mARGUMENTS:\x1b[0m
    [SENTENCES...]    Sentences to parse before starting the REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -b, --batch          Parse the given sentences and exit (no REPL)
    -l, --lang CODE      Language: en, es, ru, kk (default en)
        --json           Print trees and findings as JSON
        --seed N         Seed for node ids (default 0)
        --no-metadata    Leave language and POS metadata off nodes
        --suffix-tagger  Guess unknown English words from their suffix
    -d                   More diagnostics on stderr (repeat up to -ddd)

\x1b[1mEXAMPLES:\x1b[0m
    syntree                              Start interactive REPL
    syntree -b \"the cat runs\"            Parse one sentence and exit
    syntree -l ru -b \"кошка спит\"         Parse Russian
    syntree --json -b \"the big dog\"       Print JSON

\x1b[1mREPL COMMANDS:\x1b[0m
    :help                Show all commands
    :show                Print the current tree with node ids
    :undo                Revert the last change
    Ctrl+D               Exit REPL
    Ctrl+C               Cancel current input"
    );
}
