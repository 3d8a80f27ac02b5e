mod report;

use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;
use subseq::{Options, resolve_verbose_with};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> ExitCode {
    init_tracing();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    let res = resolve_verbose_with(&config.input, config.length, &config.options);
    report::print_run(&res, config.options.strict, config.indices, config.color);

    if res.result.is_ok() { ExitCode::SUCCESS } else { ExitCode::from(1) }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
}

struct CliConfig {
    input: String,
    length: usize,
    options: Options,
    indices: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut length: Option<usize> = None;
    let mut options = Options::default();
    let mut indices = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("subseq {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--strict" => options.strict = true,
            "--indices" => indices = true,
            "--length" | "-n" => {
                let value = args.next().ok_or_else(|| "error: --length expects a value".to_string())?;
                length = Some(parse_length(&value)?);
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                set_input(&mut input, value)?;
            }
            "--" => {
                if let Some(value) = args.next() {
                    set_input(&mut input, value)?;
                }
                if args.next().is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                break;
            }
            _ if arg.starts_with("--length=") => {
                length = Some(parse_length(arg.trim_start_matches("--length="))?);
            }
            _ if arg.starts_with("--input=") => {
                set_input(&mut input, arg.trim_start_matches("--input=").to_string())?;
            }
            // `-3:` and friends are subsequences, not flags.
            _ if arg.starts_with('-') && !arg[1..].starts_with(|c: char| c.is_ascii_digit()) => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => set_input(&mut input, arg)?,
        }
    }

    let Some(length) = length else {
        return Err(format!("error: --length is required\n\n{}", help_text()));
    };

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    Ok(CliConfig { input, length, options, indices, color })
}

fn set_input(input: &mut Option<String>, value: String) -> Result<(), String> {
    if input.is_some() {
        return Err("error: input provided multiple times".to_string());
    }
    *input = Some(value);
    Ok(())
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
}

fn parse_length(value: &str) -> Result<usize, String> {
    value.parse().map_err(|_| format!("error: invalid --length '{value}' (expected a non-negative integer)"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "subseq {version}

Resolve a subsequence string (`start:stop:step`, with `end`, `end-k`, `end/k`)
into concrete indices.

Usage:
  subseq --length <n> [OPTIONS] [--] <text>
  subseq --length <n> [OPTIONS] --input <text>

Options:
  -n, --length <n>           Length of the sequence being described (required).
  -i, --input <text>         Subsequence text. If omitted, reads the remaining
                             argument or stdin.
  --strict                   Reject out-of-range bounds instead of clamping.
  --indices                  Print the selected indices.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  RUST_LOG                   Log filter for diagnostics on stderr.
                             Default: {default_filter}

Exit codes:
  0  Resolved.
  1  The subsequence could not be resolved.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        default_filter = DEFAULT_LOG_FILTER
    )
}
