// stemma-cli: shared utilities for CLI tools.

use std::io::{self, BufRead};
use std::process;

use stemma_de::handle::{StemmaError, StemmerHandle};
use tracing_subscriber::EnvFilter;

/// Environment variable naming the default language.
pub const LANG_ENV: &str = "STEMMA_LANG";

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "STEMMA_LOG";

/// Language used when neither an argument nor `STEMMA_LANG` is given.
pub const DEFAULT_LANGUAGE: &str = "de";

/// Install a stderr logger filtered by `STEMMA_LOG` (default `warn`).
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Resolve the language code and create a StemmerHandle.
///
/// Resolution order:
/// 1. `language` argument (if provided)
/// 2. `STEMMA_LANG` environment variable (if set and non-empty)
/// 3. `de`
pub fn load_handle(language: Option<&str>) -> Result<StemmerHandle, String> {
    let env_language = std::env::var(LANG_ENV).ok();
    let code = resolve_language(language, env_language.as_deref());
    tracing::debug!(code, "resolved language");

    StemmerHandle::new(code)
        .map_err(|e: StemmaError| format!("failed to create StemmerHandle: {e}"))
}

/// Pick the first non-empty language code, falling back to the default.
pub fn resolve_language<'a>(arg: Option<&'a str>, env: Option<&'a str>) -> &'a str {
    arg.into_iter()
        .chain(env)
        .map(str::trim)
        .find(|code| !code.is_empty())
        .unwrap_or(DEFAULT_LANGUAGE)
}

/// Parse a `--language=CODE`, `--language CODE` or `-l CODE` argument.
///
/// Returns `(language, remaining_args)`. A missing value is reported as an
/// error naming the flag.
pub fn parse_language(args: &[String]) -> Result<(Option<String>, Vec<String>), String> {
    let mut language = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--language=") {
            language = Some(val.to_string());
        } else if arg == "--language" || arg == "-l" {
            match iter.next() {
                Some(val) => language = Some(val.clone()),
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((language, remaining))
}

/// Collect the words to process: positional args, or stdin lines when none.
///
/// Blank stdin lines are skipped; surrounding whitespace is trimmed.
pub fn read_words(positional: Vec<String>) -> Vec<String> {
    if !positional.is_empty() {
        return positional;
    }

    let mut words = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    words
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
