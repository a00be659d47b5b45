// stemma-trace: Show every stage of the stemming pipeline.
//
// For each word prints the normalized and glide-marked forms, the R1 and
// R2 region starts, and the word after each suffix-stripping step.
//
// Usage:
//   stemma-trace [-l LANG] [--keep-glides] [WORD...]

use std::io::{self, Write};

fn main() {
    stemma_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (language, args) =
        stemma_cli::parse_language(&args).unwrap_or_else(|e| stemma_cli::fatal(&e));

    if stemma_cli::wants_help(&args) {
        println!("stemma-trace: Show the intermediate stages of stemming.");
        println!();
        println!("Usage: stemma-trace [-l LANG] [--keep-glides] [WORD...]");
        println!();
        println!("If WORD arguments are given, traces each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -l, --language LANG   Language code (default: $STEMMA_LANG, then de)");
        println!("  --keep-glides         Leave glide markers (U, Y) uppercase in stems");
        println!("  -h, --help            Print this help");
        return;
    }

    let keep_glides = args.iter().any(|a| a == "--keep-glides");
    let words: Vec<String> = args.into_iter().filter(|a| !a.starts_with('-')).collect();

    let mut handle =
        stemma_cli::load_handle(language.as_deref()).unwrap_or_else(|e| stemma_cli::fatal(&e));
    if keep_glides {
        handle.set_restore_glides(false);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for word in stemma_cli::read_words(words) {
        let _ = writeln!(out, "{}", handle.trace(&word));
    }
}
