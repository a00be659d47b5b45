// stemma-stem: Stem words from arguments or stdin.
//
// Prints one stem per input word. With --pairs each line is WORD, a tab, then STEM.
//
// Usage:
//   stemma-stem [-l LANG] [OPTIONS] [WORD...]
//
// Options:
//   -l, --language LANG   Language code (default: $STEMMA_LANG, then de)
//   --pairs               Print the input word before each stem
//   --keep-glides         Leave glide markers (U, Y) uppercase in stems
//   -h, --help            Print help

use std::io::{self, Write};

fn main() {
    stemma_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (language, args) =
        stemma_cli::parse_language(&args).unwrap_or_else(|e| stemma_cli::fatal(&e));

    if stemma_cli::wants_help(&args) {
        println!("stemma-stem: Reduce words to their stems.");
        println!();
        println!("Usage: stemma-stem [-l LANG] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, stems each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -l, --language LANG   Language code (default: $STEMMA_LANG, then de)");
        println!("  --pairs               Print the input word before each stem");
        println!("  --keep-glides         Leave glide markers (U, Y) uppercase in stems");
        println!("  -h, --help            Print this help");
        return;
    }

    let mut pairs = false;
    let mut keep_glides = false;
    let mut words: Vec<String> = Vec::new();

    for arg in &args {
        match arg.as_str() {
            "--pairs" => pairs = true,
            "--keep-glides" => keep_glides = true,
            s if !s.starts_with('-') => words.push(arg.clone()),
            s => tracing::warn!(option = s, "ignoring unknown option"),
        }
    }

    let mut handle =
        stemma_cli::load_handle(language.as_deref()).unwrap_or_else(|e| stemma_cli::fatal(&e));
    if keep_glides {
        handle.set_restore_glides(false);
    }

    let words = stemma_cli::read_words(words);
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for word in &words {
        let stem = handle.stem(word);
        let _ = if pairs {
            writeln!(out, "{word}\t{stem}")
        } else {
            writeln!(out, "{stem}")
        };
    }
}
