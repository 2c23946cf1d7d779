use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;
use trie_hangman::cli::{CliInterface, display_words, parse_cli};
use trie_hangman::logging::init_logging;
use trie_hangman::{RngIndexSource, TrieStore, game_loop, info_log, load_dictionary};

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logging(cli.verbose);

    let mut store = TrieStore::new();
    let report = match load_dictionary(cli.dictionary_path.as_deref(), &mut store) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    if !report.rejected.is_empty() {
        eprintln!(
            "Skipped {} invalid dictionary entries: {}",
            report.rejected.len(),
            report.rejected.join(", ")
        );
    }
    println!("{} words were loaded into the dictionary.", store.count());

    if cli.list {
        display_words(&store);
        return ExitCode::SUCCESS;
    }

    let rng = match cli.seed {
        Some(seed) => {
            info_log!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let mut source = RngIndexSource::new(rng);
    let mut interface = CliInterface::new(io::stdin().lock());

    match game_loop(&store, &mut source, &mut interface, cli.max_attempts) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
