use crate::game_state::{
    DEFAULT_MAX_ATTEMPTS, GameInterface, GuessOutcome, GuessState, SessionSummary, UserAction,
};
use crate::warn_log;
use clap::Parser;
use clap::builder::TypedValueParser as _;
use std::io::BufRead;
use std::path::PathBuf;

/// Hangman with a trie-backed dictionary
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited dictionary of lowercase words
    #[arg(short = 'i', long = "input")]
    pub dictionary_path: Option<PathBuf>,

    /// Seed for the word picker, for reproducible games
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Wrong guesses allowed per round
    #[arg(
        short = 'a',
        long = "attempts",
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from)
    )]
    pub max_attempts: usize,

    /// Print every dictionary word and exit
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

pub enum LetterInput {
    Valid(char),
    Invalid,
    Exit,
    NewGame,
}

/// Reads one line. `None` on end of input or a read failure.
fn read_trimmed_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
        Err(e) => {
            warn_log!("Failed to read input: {}", e);
            None
        }
    }
}

fn parse_letter(input: &str) -> LetterInput {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_lowercase() => LetterInput::Valid(c),
        _ => match input {
            "exit" => LetterInput::Exit,
            "next" => LetterInput::NewGame,
            _ => LetterInput::Invalid,
        },
    }
}

pub fn read_letter<R: BufRead>(reader: &mut R) -> LetterInput {
    println!("Enter a letter (or 'exit' to quit, or 'next' to start a new game):");
    let Some(input) = read_trimmed_line(reader) else {
        return LetterInput::Exit;
    };

    let parsed = parse_letter(&input);
    if matches!(parsed, LetterInput::Invalid) {
        println!("Invalid guess. Please enter a single letter a-z.");
    }
    parsed
}

pub fn read_play_again<R: BufRead>(reader: &mut R) -> bool {
    loop {
        println!("Play again? (y/n)");
        let Some(input) = read_trimmed_line(reader) else {
            return false;
        };
        match input.as_str() {
            "y" | "yes" => return true,
            "n" | "no" | "exit" => return false,
            _ => println!("Please answer 'y' or 'n'."),
        }
    }
}

pub fn display_words<I: IntoIterator<Item = String>>(words: I) {
    println!("Words in the dictionary:");
    for word in words {
        println!("{word}");
    }
}

pub fn display_game_start(word_len: usize, max_attempts: usize) {
    println!("\nWelcome to hangman!");
    println!("The word has {word_len} letters. You may miss {max_attempts} times.");
}

pub fn display_progress(masked: &str, attempts_remaining: usize, guessed: &[char]) {
    let spaced: Vec<String> = masked.chars().map(String::from).collect();
    println!("\nWord: {}", spaced.join(" "));
    println!("Attempts remaining: {attempts_remaining}");
    if !guessed.is_empty() {
        let tried: String = guessed.iter().collect();
        println!("Already tried: {tried}");
    }
}

pub fn display_outcome(letter: char, outcome: GuessOutcome) {
    match outcome {
        GuessOutcome::Hit { revealed: 1 } => println!("Correct! '{letter}' appears once."),
        GuessOutcome::Hit { revealed } => println!("Correct! '{letter}' appears {revealed} times."),
        GuessOutcome::Miss { .. } => println!("Wrong letter."),
        GuessOutcome::AlreadyGuessed => println!("You already tried '{letter}'."),
        GuessOutcome::GameOver => println!("The round is over."),
    }
}

pub fn display_win(secret: &str) {
    println!("\nCongratulations! You guessed the word: {secret}");
}

pub fn display_loss(masked: &str, secret: &str) {
    println!("\nWord: {masked}");
    println!("You lost. The word was: {secret}");
}

pub fn display_new_game_message() {
    println!("New game started.");
}

pub fn display_exit_message(summary: &SessionSummary) {
    println!(
        "Exiting. Won {}, lost {}, abandoned {}.",
        summary.won, summary.lost, summary.abandoned
    );
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_game_start(&mut self, word_len: usize, max_attempts: usize) {
        display_game_start(word_len, max_attempts);
    }

    fn display_progress(&mut self, state: &GuessState) {
        display_progress(
            &state.masked(),
            state.attempts_remaining(),
            &state.guessed_letters(),
        );
    }

    fn read_action(&mut self) -> Option<UserAction> {
        match read_letter(&mut self.reader) {
            LetterInput::Valid(c) => Some(UserAction::Letter(c)),
            LetterInput::Exit => Some(UserAction::Exit),
            LetterInput::NewGame => Some(UserAction::NewGame),
            LetterInput::Invalid => None,
        }
    }

    fn display_outcome(&mut self, letter: char, outcome: GuessOutcome) {
        display_outcome(letter, outcome);
    }

    fn display_win(&mut self, secret: &str) {
        display_win(secret);
    }

    fn display_loss(&mut self, state: &GuessState) {
        display_loss(&state.masked(), &state.secret());
    }

    fn ask_play_again(&mut self) -> bool {
        read_play_again(&mut self.reader)
    }

    fn display_new_game_message(&mut self) {
        display_new_game_message();
    }

    fn display_exit_message(&mut self, summary: &SessionSummary) {
        display_exit_message(summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_cli_defaults() {
        let cli = Cli::try_parse_from(["trie-hangman"]).unwrap();
        assert_eq!(cli.dictionary_path, None);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert!(!cli.list);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_cli_all_options() {
        let cli = Cli::try_parse_from([
            "trie-hangman",
            "-i",
            "words.txt",
            "--seed",
            "42",
            "-a",
            "8",
            "--list",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.dictionary_path, Some(PathBuf::from("words.txt")));
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.max_attempts, 8);
        assert!(cli.list);
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_cli_rejects_zero_attempts() {
        assert!(Cli::try_parse_from(["trie-hangman", "--attempts", "0"]).is_err());
    }

    #[test]
    fn test_parse_letter() {
        assert!(matches!(parse_letter("a"), LetterInput::Valid('a')));
        assert!(matches!(parse_letter("z"), LetterInput::Valid('z')));
        assert!(matches!(parse_letter("exit"), LetterInput::Exit));
        assert!(matches!(parse_letter("next"), LetterInput::NewGame));
        assert!(matches!(parse_letter(""), LetterInput::Invalid));
        assert!(matches!(parse_letter("ab"), LetterInput::Invalid));
        assert!(matches!(parse_letter("3"), LetterInput::Invalid));
        assert!(matches!(parse_letter("ç"), LetterInput::Invalid));
    }

    #[test]
    fn test_read_letter_uppercase_converted() {
        let mut reader = Cursor::new("  Q  \n");
        assert!(matches!(read_letter(&mut reader), LetterInput::Valid('q')));
    }

    #[test]
    fn test_read_letter_exit_case_insensitive() {
        let mut reader = Cursor::new("EXIT\n");
        assert!(matches!(read_letter(&mut reader), LetterInput::Exit));
    }

    #[test]
    fn test_read_letter_new_game() {
        let mut reader = Cursor::new("next\n");
        assert!(matches!(read_letter(&mut reader), LetterInput::NewGame));
    }

    #[test]
    fn test_read_letter_invalid() {
        let mut reader = Cursor::new("42\n");
        assert!(matches!(read_letter(&mut reader), LetterInput::Invalid));
    }

    #[test]
    fn test_read_letter_end_of_input_exits() {
        let mut reader = Cursor::new("");
        assert!(matches!(read_letter(&mut reader), LetterInput::Exit));
    }

    #[test]
    fn test_read_play_again() {
        assert!(read_play_again(&mut Cursor::new("y\n")));
        assert!(read_play_again(&mut Cursor::new("YES\n")));
        assert!(!read_play_again(&mut Cursor::new("n\n")));
        assert!(!read_play_again(&mut Cursor::new("")));
        assert!(read_play_again(&mut Cursor::new("maybe\ny\n")));
        assert!(!read_play_again(&mut Cursor::new("maybe\n")));
    }

    #[test]
    fn test_cli_interface_maps_actions() {
        let mut interface = CliInterface::new(Cursor::new("b\n1\nnext\nexit\n"));
        assert_eq!(interface.read_action(), Some(UserAction::Letter('b')));
        assert_eq!(interface.read_action(), None);
        assert_eq!(interface.read_action(), Some(UserAction::NewGame));
        assert_eq!(interface.read_action(), Some(UserAction::Exit));
        assert_eq!(interface.read_action(), Some(UserAction::Exit));
    }
}
