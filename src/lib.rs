// Library interface for trie-hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod selector;
pub mod trie;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::DictionaryError;
pub use game_state::{GameStatus, GuessOutcome, GuessState, SessionSummary, game_loop};
pub use selector::{IndexSource, RngIndexSource, pick_random};
pub use trie::{TrieStore, Words};
pub use wordbank::{load_dictionary, load_dictionary_from_file, load_dictionary_from_str};
