use crate::error::DictionaryError;
use crate::selector::{IndexSource, pick_random};
use crate::trie::TrieStore;
use crate::{debug_log, info_log};
use std::collections::BTreeSet;

pub const DEFAULT_MAX_ATTEMPTS: usize = 6;
pub const MASK_CHAR: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter occurs `revealed` times in the secret.
    Hit { revealed: usize },
    Miss { attempts_remaining: usize },
    AlreadyGuessed,
    GameOver,
}

/// Progress of one round: the secret, what has been revealed so far and how
/// many wrong guesses are left. Knows nothing about the dictionary.
#[derive(Debug, Clone)]
pub struct GuessState {
    secret: Vec<char>,
    masked: Vec<char>,
    guessed: BTreeSet<char>,
    attempts_remaining: usize,
}

impl GuessState {
    #[must_use]
    pub fn new(secret: &str, max_attempts: usize) -> Self {
        let secret: Vec<char> = secret.chars().collect();
        Self {
            masked: vec![MASK_CHAR; secret.len()],
            secret,
            guessed: BTreeSet::new(),
            attempts_remaining: max_attempts,
        }
    }

    /// Applies one guess. Only a letter not tried before and absent from the
    /// secret costs an attempt.
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        if self.status() != GameStatus::InProgress {
            return GuessOutcome::GameOver;
        }
        if !self.guessed.insert(letter) {
            return GuessOutcome::AlreadyGuessed;
        }

        let mut revealed = 0;
        for (slot, &c) in self.masked.iter_mut().zip(&self.secret) {
            if c == letter {
                *slot = c;
                revealed += 1;
            }
        }

        if revealed > 0 {
            GuessOutcome::Hit { revealed }
        } else {
            self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
            GuessOutcome::Miss {
                attempts_remaining: self.attempts_remaining,
            }
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if !self.masked.contains(&MASK_CHAR) {
            GameStatus::Won
        } else if self.attempts_remaining == 0 {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    #[must_use]
    pub fn masked(&self) -> String {
        self.masked.iter().collect()
    }

    #[must_use]
    pub fn secret(&self) -> String {
        self.secret.iter().collect()
    }

    #[must_use]
    pub fn secret_len(&self) -> usize {
        self.secret.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.attempts_remaining
    }

    #[must_use]
    pub fn guessed_letters(&self) -> Vec<char> {
        self.guessed.iter().copied().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Letter(char),
    NewGame,
    Exit,
}

/// Totals for a play session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub won: usize,
    pub lost: usize,
    pub abandoned: usize,
}

impl SessionSummary {
    #[must_use]
    pub fn games_played(&self) -> usize {
        self.won + self.lost + self.abandoned
    }
}

/// Presentation layer driven by [`game_loop`].
pub trait GameInterface {
    fn display_game_start(&mut self, word_len: usize, max_attempts: usize);
    fn display_progress(&mut self, state: &GuessState);
    /// `None` means the input was unusable and the prompt should repeat.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_outcome(&mut self, letter: char, outcome: GuessOutcome);
    fn display_win(&mut self, secret: &str);
    fn display_loss(&mut self, state: &GuessState);
    fn ask_play_again(&mut self) -> bool;
    fn display_new_game_message(&mut self);
    fn display_exit_message(&mut self, summary: &SessionSummary);
}

enum RoundEnd {
    Finished(GameStatus),
    NewGame,
    Exit,
}

/// Plays rounds until the player quits. Each round draws a fresh secret word
/// from `store` through `source`.
pub fn game_loop<S, I>(
    store: &TrieStore,
    source: &mut S,
    interface: &mut I,
    max_attempts: usize,
) -> Result<SessionSummary, DictionaryError>
where
    S: IndexSource + ?Sized,
    I: GameInterface + ?Sized,
{
    let mut summary = SessionSummary::default();

    loop {
        let secret = pick_random(store, source)?;
        info_log!("New round with a {}-letter word", secret.len());
        let mut state = GuessState::new(&secret, max_attempts);
        interface.display_game_start(state.secret_len(), max_attempts);

        match play_round(&mut state, interface) {
            RoundEnd::Finished(GameStatus::Won) => {
                summary.won += 1;
                interface.display_win(&secret);
            }
            RoundEnd::Finished(_) => {
                summary.lost += 1;
                interface.display_loss(&state);
            }
            RoundEnd::NewGame => {
                summary.abandoned += 1;
                interface.display_new_game_message();
                continue;
            }
            RoundEnd::Exit => {
                summary.abandoned += 1;
                break;
            }
        }

        if !interface.ask_play_again() {
            break;
        }
        interface.display_new_game_message();
    }

    interface.display_exit_message(&summary);
    Ok(summary)
}

fn play_round<I: GameInterface + ?Sized>(state: &mut GuessState, interface: &mut I) -> RoundEnd {
    while state.status() == GameStatus::InProgress {
        interface.display_progress(state);
        let letter = match interface.read_action() {
            Some(UserAction::Letter(c)) => c,
            Some(UserAction::NewGame) => return RoundEnd::NewGame,
            Some(UserAction::Exit) => return RoundEnd::Exit,
            None => continue,
        };
        let outcome = state.guess(letter);
        debug_log!("Guess '{}' -> {:?}", letter, outcome);
        interface.display_outcome(letter, outcome);
    }
    RoundEnd::Finished(state.status())
}
