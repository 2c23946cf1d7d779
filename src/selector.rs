//! Uniform random word selection.

use crate::debug_log;
use crate::error::DictionaryError;
use crate::trie::TrieStore;
use rand::Rng;

/// Supplies indices drawn uniformly from `[0, n)`.
///
/// Callers only ask with `n > 0`; [`pick_random`] checks for an empty
/// dictionary before consulting the source.
pub trait IndexSource {
    fn index_below(&mut self, n: usize) -> usize;
}

impl<F> IndexSource for F
where
    F: FnMut(usize) -> usize,
{
    fn index_below(&mut self, n: usize) -> usize {
        self(n)
    }
}

/// [`IndexSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngIndexSource<R> {
    rng: R,
}

impl<R: Rng> RngIndexSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> IndexSource for RngIndexSource<R> {
    /// Returns 0 for `n == 0` instead of panicking on the empty range.
    fn index_below(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }
}

/// Picks one stored word, each with probability `1 / store.count()`.
///
/// Ranks are a bijection onto the stored words, so a uniform index gives a
/// uniform word. An index outside `[0, n)` from `source` is reported as
/// [`DictionaryError::IndexOutOfRange`].
pub fn pick_random<S>(store: &TrieStore, source: &mut S) -> Result<String, DictionaryError>
where
    S: IndexSource + ?Sized,
{
    let n = store.count();
    if n == 0 {
        return Err(DictionaryError::EmptyDictionary);
    }
    let index = source.index_below(n);
    debug_log!("Selecting word {} of {}", index, n);
    store.word_at_index(index)
}
