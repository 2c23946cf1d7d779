//! Prefix-tree dictionary.
//!
//! Words are restricted to the lowercase ASCII letters `a..=z`. Every stored
//! word has a rank: its position in a depth-first walk that reports a node's own
//! word before descending into its children, children in alphabetical order.
//! [`TrieStore::word_at_index`] and [`TrieStore::list_all`] both follow that
//! order, so ranks `0..count()` map one-to-one onto the stored words.

use crate::debug_log;
use crate::error::DictionaryError;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::mem;

#[derive(Default)]
struct TrieNode {
    children: BTreeMap<u8, TrieNode>,
    terminal: bool,
}

// Nodes nest one level per letter, so the default drop would recurse as deep
// as the longest word.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> = mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(mem::take(&mut node.children).into_values());
        }
    }
}

/// Dictionary of lowercase words stored as a prefix tree.
///
/// Every walk over the tree keeps its own stack, so word length is bounded by
/// memory rather than by the thread's call stack.
#[derive(Default)]
pub struct TrieStore {
    root: TrieNode,
}

impl fmt::Debug for TrieStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieStore")
            .field("words", &self.count())
            .finish()
    }
}

impl TrieStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a list of words, failing on the first malformed one.
    pub fn from_words<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::new();
        for word in words {
            store.insert(word.as_ref())?;
        }
        Ok(store)
    }

    /// Inserts `word`, creating nodes along its path as needed.
    ///
    /// The word is validated before anything is touched, so a rejected word
    /// leaves the store unchanged. Inserting a word twice is a no-op.
    pub fn insert(&mut self, word: &str) -> Result<(), DictionaryError> {
        validate_word(word)?;

        let mut current = &mut self.root;
        for &letter in word.as_bytes() {
            current = current.children.entry(letter).or_default();
        }
        current.terminal = true;
        debug_log!("Inserted '{}' into dictionary", word);
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let mut current = &self.root;
        for letter in word.as_bytes() {
            match current.children.get(letter) {
                Some(child) => current = child,
                None => return false,
            }
        }
        current.terminal
    }

    /// Number of distinct words stored. Walks the whole tree.
    #[must_use]
    pub fn count(&self) -> usize {
        let mut total = 0;
        let mut pending = vec![&self.root];
        while let Some(node) = pending.pop() {
            total += usize::from(node.terminal);
            pending.extend(node.children.values());
        }
        total
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty() && !self.root.terminal
    }

    /// Returns the word with rank `index`.
    ///
    /// Fails with [`DictionaryError::IndexOutOfRange`] when `index >= count()`,
    /// which includes every index on an empty store.
    pub fn word_at_index(&self, index: usize) -> Result<String, DictionaryError> {
        let mut cursor = self.list_all();
        for skipped in 0..index {
            if !cursor.advance() {
                return Err(DictionaryError::IndexOutOfRange {
                    index,
                    count: skipped,
                });
            }
        }
        if cursor.advance() {
            Ok(cursor.prefix)
        } else {
            Err(DictionaryError::IndexOutOfRange {
                index,
                count: index,
            })
        }
    }

    /// Lazily yields every stored word in rank order.
    #[must_use]
    pub fn list_all(&self) -> Words<'_> {
        // The root is never terminal since empty words are rejected.
        Words {
            stack: vec![self.root.children.iter()],
            prefix: String::new(),
        }
    }
}

impl<'a> IntoIterator for &'a TrieStore {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.list_all()
    }
}

/// Iterator returned by [`TrieStore::list_all`].
///
/// Keeps one child iterator per level of the current path, so memory is bounded
/// by the longest word rather than the dictionary size.
pub struct Words<'a> {
    stack: Vec<btree_map::Iter<'a, u8, TrieNode>>,
    prefix: String,
}

impl Words<'_> {
    /// Moves to the next terminal node, leaving its word in `prefix`.
    /// Returns false once the tree is exhausted.
    fn advance(&mut self) -> bool {
        loop {
            let Some(level) = self.stack.last_mut() else {
                return false;
            };
            match level.next() {
                Some((&letter, child)) => {
                    self.prefix.push(char::from(letter));
                    self.stack.push(child.children.iter());
                    if child.terminal {
                        return true;
                    }
                }
                None => {
                    self.stack.pop();
                    self.prefix.pop();
                }
            }
        }
    }
}

impl fmt::Debug for Words<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Words")
            .field("prefix", &self.prefix)
            .field("depth", &self.stack.len())
            .finish()
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().then(|| self.prefix.clone())
    }
}

/// Checks that `word` is non-empty and made only of `a..=z`.
pub fn validate_word(word: &str) -> Result<(), DictionaryError> {
    if word.is_empty() {
        return Err(DictionaryError::InvalidInput {
            word: word.to_string(),
            reason: "word is empty",
        });
    }
    if !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(DictionaryError::InvalidInput {
            word: word.to_string(),
            reason: "only lowercase letters a-z are allowed",
        });
    }
    Ok(())
}
