use super::conjunction::CONJUNCTIONS;
use super::initials::is_initial;
use super::namecase::CAPITALIZATION_EXCEPTIONS;
use super::suffix::SUFFIXES;
use super::surname::PREFIXES;
use super::title::{FIRST_NAME_TITLES, TITLES};
use compact_str::CompactString;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Lowercase with periods removed: the form every table is keyed by.
pub fn lookup_key(word: &str) -> CompactString {
    word.chars()
        .filter(|&c| c != '.')
        .flat_map(char::to_lowercase)
        .collect()
}

fn keys<I>(words: I) -> impl Iterator<Item = CompactString>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| lookup_key(w.as_ref()))
        .filter(|k| !k.is_empty())
}

/// The lookup tables that drive classification and capitalization.
///
/// A lexicon always contains the built-in tables; the builder methods add
/// entries on top of them. Entries may be given in any case and with or
/// without periods ("Ph.D." and "phd" are the same entry).
///
/// ```
/// use nameparser::{Lexicon, Parser};
///
/// let parser = Parser::with_lexicon(
///     Lexicon::new()
///         .with_titles(["Poobah"])
///         .with_suffixes(["MSc"]),
/// );
///
/// let name = parser.parse("Poobah Ko Ko, MSc");
/// assert_eq!("Poobah", name.title());
/// assert_eq!("Ko", name.first());
/// assert_eq!("Ko", name.last());
/// assert_eq!("MSc", name.suffix());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    titles: HashSet<CompactString>,
    suffixes: HashSet<CompactString>,
    prefixes: HashSet<CompactString>,
    conjunctions: HashSet<CompactString>,
    first_name_titles: HashSet<CompactString>,
    capitalization_exceptions: HashMap<CompactString, CompactString>,
}

impl Lexicon {
    pub fn new() -> Lexicon {
        Lexicon::default()
    }

    pub fn with_titles<I>(mut self, titles: I) -> Lexicon
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.titles.extend(keys(titles));
        self
    }

    pub fn with_suffixes<I>(mut self, suffixes: I) -> Lexicon
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.suffixes.extend(keys(suffixes));
        self
    }

    /// Last-name prefixes such as "van" or "della".
    pub fn with_prefixes<I>(mut self, prefixes: I) -> Lexicon
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.prefixes.extend(keys(prefixes));
        self
    }

    pub fn with_conjunctions<I>(mut self, conjunctions: I) -> Lexicon
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.conjunctions.extend(keys(conjunctions));
        self
    }

    /// Titles which are followed by a first name rather than a last name
    /// ("Uncle Adam", "Sister Mary").
    pub fn with_first_name_titles<I>(mut self, titles: I) -> Lexicon
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.first_name_titles.extend(keys(titles));
        self
    }

    /// Render `word` as `canonical` when normalizing, e.g. "dds" as "D.D.S.".
    pub fn with_capitalization_exception(mut self, word: &str, canonical: &str) -> Lexicon {
        self.capitalization_exceptions
            .insert(lookup_key(word), CompactString::from(canonical));
        self
    }

    pub fn is_title(&self, piece: &str) -> bool {
        !is_initial(piece) && self.has_title(&lookup_key(piece))
    }

    pub fn is_suffix(&self, piece: &str) -> bool {
        !is_initial(piece) && self.has_suffix(&lookup_key(piece))
    }

    pub fn is_prefix(&self, piece: &str) -> bool {
        !is_initial(piece) && self.has_prefix(&lookup_key(piece))
    }

    pub fn is_conjunction(&self, piece: &str) -> bool {
        !is_initial(piece) && self.has_conjunction(&lookup_key(piece))
    }

    /// True if a title (possibly several words) implies that a single
    /// following name is a first name.
    pub fn is_first_name_title(&self, title: &str) -> bool {
        let key = lookup_key(title);
        FIRST_NAME_TITLES.contains(key.as_str()) || self.first_name_titles.contains(key.as_str())
    }

    /// The canonical capitalization for a lookup key, if it has one.
    pub fn capitalization_exception(&self, key: &str) -> Option<&str> {
        self.capitalization_exceptions
            .get(key)
            .map(CompactString::as_str)
            .or_else(|| CAPITALIZATION_EXCEPTIONS.get(key).copied())
    }

    fn has_title(&self, key: &str) -> bool {
        TITLES.contains(key) || self.titles.contains(key)
    }

    fn has_suffix(&self, key: &str) -> bool {
        SUFFIXES.contains(key) || self.suffixes.contains(key)
    }

    fn has_prefix(&self, key: &str) -> bool {
        PREFIXES.contains(key) || self.prefixes.contains(key)
    }

    fn has_conjunction(&self, key: &str) -> bool {
        CONJUNCTIONS.contains(key) || self.conjunctions.contains(key)
    }
}

/// A lexicon plus the compounds learned while parsing one input.
///
/// When "Mr. and Mrs." is joined into a single piece it becomes a title for
/// the rest of that parse (including every name split from the same input),
/// but nothing learned here outlives the parse.
#[derive(Debug)]
pub struct Vocabulary<'a> {
    lexicon: &'a Lexicon,
    learned_titles: HashSet<CompactString>,
    learned_conjunctions: HashSet<CompactString>,
}

impl<'a> Vocabulary<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Vocabulary<'a> {
        Vocabulary {
            lexicon,
            learned_titles: HashSet::new(),
            learned_conjunctions: HashSet::new(),
        }
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    pub fn learn_title(&mut self, piece: &str) {
        let key = lookup_key(piece);
        debug!(title = %key, "learned compound title");
        self.learned_titles.insert(key);
    }

    pub fn learn_conjunction(&mut self, piece: &str) {
        let key = lookup_key(piece);
        debug!(conjunction = %key, "learned compound conjunction");
        self.learned_conjunctions.insert(key);
    }

    pub fn is_title(&self, piece: &str) -> bool {
        if is_initial(piece) {
            return false;
        }
        let key = lookup_key(piece);
        self.lexicon.has_title(&key) || self.learned_titles.contains(key.as_str())
    }

    pub fn is_conjunction(&self, piece: &str) -> bool {
        if is_initial(piece) {
            return false;
        }
        let key = lookup_key(piece);
        self.lexicon.has_conjunction(&key) || self.learned_conjunctions.contains(key.as_str())
    }

    pub fn is_prefix(&self, piece: &str) -> bool {
        self.lexicon.is_prefix(piece)
    }

    pub fn is_suffix(&self, piece: &str) -> bool {
        self.lexicon.is_suffix(piece)
    }

    /// Anything that could plausibly be a first, middle or last name.
    pub fn is_root_name(&self, piece: &str) -> bool {
        !self.is_suffix(piece)
            && !self.is_prefix(piece)
            && !self.is_title(piece)
            && !is_initial(piece)
    }

    /// True if there is at least one piece and every piece is a suffix.
    pub fn are_suffixes<'p, I>(&self, pieces: I) -> bool
    where
        I: IntoIterator<Item = &'p str>,
    {
        let mut any = false;
        for piece in pieces {
            if !self.is_suffix(piece) {
                return false;
            }
            any = true;
        }
        any
    }
}
