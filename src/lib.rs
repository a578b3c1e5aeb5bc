//! A library for splitting human names into their components.
//!
//! Parsing is heuristic: the input is stripped of nicknames, split on
//! commas, broken into pieces, and each piece is assigned to a title, first,
//! middle, last or suffix bucket based on its position and on a set of
//! lookup tables (see [`Lexicon`]).
//!
//! # Examples
//!
//! ```
//! use nameparser::HumanName;
//!
//! let name = HumanName::parse("Dr. Juan Q. Xavier de la Vega III");
//! assert_eq!("Dr.", name.title());
//! assert_eq!("Juan", name.first());
//! assert_eq!("Q. Xavier", name.middle());
//! assert_eq!("de la Vega", name.last());
//! assert_eq!("de la", name.last_prefixes());
//! assert_eq!("Vega", name.last_base());
//! assert_eq!("III", name.suffix());
//! ```

#[cfg(feature = "ffi")]
pub mod external;

#[cfg(feature = "serialization")]
mod serialization;

mod case;
mod chain;
mod conjunction;
mod eq_hash;
mod error;
mod initials;
mod lexicon;
mod namecase;
mod nickname;
mod parse;
mod segment;
mod suffix;
mod surname;
mod title;
mod word;

pub use error::Error;
pub use lexicon::Lexicon;

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use word::Tokens;

bitflags::bitflags! {
    /// Tie-break preferences for ambiguous inputs.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct Prefer: u8 {
        /// When a title is followed only by a prefixed last name (e.g.
        /// "Mr. Del Richards"), read the prefix as a first name.
        ///
        /// This misreads names like "Mr. Van Rossum", so only use it when
        /// the data is known to carry first names.
        const FIRST_OVER_PREFIX = 0b1;
    }
}

/// Parsing configuration: lookup tables plus options.
///
/// Parsing borrows the parser immutably, so one parser can be shared freely.
/// Compounds learned while parsing (such as "Mr. and Mrs." becoming a title)
/// are scoped to a single call and never leak into later parses.
///
/// ```
/// use nameparser::{Lexicon, Parser};
///
/// let parser = Parser::with_lexicon(Lexicon::new().with_titles(["Grand Poobah"]))
///     .multiple_names(true);
///
/// let name = parser.parse("John D. and Catherine T. MacArthur");
/// assert_eq!("MacArthur", name.last());
/// assert_eq!("Catherine", name.additional_name().unwrap().first());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    lexicon: Lexicon,
    multiple_names: bool,
    prefer: Prefer,
}

impl Parser {
    pub fn new() -> Parser {
        Parser::default()
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Parser {
        Parser {
            lexicon,
            ..Parser::default()
        }
    }

    /// Split inputs like "John and Jane Doe" or "John & Jane Doe" into a
    /// primary name with chained additional names.
    pub fn multiple_names(mut self, enabled: bool) -> Parser {
        self.multiple_names = enabled;
        self
    }

    pub fn prefer(mut self, prefer: Prefer) -> Parser {
        self.prefer = prefer;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Parse a name. Never fails; input we can't make sense of produces a
    /// name for which `is_unparsable()` is true.
    pub fn parse(&self, full_name: &str) -> HumanName {
        chain::parse_chain(self, full_name)
    }

    /// Parse a name that may be absent, as when it crosses an FFI boundary.
    ///
    /// ```
    /// use nameparser::{Error, Parser};
    ///
    /// let parser = Parser::new();
    /// assert!(parser.try_parse(Some("Jane Doe")).is_ok());
    /// assert_eq!(Err(Error::InvalidArgument("full_name")), parser.try_parse(None));
    /// ```
    pub fn try_parse(&self, full_name: Option<&str>) -> Result<HumanName, Error> {
        match full_name {
            Some(full_name) => Ok(self.parse(full_name)),
            None => Err(Error::InvalidArgument("full_name")),
        }
    }

    /// Capitalize a parsed name using this parser's tables.
    pub fn normalize(&self, name: &mut HumanName) {
        name.normalize_with(&self.lexicon);
    }
}

/// A parsed name.
///
/// Each component is an ordered list of pieces; a piece may hold several
/// words when they were joined during parsing ("van der Waals", "Mr. and
/// Mrs."). Component accessors join the pieces with single spaces.
#[derive(Debug, Clone, Default)]
pub struct HumanName {
    original: String,
    full_name: String,
    title: Tokens,
    first: Tokens,
    middle: Tokens,
    last: Tokens,
    suffix: Tokens,
    nickname: Tokens,
    last_base: Tokens,
    last_prefixes: Tokens,
    additional: Vec<HumanName>,
}

impl HumanName {
    /// Parse with the default tables and options.
    ///
    /// ```
    /// use nameparser::HumanName;
    ///
    /// let name = HumanName::parse("president john 'jack' fitzgerald kennedy");
    /// assert_eq!("president", name.title());
    /// assert_eq!("john", name.first());
    /// assert_eq!("fitzgerald", name.middle());
    /// assert_eq!("kennedy", name.last());
    /// assert_eq!("jack", name.nickname());
    /// ```
    pub fn parse(full_name: &str) -> HumanName {
        Parser::new().parse(full_name)
    }

    /// The input exactly as given.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The input with nicknames removed (and, for the primary of a chain of
    /// names, with the additional names split off).
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn title(&self) -> Cow<str> {
        word::join(&self.title)
    }

    pub fn first(&self) -> Cow<str> {
        word::join(&self.first)
    }

    pub fn middle(&self) -> Cow<str> {
        word::join(&self.middle)
    }

    pub fn last(&self) -> Cow<str> {
        word::join(&self.last)
    }

    pub fn suffix(&self) -> Cow<str> {
        word::join(&self.suffix)
    }

    pub fn nickname(&self) -> Cow<str> {
        word::join(&self.nickname)
    }

    /// The last name without its leading prefixes ("Waals" for "van der Waals").
    pub fn last_base(&self) -> Cow<str> {
        word::join(&self.last_base)
    }

    /// The leading prefixes of the last name ("van der" for "van der Waals").
    pub fn last_prefixes(&self) -> Cow<str> {
        word::join(&self.last_prefixes)
    }

    /// True if nothing at all, not even a nickname, was found in the input.
    pub fn is_unparsable(&self) -> bool {
        self.title.is_empty()
            && self.first.is_empty()
            && self.middle.is_empty()
            && self.last.is_empty()
            && self.suffix.is_empty()
            && self.nickname.is_empty()
    }

    /// The next name in the chain, when multiple names were parsed from the
    /// input.
    pub fn additional_name(&self) -> Option<&HumanName> {
        self.additional.first()
    }

    /// Every additional name, in input order. Only the primary name of a
    /// chain carries them.
    pub fn additional_names(&self) -> &[HumanName] {
        &self.additional
    }

    /// The components as a key-value mapping. Keys are `title`, `first`,
    /// `middle`, `last`, `lastbase`, `lastprefixes`, `suffix` and `nickname`.
    ///
    /// ```
    /// use nameparser::HumanName;
    ///
    /// let name = HumanName::parse("Mr. Jones");
    /// let map = name.as_map(false);
    /// assert_eq!(Some(&"Mr.".to_string()), map.get("title"));
    /// assert_eq!(None, map.get("first"));
    /// assert_eq!(8, name.as_map(true).len());
    /// ```
    pub fn as_map(&self, include_empty: bool) -> BTreeMap<&'static str, String> {
        let components = [
            ("title", self.title()),
            ("first", self.first()),
            ("middle", self.middle()),
            ("last", self.last()),
            ("lastbase", self.last_base()),
            ("lastprefixes", self.last_prefixes()),
            ("suffix", self.suffix()),
            ("nickname", self.nickname()),
        ];

        components
            .iter()
            .filter(|(_, value)| include_empty || !value.is_empty())
            .map(|(key, value)| (*key, value.to_string()))
            .collect()
    }

    /// Capitalize every component in place using the default tables.
    ///
    /// Prefixes, conjunctions and capitalization exceptions added to a custom
    /// [`Lexicon`] are not consulted here, even if that lexicon parsed the
    /// name. Use [`Parser::normalize`] or [`HumanName::normalize_with`] to
    /// keep them.
    ///
    /// ```
    /// use nameparser::HumanName;
    ///
    /// let mut name = HumanName::parse("johannes van der waals");
    /// name.normalize();
    /// assert_eq!("Johannes", name.first());
    /// assert_eq!("van der Waals", name.last());
    /// ```
    pub fn normalize(&mut self) {
        self.normalize_with(&Lexicon::default());
    }

    /// Capitalize every component in place, consulting `lexicon` for
    /// prefixes, conjunctions and capitalization exceptions.
    pub fn normalize_with(&mut self, lexicon: &Lexicon) {
        for tokens in [
            &mut self.title,
            &mut self.first,
            &mut self.middle,
            &mut self.last,
            &mut self.suffix,
            &mut self.nickname,
            &mut self.last_base,
            &mut self.last_prefixes,
        ] {
            for token in tokens.iter_mut() {
                *token = namecase::capitalize_piece(token.as_str(), lexicon);
            }
        }

        self.full_name = namecase::capitalize(&self.full_name, lexicon);

        for name in self.additional.iter_mut() {
            name.normalize_with(lexicon);
        }
    }

    /// Title, first, middle, last and suffix separated by spaces, followed
    /// by the nickname in parentheses if there is one.
    pub fn display_full(&self) -> String {
        let mut result = String::with_capacity(self.full_name.len() + 2);

        for piece in [
            &self.title,
            &self.first,
            &self.middle,
            &self.last,
            &self.suffix,
        ]
        .iter()
        .flat_map(|tokens| tokens.iter())
        {
            if !result.is_empty() {
                result.push(' ');
            }
            result.push_str(piece);
        }

        if !self.nickname.is_empty() {
            if !result.is_empty() {
                result.push(' ');
            }
            result.push('(');
            result.push_str(&self.nickname());
            result.push(')');
        }

        result
    }
}

impl fmt::Display for HumanName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_full())
    }
}
