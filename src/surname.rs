use super::lexicon::Lexicon;
use super::word::{self, Tokens};
use compact_str::CompactString;
use smallvec::smallvec;

pub static PREFIXES: phf::Set<&'static str> = include!(concat!(env!("OUT_DIR"), "/prefixes.rs"));

/// Split a last name into its leading prefix words and the rest:
/// "van der Waals" is ("van der", "Waals").
pub fn split_prefixes(last: &[CompactString], lexicon: &Lexicon) -> (Tokens, Tokens) {
    let mut prefixes = Tokens::new();
    let mut base = Tokens::new();

    for w in word::words(last) {
        if base.is_empty() && lexicon.is_prefix(w) {
            prefixes.push(CompactString::from(w));
        } else {
            base.push(CompactString::from(w));
        }
    }

    (prefixes, base)
}

/// After a title, a lone prefixed last name ("Mr. Del Richards") may really
/// be a first name that happens to be a prefix.
pub fn prefer_first_over_prefix(
    title: &[CompactString],
    first: &mut Tokens,
    last: &mut Tokens,
    lexicon: &Lexicon,
) {
    if title.is_empty() || !first.is_empty() || last.len() != 1 {
        return;
    }

    let (head, rest) = match last[0].split_once(' ') {
        Some((head, rest)) if lexicon.is_prefix(head) => {
            (CompactString::from(head), CompactString::from(rest))
        }
        _ => return,
    };

    *first = smallvec![head];
    *last = smallvec![rest];
}
