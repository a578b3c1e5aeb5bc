use super::lexicon::Lexicon;
use super::word::{self, Tokens};
use compact_str::CompactString;
use std::mem;

pub static TITLES: phf::Set<&'static str> = include!(concat!(env!("OUT_DIR"), "/titles.rs"));

pub static FIRST_NAME_TITLES: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/first_name_titles.rs"));

/// A title followed by a single name usually means the name is a surname
/// ("Mr. Jones"), unless the title is one used with given names ("Uncle
/// Adam"). Either way, make sure the name lands in the right slot.
pub fn fix_first_or_last(
    title: &[CompactString],
    first: &mut Tokens,
    last: &mut Tokens,
    lexicon: &Lexicon,
) {
    if title.is_empty() || first.len() + last.len() != 1 {
        return;
    }

    if !lexicon.is_first_name_title(&word::join(title)) {
        mem::swap(first, last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn tokens(words: &[&str]) -> Tokens {
        words.iter().map(|w| CompactString::from(*w)).collect()
    }

    #[test]
    fn surname_after_title() {
        let lexicon = Lexicon::default();
        let mut first = tokens(&["Jones"]);
        let mut last: Tokens = smallvec![];
        fix_first_or_last(&tokens(&["Mr."]), &mut first, &mut last, &lexicon);
        assert!(first.is_empty());
        assert_eq!(tokens(&["Jones"]), last);
    }

    #[test]
    fn given_name_after_title() {
        let lexicon = Lexicon::default();
        let mut first: Tokens = smallvec![];
        let mut last = tokens(&["Adam"]);
        fix_first_or_last(&tokens(&["Uncle"]), &mut first, &mut last, &lexicon);
        assert_eq!(tokens(&["Adam"]), first);
        assert!(last.is_empty());
    }

    #[test]
    fn untouched_without_title() {
        let lexicon = Lexicon::default();
        let mut first = tokens(&["Cher"]);
        let mut last: Tokens = smallvec![];
        fix_first_or_last(&[], &mut first, &mut last, &lexicon);
        assert_eq!(tokens(&["Cher"]), first);
    }

    #[test]
    fn untouched_with_two_names() {
        let lexicon = Lexicon::default();
        let mut first = tokens(&["John"]);
        let mut last = tokens(&["Smith"]);
        fix_first_or_last(&tokens(&["Dr."]), &mut first, &mut last, &lexicon);
        assert_eq!(tokens(&["John"]), first);
        assert_eq!(tokens(&["Smith"]), last);
    }
}
