use super::lexicon::{Lexicon, Vocabulary};
use super::parse;
use super::surname;
use super::{HumanName, Parser};
use smallvec::{smallvec, SmallVec};
use tracing::debug;

/// Parse `input` into a primary name, splitting off additional names first
/// when the parser is configured for it.
pub fn parse_chain(parser: &Parser, input: &str) -> HumanName {
    let mut vocabulary = Vocabulary::new(&parser.lexicon);

    let segments: SmallVec<[&str; 2]> = if parser.multiple_names {
        split_names(input)
    } else {
        smallvec![input]
    };

    if segments.len() > 1 {
        debug!(names = segments.len(), "split into multiple names");
    }

    // Later names are parsed first, so each name can see whether the one
    // after it has a last name
    let mut parsed: Vec<HumanName> = Vec::with_capacity(segments.len());
    for segment in segments.iter().rev() {
        let next_has_last = parsed.last().map(|next| !next.last.is_empty());
        let mut name = parse::parse(&mut vocabulary, parser.prefer, segment, next_has_last);
        name.original = segment.to_string();
        propagate_last(&mut name, parsed.iter_mut().rev(), &parser.lexicon);
        parsed.push(name);
    }

    let mut names = parsed.into_iter().rev();
    let mut primary = names.next().unwrap_or_default();
    primary.original = input.to_string();
    primary.additional = names.collect();
    primary
}

/// Split at the first "&" or, failing that, the first " and ", repeatedly.
pub fn split_names(input: &str) -> SmallVec<[&str; 2]> {
    let mut names = SmallVec::new();
    let mut rest = input;

    while let Some((head, tail)) = split_once_on_and(rest) {
        names.push(head);
        rest = tail;
    }

    names.push(rest);
    names
}

fn split_once_on_and(text: &str) -> Option<(&str, &str)> {
    if let Some(i) = text.find('&') {
        return Some((&text[..i], &text[i + 1..]));
    }

    const AND: &[u8] = b" and ";
    text.as_bytes()
        .windows(AND.len())
        .position(|window| window.eq_ignore_ascii_case(AND))
        .map(|i| (&text[..i], &text[i + AND.len()..]))
}

// "John D. and Catherine T. MacArthur": the first name borrows the last name
// of the next. "Smith, John and Jane": the last name carries forward until
// some later name has its own.
fn propagate_last<'a, I>(head: &mut HumanName, mut following: I, lexicon: &Lexicon)
where
    I: Iterator<Item = &'a mut HumanName>,
{
    if head.last.is_empty() {
        if let Some(next) = following.next() {
            if !next.last.is_empty() {
                head.last = next.last.clone();
                resplit_last(head, lexicon);
            }
        }
    } else {
        for next in following {
            if !next.last.is_empty() {
                break;
            }
            next.last = head.last.clone();
            resplit_last(next, lexicon);
        }
    }
}

fn resplit_last(name: &mut HumanName, lexicon: &Lexicon) {
    let (prefixes, base) = surname::split_prefixes(&name.last, lexicon);
    name.last_prefixes = prefixes;
    name.last_base = base;
}
