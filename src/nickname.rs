use super::word::Tokens;
use compact_str::CompactString;
use smallvec::SmallVec;
use std::borrow::Cow;

/// Remove parenthesized and quoted nicknames from `text`, returning what's
/// left (with whitespace collapsed, if anything was removed) and the
/// nicknames in the order they were found.
///
/// A parenthesized nickname takes any whitespace before it along with it.
/// A quoted nickname must open at the start of a word, and its closing quote
/// must not be followed by a letter, so apostrophes in names like "O'Brien"
/// are left alone.
pub fn strip_nicknames(text: &str) -> (Cow<str>, Tokens) {
    let mut nicknames = Tokens::new();
    let mut text = Cow::Borrowed(text);

    loop {
        let (matched, nickname) = match find_nickname(&text) {
            Some((matched, nickname)) => (matched.to_string(), nickname.trim().to_string()),
            None => break,
        };

        if !nickname.is_empty() {
            nicknames.push(CompactString::from(nickname));
        }
        text = Cow::Owned(text.replace(&matched, ""));
    }

    if text.is_empty() || matches!(text, Cow::Borrowed(_)) {
        return (text, nicknames);
    }

    let collapsed = text
        .split_whitespace()
        .collect::<SmallVec<[&str; 8]>>()
        .join(" ");
    (Cow::Owned(collapsed), nicknames)
}

// The leftmost nickname in `text`, as (whole match, inner text)
fn find_nickname(text: &str) -> Option<(&str, &str)> {
    let mut whitespace_start = None;
    let mut at_word_start = true;

    for (i, c) in text.char_indices() {
        match c {
            '(' => {
                if let Some(close) = find_closing(text, i + 1, ')', false) {
                    let start = whitespace_start.unwrap_or(i);
                    return Some((&text[start..=close], &text[i + 1..close]));
                }
            }
            '"' | '\'' if at_word_start => {
                if let Some(close) = find_closing(text, i + 1, c, true) {
                    return Some((&text[i..=close], &text[i + 1..close]));
                }
            }
            _ => {}
        }

        if c.is_whitespace() {
            whitespace_start.get_or_insert(i);
            at_word_start = true;
        } else {
            whitespace_start = None;
            at_word_start = false;
        }
    }

    None
}

// Byte index of the first `close` after at least one character of content
fn find_closing(text: &str, from: usize, close: char, at_word_end: bool) -> Option<usize> {
    let mut chars = text[from..].char_indices();
    chars.next()?;

    chars
        .filter(|&(_, c)| c == close)
        .map(|(j, _)| from + j)
        .find(|&j| {
            !at_word_end
                || text[j + close.len_utf8()..]
                    .chars()
                    .next()
                    .map_or(true, |next| !next.is_alphabetic())
        })
}
