use super::conjunction::join_pieces;
use super::initials::is_initial;
use super::lexicon::Vocabulary;
use super::nickname::strip_nicknames;
use super::segment;
use super::surname;
use super::title;
use super::{HumanName, Prefer};
use compact_str::CompactString;
use tracing::trace;

struct ParseOp<'v, 'l> {
    vocabulary: &'v mut Vocabulary<'l>,
    prefer: Prefer,
    // `None` without a following name, otherwise whether it has a last name
    next_has_last: Option<bool>,
    name: HumanName,
}

/// Parse a single name (never split on "and"/"&"). Only the nickname-free
/// `full_name` is set; the caller fills in `original`.
pub fn parse(
    vocabulary: &mut Vocabulary,
    prefer: Prefer,
    text: &str,
    next_has_last: Option<bool>,
) -> HumanName {
    let mut op = ParseOp {
        vocabulary,
        prefer,
        next_has_last,
        name: HumanName::default(),
    };

    op.run(text);
    op.name
}

impl<'v, 'l> ParseOp<'v, 'l> {
    fn run(&mut self, text: &str) {
        let (text, nicknames) = strip_nicknames(text);
        self.name.nickname = nicknames;
        self.name.full_name = text.trim().to_string();

        // Three layouts, told apart by commas:
        //   title first middle last suffix
        //   title first middle last, suffix[, suffix]
        //   last, title first middle[, suffix]
        let parts = segment::comma_segments(&text);
        match parts.len() {
            0 => trace!("nothing outside nicknames"),
            1 => self.handle_no_comma(parts[0]),
            _ if self.vocabulary.are_suffixes(parts[1].split_whitespace()) => {
                self.handle_suffix_comma(&parts)
            }
            _ => self.handle_last_name_comma(&parts),
        }

        self.post_process();
    }

    fn handle_no_comma(&mut self, part: &str) {
        trace!(part, "no comma");

        let pieces = join_pieces(self.vocabulary, segment::pieces(part), 0);

        for (i, piece) in pieces.iter().enumerate() {
            let is_final = i + 1 == pieces.len();
            let rest = &pieces[i + 1..];

            if self.vocabulary.is_title(piece) && (!is_final || pieces.len() == 1) {
                // Surnames can look like titles ("John Major"), but not at the start
                if self.name.first.is_empty() && self.name.middle.is_empty() {
                    self.name.title.push(piece.clone());
                } else {
                    self.name.last.push(piece.clone());
                }
            } else if self.name.first.is_empty() {
                self.name.first.push(piece.clone());
            } else if self.are_suffixes(rest) {
                self.name.last.push(piece.clone());
                self.name.suffix.extend(rest.iter().cloned());
                break;
            } else if !is_final {
                self.name.middle.push(piece.clone());
            } else {
                self.push_final(piece.clone(), true);
            }
        }
    }

    fn handle_suffix_comma(&mut self, parts: &[&str]) {
        trace!(name = parts[0], "suffixes after comma");

        self.name
            .suffix
            .extend(parts[1..].iter().map(|&part| CompactString::from(part)));

        let pieces = join_pieces(self.vocabulary, segment::pieces(parts[0]), 0);

        for (i, piece) in pieces.iter().enumerate() {
            let is_final = i + 1 == pieces.len();
            let rest = &pieces[i + 1..];

            if self.vocabulary.is_title(piece) && (!is_final || pieces.len() == 1) {
                self.name.title.push(piece.clone());
            } else if self.name.first.is_empty() {
                self.name.first.push(piece.clone());
            } else if self.are_suffixes(rest) {
                self.name.last.push(piece.clone());
                self.name.suffix.insert_many(0, rest.iter().cloned());
                break;
            } else if !is_final {
                self.name.middle.push(piece.clone());
            } else {
                self.push_final(piece.clone(), false);
            }
        }
    }

    fn handle_last_name_comma(&mut self, parts: &[&str]) {
        trace!(last = parts[0], given = parts[1], "last name before comma");

        let given = join_pieces(self.vocabulary, segment::pieces(parts[1]), 1);
        let family = join_pieces(self.vocabulary, segment::pieces(parts[0]), 1);

        // The first piece is the last name, even if it looks like a suffix
        for piece in family {
            if !self.name.last.is_empty() && self.vocabulary.is_suffix(&piece) {
                self.name.suffix.push(piece);
            } else {
                self.name.last.push(piece);
            }
        }

        for (i, piece) in given.iter().enumerate() {
            let is_final = i + 1 == given.len();

            if self.vocabulary.is_title(piece) && (!is_final || given.len() == 1) {
                self.name.title.push(piece.clone());
            } else if self.name.first.is_empty() {
                self.name.first.push(piece.clone());
            } else if self.vocabulary.is_suffix(piece) {
                self.name.suffix.push(piece.clone());
            } else {
                self.name.middle.push(piece.clone());
            }
        }

        self.name
            .suffix
            .extend(parts[2..].iter().map(|&part| CompactString::from(part)));
    }

    // The final piece of a name with no comma before its suffixes
    fn push_final(&mut self, piece: CompactString, suffix_allowed: bool) {
        match self.next_has_last {
            None => {
                // Some surnames look like suffixes ("John Junior")
                if suffix_allowed && !self.name.last.is_empty() && self.vocabulary.is_suffix(&piece)
                {
                    self.name.suffix.push(piece);
                } else {
                    self.name.last.push(piece);
                }
            }
            // "John D." in "John D. and Catherine T. MacArthur": the
            // following name supplies the last name
            Some(true) if is_initial(&piece) => self.name.middle.push(piece),
            Some(_) => self.name.last.push(piece),
        }
    }

    fn are_suffixes(&self, pieces: &[CompactString]) -> bool {
        self.vocabulary
            .are_suffixes(pieces.iter().map(CompactString::as_str))
    }

    fn post_process(&mut self) {
        let lexicon = self.vocabulary.lexicon();
        let name = &mut self.name;

        title::fix_first_or_last(&name.title, &mut name.first, &mut name.last, lexicon);

        if self.prefer.contains(Prefer::FIRST_OVER_PREFIX) {
            surname::prefer_first_over_prefix(&name.title, &mut name.first, &mut name.last, lexicon);
        }

        let (prefixes, base) = surname::split_prefixes(&name.last, lexicon);
        name.last_prefixes = prefixes;
        name.last_base = base;
    }
}
