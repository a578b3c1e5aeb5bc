use compact_str::CompactString;
use smallvec::SmallVec;
use std::borrow::Cow;

/// An ordered component of a name; most hold zero, one or two pieces.
pub type Tokens = SmallVec<[CompactString; 2]>;

/// Pieces of a comma-separated segment while it is being joined and
/// classified.
pub type Pieces = SmallVec<[CompactString; 6]>;

pub fn join(pieces: &[CompactString]) -> Cow<str> {
    match pieces {
        [] => Cow::Borrowed(""),
        [only] => Cow::Borrowed(only.as_str()),
        _ => Cow::Owned(
            pieces
                .iter()
                .map(CompactString::as_str)
                .collect::<SmallVec<[&str; 4]>>()
                .join(" "),
        ),
    }
}

/// Join a run of pieces into one compound piece.
pub fn compound(pieces: &[CompactString]) -> CompactString {
    let mut result = CompactString::with_capacity(pieces.iter().map(|p| p.len() + 1).sum());
    for piece in pieces {
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(piece);
    }
    result
}

/// Split pieces back into their individual words, in order.
pub fn words(pieces: &[CompactString]) -> impl Iterator<Item = &str> {
    pieces.iter().flat_map(|piece| piece.split(' ')).filter(|w| !w.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pieces(words: &[&str]) -> Pieces {
        words.iter().map(|w| CompactString::from(*w)).collect()
    }

    #[test]
    fn join_borrows_single_piece() {
        let one = pieces(&["Smith"]);
        assert!(matches!(join(&one), Cow::Borrowed("Smith")));
        assert_eq!("", join(&[]));
    }

    #[test]
    fn join_many() {
        assert_eq!("van der Waals", join(&pieces(&["van der", "Waals"])));
    }

    #[test]
    fn compound_pieces() {
        assert_eq!("Mr. and Mrs.", compound(&pieces(&["Mr.", "and", "Mrs."])).as_str());
    }

    #[test]
    fn flatten_words() {
        let last = pieces(&["van der Waals", "Jr"]);
        assert_eq!(vec!["van", "der", "Waals", "Jr"], words(&last).collect::<Vec<_>>());
    }
}
