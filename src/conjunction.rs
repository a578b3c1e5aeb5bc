use super::lexicon::Vocabulary;
use super::word::{self, Pieces};
use compact_str::CompactString;
use smallvec::SmallVec;
use std::ops::Range;

pub static CONJUNCTIONS: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/conjunctions.rs"));

/// Join the pieces of one comma segment into compound pieces: conjunctions
/// with their neighbors ("Mr. and Mrs.", "Lord of the Universe",
/// "Velasquez y Garcia"), then a last-name prefix with what follows it up
/// to any suffix ("de la Vega").
///
/// `additional` is the number of pieces known to exist in other segments;
/// with fewer than three pieces overall, nothing is joined.
pub fn join_pieces(vocabulary: &mut Vocabulary, mut pieces: Pieces, additional: usize) -> Pieces {
    if pieces.len() + additional < 3 {
        return pieces;
    }

    join_on_conjunctions(vocabulary, &mut pieces);
    join_prefixes(vocabulary, &mut pieces);
    pieces
}

fn join_on_conjunctions(vocabulary: &mut Vocabulary, pieces: &mut Pieces) {
    // Only pieces that were conjunctions before joining began are joined on
    let mut candidates: SmallVec<[bool; 6]> = pieces
        .iter()
        .map(|piece| vocabulary.is_conjunction(piece))
        .collect();

    for index in (0..pieces.len()).rev() {
        if index >= pieces.len() || !candidates[index] {
            continue;
        }

        // A lone letter among few names is more likely an initial
        if pieces[index].chars().count() == 1
            && pieces.iter().filter(|p| vocabulary.is_root_name(p)).count() < 4
        {
            continue;
        }

        if index + 1 == pieces.len() {
            continue;
        }

        if index == 0 {
            let compound = word::compound(&pieces[0..2]);
            if vocabulary.is_title(&pieces[1]) {
                vocabulary.learn_conjunction(&compound);
            } else {
                vocabulary.learn_title(&compound);
            }
            merge(pieces, &mut candidates, 0..2, compound);
        } else if vocabulary.is_conjunction(&pieces[index - 1]) {
            let compound = word::compound(&pieces[index..index + 2]);
            vocabulary.learn_conjunction(&compound);
            merge(pieces, &mut candidates, index..index + 2, compound);
        } else {
            let compound = word::compound(&pieces[index - 1..index + 2]);
            if vocabulary.is_title(&pieces[index - 1]) {
                vocabulary.learn_title(&compound);
            }
            merge(pieces, &mut candidates, index - 1..index + 2, compound);
        }
    }
}

fn join_prefixes(vocabulary: &Vocabulary, pieces: &mut Pieces) {
    // A prefix in first position is more likely a first name ("Van Morrison")
    let start = match pieces.iter().skip(1).position(|p| vocabulary.is_prefix(p)) {
        Some(i) => i + 1,
        None => return,
    };

    let end = pieces[start + 1..]
        .iter()
        .position(|p| vocabulary.is_suffix(p))
        .map_or(pieces.len(), |i| start + 1 + i);

    if end - start > 1 {
        let compound = word::compound(&pieces[start..end]);
        pieces.drain(start..end);
        pieces.insert(start, compound);
    }
}

fn merge(
    pieces: &mut Pieces,
    candidates: &mut SmallVec<[bool; 6]>,
    range: Range<usize>,
    compound: CompactString,
) {
    let start = range.start;
    pieces.drain(range.clone());
    pieces.insert(start, compound);
    candidates.drain(range);
    candidates.insert(start, false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::segment;

    fn join(text: &str, additional: usize) -> Vec<String> {
        let lexicon = Lexicon::default();
        let mut vocabulary = Vocabulary::new(&lexicon);
        join_pieces(&mut vocabulary, segment::pieces(text), additional)
            .iter()
            .map(|p| p.to_string())
            .collect()
    }

    #[test]
    fn titles_around_conjunction() {
        let lexicon = Lexicon::default();
        let mut vocabulary = Vocabulary::new(&lexicon);
        let pieces = join_pieces(&mut vocabulary, segment::pieces("Mr. and Mrs. John Smith"), 0);
        assert_eq!("Mr. and Mrs.", pieces[0].as_str());
        assert_eq!(3, pieces.len());
        assert!(vocabulary.is_title("Mr. and Mrs."));
    }

    #[test]
    fn chained_conjunctions() {
        assert_eq!(vec!["Lord of the Universe"], join("Lord of the Universe", 0));
    }

    #[test]
    fn leading_conjunction() {
        let lexicon = Lexicon::default();
        let mut vocabulary = Vocabulary::new(&lexicon);
        let pieces = join_pieces(&mut vocabulary, segment::pieces("the Rock Johnson"), 0);
        assert_eq!("the Rock", pieces[0].as_str());
        assert!(vocabulary.is_title("the rock"));
    }

    #[test]
    fn leading_conjunction_before_title() {
        let lexicon = Lexicon::default();
        let mut vocabulary = Vocabulary::new(&lexicon);
        let pieces = join_pieces(&mut vocabulary, segment::pieces("and Mr. John Smith"), 0);
        let pieces: Vec<&str> = pieces.iter().map(|p| p.as_str()).collect();
        assert_eq!(vec!["and Mr.", "John", "Smith"], pieces);
        assert!(vocabulary.is_conjunction("and Mr."));
    }

    #[test]
    fn single_letter_conjunction_among_few_names() {
        assert_eq!(vec!["John", "e", "Smith"], join("John e Smith", 0));
        assert_eq!(vec!["John", "&", "Smith"], join("John & Smith", 0));
    }

    #[test]
    fn ampersand_among_many_names() {
        assert_eq!(vec!["John & Jane", "Smith"], join("John & Jane Smith", 0));
    }

    #[test]
    fn letter_conjunction_reads_as_initial() {
        assert_eq!(
            vec!["Juan", "Velasquez", "y", "Garcia", "Lopez"],
            join("Juan Velasquez y Garcia Lopez", 0)
        );
    }

    #[test]
    fn trailing_conjunction() {
        assert_eq!(vec!["John", "Smith", "and"], join("John Smith and", 0));
    }

    #[test]
    fn too_few_pieces() {
        assert_eq!(vec!["and", "Smith"], join("and Smith", 0));
        assert_eq!(vec!["van", "Smith"], join("van Smith", 0));
    }

    #[test]
    fn prefixes() {
        assert_eq!(vec!["Juan", "de la Vega"], join("Juan de la Vega", 0));
        assert_eq!(
            vec!["Juan", "Q.", "de la Vega", "III"],
            join("Juan Q. de la Vega III", 0)
        );
        assert_eq!(vec!["van", "der Smith"], join("van der Smith", 1));
        assert_eq!(vec!["Van", "Morrison"], join("Van Morrison", 1));
    }

    #[test]
    fn trailing_prefix() {
        assert_eq!(vec!["John", "Smith", "van"], join("John Smith van", 0));
    }
}
