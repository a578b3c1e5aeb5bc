#[derive(Debug)]
enum CaseMapping {
    Empty,
    Single(char),
    Double(char, char),
    Triple(char, char, char),
}

impl CaseMapping {
    #[inline]
    fn lowercase(c: char) -> CaseMapping {
        let [x, y] = unicode_case_mapping::to_lowercase(c);
        Self::chars_from_u32(x, y, 0)
    }

    #[inline]
    fn titlecase(c: char) -> CaseMapping {
        let [x, y, z] = unicode_case_mapping::to_titlecase(c);
        Self::chars_from_u32(x, y, z)
    }

    // Zero marks an unused slot; a missing first slot means the character
    // maps to itself
    #[inline]
    fn chars_from_u32(x: u32, y: u32, z: u32) -> CaseMapping {
        match (char::from_u32(x), char::from_u32(y), char::from_u32(z)) {
            (Some(x), Some(y), Some(z)) if x != '\0' && y != '\0' && z != '\0' => {
                CaseMapping::Triple(x, y, z)
            }
            (Some(x), Some(y), _) if x != '\0' && y != '\0' => CaseMapping::Double(x, y),
            (Some(x), _, _) if x != '\0' => CaseMapping::Single(x),
            _ => CaseMapping::Empty,
        }
    }

    #[inline]
    fn or_unchanged(self, c: char) -> CaseMapping {
        match self {
            CaseMapping::Empty => CaseMapping::Single(c),
            mapped => mapped,
        }
    }
}

impl Iterator for CaseMapping {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        match *self {
            CaseMapping::Triple(x, y, z) => {
                *self = CaseMapping::Double(y, z);
                Some(x)
            }
            CaseMapping::Double(x, y) => {
                *self = CaseMapping::Single(y);
                Some(x)
            }
            CaseMapping::Single(x) => {
                *self = CaseMapping::Empty;
                Some(x)
            }
            CaseMapping::Empty => None,
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = match self {
            CaseMapping::Triple(_, _, _) => 3,
            CaseMapping::Double(_, _) => 2,
            CaseMapping::Single(_) => 1,
            CaseMapping::Empty => 0,
        };
        (size, Some(size))
    }
}

impl ExactSizeIterator for CaseMapping {}

/// Append `word` to `result` with its first character title-cased and the
/// rest lowercased.
pub fn push_titlecase(result: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        result.extend(CaseMapping::titlecase(first).or_unchanged(first));
    }
    push_lowercase(result, chars.as_str());
}

pub fn push_lowercase(result: &mut String, word: &str) {
    if word.is_ascii() {
        result.extend(word.bytes().map(|b| b.to_ascii_lowercase() as char));
    } else {
        result.extend(
            word.chars()
                .flat_map(|c| CaseMapping::lowercase(c).or_unchanged(c)),
        );
    }
}

pub fn lowercase(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    push_lowercase(&mut result, word);
    result
}
