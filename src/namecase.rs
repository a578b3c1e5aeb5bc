use super::case::{lowercase, push_lowercase, push_titlecase};
use super::lexicon::{lookup_key, Lexicon};
use compact_str::CompactString;

pub static CAPITALIZATION_EXCEPTIONS: phf::Map<&'static str, &'static str> =
    include!(concat!(env!("OUT_DIR"), "/capitalization_exceptions.rs"));

// Surnames that start with "Mac" but aren't Gaelic patronymics
static MAC_EXCEPTIONS: [&str; 12] = [
    "macevicius",
    "macey",
    "machado",
    "machar",
    "machin",
    "machlin",
    "macias",
    "maciulis",
    "mackie",
    "mackle",
    "macklin",
    "macon",
];

/// Capitalize each whitespace-separated word of `text`, rejoining the words
/// with single spaces.
pub fn capitalize(text: &str, lexicon: &Lexicon) -> String {
    let mut result = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !result.is_empty() {
            result.push(' ');
        }
        capitalize_word(&mut result, word, lexicon);
    }
    result
}

pub fn capitalize_piece(piece: &str, lexicon: &Lexicon) -> CompactString {
    CompactString::from(capitalize(piece, lexicon))
}

fn capitalize_word(result: &mut String, word: &str, lexicon: &Lexicon) {
    if lexicon.is_prefix(word) || lexicon.is_conjunction(word) {
        push_lowercase(result, word);
        return;
    }

    if let Some(canonical) = lexicon.capitalization_exception(&lookup_key(word)) {
        result.push_str(canonical);
        return;
    }

    let lower = lowercase(word);

    if let Some(rest) = lower.strip_prefix("mac") {
        if rest.chars().count() > 1
            && starts_with_letter(rest)
            && !MAC_EXCEPTIONS.contains(&lower.as_str())
        {
            result.push_str("Mac");
            push_titlecase(result, rest);
            return;
        }
    } else if let Some(rest) = lower.strip_prefix("mc") {
        if starts_with_letter(rest) {
            result.push_str("Mc");
            push_titlecase(result, rest);
            return;
        }
    }

    push_titlecase(result, word);
}

fn starts_with_letter(s: &str) -> bool {
    s.chars().next().map_or(false, char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cap(text: &str) -> String {
        capitalize(text, &Lexicon::default())
    }

    #[test]
    fn simple() {
        assert_eq!("John", cap("john"));
        assert_eq!("John", cap("JOHN"));
        assert_eq!("O'brien", cap("o'brien"));
        assert_eq!("J.", cap("j."));
    }

    #[test]
    fn particles_stay_lowercase() {
        assert_eq!("van der Waals", cap("VAN DER WAALS"));
        assert_eq!("de la Vega", cap("De La Vega"));
        assert_eq!("Mr. and Mrs.", cap("mr. AND mrs."));
    }

    #[test]
    fn initials_are_not_particles() {
        assert_eq!("E", cap("e"));
        assert_eq!("Y.", cap("y."));
    }

    #[test]
    fn exceptions() {
        assert_eq!("Ph.D.", cap("phd"));
        assert_eq!("Ph.D.", cap("PH.D."));
        assert_eq!("III", cap("iii"));
        assert_eq!("M.D.", cap("md"));
    }

    #[test]
    fn caller_exceptions() {
        let lexicon = Lexicon::new().with_capitalization_exception("dds", "D.D.S.");
        assert_eq!("Smith D.D.S.", capitalize("smith dds", &lexicon));
    }

    #[test]
    fn gaelic_surnames() {
        assert_eq!("MacBeth", cap("macbeth"));
        assert_eq!("MacArthur", cap("MACARTHUR"));
        assert_eq!("McBride", cap("mcbride"));
        assert_eq!("Machado", cap("machado"));
        assert_eq!("Mack", cap("mack"));
        assert_eq!("Mc", cap("mc"));
    }

    #[test]
    fn whitespace_is_collapsed() {
        assert_eq!("John Smith", cap("  john   smith "));
        assert_eq!("", cap("   "));
    }

    #[test]
    fn idempotent() {
        for text in &["macbeth van der waals phd", "o'brien-smith iii", "ÉMILE ZOLA"] {
            let once = cap(text);
            assert_eq!(once, cap(&once));
        }
    }
}
