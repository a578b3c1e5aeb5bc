use super::HumanName;
use std::hash::{Hash, Hasher};

/// Do two names have the same components?
///
/// Title, first, middle, last and suffix must render identically
/// (case-sensitively). Nicknames must match too, unless either name has none.
///
/// # WARNING
///
/// This is technically an invalid implementation of PartialEq because it is
/// not transitive - "John Smith" == "John (Jack) Smith", and "John Smith" ==
/// "John (Johnny) Smith", but "John (Jack) Smith" != "John (Johnny) Smith".
/// (It is, however, symmetric and reflexive.)
///
/// Additional names and the original input are not compared.
impl Eq for HumanName {}
impl PartialEq for HumanName {
    fn eq(&self, other: &HumanName) -> bool {
        self.title() == other.title()
            && self.first() == other.first()
            && self.middle() == other.middle()
            && self.last() == other.last()
            && self.suffix() == other.suffix()
            && (self.nickname.is_empty()
                || other.nickname.is_empty()
                || self.nickname() == other.nickname())
    }
}

/// Implements a hash for a name that is always identical for two names that
/// may be equal. Nicknames are left out, since they can be wildcards.
impl Hash for HumanName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title().hash(state);
        self.first().hash(state);
        self.middle().hash(state);
        self.last().hash(state);
        self.suffix().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash(name: &HumanName) -> u64 {
        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn comma_order_is_irrelevant() {
        let a = HumanName::parse("john x smith");
        let b = HumanName::parse("smith, john x");
        assert_eq!(a, b);
        assert_eq!(hash(&a), hash(&b));
    }

    #[test]
    fn nickname_is_wildcard() {
        let a = HumanName::parse("John Smith");
        let b = HumanName::parse("John (Jack) Smith");
        let c = HumanName::parse("John (Johnny) Smith");
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_ne!(b, c);
        assert_eq!(hash(&b), hash(&c));
    }

    #[test]
    fn case_sensitive() {
        assert_ne!(HumanName::parse("John Smith"), HumanName::parse("JOHN SMITH"));

        let mut a = HumanName::parse("john smith");
        a.normalize();
        assert_eq!(a, HumanName::parse("John Smith"));
    }

    #[test]
    fn components_matter() {
        assert_ne!(HumanName::parse("John Smith"), HumanName::parse("Dr. John Smith"));
        assert_ne!(HumanName::parse("John Smith"), HumanName::parse("John Smith Jr."));
        assert_ne!(HumanName::parse("John Smith"), HumanName::parse("John Q. Smith"));
    }
}
