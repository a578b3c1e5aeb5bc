pub static SUFFIXES: phf::Set<&'static str> = include!(concat!(env!("OUT_DIR"), "/suffixes.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generational_and_professional() {
        assert!(SUFFIXES.contains("jr"));
        assert!(SUFFIXES.contains("iii"));
        assert!(SUFFIXES.contains("phd"));
        assert!(SUFFIXES.contains("esq"));
        assert!(!SUFFIXES.contains("jr."));
    }
}
