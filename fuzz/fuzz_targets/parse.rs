#![no_main]
use libfuzzer_sys::fuzz_target;
use nameparser::Parser;

fuzz_target!(|data: &str| {
    let name = Parser::new().multiple_names(true).parse(data);
    for other in name.additional_names() {
        assert!(other.additional_names().is_empty());
    }

    let rejoined = [name.last_prefixes(), name.last_base()]
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    assert_eq!(name.last(), rejoined);
});
