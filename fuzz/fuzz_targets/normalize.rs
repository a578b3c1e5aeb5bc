#![no_main]
use libfuzzer_sys::fuzz_target;
use nameparser::HumanName;

fuzz_target!(|data: &str| {
    let mut once = HumanName::parse(data);
    once.normalize();

    let mut twice = once.clone();
    twice.normalize();

    assert_eq!(once.as_map(true), twice.as_map(true));
    assert_eq!(once.full_name(), twice.full_name());
});
