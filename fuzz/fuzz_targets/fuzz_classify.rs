// SPDX-License-Identifier: MIT
#![no_main]

use arbitrary::Arbitrary;
use docent_catalog::{classify_medium, classify_subject, Catalog, MediumCategory, SubjectCategory};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    title: Option<&'a str>,
    medium: Option<&'a str>,
    export: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    let subject = classify_subject(input.title, input.medium);
    assert!(SubjectCategory::ALL.contains(&subject));
    assert_eq!(subject, classify_subject(input.title, input.medium));

    let medium = classify_medium(input.medium);
    assert!(MediumCategory::ALL.contains(&medium));

    // malformed exports must error, never panic
    let _ = Catalog::from_json(input.export);
});
