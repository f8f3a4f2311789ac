use lazy_static::lazy_static;
use regex::{Match, Regex};

lazy_static! {
    // An object literal opening with an id field, containing an employees
    // list, up to the first closing brace after it. Greedy-bounded: nested
    // braces or nested bracketed lists inside a record make it over- or
    // under-match. Good enough for the flat mock data it targets.
    static ref RECORD: Regex = Regex::new(r#"(?s)\{\s*id: ['"][^'"]*['"][^}]*?employees: \[[^\]]*?\][^}]*?\}"#).unwrap();
}

pub fn find_records(text: &str) -> impl Iterator<Item = Match<'_>> {
    RECORD.find_iter(text)
}
