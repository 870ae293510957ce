#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rlsummary_report::PathResolver;

#[derive(Arbitrary, Debug)]
struct Input {
    document: String,
    path: String,
}

fuzz_target!(|input: Input| {
    let Ok(root) = serde_json::from_str::<serde_json::Value>(&input.document) else {
        return;
    };
    let resolver = PathResolver::new(&root);
    let _ = resolver.get(&input.path);
    let _ = resolver.string_list(&input.path);
    let _ = resolver.entries(&input.path);
    let _ = resolver.items(&input.path);
    let _ = resolver.integer(&input.path);
});
