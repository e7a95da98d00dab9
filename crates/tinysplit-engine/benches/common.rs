// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_flat_document(blocks: usize) -> String {
    let base = "(BLOCK\n  :attribute\n  Some text\n\n  @section1\n  :a1\n  @section2\n  :a2\n)\n";
    base.repeat(blocks)
}

#[allow(dead_code)]
pub fn generate_nested_document(depth: usize) -> String {
    let mut content = String::new();
    for level in 0..depth {
        content.push_str(&format!("(level{level}\n:depth {level}\n@s{level}\n"));
    }
    for _ in 0..depth {
        content.push_str(")\n");
    }
    content
}
