use std::fmt::Write;

pub const SIMPLE_QUERY: &str = "\
query CurrentUser {
  me {
    id
    name
  }
}
";

/// Generates a document with `count` queries, each spreading a fragment
/// defined at the end of the document.
pub fn many_operations_with_fragment(count: usize) -> String {
    let mut out = String::with_capacity(count * 90);
    for i in 0..count {
        writeln!(out, "query Operation{i}($id: ID!) {{").unwrap();
        writeln!(out, "  node(id: $id) {{").unwrap();
        writeln!(out, "    ...NodeFields").unwrap();
        writeln!(out, "    field{i}: description").unwrap();
        writeln!(out, "  }}").unwrap();
        writeln!(out, "}}\n").unwrap();
    }
    out.push_str("fragment NodeFields on Node {\n  id\n  name\n}\n");
    out
}

/// The same document as `source`, reformatted with different (but
/// insignificant) whitespace and commas.
pub fn reformatted(source: &str) -> String {
    source
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ,\n\t")
}
