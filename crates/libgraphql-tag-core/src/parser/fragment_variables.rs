//! Support for the experimental `fragment Name($var: Type) on T { ... }`
//! syntax, which `graphql_parser` does not accept.
//!
//! A light lexical pass finds each top-level `fragment <Name> (` and the
//! matching `)`. That region is cut out of the text handed to
//! `graphql_parser` by overwriting it with spaces (newlines are kept), so
//! all line/column positions in the remaining text are unchanged. The region
//! itself is parsed by `graphql_parser` as the variable list of a throwaway
//! operation.

use crate::ast;
use crate::parser::graphql_parser_v0_4::gp_variable_defs_to_ast;
use crate::parser::SyntaxError;
use std::collections::HashMap;

const BOM: &[u8] = "\u{feff}".as_bytes();

#[derive(Debug)]
pub(super) struct ExtractedFragmentVariables {
    pub(super) blanked_source: String,
    regions: Vec<FragmentVariablesRegion>,
}

#[derive(Debug)]
struct FragmentVariablesRegion {
    fragment_name: String,

    /// Byte offset of the `fragment` keyword.
    keyword_offset: usize,

    /// Byte range of `( ... )`, parens included.
    start: usize,
    end: usize,
}

impl ExtractedFragmentVariables {
    /// Parses every extracted `( ... )` region, keyed by the byte offset of
    /// the `fragment` keyword it belongs to.
    pub(super) fn parse_variable_definitions(
        &self,
        source: &str,
    ) -> Result<HashMap<usize, Vec<ast::VariableDefinition>>, SyntaxError> {
        self.regions
            .iter()
            .map(|region| {
                let var_defs_text = &source[region.start..region.end];
                let wrapped = format!(
                    "query FragmentVariables{var_defs_text} {{ __typename }}",
                );
                let doc = graphql_parser::query::parse_query::<String>(&wrapped)
                    .map_err(|err| SyntaxError::new(format!(
                        "Invalid variable definitions on fragment `{}`: {}",
                        region.fragment_name,
                        err.to_string().trim(),
                    )))?;

                use graphql_parser::query::Definition as GpDef;
                use graphql_parser::query::OperationDefinition as GpOp;
                let var_defs = doc.definitions
                    .into_iter()
                    .find_map(|def| match def {
                        GpDef::Operation(GpOp::Query(query)) =>
                            Some(query.variable_definitions),
                        _ => None,
                    })
                    .unwrap_or_default();

                Ok((region.keyword_offset, gp_variable_defs_to_ast(var_defs)))
            })
            .collect()
    }
}

pub(super) fn extract(
    source: &str,
) -> Result<ExtractedFragmentVariables, SyntaxError> {
    let bytes = source.as_bytes();
    let mut regions = vec![];
    let mut brace_depth = 0usize;
    let mut paren_depth = 0usize;
    let mut idx = 0;

    while idx < bytes.len() {
        match bytes[idx] {
            b'#' => idx = skip_comment(bytes, idx),
            b'"' => idx = skip_string(bytes, idx),
            b'{' => {
                brace_depth += 1;
                idx += 1;
            },
            b'}' => {
                brace_depth = brace_depth.saturating_sub(1);
                idx += 1;
            },
            b'(' => {
                paren_depth += 1;
                idx += 1;
            },
            b')' => {
                paren_depth = paren_depth.saturating_sub(1);
                idx += 1;
            },
            b'$' => idx = skip_name(bytes, idx + 1),
            byte if is_name_start(byte) => {
                let name_end = skip_name(bytes, idx);
                if brace_depth == 0
                    && paren_depth == 0
                    && &source[idx..name_end] == "fragment"
                    && let Some(region) = find_region(source, idx, name_end)? {
                    idx = region.end;
                    regions.push(region);
                    continue;
                }
                idx = name_end;
            },
            _ => idx += 1,
        }
    }

    let mut blanked_source = String::with_capacity(source.len());
    let mut copied_through = 0;
    for region in &regions {
        blanked_source.push_str(&source[copied_through..region.start]);
        blanked_source.extend(
            source[region.start..region.end]
                .chars()
                .map(|ch| if ch == '\n' || ch == '\r' { ch } else { ' ' }),
        );
        copied_through = region.end;
    }
    blanked_source.push_str(&source[copied_through..]);

    Ok(ExtractedFragmentVariables {
        blanked_source,
        regions,
    })
}

/// Looks for `<Name> (` after a `fragment` keyword ending at `keyword_end`.
fn find_region(
    source: &str,
    keyword_start: usize,
    keyword_end: usize,
) -> Result<Option<FragmentVariablesRegion>, SyntaxError> {
    let bytes = source.as_bytes();

    let name_start = skip_ignored(bytes, keyword_end);
    if !bytes.get(name_start).is_some_and(|&byte| is_name_start(byte)) {
        return Ok(None);
    }
    let name_end = skip_name(bytes, name_start);
    let fragment_name = &source[name_start..name_end];

    let open_paren = skip_ignored(bytes, name_end);
    if bytes.get(open_paren) != Some(&b'(') {
        return Ok(None);
    }

    let close_paren = find_closing_paren(bytes, open_paren).ok_or_else(|| {
        SyntaxError::new(format!(
            "Unterminated variable definitions on fragment `{fragment_name}`",
        ))
    })?;

    Ok(Some(FragmentVariablesRegion {
        fragment_name: fragment_name.to_string(),
        keyword_offset: keyword_start,
        start: open_paren,
        end: close_paren + 1,
    }))
}

fn find_closing_paren(bytes: &[u8], open_paren: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut idx = open_paren;
    while idx < bytes.len() {
        match bytes[idx] {
            b'"' => {
                idx = skip_string(bytes, idx);
                continue;
            },
            b'#' => {
                idx = skip_comment(bytes, idx);
                continue;
            },
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx);
                }
            },
            _ => (),
        }
        idx += 1;
    }
    None
}

fn is_name_start(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphabetic()
}

fn skip_name(bytes: &[u8], start: usize) -> usize {
    let mut idx = start;
    while bytes.get(idx).is_some_and(|&b| b == b'_' || b.is_ascii_alphanumeric()) {
        idx += 1;
    }
    idx
}

fn skip_comment(bytes: &[u8], start: usize) -> usize {
    let mut idx = start;
    while bytes.get(idx).is_some_and(|&b| b != b'\n' && b != b'\r') {
        idx += 1;
    }
    idx
}

/// Skips whitespace, commas, byte-order marks and comments.
fn skip_ignored(bytes: &[u8], start: usize) -> usize {
    let mut idx = start;
    loop {
        match bytes.get(idx) {
            Some(b' ' | b'\t' | b'\n' | b'\r' | b',') => idx += 1,
            Some(b'#') => idx = skip_comment(bytes, idx),
            Some(_) if bytes[idx..].starts_with(BOM) => idx += BOM.len(),
            _ => return idx,
        }
    }
}

/// Skips a string or block string starting at the opening `"`. An
/// unterminated string runs to the end of its line (or the end of input for
/// block strings); the real parser reports the error.
fn skip_string(bytes: &[u8], start: usize) -> usize {
    if bytes[start..].starts_with(b"\"\"\"") {
        let mut idx = start + 3;
        while idx < bytes.len() {
            if bytes[idx..].starts_with(b"\\\"\"\"") {
                idx += 4;
            } else if bytes[idx..].starts_with(b"\"\"\"") {
                return idx + 3;
            } else {
                idx += 1;
            }
        }
        return bytes.len();
    }

    let mut idx = start + 1;
    while idx < bytes.len() {
        match bytes[idx] {
            b'\\' => idx += 2,
            b'"' => return idx + 1,
            b'\n' | b'\r' => return idx,
            _ => idx += 1,
        }
    }
    bytes.len()
}
