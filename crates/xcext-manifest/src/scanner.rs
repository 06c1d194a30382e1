//! Region location in the indented manifest dialect.
//!
//! All locators return half-open byte ranges that cover whole lines: a
//! range starts at the beginning of the declaration line and ends at the
//! start of the first line after the region (document end if none). A
//! region extends through blank lines and lines indented deeper than its
//! declaration; the first non-blank line at the same or a shallower indent
//! starts the next sibling.

use std::ops::Range;

/// One level of indentation in the manifest dialect.
pub const INDENT: &str = "  ";

/// Iterate lines with their starting byte offsets, trailing newline included.
fn lines(doc: &str) -> impl Iterator<Item = (usize, &str)> {
    doc.split_inclusive('\n').scan(0usize, |offset, raw| {
        let start = *offset;
        *offset += raw.len();
        Some((start, raw))
    })
}

/// Line content without the trailing line terminator.
fn content(raw: &str) -> &str {
    raw.trim_end_matches('\n').trim_end_matches('\r')
}

fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// Whether `line` declares the key at exactly this indent, e.g. `  App_iOS:`
/// or `    dependencies: []`.
fn declares(line: &str, indent: &str, key: &str) -> bool {
    let Some(rest) = line.strip_prefix(indent) else {
        return false;
    };
    if rest.starts_with(' ') {
        return false;
    }
    match rest.strip_prefix(key).and_then(|r| r.strip_prefix(':')) {
        Some(tail) => tail.is_empty() || tail.starts_with(' '),
        None => false,
    }
}

/// Locate a top-level section: the first `<key>:` line at column 0 plus
/// every blank or whitespace-indented line that follows it.
pub fn top_level_section(doc: &str, key: &str) -> Option<Range<usize>> {
    let mut range: Option<Range<usize>> = None;
    for (at, raw) in lines(doc) {
        let line = content(raw);
        match range.as_mut() {
            None => {
                if declares(line, "", key) {
                    range = Some(at..at + raw.len());
                }
            }
            Some(r) => {
                if line.trim().is_empty() || line.starts_with([' ', '\t']) {
                    r.end = at + raw.len();
                } else {
                    break;
                }
            }
        }
    }
    range
}

/// Locate a nested key block inside `within`. `depth` counts two-space
/// indent levels of the block's declaration line. The block consumes
/// subsequent lines while they are blank or indented deeper than the
/// declaration; it ends at the next sibling, a dedent, or the end of
/// `within`.
pub fn nested_block(doc: &str, within: Range<usize>, key: &str, depth: usize) -> Option<Range<usize>> {
    let indent = INDENT.repeat(depth);
    let mut range: Option<Range<usize>> = None;
    for (at, raw) in lines(&doc[within.clone()]) {
        let at = within.start + at;
        let line = content(raw);
        match range.as_mut() {
            None => {
                if declares(line, &indent, key) {
                    range = Some(at..at + raw.len());
                }
            }
            Some(r) => {
                if line.trim().is_empty() || indent_width(line) > indent.len() {
                    r.end = at + raw.len();
                } else {
                    break;
                }
            }
        }
    }
    range
}

/// Locate a named target block at one level of indent, searched across the
/// whole document regardless of which top-level section holds it.
pub fn target_block(doc: &str, name: &str) -> Option<Range<usize>> {
    nested_block(doc, 0..doc.len(), name, 1)
}
