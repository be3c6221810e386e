//! Linebreak tables and void elements.

/// Void (self-closing) HTML elements. A start tag with one of these names is
/// treated as self-closing and never opens an element.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Linebreaks emitted when an element opens
const OPENING_BREAKERS: &[(&str, usize)] = &[
    ("p", 1),
    ("h1", 2),
    ("h2", 2),
    ("h3", 2),
    ("h4", 2),
    ("h5", 2),
    ("h6", 2),
    ("ul", 1),
];

/// Linebreaks emitted when an element closes
const CLOSING_BREAKERS: &[(&str, usize)] = &[
    ("p", 1),
    ("h1", 2),
    ("h2", 2),
    ("h3", 2),
    ("h4", 2),
    ("h5", 2),
    ("h6", 2),
    ("li", 1),
];

/// Linebreaks emitted for a self-closing element
const SELF_BREAKERS: &[(&str, usize)] = &[("br", 1)];

fn lookup(table: &[(&str, usize)], tag: &str) -> usize {
    table
        .iter()
        .find(|(name, _)| *name == tag)
        .map_or(0, |(_, count)| *count)
}

/// Check if a tag is a void element (exact, case-sensitive match)
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

pub fn opening_breaks(tag: &str) -> usize {
    lookup(OPENING_BREAKERS, tag)
}

pub fn closing_breaks(tag: &str) -> usize {
    lookup(CLOSING_BREAKERS, tag)
}

pub fn self_breaks(tag: &str) -> usize {
    lookup(SELF_BREAKERS, tag)
}
