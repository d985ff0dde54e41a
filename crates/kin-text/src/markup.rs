//! Markup stripping.
//!
//! Reduces HTML-like markup to plain text. Each tag is replaced by a single
//! space so that text in adjacent elements never glues into one word, and the
//! common character entities are decoded the way a browser's text extraction
//! would decode them.

/// Longest entity body (between `&` and `;`) that is considered for decoding.
const MAX_ENTITY_LEN: usize = 10;

/// Strips markup tags and decodes character entities.
///
/// A `<` starts a tag only when followed by an ASCII letter, `/`, `!` or `?`;
/// any other `<` is kept as literal text. Comments (`<!-- ... -->`) are removed
/// whole. An unterminated tag swallows the rest of the input. Unknown entities
/// are left untouched.
pub fn strip_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find(['<', '&']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with('<') {
            if let Some(len) = tag_len(tail) {
                out.push(' ');
                rest = &tail[len..];
            } else {
                out.push('<');
                rest = &tail[1..];
            }
            continue;
        }

        match decode_entity(tail) {
            Some((ch, len)) => {
                out.push(ch);
                rest = &tail[len..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Returns the byte length of the tag at the start of `tail`, if it is one.
fn tag_len(tail: &str) -> Option<usize> {
    let next = tail[1..].chars().next()?;
    if !(next.is_ascii_alphabetic() || matches!(next, '/' | '!' | '?')) {
        return None;
    }

    if tail.starts_with("<!--") {
        let len = tail[4..]
            .find("-->")
            .map_or(tail.len(), |end| 4 + end + 3);
        return Some(len);
    }

    Some(tail.find('>').map_or(tail.len(), |end| end + 1))
}

/// Decodes the entity at the start of `tail`, returning the character and the
/// number of bytes consumed.
fn decode_entity(tail: &str) -> Option<(char, usize)> {
    let (semi, _) = tail
        .char_indices()
        .take(MAX_ENTITY_LEN + 2)
        .find(|&(_, c)| c == ';')?;
    let name = &tail[1..semi];

    let ch = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" | "#39" => '\'',
        "nbsp" => '\u{a0}',
        _ => decode_numeric(name)?,
    };

    Some((ch, semi + 1))
}

/// Decodes a numeric character reference body such as `#233` or `#xE9`.
fn decode_numeric(name: &str) -> Option<char> {
    let digits = name.strip_prefix('#')?;
    let code = match digits.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse().ok()?,
    };
    char::from_u32(code)
}
