//! Plain-text sanitization for captured query values.
//!
//! Query values land in a session store and later in hidden form
//! fields, so markup and control characters are stripped up front.
//! No length limit is enforced.

/// Sanitizes a raw query value into plain text: removes tag markup,
/// control characters (including percent-encoded control octets), and
/// collapses whitespace runs into single spaces.
pub fn sanitize_text_field(raw: &str) -> String {
    let stripped = strip_tags(raw);
    let stripped = strip_encoded_control_octets(&stripped);

    let mut out = String::with_capacity(stripped.len());
    let mut pending_space = false;
    for ch in stripped.chars() {
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
        } else if !ch.is_control() {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }
    }
    out
}

/// Drops `<...>` segments. An unterminated `<` swallows the rest of the
/// input rather than leaking a partial tag.
fn strip_tags(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_tag = false;
    for ch in raw.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Drops `%XX` sequences that decode to a control byte; other
/// percent-encoded octets pass through untouched.
fn strip_encoded_control_octets(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = String::with_capacity(raw.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if let (Some(hi), Some(lo)) = (
                bytes.get(i + 1).and_then(|b| (*b as char).to_digit(16)),
                bytes.get(i + 2).and_then(|b| (*b as char).to_digit(16)),
            ) {
                let octet = (hi * 16 + lo) as u8;
                if octet < 0x20 || octet == 0x7f {
                    i += 3;
                    continue;
                }
            }
        }
        // i only ever lands on char boundaries: it advances past whole
        // chars or whole '%XX' ASCII sequences.
        match raw[i..].chars().next() {
            Some(ch) => {
                out.push(ch);
                i += ch.len_utf8();
            }
            None => break,
        }
    }
    out
}
