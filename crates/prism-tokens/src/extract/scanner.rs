//! Brace-depth block scanner.
//!
//! Only flat declaration blocks are supported: the scanner finds the brace that
//! closes a block by counting `{` and `}`, so braces that appear inside values
//! (for instance in `calc()` expressions written with custom functions) do not
//! end the block early. Nested rules are not interpreted; a nested block is
//! returned verbatim as part of its parent's body.

/// Returns the body of the block whose opening brace sits at `open`.
///
/// The body excludes the outer braces. An unterminated block runs to the end of
/// the input. Returns `None` if `open` does not point at a `{`.
pub fn block_body(css: &str, open: usize) -> Option<&str> {
    if css.as_bytes().get(open) != Some(&b'{') {
        return None;
    }
    let (body, _) = scan(css, open);
    Some(body)
}

/// Like [`block_body`], but also returns the byte offset just past the
/// closing brace, so callers can resume scanning after the block.
pub fn block_with_end(css: &str, open: usize) -> Option<(&str, usize)> {
    if css.as_bytes().get(open) != Some(&b'{') {
        return None;
    }
    Some(scan(css, open))
}

fn scan(css: &str, open: usize) -> (&str, usize) {
    let mut depth = 0usize;
    for (offset, byte) in css.as_bytes()[open..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    let close = open + offset;
                    return (&css[open + 1..close], close + 1);
                }
            }
            _ => {}
        }
    }
    (&css[open + 1..], css.len())
}
