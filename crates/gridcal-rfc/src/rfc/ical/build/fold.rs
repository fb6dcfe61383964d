//! Content line folding (RFC 5545 §3.1).

const CRLF: &str = "\r\n";

/// Maximum line length in octets (not characters).
const MAX_LINE_OCTETS: usize = 75;

/// Folds a finished multi-line body into wire-ready form.
///
/// The input is split on `\n`. Each logical line is emitted as segments of
/// at most 75 octets (never splitting a UTF-8 character); segments after
/// the first are prefixed with a single tab. Every logical line yields at
/// least one physical line, so empty lines survive. All physical lines are
/// joined with CRLF.
///
/// This is the only place line length is enforced; callers must not
/// pre-wrap content.
#[must_use]
pub fn fold(content: &str) -> String {
    content
        .split('\n')
        .map(fold_line)
        .collect::<Vec<_>>()
        .join(CRLF)
}

fn fold_line(line: &str) -> String {
    let mut folded = String::with_capacity(line.len() + 4);
    let mut rest = line;
    loop {
        let take = segment_len(rest);
        folded.push_str(&rest[..take]);
        rest = &rest[take..];
        if rest.is_empty() {
            break;
        }
        folded.push_str(CRLF);
        folded.push('\t');
    }
    folded
}

/// Largest prefix of `s` that fits in 75 octets and ends on a character
/// boundary.
fn segment_len(s: &str) -> usize {
    if s.len() <= MAX_LINE_OCTETS {
        return s.len();
    }
    let mut end = MAX_LINE_OCTETS;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    end
}
