//! Tooltip text layout.

/// Line break understood by the chart tooltips.
pub const LINE_BREAK: &str = "<br>";
/// Prefix of each reference when a tooltip cites both axes.
pub const BULLET: &str = "\u{2022} ";
/// Default characters per tooltip line.
pub const DEFAULT_LINE_WRAP: usize = 25;

const TAB_SIZE: usize = 8;

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

fn is_letter(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Expands tabs to eight-column stops and turns every other whitespace
/// character into a single space.
fn clean(text: &str) -> Vec<char> {
    let mut out = Vec::with_capacity(text.len());
    let mut column = 0usize;
    for c in text.chars() {
        match c {
            '\t' => {
                let pad = TAB_SIZE - column % TAB_SIZE;
                out.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\n' | '\r' => {
                out.push(' ');
                column = 0;
            }
            c if is_space(c) => {
                out.push(' ');
                column += 1;
            }
            c => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}

/// A word may break after the hyphen at `idx` when two letters (or
/// `letter-letter`) precede it and a letter pair follows.
fn breaks_after_hyphen(text: &[char], idx: usize) -> bool {
    let letter_at = |pos: usize| text.get(pos).copied().is_some_and(is_letter);
    let before = (idx >= 2 && letter_at(idx - 2) && letter_at(idx - 1))
        || (idx >= 3 && letter_at(idx - 3) && text[idx - 2] == '-' && letter_at(idx - 1));
    let after = letter_at(idx + 1)
        && (letter_at(idx + 2) || (text.get(idx + 2) == Some(&'-') && letter_at(idx + 3)));
    before && after
}

/// Alternating runs of spaces and words; hyphenated words are cut after
/// each breakable hyphen.
fn split_chunks(text: &[char]) -> Vec<Vec<char>> {
    let mut chunks = Vec::new();
    let mut start = 0;
    while start < text.len() {
        let mut end = start + 1;
        if text[start] == ' ' {
            while end < text.len() && text[end] == ' ' {
                end += 1;
            }
        } else {
            while end < text.len() && text[end] != ' ' {
                end += 1;
                if text[end - 1] == '-' && breaks_after_hyphen(text, end - 1) {
                    break;
                }
            }
        }
        chunks.push(text[start..end].to_vec());
        start = end;
    }
    chunks
}

fn is_blank(chunk: &[char]) -> bool {
    chunk.iter().all(|&c| c == ' ')
}

/// Greedy word wrap.
///
/// Breaks at whitespace and after hyphens inside words, keeps whitespace
/// runs within a line and drops them at line edges (except leading
/// whitespace of the first line). Words longer than `width` are split,
/// preferring their last hyphen that fits. Blank text yields no lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut chunks = split_chunks(&clean(text));
    chunks.reverse();
    let mut lines: Vec<String> = Vec::new();
    while !chunks.is_empty() {
        let mut line: Vec<Vec<char>> = Vec::new();
        let mut len = 0usize;
        if !lines.is_empty() && chunks.last().is_some_and(|chunk| is_blank(chunk)) {
            chunks.pop();
        }
        while let Some(chunk) = chunks.pop() {
            if len + chunk.len() > width {
                chunks.push(chunk);
                break;
            }
            len += chunk.len();
            line.push(chunk);
        }
        if let Some(chunk) = chunks.last_mut().filter(|chunk| chunk.len() > width) {
            let room = width - len;
            let end = chunk[..room]
                .iter()
                .rposition(|&c| c == '-')
                .filter(|&hyphen| hyphen > 0 && chunk[..hyphen].iter().any(|&c| c != '-'))
                .map_or(room, |hyphen| hyphen + 1);
            line.push(chunk.drain(..end).collect());
        }
        if line.last().is_some_and(|chunk| is_blank(chunk)) {
            line.pop();
        }
        if !line.is_empty() {
            lines.push(line.concat().into_iter().collect());
        }
    }
    lines
}

/// One reference wrapped and joined with tooltip line breaks.
pub fn reference_block(reference: &str, width: usize) -> String {
    wrap(reference, width).join(LINE_BREAK)
}

/// Two references, one per axis, each bulleted and wrapped independently.
pub fn paired_reference_block(x_reference: &str, y_reference: &str, width: usize) -> String {
    format!(
        "{BULLET}{x}{LINE_BREAK}{BULLET}{y}",
        x = reference_block(x_reference, width),
        y = reference_block(y_reference, width),
    )
}
