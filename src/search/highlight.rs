use unicode_segmentation::UnicodeSegmentation;

/// Marker wrapped around matched spans in highlighted content.
pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

/// Wrap every case-insensitive occurrence of `term` in `text` with
/// highlight markers. The term is plain text, never a pattern, so
/// characters like `(`, `.` or `*` in user input match literally.
/// Everything outside the markers is the original text, casing included.
pub fn highlight_term(text: &str, term: &str) -> String {
    let ranges = find_ranges(text, term);
    if ranges.is_empty() {
        return text.to_string();
    }

    let extra = ranges.len() * (MARK_OPEN.len() + MARK_CLOSE.len());
    let mut out = String::with_capacity(text.len() + extra);
    let mut last = 0;
    for (start, end) in ranges {
        out.push_str(&text[last..start]);
        out.push_str(MARK_OPEN);
        out.push_str(&text[start..end]);
        out.push_str(MARK_CLOSE);
        last = end;
    }
    out.push_str(&text[last..]);
    out
}

/// Remove highlight markers, reproducing the unhighlighted text.
pub fn strip_marks(text: &str) -> String {
    text.replace(MARK_OPEN, "").replace(MARK_CLOSE, "")
}

/// Byte ranges of every case-insensitive occurrence of `term` in `text`,
/// non-overlapping, in order. Offsets refer to the original text.
fn find_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return vec![];
    }

    // Case-fold per character, keeping per-byte maps from the folded
    // string back to the original char boundaries. Folding can change
    // byte lengths, so searching a plain to_lowercase() copy would
    // misplace the offsets.
    let mut folded = String::with_capacity(text.len());
    let mut starts: Vec<usize> = Vec::with_capacity(text.len());
    let mut ends: Vec<usize> = Vec::with_capacity(text.len());
    for (idx, ch) in text.char_indices() {
        let char_end = idx + ch.len_utf8();
        for low in ch.to_lowercase() {
            for _ in 0..low.len_utf8() {
                starts.push(idx);
                ends.push(char_end);
            }
            folded.push(low);
        }
    }

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    let mut from = 0;
    while let Some(pos) = folded[from..].find(&needle) {
        let hit = from + pos;
        let start = starts[hit];
        let end = ends[hit + needle.len() - 1];
        match ranges.last_mut() {
            // A fold expansion can make adjacent hits share an original
            // char; extend instead of emitting an overlapping range.
            Some(last) if start < last.1 => last.1 = last.1.max(end),
            _ => ranges.push((start, end)),
        }
        from = hit + needle.len();
    }

    ranges
}

/// Shorten `content` to at most `max_graphemes` grapheme clusters
/// windowed around the first case-insensitive occurrence of `term`,
/// with an ellipsis on each trimmed side. Content that already fits is
/// returned unchanged; so is content with no occurrence at all.
pub fn snippet(content: &str, term: &str, max_graphemes: usize) -> String {
    let graphemes: Vec<(usize, &str)> = content.grapheme_indices(true).collect();
    if graphemes.len() <= max_graphemes || max_graphemes == 0 {
        return content.to_string();
    }

    let first = match find_ranges(content, term).first() {
        Some(&(start, _)) => start,
        None => return content.to_string(),
    };
    let hit_idx = graphemes
        .iter()
        .position(|&(idx, g)| idx <= first && first < idx + g.len())
        .unwrap_or(0);

    // Center the window on the match, clamped to the content bounds.
    let start_idx = hit_idx
        .saturating_sub(max_graphemes / 2)
        .min(graphemes.len() - max_graphemes);
    let end_idx = start_idx + max_graphemes;

    let mut out = String::new();
    if start_idx > 0 {
        out.push('…');
    }
    for &(_, g) in &graphemes[start_idx..end_idx] {
        out.push_str(g);
    }
    if end_idx < graphemes.len() {
        out.push('…');
    }
    out
}
