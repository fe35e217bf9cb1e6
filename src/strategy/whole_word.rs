//! Whole-word wrapper (§4.1): accepts a raw match only if the character
//! before `start` and the character at `end` are not word characters
//! (`[A-Za-z0-9_]`); line boundaries count as non-word.

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub fn filter_word_boundaries(line: &str, spans: Vec<(usize, usize)>) -> Vec<(usize, usize)> {
    if spans.is_empty() {
        return spans;
    }
    let chars: Vec<char> = line.chars().collect();
    spans
        .into_iter()
        .filter(|&(start, end)| {
            let before_ok = start == 0 || !is_word_char(chars[start - 1]);
            let after_ok = end >= chars.len() || !is_word_char(chars[end]);
            before_ok && after_ok
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_match_at_line_boundaries() {
        assert_eq!(filter_word_boundaries("cat", vec![(0, 3)]), vec![(0, 3)]);
    }

    #[test]
    fn rejects_match_inside_a_larger_word() {
        assert!(filter_word_boundaries("category", vec![(0, 3)]).is_empty());
    }

    #[test]
    fn accepts_match_surrounded_by_punctuation() {
        assert_eq!(filter_word_boundaries("(cat)", vec![(1, 4)]), vec![(1, 4)]);
    }

    #[test]
    fn rejects_when_followed_by_word_char() {
        assert!(filter_word_boundaries("cats", vec![(0, 3)]).is_empty());
    }
}
