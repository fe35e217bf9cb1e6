//! Multi-literal matching for repeated `-e PATTERN` occurrences with
//! `--fixed-strings` (§4.1a). At each position, every needle is tried;
//! the longest needle that matches wins, so a shorter needle that is a
//! prefix of a longer one never steals the match.

pub struct FixedMultiMatcher {
    /// Longest-first, so the "try every needle, keep the longest match"
    /// rule in §4.1a can just take the first hit per position.
    needles: Vec<String>,
    ignore_case: bool,
}

impl FixedMultiMatcher {
    pub fn new(mut needles: Vec<String>, ignore_case: bool) -> Self {
        needles.sort_by_key(|b| std::cmp::Reverse(b.chars().count()));
        Self { needles, ignore_case }
    }

    pub fn find(&self, line: &str) -> Vec<(usize, usize)> {
        let haystack: Vec<char> = line.chars().collect();
        let mut spans = Vec::new();
        let mut i = 0usize;
        'outer: while i < haystack.len() {
            for needle in &self.needles {
                let needle_chars: Vec<char> = needle.chars().collect();
                if needle_chars.is_empty() || i + needle_chars.len() > haystack.len() {
                    continue;
                }
                let window = &haystack[i..i + needle_chars.len()];
                let matches = if self.ignore_case {
                    window
                        .iter()
                        .flat_map(|c| c.to_lowercase())
                        .eq(needle_chars.iter().flat_map(|c| c.to_lowercase()))
                } else {
                    window == needle_chars.as_slice()
                };
                if matches {
                    let end = i + needle_chars.len();
                    spans.push((i, end));
                    i = end.max(i + 1);
                    continue 'outer;
                }
            }
            i += 1;
        }
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_needle_wins_at_a_position() {
        let matcher = FixedMultiMatcher::new(vec!["foo".into(), "foobar".into()], false);
        assert_eq!(matcher.find("foobar"), vec![(0, 6)]);
    }

    #[test]
    fn finds_each_needle_independently() {
        let matcher = FixedMultiMatcher::new(vec!["cat".into(), "dog".into()], false);
        assert_eq!(matcher.find("a dog and a cat"), vec![(2, 5), (12, 15)]);
    }

    #[test]
    fn case_insensitive_multi_match() {
        let matcher = FixedMultiMatcher::new(vec!["CAT".into()], true);
        assert_eq!(matcher.find("a cat sat"), vec![(2, 5)]);
    }
}
