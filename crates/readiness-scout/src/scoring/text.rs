/// Lowercased word tokens of free text collected from evidence.
///
/// Words are split on anything that is not alphanumeric, except that `+`
/// and `#` stay attached so stack names like `c++` survive.
#[derive(Debug, Clone, Default)]
pub struct TokenizedText {
    tokens: Vec<String>,
}

impl TokenizedText {
    pub fn new<'a>(fragments: impl IntoIterator<Item = &'a str>) -> Self {
        let mut tokens = Vec::new();
        for fragment in fragments {
            // Fragment boundary so phrases never span two separate inputs.
            tokens.push(String::new());
            tokens.extend(tokenize(fragment));
        }
        Self { tokens }
    }

    /// Whole-word, case-insensitive phrase match.
    pub fn contains_phrase(&self, phrase: &str) -> bool {
        let needle = tokenize(phrase);
        if needle.is_empty() || needle.len() > self.tokens.len() {
            return false;
        }
        self.tokens
            .windows(needle.len())
            .any(|window| window.iter().zip(&needle).all(|(a, b)| a == b))
    }

    /// Distinct phrases from `vocabulary` present in the text, in vocabulary order.
    pub fn matched<'v>(&self, vocabulary: &[&'v str]) -> Vec<&'v str> {
        vocabulary
            .iter()
            .copied()
            .filter(|phrase| self.contains_phrase(phrase))
            .collect()
    }

    pub fn contains_any(&self, vocabulary: &[&str]) -> bool {
        vocabulary.iter().any(|phrase| self.contains_phrase(phrase))
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Count of `titles` that mention any phrase in `vocabulary`.
pub fn count_matching_titles(titles: &[String], vocabulary: &[&str]) -> usize {
    titles
        .iter()
        .filter(|title| TokenizedText::new([title.as_str()]).contains_any(vocabulary))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_whole_words_only() {
        let text = TokenizedText::new(["Maintain the AML program", "Sustainability report"]);
        assert!(text.contains_phrase("aml"));
        assert!(!text.contains_phrase("ai"));
        assert!(!text.contains_phrase("stain"));
    }

    #[test]
    fn matches_multi_word_phrases_case_insensitively() {
        let text = TokenizedText::new(["Hiring a Model Risk Management lead"]);
        assert!(text.contains_phrase("model risk management"));
        assert!(!text.contains_phrase("risk lead"));
    }

    #[test]
    fn phrases_do_not_span_fragments() {
        let text = TokenizedText::new(["credit", "risk"]);
        assert!(!text.contains_phrase("credit risk"));
    }

    #[test]
    fn keeps_symbolic_stack_names() {
        let text = TokenizedText::new(["C++ and C# developers"]);
        assert!(text.contains_phrase("c++"));
        assert!(text.contains_phrase("c#"));
    }

    #[test]
    fn counts_titles_with_any_keyword() {
        let titles = vec![
            "AML Analyst".to_string(),
            "Sanctions Screening Lead".to_string(),
            "Frontend Engineer".to_string(),
        ];
        assert_eq!(count_matching_titles(&titles, &["aml", "sanctions"]), 2);
    }
}
