//! Greedy word wrapping against measured pixel widths

use placard_core::traits::FontRef;

/// Breaks `text` into lines no wider than `max_width` when painted in `font`
///
/// Words are whitespace-delimited and never split. Each word is appended to
/// the current line when `"{line} {word}"` still fits, otherwise it starts
/// a new line; a word that is wider than `max_width` on its own therefore
/// gets a line to itself and overflows.
///
/// Empty input yields one empty line so a blank block still takes up its
/// spacing. Input made only of whitespace comes back unchanged as a single
/// line.
pub fn wrap_text(text: &str, font: &dyn FontRef, max_width: f32) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }

    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return vec![text.to_string()];
    };

    let mut lines = Vec::new();
    let mut current = first.to_string();
    for word in words {
        let candidate = format!("{} {}", current, word);
        if font.measure(&candidate).width <= max_width {
            current = candidate;
        } else {
            log::debug!("wrap: breaking before {:?} at {}px", word, max_width);
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    lines.push(current);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use placard_fontdb::BuiltinFont;

    // 6px cells, 10px lines
    fn cells() -> BuiltinFont {
        BuiltinFont::for_size(10.0)
    }

    #[test]
    fn test_breaks_when_next_word_overflows() {
        // "A B C" is 30px, "A B C D" is 42px
        assert_eq!(wrap_text("A B C D", &cells(), 35.0), vec!["A B C", "D"]);
    }

    #[test]
    fn test_exact_fit_stays_on_line() {
        assert_eq!(wrap_text("A B C D", &cells(), 42.0), vec!["A B C D"]);
    }

    #[test]
    fn test_empty_text_is_one_empty_line() {
        assert_eq!(wrap_text("", &cells(), 100.0), vec![String::new()]);
    }

    #[test]
    fn test_whitespace_only_text_is_kept_verbatim() {
        assert_eq!(wrap_text("  \t ", &cells(), 100.0), vec!["  \t "]);
    }

    #[test]
    fn test_overlong_word_is_not_split() {
        assert_eq!(
            wrap_text("Supercalifragilistic", &cells(), 30.0),
            vec!["Supercalifragilistic"]
        );
        assert_eq!(
            wrap_text("to Supercalifragilistic me", &cells(), 30.0),
            vec!["to", "Supercalifragilistic", "me"]
        );
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(
            wrap_text("  Nguyễn   Thị\tHải  ", &cells(), 1000.0),
            vec!["Nguyễn Thị Hải"]
        );
    }

    #[test]
    fn test_greedy_not_balanced() {
        // Balanced would be ["aaaa bb", "cc dddd"]; greedy fills the first line
        assert_eq!(
            wrap_text("aaaa bb cc dddd", &cells(), 60.0),
            vec!["aaaa bb cc", "dddd"]
        );
    }
}
