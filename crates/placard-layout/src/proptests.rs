use super::*;
use placard_core::{
    traits::FontRef,
    types::{Point, TextExtent, TextMask},
};
use placard_fontdb::BuiltinFont;
use proptest::prelude::*;

/// Proportional widths so the laws are not only checked on fixed cells
struct Proportional;

impl FontRef for Proportional {
    fn name(&self) -> &str {
        "proportional"
    }
    fn size(&self) -> f32 {
        12.0
    }
    fn line_height(&self) -> f32 {
        14.0
    }
    fn measure(&self, text: &str) -> TextExtent {
        let width = text
            .chars()
            .map(|c| match c {
                'i' | 'l' | '.' => 3.0,
                'm' | 'w' | 'M' | 'W' => 11.0,
                c if c.is_whitespace() => 4.0,
                _ => 7.0,
            })
            .sum();
        TextExtent::new(width, 14.0)
    }
    fn rasterize(&self, _text: &str, _origin: Point) -> Option<TextMask> {
        None
    }
}

fn text_strategy() -> impl Strategy<Value = String> {
    "[ \t]{0,2}[a-zA-Z.]{1,12}([ \t\n]{1,3}[a-zA-Zàếữ.]{1,12}){0,12}[ \t]{0,2}"
}

fn collapsed(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// Property: every line fits, unless it is one word that cannot fit anywhere
proptest! {
    #[test]
    fn prop_lines_fit_or_are_single_words(text in text_strategy(), max_width in 0.0f32..400.0) {
        for font in [&Proportional as &dyn FontRef, &BuiltinFont::for_size(10.0) as &dyn FontRef] {
            for line in wrap_text(&text, font, max_width) {
                prop_assert!(
                    font.measure(&line).width <= max_width || !line.contains(' '),
                    "{:?} is {}px wide, limit {}",
                    line,
                    font.measure(&line).width,
                    max_width
                );
            }
        }
    }
}

// Property: rejoining the lines gives the text with whitespace collapsed
proptest! {
    #[test]
    fn prop_rejoined_lines_are_normalized_text(text in text_strategy(), max_width in 0.0f32..400.0) {
        let lines = wrap_text(&text, &Proportional, max_width);
        prop_assert!(!lines.is_empty());
        prop_assert_eq!(lines.join(" "), collapsed(&text));
    }
}

// Property: wrapping already wrapped text changes nothing
proptest! {
    #[test]
    fn prop_wrapping_is_idempotent(text in text_strategy(), max_width in 0.0f32..400.0) {
        let lines = wrap_text(&text, &Proportional, max_width);
        let again = wrap_text(&lines.join(" "), &Proportional, max_width);
        prop_assert_eq!(lines, again);
    }
}

// Property: no line starts or ends with whitespace, none is empty
proptest! {
    #[test]
    fn prop_lines_are_trimmed(text in text_strategy(), max_width in 0.0f32..400.0) {
        for line in wrap_text(&text, &Proportional, max_width) {
            prop_assert!(!line.is_empty());
            prop_assert_eq!(line.trim(), line.as_str());
        }
    }
}

// Property: a wider limit never produces more lines
proptest! {
    #[test]
    fn prop_wider_limit_never_adds_lines(text in text_strategy(), narrow in 0.0f32..200.0, extra in 0.0f32..200.0) {
        let narrow_lines = wrap_text(&text, &Proportional, narrow).len();
        let wide_lines = wrap_text(&text, &Proportional, narrow + extra).len();
        prop_assert!(wide_lines <= narrow_lines);
    }
}
