//! File names for generated cards

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Folds a display string for comparison: diacritics stripped, whitespace
/// collapsed, lower case
///
/// Characters that do not decompose (such as `đ`) are kept as they are.
pub fn normalize_name(text: &str) -> String {
    let stripped: String = text.nfd().filter(|c| !is_combining_mark(*c)).collect();
    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// ASCII slug of a name: runs of anything outside `[a-z0-9]` become `_`
///
/// Falls back to `guest` when nothing usable is left.
pub fn safe_slug(text: &str) -> String {
    let mut slug = String::new();
    let mut pending_sep = false;
    for c in normalize_name(text).chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_sep && !slug.is_empty() {
                slug.push('_');
            }
            pending_sep = false;
            slug.push(c);
        } else {
            pending_sep = true;
        }
    }

    if slug.is_empty() {
        "guest".to_string()
    } else {
        slug
    }
}

/// `invitation_{id}_{slug}.{extension}`
pub fn asset_file_name(id: u64, name: &str, extension: &str) -> String {
    format!("invitation_{}_{}.{}", id, safe_slug(name), extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_vietnamese_marks() {
        assert_eq!(normalize_name("  Kính   gửi "), "kinh gui");
        assert_eq!(normalize_name("Nguyễn Thị Hải Anh"), "nguyen thi hai anh");
    }

    #[test]
    fn test_slug_collapses_separators() {
        assert_eq!(safe_slug("Nguyễn Văn Đạt"), "nguyen_van_at");
        assert_eq!(safe_slug("Anh/Chị  Hoa & gia đình!"), "anh_chi_hoa_gia_inh");
        assert_eq!(safe_slug("__Bác Tư 2__"), "bac_tu_2");
    }

    #[test]
    fn test_slug_of_nothing_usable_is_guest() {
        assert_eq!(safe_slug(""), "guest");
        assert_eq!(safe_slug("Đ đ"), "guest");
        assert_eq!(safe_slug("***"), "guest");
    }

    #[test]
    fn test_asset_file_name() {
        assert_eq!(
            asset_file_name(12, "Tạ Quang Thái", "png"),
            "invitation_12_ta_quang_thai.png"
        );
    }
}
