use std::cmp::Ordering;

/// Tashkeel combining marks (fathatan through sukun, plus the
/// superscript alef) carry no weight when ordering names.
fn is_tashkeel(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{0652}' | '\u{0670}')
}

/// Kashida used to stretch words for layout.
const TATWEEL: char = '\u{0640}';

/// Collation key for display names in an Arabic-language surface:
/// tashkeel and tatweel are dropped, alef and ya variants are unified,
/// Latin letters are case-folded. Everything else keeps code point order.
pub fn sort_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for c in name.chars() {
        if is_tashkeel(c) || c == TATWEEL {
            continue;
        }
        match c {
            'أ' | 'إ' | 'آ' | 'ٱ' => key.push('ا'),
            'ى' => key.push('ي'),
            _ => {
                for low in c.to_lowercase() {
                    key.push(low);
                }
            }
        }
    }
    key
}

/// Ordering of two display names under the collation key. Names with
/// equal keys compare equal; a stable sort keeps their given order.
pub fn compare(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tashkeel_ignored() {
        assert_eq!(sort_key("مُحَمَّد"), sort_key("محمد"));
        assert_eq!(compare("مُحَمَّد", "محمد"), Ordering::Equal);
    }

    #[test]
    fn test_tatweel_ignored() {
        assert_eq!(sort_key("محمـــد"), "محمد");
    }

    #[test]
    fn test_alef_forms_unified() {
        assert_eq!(sort_key("أحمد"), sort_key("احمد"));
        assert_eq!(sort_key("إبراهيم"), sort_key("ابراهيم"));
        assert_eq!(sort_key("آمنة"), sort_key("امنة"));
    }

    #[test]
    fn test_ya_forms_unified() {
        assert_eq!(sort_key("مصطفى"), sort_key("مصطفي"));
    }

    #[test]
    fn test_latin_case_folded() {
        assert_eq!(compare("Ahmed", "ahmed"), Ordering::Equal);
        assert_eq!(compare("Ahmed", "Basim"), Ordering::Less);
    }

    #[test]
    fn test_hamza_does_not_break_ordering() {
        // Raw code points would put أحمد before إبراهيم; the key
        // orders by the letters after the unified alef.
        assert_eq!(compare("إبراهيم", "أحمد"), Ordering::Less);
    }

    #[test]
    fn test_plain_ordering() {
        assert_eq!(compare("احمد", "زيد"), Ordering::Less);
        assert_eq!(compare("نورا", "سارة"), Ordering::Greater);
    }
}
