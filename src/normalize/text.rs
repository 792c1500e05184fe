/// Trim, then uppercase each letter that follows a non-letter and lowercase the rest.
///
/// Acronyms do not survive: "USA" becomes "Usa".
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_letter = false;
    for c in raw.trim().chars() {
        if c.is_alphabetic() {
            if prev_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_letter = true;
        } else {
            out.push(c);
            prev_letter = false;
        }
    }
    out
}

pub fn company_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

pub fn email(raw: &str) -> Option<String> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() {
        None
    } else {
        Some(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("  acme corp "), "Acme Corp");
        assert_eq!(title_case("GLOBAL LOGISTICS"), "Global Logistics");
        assert_eq!(title_case("USA"), "Usa");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn title_case_after_punctuation_and_digits() {
        assert_eq!(title_case("o'reilly media"), "O'Reilly Media");
        assert_eq!(title_case("acme-widgets"), "Acme-Widgets");
        assert_eq!(title_case("3m company"), "3M Company");
    }

    #[test]
    fn title_case_is_a_fixed_point() {
        for s in ["Acme Corp", "O'Reilly Media", "3M Company", "Über Gmbh"] {
            assert_eq!(title_case(s), s);
        }
    }

    #[test]
    fn company_id_parses_or_none() {
        assert_eq!(company_id("42"), Some(42));
        assert_eq!(company_id(" 42 "), Some(42));
        assert_eq!(company_id("-7"), Some(-7));
        assert_eq!(company_id("abc"), None);
        assert_eq!(company_id("4.2"), None);
        assert_eq!(company_id(""), None);
    }

    #[test]
    fn email_lowercased_and_empty_is_none() {
        assert_eq!(email("  Sales@Acme.COM ").as_deref(), Some("sales@acme.com"));
        assert_eq!(email("   "), None);
        assert_eq!(email(""), None);
    }
}
