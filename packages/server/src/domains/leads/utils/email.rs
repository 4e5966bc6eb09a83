/// Derive a placeholder contact address from a company name.
///
/// Lower-cases the name, keeps only alphanumeric characters (whitespace and
/// punctuation are dropped), and wraps it as `contact@<name>.com`. The result
/// is a heuristic guess, never a verified address.
pub fn derive_email(company_name: &str) -> String {
    let domain: String = company_name
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();

    format!("contact@{domain}.com")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(derive_email("Acme, Inc."), "contact@acmeinc.com");
    }

    #[test]
    fn test_removes_all_whitespace() {
        assert_eq!(derive_email("Foo  Bar"), "contact@foobar.com");
        assert_eq!(derive_email("Foo\tBar\nBaz"), "contact@foobarbaz.com");
    }

    #[test]
    fn test_lowercases_and_keeps_digits() {
        assert_eq!(derive_email("ACME 42 Labs"), "contact@acme42labs.com");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(derive_email("Zeta & Co"), derive_email("Zeta & Co"));
    }
}
