//! ISBN clean up shared by every external lookup.

/// Reduces an ISBN string to ASCII digits and an uppercase `X`.
///
/// Hyphens, spaces, prefixes such as `ISBN:` and any other character are dropped. A lower case
/// `x` check digit is kept as `X`. The result may be empty, which callers treat as "no ISBN".
///
/// ```
/// assert_eq!("080442957X", shelf::sanitize_isbn("0-8044-2957-x"));
/// assert_eq!("", shelf::sanitize_isbn("n/a"));
/// ```
#[must_use]
pub fn sanitize(isbn: &str) -> String {
    isbn.chars()
        .filter_map(|c| match c {
            '0'..='9' => Some(c),
            'x' | 'X' => Some('X'),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::sanitize;

    #[test]
    fn hyphenated_isbn_13_is_stripped() {
        assert_eq!("9780441013593", sanitize("978-0-441-01359-3"));
    }

    #[test]
    fn only_digits_and_upper_x_survive() {
        let inputs = [
            "ISBN: 0-306-40615-2",
            " 080442957x ",
            "abc",
            "",
            "９７８", // full width digits are not ASCII
            "xXx-12",
        ];

        for input in inputs {
            let clean = sanitize(input);
            assert!(
                clean.chars().all(|c| c.is_ascii_digit() || c == 'X'),
                "'{clean}' from '{input}' contains an unexpected character"
            );
        }
    }

    #[test]
    fn sanitizing_twice_changes_nothing() {
        for input in ["978-0441013593", "0-8044-2957-x", "no isbn", "X"] {
            let once = sanitize(input);
            assert_eq!(once, sanitize(&once));
        }
    }

    #[test]
    fn letters_other_than_x_are_removed() {
        assert_eq!("0306406152", sanitize("ISBN 0306406152"));
        assert_eq!("", sanitize("unknown"));
    }
}
