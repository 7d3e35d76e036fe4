//! Small-value roman numerals, as used for column designators in both
//! transliteration headers (`@column ii`) and translation notation
//! (`obv. ii 3`). i..xxxix covers any real artifact.

pub fn parse_roman(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > 8 {
        return None;
    }
    let mut total: u32 = 0;
    let mut prev: u32 = 0;
    for c in s.chars() {
        let value = match c {
            'i' => 1,
            'v' => 5,
            'x' => 10,
            _ => return None,
        };
        total += value;
        if prev < value {
            // Subtractive pair (iv, ix): undo the addition of prev twice.
            total -= 2 * prev;
        }
        prev = value;
    }
    if total == 0 {
        None
    } else {
        Some(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values() {
        assert_eq!(parse_roman("i"), Some(1));
        assert_eq!(parse_roman("ii"), Some(2));
        assert_eq!(parse_roman("iv"), Some(4));
        assert_eq!(parse_roman("ix"), Some(9));
        assert_eq!(parse_roman("xii"), Some(12));
        assert_eq!(parse_roman("xxxix"), Some(39));
    }

    #[test]
    fn rejects_non_numerals() {
        assert_eq!(parse_roman(""), None);
        assert_eq!(parse_roman("abc"), None);
        assert_eq!(parse_roman("3"), None);
    }
}
