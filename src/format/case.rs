//! String case conversion.

/// Turn `snake_case` into `camelCase`: every `_x` becomes `X`.
///
/// Only an underscore followed by a word character (`[A-Za-z0-9_]`) is
/// consumed, so a trailing underscore survives.
pub fn camel_case(input: &str) -> String {
    if !input.contains('_') {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if c == '_' && is_word_char(next) => {
                out.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => out.push(c),
        }
    }

    out
}

/// Turn `camelCase` into `snake_case`: every uppercase letter after the
/// first character becomes `_` plus its lowercase form.
///
/// A leading uppercase letter is kept as it is.
pub fn snake_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);

    for (index, c) in input.chars().enumerate() {
        if index > 0 && c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("user_name"), "userName");
        assert_eq!(camel_case("a_b_c"), "aBC");
        assert_eq!(camel_case("already"), "already");
        assert_eq!(camel_case("trailing_"), "trailing_");
        assert_eq!(camel_case("_private"), "Private");
        assert_eq!(camel_case("v_1"), "v1");
        assert_eq!(camel_case("a__b"), "a_b");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("userName"), "user_name");
        assert_eq!(snake_case("UserName"), "User_name");
        assert_eq!(snake_case("aBC"), "a_b_c");
        assert_eq!(snake_case("plain"), "plain");
        assert_eq!(snake_case(""), "");
    }
}
