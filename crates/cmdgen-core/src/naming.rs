//! Naming convention utilities for code generation.
//!
//! Every emitter spells exported identifiers through these functions so the
//! same message gets the same identifier in every artifact.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `login_request` | [`to_pascal_case`] | `LoginRequest` |
//! | `word` | [`capitalize`] | `Word` |
//! | `account_id` | [`to_argument_name`] | `ACCOUNT_ID` |
//! | `game/login-v2` | [`to_module_ident`] | `login_v2` |

/// Spell a schema name the way protobuf's Go generators name its type.
///
/// An `_` followed by a lowercase letter is dropped and the letter
/// capitalized. Any other `_` is kept, so `Foo_Bar` and `FooBar` stay
/// distinct. A leading `_` becomes `X`. The first letter of every word and
/// every letter after a digit is capitalized.
///
/// # Examples
///
/// ```
/// use cmdgen_core::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("login_request"), "LoginRequest");
/// assert_eq!(to_pascal_case("LoginRequest"), "LoginRequest");
/// assert_eq!(to_pascal_case("Foo_BarRequest"), "Foo_BarRequest");
/// assert_eq!(to_pascal_case("ping"), "Ping");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 1);
    let mut chars = s.chars().peekable();

    if chars.next_if_eq(&'_').is_some() {
        out.push('X');
    }

    while let Some(c) = chars.next() {
        if c == '_' && chars.peek().is_some_and(char::is_ascii_lowercase) {
            continue;
        }
        if c.is_ascii_digit() {
            out.push(c);
            continue;
        }
        out.push(c.to_ascii_uppercase());
        while let Some(lower) = chars.next_if(char::is_ascii_lowercase) {
            out.push(lower);
        }
    }
    out
}

/// Capitalize the first letter of a string.
///
/// # Examples
///
/// ```
/// use cmdgen_core::naming::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Spell a field name as a Go constructor argument.
///
/// Uppercasing keeps arguments clear of Go keywords such as `type` or `range`.
pub fn to_argument_name(field: &str) -> String {
    field.to_uppercase()
}

/// Turn a file stem into an identifier fragment.
///
/// Keeps the last path segment and replaces anything that is not
/// alphanumeric with `_`.
pub fn to_module_ident(stem: &str) -> String {
    let base = stem.rsplit('/').next().unwrap_or(stem);
    base.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn to_pascal_case___converts_snake_case() {
        assert_eq!(to_pascal_case("login_request"), "LoginRequest");
        assert_eq!(to_pascal_case("player_joined_event"), "PlayerJoinedEvent");
    }

    #[test]
    fn to_pascal_case___keeps_underscore_before_uppercase() {
        assert_eq!(to_pascal_case("Foo_BarRequest"), "Foo_BarRequest");
        assert_ne!(to_pascal_case("Foo_BarRequest"), to_pascal_case("FooBarRequest"));
    }

    #[test]
    fn to_pascal_case___capitalizes_after_digit() {
        assert_eq!(to_pascal_case("v2_login"), "V2Login");
        assert_eq!(to_pascal_case("item2b"), "Item2B");
    }

    #[test]
    fn to_pascal_case___keeps_pascal_case() {
        assert_eq!(to_pascal_case("LoginResponse"), "LoginResponse");
        assert_eq!(to_pascal_case("HTTPRequest"), "HTTPRequest");
    }

    #[test]
    fn to_pascal_case___handles_edge_underscores() {
        assert_eq!(to_pascal_case("_leading"), "XLeading");
        assert_eq!(to_pascal_case("trailing_"), "Trailing_");
        assert_eq!(to_pascal_case("a__b"), "A_B");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn capitalize___preserves_rest_of_string() {
        assert_eq!(capitalize("loginRequest"), "LoginRequest");
        assert_eq!(capitalize("ALLCAPS"), "ALLCAPS");
    }

    #[test]
    fn to_argument_name___uppercases() {
        assert_eq!(to_argument_name("account_id"), "ACCOUNT_ID");
        assert_eq!(to_argument_name("type"), "TYPE");
    }

    #[test]
    fn to_module_ident___keeps_last_segment() {
        assert_eq!(to_module_ident("game/login"), "login");
        assert_eq!(to_module_ident("login"), "login");
    }

    #[test]
    fn to_module_ident___replaces_punctuation() {
        assert_eq!(to_module_ident("game/login-v2.beta"), "login_v2_beta");
    }
}
