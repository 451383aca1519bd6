//! Predicates over strings: numeric literals and IP addresses.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::OnceLock;

use regex::Regex;

/// Decimal (with optional sign, fraction and exponent), octal (`0` prefix)
/// or hexadecimal (`0x` prefix) number literals.
const NUMBER_PATTERN: &str =
    r"(?i)^((-?\d*\.?\d*(?:e[+-]?\d*(?:\d?\.?|\.?\d?)\d*)?)|(0[0-7]+)|(0x[0-9a-f]+))$";

fn number_regex() -> &'static Regex {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    NUMBER.get_or_init(|| Regex::new(NUMBER_PATTERN).expect("number pattern is valid"))
}

/// Check whether a string is a number literal.
///
/// The empty string is not a number.
pub fn is_number_string(value: &str) -> bool {
    !value.is_empty() && number_regex().is_match(value)
}

pub fn is_ipv4(value: &str) -> bool {
    value.parse::<Ipv4Addr>().is_ok()
}

/// IPv6 address, optionally followed by a `%zone` suffix.
pub fn is_ipv6(value: &str) -> bool {
    let address = match value.split_once('%') {
        Some((address, zone)) if !zone.is_empty() => address,
        Some(_) => return false,
        None => value,
    };
    address.parse::<Ipv6Addr>().is_ok()
}

/// `4` or `6` for a valid address of that family, `0` otherwise.
pub fn ip_version(value: &str) -> u8 {
    if is_ipv4(value) {
        4
    } else if is_ipv6(value) {
        6
    } else {
        0
    }
}

pub fn is_ip(value: &str) -> bool {
    ip_version(value) != 0
}
