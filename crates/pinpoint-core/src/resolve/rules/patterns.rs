//! Regex patterns for pointer resolution.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Numeric dates: 12/05/2023, 1-2-99
    pub static ref DATE: Regex = Regex::new(
        r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b"
    ).unwrap();

    // Email pattern
    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    // Phone pattern (loose, matches most long digit runs)
    pub static ref PHONE: Regex = Regex::new(
        r"\+?\d{1,3}?[-.\s]??\d{3,5}[-.\s]??\d{5,10}"
    ).unwrap();
}
