use once_cell::sync::Lazy;
use regex::Regex;

/// Brazilian phone numbers, with optional country code and area code:
/// `+55 (11) 91234-5678`, `11 3456-7890`, `912345678`.
pub static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:(?:\+|00)?(55)\s?)?(?:\(?([1-9][0-9])\)?\s?)?(?:((?:9\d|[2-9])\d{3})-?(\d{4}))$",
    )
    .expect("phone regex is valid")
});
