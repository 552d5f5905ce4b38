// ============================================================================
// VALIDATE - Input sanitizers and field validators
// ============================================================================
// Sanitizers run on every keystroke and keep the field itself clean;
// validators run on submit and produce the warn-toast message. Both sides
// must agree, so they live together here.
// ============================================================================

pub const PLACE_MAX_LENGTH: usize = 40;
pub const NAME_MAX_LENGTH: usize = 50;
pub const PHONE_LENGTH: usize = 10;
pub const BOOKING_ID_MAX_LENGTH: usize = 36;
pub const PASSENGER_ID_MAX_LENGTH: usize = 10;
pub const AGE_MAX_DIGITS: usize = 2;
pub const SEATS_MAX_DIGITS: usize = 3;
pub const PRICE_MAX_DIGITS: usize = 6;
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Symbols that satisfy the password special-character rule.
pub const PASSWORD_SPECIALS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Strip everything but ASCII letters and spaces, collapse runs of spaces,
/// cap the length. Used for place names and person names.
fn sanitize_letters(value: &str, max_len: usize) -> String {
    let mut out = String::with_capacity(value.len().min(max_len));
    let mut last_was_space = false;
    for c in value.chars() {
        let keep = if c.is_ascii_alphabetic() {
            last_was_space = false;
            true
        } else if c == ' ' {
            let keep = !last_was_space;
            last_was_space = true;
            keep
        } else {
            false
        };
        if keep {
            out.push(c);
            if out.len() == max_len {
                break;
            }
        }
    }
    out
}

pub fn sanitize_place(value: &str) -> String {
    sanitize_letters(value, PLACE_MAX_LENGTH)
}

pub fn sanitize_person_name(value: &str) -> String {
    sanitize_letters(value, NAME_MAX_LENGTH)
}

/// Keep only digits, capped at `max_len`.
pub fn sanitize_digits(value: &str, max_len: usize) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(max_len)
        .collect()
}

pub fn sanitize_phone(value: &str) -> String {
    sanitize_digits(value, PHONE_LENGTH)
}

pub fn sanitize_age(value: &str) -> String {
    sanitize_digits(value, AGE_MAX_DIGITS)
}

/// Trimmed value must be non-empty letters/spaces only.
pub fn is_letters_and_spaces(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

/// Exactly 10 digits and not all zeroes.
pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    if phone.len() != PHONE_LENGTH || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err("Phone number must be 10 digits");
    }
    if phone.chars().all(|c| c == '0') {
        return Err("Phone number cannot be all zeroes or invalid");
    }
    Ok(())
}

/// Password strength rules, checked in order so the first failure is the
/// message shown.
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < PASSWORD_MIN_LENGTH {
        return Err("Password must be at least 8 characters.");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err("Password must include at least one lowercase letter.");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Password must include at least one uppercase letter.");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must include at least one number.");
    }
    if !password.chars().any(|c| PASSWORD_SPECIALS.contains(c)) {
        return Err("Password must include at least one special character (!@#$%^&* etc.).");
    }
    Ok(())
}

/// Same shape the original client accepted: something@something.something,
/// no whitespace, exactly one '@', at least one dot after it with text on
/// both sides.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot + 1 < domain.len(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_sanitizer_keeps_only_digits_capped_at_ten() {
        assert_eq!(sanitize_phone("98a76-54321 0"), "9876543210");
        assert_eq!(sanitize_phone("123456789012345"), "1234567890");
        assert_eq!(sanitize_phone("abc"), "");
    }

    #[test]
    fn phone_validation_rejects_short_and_all_zero() {
        assert!(validate_phone("9876543210").is_ok());
        assert_eq!(validate_phone("12345"), Err("Phone number must be 10 digits"));
        assert_eq!(
            validate_phone("0000000000"),
            Err("Phone number cannot be all zeroes or invalid")
        );
    }

    #[test]
    fn name_sanitizer_strips_and_collapses() {
        assert_eq!(sanitize_place("New   Delhi!!"), "New Delhi");
        assert_eq!(sanitize_person_name("R2-D2"), "RD");
        assert_eq!(sanitize_place("a".repeat(60).as_str()).len(), PLACE_MAX_LENGTH);
    }

    #[test]
    fn letters_and_spaces_check_rejects_empty_and_symbols() {
        assert!(is_letters_and_spaces("Ahmedabad"));
        assert!(is_letters_and_spaces("New Delhi"));
        assert!(!is_letters_and_spaces(""));
        assert!(!is_letters_and_spaces("Delhi-6"));
    }

    #[test]
    fn password_rules_fire_in_order() {
        assert_eq!(
            validate_password("short1!"),
            Err("Password must be at least 8 characters.")
        );
        assert_eq!(
            validate_password("ALLLOWERCASE1!".to_lowercase().as_str()),
            Err("Password must include at least one uppercase letter.")
        );
        assert_eq!(
            validate_password("alllowercase1!"),
            Err("Password must include at least one uppercase letter.")
        );
        assert_eq!(
            validate_password("NoNumber!"),
            Err("Password must include at least one number.")
        );
        assert_eq!(
            validate_password("NoSymbol1A"),
            Err("Password must include at least one special character (!@#$%^&* etc.).")
        );
        assert!(validate_password("GoodPass1!").is_ok());
    }

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a.b+c@mail.co.in"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user example@mail.com"));
        assert!(!is_valid_email("user@@mail.com"));
        assert!(!is_valid_email("user@mail."));
    }

    #[test]
    fn numeric_sanitizer_respects_caps() {
        assert_eq!(sanitize_digits("1,200", SEATS_MAX_DIGITS), "120");
        assert_eq!(sanitize_digits("9999999", PRICE_MAX_DIGITS), "999999");
        assert_eq!(sanitize_age("105"), "10");
    }
}
