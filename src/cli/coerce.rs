// cli/coerce.rs — Best-effort conversion of stored option text
//
// Option values are kept as the text the user typed. Conversion happens when
// a value is read back and never fails: text without a numeric prefix reads
// as zero. Callers that need to tell "0" from "garbage" use
// `CmdLine::get_strict` instead.

/// A type an option value can be read back as through `CmdLine::get`.
pub trait OptionValue: Sized {
    /// Convert stored option text. Must not fail; malformed input maps to a
    /// zero-like value.
    fn from_option_text(text: &str) -> Self;
}

impl OptionValue for String {
    fn from_option_text(text: &str) -> Self {
        text.to_owned()
    }
}

impl OptionValue for f64 {
    fn from_option_text(text: &str) -> Self {
        str_to_f64(text)
    }
}

impl OptionValue for f32 {
    fn from_option_text(text: &str) -> Self {
        str_to_f64(text) as f32
    }
}

// Integers go through f64 and truncate toward zero. `as` saturates at the
// target bounds and maps NaN to 0.
macro_rules! impl_option_value_via_f64 {
    ($($t:ty),*) => {
        $(
            impl OptionValue for $t {
                fn from_option_text(text: &str) -> Self {
                    str_to_f64(text) as $t
                }
            }
        )*
    };
}

impl_option_value_via_f64!(i32, i64, isize, u32, u64, usize);

/// Returns `true` for the bytes C `isspace` accepts in the "C" locale.
#[inline]
fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Returns the longest prefix of `s` (after leading whitespace) that reads as
/// a decimal floating-point number, or `""` if there is none.
///
/// Accepted shape: optional sign, digits with an optional fraction (at least
/// one digit overall), optional exponent (`e`/`E`, optional sign, digits;
/// only consumed when digits follow). `inf`, `infinity` and `nan` are
/// recognised case-insensitively. Hexadecimal floats are not.
pub fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut i = 0usize;
    while i < bytes.len() && is_c_space(bytes[i]) {
        i += 1;
    }
    let start = i;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let rest = &bytes[i..];
    for word in ["infinity", "inf", "nan"] {
        if rest.len() >= word.len() && rest[..word.len()].eq_ignore_ascii_case(word.as_bytes()) {
            return &s[start..i + word.len()];
        }
    }

    let mut digits = 0usize;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return "";
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        if j < bytes.len() && bytes[j].is_ascii_digit() {
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }

    &s[start..i]
}

/// Locale-independent `strtod`: parses the numeric prefix of `s` and ignores
/// the rest. Returns `0.0` when `s` has no numeric prefix.
pub fn str_to_f64(s: &str) -> f64 {
    numeric_prefix(s).parse::<f64>().unwrap_or(0.0)
}
