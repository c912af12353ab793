#![no_main]
use libfuzzer_sys::fuzz_target;

use cmdline::cli::coerce::{numeric_prefix, str_to_f64};
use cmdline::OptionValue;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    // The numeric prefix must always be something f64 can parse.
    let prefix = numeric_prefix(&text);
    if !prefix.is_empty() {
        assert!(prefix.parse::<f64>().is_ok(), "unparsable prefix {:?}", prefix);
    }

    let value = str_to_f64(&text);
    let truncated = i64::from_option_text(&text);
    if value.is_finite() && value.abs() < 1e15 {
        assert_eq!(truncated, value.trunc() as i64);
    }
    let _ = usize::from_option_text(&text);
    let _ = f32::from_option_text(&text);
});
