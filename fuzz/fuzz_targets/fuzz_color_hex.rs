//! Fuzz target for color hex parsing.
//!
//! Tests that Rgba::from_hex handles arbitrary strings without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use markstyle::color::Rgba;

fuzz_target!(|data: &str| {
    // Never panics, just returns None for invalid input
    if let Some(color) = Rgba::from_hex(data) {
        // Display output must parse back to the same color
        assert_eq!(color.to_string().parse::<Rgba>().ok(), Some(color));
    }

    if !data.starts_with('#') {
        let _ = Rgba::from_hex(&format!("#{data}"));
    }

    for i in (0..data.len().min(10)).filter(|&i| data.is_char_boundary(i)) {
        let _ = Rgba::from_hex(&data[i..]);
    }
});
