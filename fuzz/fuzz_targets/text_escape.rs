#![no_main]
use htmlnode::{escape::escape_html, render, text};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let rendered = render(&text(s));
        assert!(!rendered.contains(['<', '>', '"', '\'']));
        assert_eq!(rendered, escape_html(s));
    }
});
