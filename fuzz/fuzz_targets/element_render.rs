#![no_main]
use htmlnode::{attr_value, element, raw, render, text, Node};
use libfuzzer_sys::fuzz_target;

// Each input line becomes a child: `@name=value` an attribute, `!markup` raw
// content, anything else escaped text.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let children = s.lines().map(|line| -> Box<dyn Node> {
            if let Some(rest) = line.strip_prefix('@') {
                let (name, value) = rest.split_once('=').unwrap_or((rest, ""));
                Box::new(attr_value(name, value))
            } else if let Some(rest) = line.strip_prefix('!') {
                Box::new(raw(rest))
            } else {
                Box::new(text(line))
            }
        });
        let node = element("div", children);
        let first = render(&node);
        assert!(first.starts_with("<div"));
        assert_eq!(first, render(&node));
    }
});
