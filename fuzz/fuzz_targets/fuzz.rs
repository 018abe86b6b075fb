#![no_main]
use libfuzzer_sys::fuzz_target;
use recensor::{Censor, Dictionary, Replacement, StarReplacer, TokenReplacer};

fuzz_target!(|data: &[u8]| {
    if data.len() > 1 {
        let flags = data[0];
        let input = &data[1..];

        if let Ok(text) = std::str::from_utf8(input) {
            // The first line is the text, the rest are dictionary patterns.
            let mut lines = text.lines();
            let subject = lines.next().unwrap_or_default();
            let dictionary = lines
                .enumerate()
                .map(|(i, pattern)| {
                    let replacement = match i % 3 {
                        0 => Replacement::from("x"),
                        1 => Replacement::strategy(StarReplacer::default()),
                        _ => Replacement::strategy(TokenReplacer::default()),
                    };
                    (pattern, replacement)
                })
                .collect::<Dictionary>();

            let _ = Censor::new()
                .with_wildcard_character(if flag(flags, 0) { '%' } else { '*' })
                .with_escape_patterns(flag(flags, 1))
                .replace(&dictionary, subject);
        }
    }
});

fn flag(flags: u8, index: u8) -> bool {
    ((flags >> index) & 1) == 1
}
