#![no_main]

use libfuzzer_sys::fuzz_target;
use sharps::{render_raw, vals, Delimiters};

fuzz_target!(|data: (&str, &str, &str)| {
    let (document, open, close) = data;
    let Ok(delimiters) = Delimiters::new(open, close) else {
        return;
    };

    // Nothing resolves, so the document must come back untouched.
    let rendered = render_raw(document, &vals(|_| None::<&str>), &delimiters);
    assert_eq!(rendered, document);

    // Resolving everything must still terminate.
    let _ = render_raw(document, &vals(|key| Some(key.len().to_string())), &delimiters);
});
