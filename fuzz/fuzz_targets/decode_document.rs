#![no_main]
use libfuzzer_sys::fuzz_target;

use nbt_tree::{from_bytes_with_opts, DeOpts};

fuzz_target!(|data: &[u8]| {
    let opts = DeOpts::new().max_depth(64).allow_trailing_data(false);
    if from_bytes_with_opts(data, opts.clone()).is_ok() && !data.is_empty() {
        // With no trailing data allowed, every prefix is truncated.
        let short = &data[..data.len() - 1];
        assert!(from_bytes_with_opts(short, opts).unwrap_err().is_eof());
    }
});
