#![no_main]

use invoicexpress::http::{HttpResponse, classify};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = classify("transports.xml", HttpResponse::new(422, s));
    }
});
