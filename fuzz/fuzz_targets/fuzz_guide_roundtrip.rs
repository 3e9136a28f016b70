#![no_main]

use invoicexpress::models::Guide;
use invoicexpress::xml::{from_xml, to_xml};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Parse → serialize → parse must not panic at any step.
        if let Ok(guide) = from_xml::<Guide>(s) {
            if let Ok(xml) = to_xml(&guide) {
                let _ = from_xml::<Guide>(&xml);
            }
        }
    }
});
