#![no_main]

use libfuzzer_sys::fuzz_target;
use rlsummary_core::config::RlSummaryConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(config) = RlSummaryConfig::parse(text) {
            let _ = config.validate();
        }
    }
});
