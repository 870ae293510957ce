#![no_main]

use libfuzzer_sys::fuzz_target;
use rlsummary_report::ReportSummarizer;

fuzz_target!(|data: &[u8]| {
    let summarizer = ReportSummarizer::default();
    if let Ok(summary) = summarizer.summarize(data) {
        // 섹션 제목은 항상 존재
        assert_eq!(summary.lines()[0], "# Assessments");
        assert!(summary.lines().iter().any(|line| line == "## Violations"));
    }
});
