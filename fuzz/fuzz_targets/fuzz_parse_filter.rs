#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz filter parsing and the glob translation of every pattern it holds.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(filter) = tfplan_tools::InspectFilter::from_json(s) {
            let mut matcher = tfplan_tools::PatternMatcher::new();
            for rule in filter
                .resource_changes
                .iter()
                .chain(&filter.drift_changes)
                .chain(&filter.output_changes)
            {
                let _ = matcher.matches(&rule.name_pattern, "aws_instance.web");
                for (path, pairs) in &rule.diff_patterns {
                    let _ = matcher.matches(path, ".ami");
                    for pair in pairs {
                        let _ = matcher.matches(&pair.before, "ami-0397850");
                        let _ = matcher.matches(&pair.after, "(known after apply)");
                    }
                }
            }
        }
    }
});
