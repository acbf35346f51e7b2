#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz plan parsing followed by a full inspection.
///
/// Any document that parses must also normalize without panicking.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(plan) = tfplan_tools::parse_plan_str(s) {
            let _ = tfplan_tools::InspectEngine::new().inspect(&plan);
        }
    }
});
