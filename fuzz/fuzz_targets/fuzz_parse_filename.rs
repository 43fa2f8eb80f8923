#![no_main]

use libfuzzer_sys::fuzz_target;
use mmparser::parser::parse_filename_as;
use mmparser::types::DatasetType;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must either parse or return an error, never panic
    let Ok(filename) = std::str::from_utf8(data) else {
        return;
    };

    for dataset_type in DatasetType::ALL {
        if let Ok(ids) = parse_filename_as(filename, dataset_type) {
            // Spaces in a parsed prefix are always replaced
            assert!(!ids.prefix.contains(' '));
        }
    }
});
