#![no_main]

use libfuzzer_sys::fuzz_target;

use postfix_access_common::fuzzing::fuzz_validate;

fuzz_target!(|data: &[u8]| {
    fuzz_validate(data);
});
