use crate::grammar::validate;

/// Validate arbitrary bytes, checking that every accepted action
/// re-validates to itself from its normalized form.
///
/// # Panics
/// Panics if the normalized form is rejected or parses differently.
pub fn fuzz_validate(data: &[u8]) {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(parsed) = validate(raw) else {
        return;
    };

    match validate(parsed.normalized()) {
        Ok(again) => {
            assert_eq!(again.kind(), parsed.kind(), "kind changed for {raw:?}");
            assert_eq!(
                again.normalized(),
                parsed.normalized(),
                "normalized form changed for {raw:?}"
            );
        }
        Err(e) => panic!("normalized form of {raw:?} was rejected: {e}"),
    }
}
