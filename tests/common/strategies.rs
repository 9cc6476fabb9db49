use proptest::prelude::*;

/// Strategy for generating valid scheme names
pub fn scheme_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9+.-]{0,31}"
}

/// Strategy for generating locator bodies
pub fn locator_body_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9/_.-]{0,64}"
}
