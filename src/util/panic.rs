/// Asserts that the provided block panics, optionally checking that the panic message contains a
/// given fragment.
///
/// The block is run inside [`catch_unwind`](std::panic::catch_unwind), so anything it captures
/// must be unwind safe. Build the collection inside the block when in doubt.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, contains $expected:expr) => {
        let Err(payload) = std::panic::catch_unwind(|| $run) else {
            panic!("assertion failed to panic");
        };
        let message = payload
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| payload.downcast_ref::<&str>().copied())
            .unwrap_or_default();
        assert!(
            message.contains($expected),
            "panic message {:?} doesn't contain {:?}",
            message,
            $expected,
        );
    };
    ($run:block, $msg:literal) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), $msg);
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
