/// Runs an expression that is expected to fault by panicking, then checks that the panic message
/// is exactly the message of the provided error.
#[allow(unused_macros)]
macro_rules! assert_faults {
    ($run:expr, $fault:expr) => {
        assert_faults!($run, $fault, "operation failed to fault")
    };
    ($run:expr, $fault:expr, $msg:literal) => {
        let payload = std::panic::catch_unwind(|| $run).expect_err($msg);
        let message = payload
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| payload.downcast_ref::<&str>().copied())
            .unwrap_or_default();
        assert_eq!(message, $fault.to_string(), "operation faulted with the wrong error");
    };
}

#[allow(unused_imports)]
pub(crate) use assert_faults;
