/// Marks the point where a fault is raised. The error is passed through unchanged and, with the
/// `log` feature enabled, reported once at debug level.
macro_rules! fault {
    ($err:expr) => {{
        let err = $err;
        #[cfg(feature = "log")]
        ::log::debug!(target: "safer::int", "fault raised: {}", err);
        err
    }};
}

pub(crate) use fault;
