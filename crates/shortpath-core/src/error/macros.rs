//! Error macros for shortpath

/// Macro for returning an invalid input error
#[macro_export]
macro_rules! bail_invalid {
    ($($arg:tt)*) => {
        return Err($crate::error::ShortpathError::invalid_input(format!($($arg)*)))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::ShortpathError::UsageError($msg.to_string()))
    };
}
