//! Logging shims.
//!
//! Routes to `defmt` on embedded targets, to the `log` facade on hosts, and
//! to nothing when neither is enabled. Format strings must stay within the
//! subset both backends accept: `{}` on primitives and `{:?}` on enums.

macro_rules! mount_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        {
            defmt::debug!($($arg)*);
        }
        #[cfg(all(feature = "log", not(feature = "defmt")))]
        {
            log::debug!($($arg)*);
        }
        #[cfg(not(any(feature = "log", feature = "defmt")))]
        {
            if false {
                let _ = core::format_args!($($arg)*);
            }
        }
    }};
}

macro_rules! mount_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        {
            defmt::info!($($arg)*);
        }
        #[cfg(all(feature = "log", not(feature = "defmt")))]
        {
            log::info!($($arg)*);
        }
        #[cfg(not(any(feature = "log", feature = "defmt")))]
        {
            if false {
                let _ = core::format_args!($($arg)*);
            }
        }
    }};
}
