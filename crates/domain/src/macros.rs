//! Macro for implementing Display and FromStr for closed domain enums
//!
//! Wire names in this crate are camelCase (`keyboardShortcut`), so parsing
//! compares with `eq_ignore_ascii_case` instead of lower-casing the input and
//! matching literals.
//!
//! # Example
//!
//! ```rust
//! use stepcast_domain::impl_domain_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Mode {
//!     FullScreen,
//!     SingleApp,
//! }
//!
//! impl_domain_enum_conversions!(Mode {
//!     FullScreen => "fullScreen",
//!     SingleApp => "singleApp",
//! });
//!
//! assert_eq!(Mode::SingleApp.to_string(), "singleApp");
//! assert_eq!("FULLSCREEN".parse::<Mode>(), Ok(Mode::FullScreen));
//! ```

/// Implements Display and FromStr traits for closed domain enums
///
/// This macro generates:
/// - Display trait: writes the variant's wire name verbatim
/// - FromStr trait: parses wire names ignoring ASCII case
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their wire names
#[macro_export]
macro_rules! impl_domain_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Wire name of this variant
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}
