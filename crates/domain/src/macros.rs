//! Macro for implementing `as_str`, Display and FromStr for code enums
//!
//! Report names on the query string and Bitrix sort directions are both small
//! closed sets of string codes; this macro keeps the mapping in one place.
//!
//! # Example
//!
//! ```rust
//! use dealboard_domain::impl_code_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Flag {
//!     Yes,
//!     No,
//! }
//!
//! impl_code_conversions!(Flag {
//!     Yes => "Y",
//!     No => "N",
//! });
//!
//! assert_eq!(Flag::Yes.as_str(), "Y");
//! assert_eq!("n".parse::<Flag>().unwrap(), Flag::No);
//! ```

/// Implements `as_str`, Display and FromStr for code enums
///
/// Parsing is ASCII case-insensitive; output always uses the declared code.
#[macro_export]
macro_rules! impl_code_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Wire representation of this value.
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
