//! Macros for reducing boilerplate when defining entity value types
//!
//! Fixed-choice fields (bank, loan type, payment mode...) are persisted as
//! plain strings. `impl_choice!` generates the enum together with its string
//! table, parsing, and serde support so the persisted text and the parsed
//! variant can never drift apart.

/// Define a closed set of string choices
///
/// # Example
/// ```rust,ignore
/// impl_choice!(
///     /// Loan category
///     LoanType {
///         Home => "home",
///         Personal => "personal",
///     }
/// );
///
/// assert_eq!(LoanType::parse("home"), Some(LoanType::Home));
/// assert_eq!(LoanType::Personal.as_str(), "personal");
/// ```
#[macro_export]
macro_rules! impl_choice {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// Persisted text of every variant, in declaration order
            pub const VALUES: &'static [&'static str] = &[$( $value ),+];

            /// Persisted text of this variant
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $value, )+
                }
            }

            /// Parse persisted text; matching is exact and case-sensitive
            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $( $value => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(&value).ok_or_else(|| {
                    <D::Error as ::serde::de::Error>::unknown_variant(&value, Self::VALUES)
                })
            }
        }
    };
}
