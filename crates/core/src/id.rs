//! Store-assigned record identifiers.
//!
//! Every persisted record is keyed by a positive 64-bit integer handed out by
//! the store on creation. Each entity gets its own newtype so a product id can
//! never be passed where a sales order id is expected.

/// Common interface of all record identifiers.
pub trait RecordId:
    Copy
    + Eq
    + Ord
    + core::hash::Hash
    + core::fmt::Debug
    + core::fmt::Display
    + core::str::FromStr<Err = crate::error::DomainError>
    + Send
    + Sync
    + 'static
{
    /// Wrap a raw store key.
    fn from_raw(raw: i64) -> Self;

    /// The raw store key.
    fn get(&self) -> i64;
}

/// Declare a record identifier newtype over `i64`.
///
/// The generated type is `Display`, parses from its decimal form and
/// serializes transparently as a JSON number.
#[macro_export]
macro_rules! record_id {
    ($(#[$meta:meta])* $t:ident, $name:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $t(i64);

        impl $t {
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl $crate::id::RecordId for $t {
            fn from_raw(raw: i64) -> Self {
                Self(raw)
            }

            fn get(&self) -> i64 {
                self.0
            }
        }

        impl ::core::fmt::Display for $t {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $t {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl ::core::str::FromStr for $t {
            type Err = $crate::error::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw: i64 = s.trim().parse().map_err(|e| {
                    $crate::error::DomainError::invalid_id(format!("{}: {}", $name, e))
                })?;
                if raw <= 0 {
                    return Err($crate::error::DomainError::invalid_id(format!(
                        "{}: must be positive, got {}",
                        $name, raw
                    )));
                }
                Ok(Self(raw))
            }
        }
    };
}
