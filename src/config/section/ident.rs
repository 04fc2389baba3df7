//! Closed identifier sets.
//!
//! Themes, plugins, markdown extensions and feature flags are resolved by
//! name once, at configuration time, into plain enums.

/// Declare an enum whose variants map one-to-one onto document identifiers.
///
/// Generates `ALL`, `as_str`, `from_name`, `Display` and a `Serialize`
/// impl that writes the identifier.
macro_rules! identifiers {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $ident:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every known identifier, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Identifier as written in the document.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $ident, )+
                }
            }

            /// Exact identifier lookup.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $ident => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// Comma-separated list of every identifier.
            pub fn known_names() -> String {
                Self::ALL
                    .iter()
                    .map(|item| item.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
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
    };
}

pub(crate) use identifiers;
