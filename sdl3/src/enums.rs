// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Declarative tables for SDL's integer constants.
//!
//! The numeric value is the contract with the native side, so every table
//! maps each host name to the raw constant from `sdl3_sys` and converts at
//! the fixed underlying width.
//!
//! - `native_enum!` generates a closed Rust enum. Converting an integer
//!   outside the table fails with [`crate::Error::InvalidValue`].
//! - `native_constants!` generates a transparent newtype with associated
//!   constants, for open sets where SDL may report values this crate does not
//!   name (key codes, event types, pixel formats).
//! - `native_flags!` generates a transparent bit set.

macro_rules! native_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident: $repr:ty {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:path
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
        }

        impl $name {
            /// Every member, in table order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// The raw value passed to SDL.
            pub const fn to_raw(self) -> $repr {
                match self {
                    $($name::$variant => $value,)*
                }
            }
        }

        impl TryFrom<$repr> for $name {
            type Error = crate::Error;

            #[allow(unreachable_patterns)]
            fn try_from(value: $repr) -> crate::Result<Self> {
                match value {
                    $($value => Ok($name::$variant),)*
                    other => Err(crate::Error::InvalidValue {
                        kind: stringify!($name),
                        value: other as i64,
                    }),
                }
            }
        }

        impl From<$name> for $repr {
            fn from(value: $name) -> $repr {
                value.to_raw()
            }
        }
    };
}

macro_rules! native_constants {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($repr:ty) {
            $(
                $(#[$cmeta:meta])*
                $constant:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub $repr);

        impl $name {
            $(
                $(#[$cmeta])*
                pub const $constant: $name = $name($value);
            )*

            /// The raw value passed to SDL.
            pub const fn raw(self) -> $repr {
                self.0
            }

            /// The table name of this value, if it has one.
            #[allow(unreachable_patterns)]
            pub fn name(self) -> Option<&'static str> {
                match self {
                    $($name::$constant => Some(stringify!($constant)),)*
                    _ => None,
                }
            }
        }

        impl From<$repr> for $name {
            fn from(value: $repr) -> Self {
                $name(value)
            }
        }

        impl From<$name> for $repr {
            fn from(value: $name) -> $repr {
                value.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self.name() {
                    Some(name) => f.write_str(name),
                    None => write!(f, "{}({:#x})", stringify!($name), self.0),
                }
            }
        }
    };
}

macro_rules! native_flags {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($repr:ty) {
            $(
                $(#[$cmeta:meta])*
                $flag:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Default, Clone, Copy, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name($repr);

        impl $name {
            $(
                $(#[$cmeta])*
                pub const $flag: $name = $name($value);
            )*

            /// No flags set.
            pub const fn empty() -> Self {
                $name(0)
            }

            /// Wraps raw bits, keeping bits this crate does not name.
            pub const fn from_bits(bits: $repr) -> Self {
                $name(bits)
            }

            /// The raw value passed to SDL.
            pub const fn bits(self) -> $repr {
                self.0
            }

            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// Returns `true` if every flag in `other` is also set in `self`.
            pub const fn contains(self, other: $name) -> bool {
                self.0 & other.0 == other.0
            }
        }

        impl std::ops::BitOr for $name {
            type Output = $name;

            fn bitor(self, rhs: $name) -> $name {
                $name(self.0 | rhs.0)
            }
        }

        impl std::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: $name) {
                self.0 |= rhs.0;
            }
        }

        impl std::ops::BitAnd for $name {
            type Output = $name;

            fn bitand(self, rhs: $name) -> $name {
                $name(self.0 & rhs.0)
            }
        }
    };
}
