/// A macro which defines an enum type with a stable wire value per variant.
///
/// Unrecognised ordinals round-trip through the `Unknown` variant.
macro_rules! enum_builder {
    (
        $(#[doc = $comment:literal])*
        #[repr($uint:ty)]
        $enum_vis:vis enum $enum_name:ident
        {
          $( $enum_var:ident => $enum_val:literal),* $(,)?
        }
    ) => {
        $(#[doc = $comment])*
        #[non_exhaustive]
        #[derive(PartialEq, Eq, Clone, Copy)]
        $enum_vis enum $enum_name {
            $( $enum_var),*
            ,Unknown($uint)
        }

        impl $enum_name {
            // NOTE(allow) generated irrespective if there are callers
            #[allow(dead_code)]
            $enum_vis fn to_array(self) -> [u8; core::mem::size_of::<$uint>()] {
                <$uint>::from(self).to_be_bytes()
            }

            // NOTE(allow) generated irrespective if there are callers
            #[allow(dead_code)]
            $enum_vis fn as_str(&self) -> Option<&'static str> {
                match self {
                    $( $enum_name::$enum_var => Some(stringify!($enum_var))),*
                    ,$enum_name::Unknown(_) => None,
                }
            }
        }

        impl From<$uint> for $enum_name {
            fn from(x: $uint) -> Self {
                match x {
                    $($enum_val => $enum_name::$enum_var),*
                    , x => $enum_name::Unknown(x),
                }
            }
        }

        impl From<$enum_name> for $uint {
            fn from(value: $enum_name) -> Self {
                match value {
                    $( $enum_name::$enum_var => $enum_val),*
                    ,$enum_name::Unknown(x) => x
                }
            }
        }

        impl core::fmt::Debug for $enum_name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( $enum_name::$enum_var => f.write_str(stringify!($enum_var)), )*
                    _ => write!(f, "{}(0x{:x?})", stringify!($enum_name), <$uint>::from(*self)),
                }
            }
        }
    };
}

/// A macro which defines a bit-set newtype over an unsigned integer.
///
/// Used for the algorithm fields of a cipher suite, where several bits can
/// be set at once and membership is tested with a bitwise AND.
macro_rules! bitmask_builder {
    (
        $(#[doc = $comment:literal])*
        $struct_vis:vis struct $struct_name:ident($uint:ty)
        {
          $( $bit_name:ident => $bit_val:literal),* $(,)?
        }
    ) => {
        $(#[doc = $comment])*
        #[derive(Clone, Copy, Default, PartialEq, Eq)]
        $struct_vis struct $struct_name($uint);

        #[allow(missing_docs)]
        impl $struct_name {
            $( $struct_vis const $bit_name: Self = Self($bit_val); )*

            /// The empty set.
            $struct_vis const NONE: Self = Self(0);

            /// Set union, usable in `const` context.
            $struct_vis const fn union(self, other: Self) -> Self {
                Self(self.0 | other.0)
            }

            /// True if `self` and `other` share any set bit.
            $struct_vis const fn intersects(self, other: Self) -> bool {
                self.0 & other.0 != 0
            }

            /// True if every bit of `other` is set in `self`.
            $struct_vis const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            /// The raw bit value.
            $struct_vis const fn bits(self) -> $uint {
                self.0
            }
        }

        impl core::ops::BitOr for $struct_name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl core::fmt::Debug for $struct_name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}(0x{:x})", stringify!($struct_name), self.0)
            }
        }
    };
}
