//! Declarative macros for the catalogue's enum types

/// Define a `Copy` enum whose variants carry a display name and one datum
///
/// Generates `name()`, the named data accessor, and an `ALL` slice in
/// declaration order.
///
/// # Example
/// ```
/// use powertelemetry_raw::enum_with_data;
///
/// enum_with_data! {
///     pub enum Socket {
///         Single => ("1S", 1),
///         Dual => ("2S", 2),
///     }
///     impl count -> u32
/// }
///
/// assert_eq!(Socket::Dual.name(), "2S");
/// assert_eq!(Socket::Dual.count(), 2);
/// assert_eq!(Socket::ALL, &[Socket::Single, Socket::Dual]);
/// ```
#[macro_export]
macro_rules! enum_with_data {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => ($str:literal, $data:expr)),* $(,)?
        }
        impl $method:ident -> $return_type:ty
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant,)*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $str,)*
                }
            }

            pub fn $method(self) -> $return_type {
                match self {
                    $($name::$variant => $data,)*
                }
            }
        }
    };
}

/// Define the Family-6 model catalogue
///
/// Every entry expands to a `pub const INTEL_FAM6_*: u8` plus a variant of
/// the generated enum. The enum's accessors are `const fn` so the lookup
/// table in [`crate::catalogue`] can be built at compile time.
///
/// ```ignore
/// intel_models! {
///     pub enum IntelModel {
///         SkylakeX => (INTEL_FAM6_SKYLAKE_X = 0x55, Core),
///     }
/// }
/// ```
#[macro_export]
macro_rules! intel_models {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => ($konst:ident = $value:literal, $lineage:ident)
            ),* $(,)?
        }
    ) => {
        $(
            $(#[$vmeta])*
            pub const $konst: u8 = $value;
        )*

        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
        }

        impl $name {
            /// Every entry, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// Symbolic name, e.g. `INTEL_FAM6_SKYLAKE_X`
            pub const fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($konst),)*
                }
            }

            /// CPUID display model number
            pub const fn model(&self) -> u8 {
                match self {
                    $($name::$variant => $konst,)*
                }
            }

            pub const fn lineage(&self) -> $crate::catalogue::Lineage {
                match self {
                    $($name::$variant => $crate::catalogue::Lineage::$lineage,)*
                }
            }

            pub fn all() -> &'static [$name] {
                Self::ALL
            }
        }
    };
}
