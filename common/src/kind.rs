//! Macros for defining kind enums.

/// Macro for defining a kind enum.
///
/// Every variant carries a human-readable label, which is used for both
/// [`Display`] and [`FromStr`] implementations.
///
/// Variants are ordered by their declaration order.
///
/// # Example
///
/// ```rust
/// # use common::define_kind;
/// define_kind! {
///     #[doc = "Shape kind."]
///     enum Kind {
///         #[doc = "A cube"]
///         Cube = 1 => "Cube",
///
///         #[doc = "A sphere"]
///         Sphere = 2 => "Round Sphere",
///     }
/// }
///
/// assert_eq!(Kind::Sphere.to_string(), "Round Sphere");
/// assert_eq!("Cube".parse::<Kind>(), Ok(Kind::Cube));
/// assert!(Kind::Cube < Kind::Sphere);
/// ```
///
/// [`Display`]: std::fmt::Display
/// [`FromStr`]: std::str::FromStr
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_kind {
    (
        #[doc = $doc:literal]
        enum $name:ident {
            $(
                #[doc = $variant_doc:literal]
                $variant:ident = $value:expr => $label:tt
            ),* $(,)?
        }
    ) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            $crate::private::strum::Display,
            $crate::private::strum::EnumString,
            Eq,
            Hash,
            Ord,
            PartialEq,
            PartialOrd,
        )]
        #[cfg_attr(
            feature = "serde",
            derive(
                $crate::private::serde::Deserialize,
                $crate::private::serde::Serialize,
            ),
        )]
        #[doc = $doc]
        #[repr(u8)]
        pub enum $name {
            $(
                #[doc = $variant_doc]
                #[strum(serialize = $label)]
                #[cfg_attr(feature = "serde", serde(rename = $label))]
                $variant = $value,
            )*
        }

        impl $name {
            /// All the variants, in their declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Converts this into its [`u8`] representation.
            #[must_use]
            pub const fn u8(self) -> u8 {
                self as u8
            }

            /// Returns the human-readable label of this kind.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)*
                }
            }
        }
    };
}

#[cfg(test)]
mod spec {
    define_kind! {
        #[doc = "Testing kind."]
        enum Shape {
            #[doc = "Cube."]
            Cube = 1 => "Cube",

            #[doc = "Sphere."]
            Sphere = 2 => "Round Sphere",
        }
    }

    #[test]
    fn labels_round_trip_through_strings() {
        for shape in Shape::ALL {
            assert_eq!(shape.to_string(), shape.label());
            assert_eq!(shape.label().parse::<Shape>(), Ok(*shape));
        }
        assert!("Pyramid".parse::<Shape>().is_err());
    }

    #[test]
    fn orders_by_declaration() {
        assert!(Shape::Cube < Shape::Sphere);
        assert_eq!(Shape::Sphere.u8(), 2);
    }
}
