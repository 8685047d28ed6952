//! Macros for declaring symbolic state types.

/// Declare a plain enum whose variants can be used wherever a state is
/// expected.
///
/// The macro implements [`Label`](crate::core::Label), `Display` and
/// [`IntoState`](crate::core::IntoState) for the enum and for references to
/// it. A variant's state name is its identifier unless one is given with
/// `=> "name"`.
///
/// # Example
///
/// ```
/// use statewise::{state_enum, Machine};
///
/// state_enum! {
///     pub enum Door {
///         Open => "open",
///         Closed => "closed",
///         Locked,
///     }
/// }
///
/// let mut machine = Machine::new(Door::Closed).unwrap();
/// machine.transition(Door::Closed, [Door::Open, Door::Locked]).unwrap();
///
/// machine.transition_to_strict(Door::Locked).unwrap();
/// assert_eq!(machine.state(), "Locked");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $label:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Label for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::__state_label!($variant $(, $label)?)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::Label::name(self))
            }
        }

        impl $crate::core::IntoState for $name {
            fn into_state(self) -> $crate::Result<$crate::core::State> {
                $crate::core::State::new($crate::core::Label::name(&self))
            }
        }

        impl $crate::core::IntoState for &$name {
            fn into_state(self) -> $crate::Result<$crate::core::State> {
                $crate::core::State::new($crate::core::Label::name(self))
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __state_label {
    ($variant:ident) => {
        stringify!($variant)
    };
    ($variant:ident, $label:literal) => {
        $label
    };
}
