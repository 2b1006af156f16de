//! Declarative generators for value objects and string-backed enums.
//!
//! Each model type is a struct of optional fields plus a mechanical set of
//! accessors. The macros below produce that surface from one declaration per
//! field so every type follows the same contract.

/// Declares a value object.
///
/// ```ignore
/// value_object! {
///     /// Start and end of a time range.
///     pub struct DateInterval {
///         /// Inclusive start date.
///         string start("Start"): String => set_start, with_start;
///         /// Exclusive end date.
///         string end("End"): String => set_end, with_end;
///     }
/// }
/// ```
///
/// Field kinds:
///
/// | kind     | storage                        | getter                        | extra builder          |
/// |----------|--------------------------------|-------------------------------|------------------------|
/// | `string` | `Option<String>`               | `Option<&str>`                |                        |
/// | `scalar` | `Option<T>` (`Copy`)           | `Option<T>`                   |                        |
/// | `object` | `Option<T>`                    | `Option<&T>`                  |                        |
/// | `boxed`  | `Option<Box<T>>`               | `Option<&T>`                  |                        |
/// | `list`   | `Option<Vec<T>>`               | `Option<&[T]>`                | `add_*` appends        |
/// | `map`    | `Option<BTreeMap<String, T>>`  | `Option<&BTreeMap<String, T>>`| `add_*_entry` inserts  |
///
/// `with_*` on a list replaces the whole list; `add_*` appends to it.
#[macro_export]
macro_rules! value_object {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $kind:ident $field:ident ($wire:literal): $ty:ty => $setter:ident, $with:ident $(, $add:ident)?;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default)]
        pub struct $name {
            $(
                $(#[doc = $doc])*
                #[serde(rename = $wire, skip_serializing_if = "Option::is_none")]
                $field: $crate::value_object!(@storage $kind $ty),
            )*
        }

        impl $name {
            /// Creates an instance with every field absent.
            pub fn new() -> Self {
                Self::default()
            }

            $(
                $crate::value_object!(
                    @accessors $kind { $(#[doc = $doc])* } $field $wire $ty, $setter, $with $(, $add)?
                );
            )*
        }

        impl $crate::ModelValue for $name {
            fn hash_code(&self) -> i32 {
                $crate::HashAccumulator::new()
                    $( .field(self.$field.as_ref()) )*
                    .finish()
            }

            fn render(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::FieldRenderer::new(f)
                    $( .field($wire, self.$field.as_ref()) )*
                    .finish()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::ModelValue::render(self, f)
            }
        }

        impl $crate::ValueObject for $name {
            const TYPE_NAME: &'static str = stringify!($name);
        }
    };

    (@storage string $ty:ty) => { ::core::option::Option<$ty> };
    (@storage scalar $ty:ty) => { ::core::option::Option<$ty> };
    (@storage object $ty:ty) => { ::core::option::Option<$ty> };
    (@storage boxed $ty:ty) => { ::core::option::Option<::std::boxed::Box<$ty>> };
    (@storage list $ty:ty) => { ::core::option::Option<::std::vec::Vec<$ty>> };
    (@storage map $ty:ty) => {
        ::core::option::Option<::std::collections::BTreeMap<::std::string::String, $ty>>
    };

    (@accessors string { $(#[$attr:meta])* } $field:ident $wire:literal $ty:ty, $setter:ident, $with:ident) => {
        $(#[$attr])*
        pub fn $field(&self) -> ::core::option::Option<&str> {
            self.$field.as_deref()
        }

        #[doc = concat!("Sets `", $wire, "`; `None` makes it absent.")]
        pub fn $setter(&mut self, value: ::core::option::Option<$ty>) {
            self.$field = value;
        }

        #[doc = concat!("Sets `", $wire, "` and returns `self`.")]
        pub fn $with(mut self, value: impl ::core::convert::Into<$ty>) -> Self {
            self.$field = ::core::option::Option::Some(value.into());
            self
        }
    };

    (@accessors scalar { $(#[$attr:meta])* } $field:ident $wire:literal $ty:ty, $setter:ident, $with:ident) => {
        $(#[$attr])*
        pub fn $field(&self) -> ::core::option::Option<$ty> {
            self.$field
        }

        #[doc = concat!("Sets `", $wire, "`; `None` makes it absent.")]
        pub fn $setter(&mut self, value: ::core::option::Option<$ty>) {
            self.$field = value;
        }

        #[doc = concat!("Sets `", $wire, "` and returns `self`.")]
        pub fn $with(mut self, value: $ty) -> Self {
            self.$field = ::core::option::Option::Some(value);
            self
        }
    };

    (@accessors object { $(#[$attr:meta])* } $field:ident $wire:literal $ty:ty, $setter:ident, $with:ident) => {
        $(#[$attr])*
        pub fn $field(&self) -> ::core::option::Option<&$ty> {
            self.$field.as_ref()
        }

        #[doc = concat!("Sets `", $wire, "`; `None` makes it absent.")]
        pub fn $setter(&mut self, value: ::core::option::Option<$ty>) {
            self.$field = value;
        }

        #[doc = concat!("Sets `", $wire, "` and returns `self`.")]
        pub fn $with(mut self, value: impl ::core::convert::Into<$ty>) -> Self {
            self.$field = ::core::option::Option::Some(value.into());
            self
        }
    };

    (@accessors boxed { $(#[$attr:meta])* } $field:ident $wire:literal $ty:ty, $setter:ident, $with:ident) => {
        $(#[$attr])*
        pub fn $field(&self) -> ::core::option::Option<&$ty> {
            self.$field.as_deref()
        }

        #[doc = concat!("Sets `", $wire, "`; `None` makes it absent.")]
        pub fn $setter(&mut self, value: ::core::option::Option<$ty>) {
            self.$field = value.map(::std::boxed::Box::new);
        }

        #[doc = concat!("Sets `", $wire, "` and returns `self`.")]
        pub fn $with(mut self, value: impl ::core::convert::Into<$ty>) -> Self {
            self.$field = ::core::option::Option::Some(::std::boxed::Box::new(value.into()));
            self
        }
    };

    (@accessors list { $(#[$attr:meta])* } $field:ident $wire:literal $ty:ty, $setter:ident, $with:ident, $add:ident) => {
        $(#[$attr])*
        pub fn $field(&self) -> ::core::option::Option<&[$ty]> {
            self.$field.as_deref()
        }

        #[doc = concat!("Replaces `", $wire, "` with an owned list; `None` makes it absent.")]
        pub fn $setter(&mut self, values: ::core::option::Option<::std::vec::Vec<$ty>>) {
            self.$field = values;
        }

        #[doc = concat!("Replaces `", $wire, "` with a copy of `values` and returns `self`.")]
        pub fn $with<I>(mut self, values: I) -> Self
        where
            I: ::core::iter::IntoIterator,
            I::Item: ::core::convert::Into<$ty>,
        {
            self.$field = ::core::option::Option::Some(
                values.into_iter().map(::core::convert::Into::into).collect(),
            );
            self
        }

        #[doc = concat!("Appends `values` to `", $wire, "`, creating the list if absent, and returns `self`.")]
        pub fn $add<I>(mut self, values: I) -> Self
        where
            I: ::core::iter::IntoIterator,
            I::Item: ::core::convert::Into<$ty>,
        {
            self.$field
                .get_or_insert_with(::std::vec::Vec::new)
                .extend(values.into_iter().map(::core::convert::Into::into));
            self
        }
    };

    (@accessors map { $(#[$attr:meta])* } $field:ident $wire:literal $ty:ty, $setter:ident, $with:ident, $add:ident) => {
        $(#[$attr])*
        pub fn $field(
            &self,
        ) -> ::core::option::Option<&::std::collections::BTreeMap<::std::string::String, $ty>> {
            self.$field.as_ref()
        }

        #[doc = concat!("Replaces `", $wire, "` with an owned map; `None` makes it absent.")]
        pub fn $setter(
            &mut self,
            entries: ::core::option::Option<::std::collections::BTreeMap<::std::string::String, $ty>>,
        ) {
            self.$field = entries;
        }

        #[doc = concat!("Replaces `", $wire, "` with a copy of `entries` and returns `self`.")]
        pub fn $with<I, K, V>(mut self, entries: I) -> Self
        where
            I: ::core::iter::IntoIterator<Item = (K, V)>,
            K: ::core::convert::Into<::std::string::String>,
            V: ::core::convert::Into<$ty>,
        {
            self.$field = ::core::option::Option::Some(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.into(), value.into()))
                    .collect(),
            );
            self
        }

        #[doc = concat!("Inserts one entry into `", $wire, "`, creating the map if absent. A repeated key replaces the earlier value.")]
        pub fn $add(
            mut self,
            key: impl ::core::convert::Into<::std::string::String>,
            value: impl ::core::convert::Into<$ty>,
        ) -> Self {
            self.$field
                .get_or_insert_with(::std::collections::BTreeMap::new)
                .insert(key.into(), value.into());
            self
        }
    };
}

/// Declares a closed set of wire strings as a typed enum.
///
/// The enum never appears in model storage: fields stay `String` and the enum
/// converts into that string (`impl From<E> for String`), so a `with_*`
/// builder taking `impl Into<String>` accepts either form.
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $variant:ident = $wire:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[doc = $doc])*
                $variant,
            )+
        }

        impl $name {
            /// Every documented value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire representation.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::ModelError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                match s {
                    $($wire => ::core::result::Result::Ok($name::$variant),)+
                    other => ::core::result::Result::Err($crate::ModelError::unknown_variant(
                        stringify!($name),
                        other,
                    )),
                }
            }
        }

        impl ::core::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::core::convert::From<$name> for ::std::string::String {
            fn from(value: $name) -> Self {
                ::std::string::String::from(value.as_str())
            }
        }
    };
}
