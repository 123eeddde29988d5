/// Declares an abstract type: an enum over the concrete constructors that produce it.
///
/// The enum is an [`Object`](crate::types::Object) that writes whichever variant it
/// holds, and it is [`Deser`](crate::types::Deser) through the registry, so the variant
/// is picked by the constructor ID on the wire. An ID outside the enum's variants is
/// rejected before its body is read.
///
/// ```ignore
/// abstract_type! {
///     pub enum AnyPhotoSize as "PhotoSize" {
///         Empty(PhotoSizeEmpty),
///         Stripped(PhotoStrippedSize),
///     }
/// }
/// ```
#[macro_export]
macro_rules! abstract_type {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $tl_name:literal {
            $($variant:ident($ty:ty)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(PartialEq, Eq, Clone, Debug)]
        $vis enum $name {
            $($variant($ty)),+
        }

        impl $name {
            pub const TL_NAME: &'static str = $tl_name;
            pub const VARIANT_IDS: &'static [$crate::serde::ConstructorId] = &[
                $(<$ty as $crate::types::KnownType>::CONSTRUCTOR_ID),+
            ];

            pub fn from_object(
                obj: ::std::boxed::Box<dyn $crate::types::Object>,
            ) -> ::std::result::Result<Self, $crate::error::DecodeError> {
                let got = $crate::types::Object::constructor_id(&*obj);
                $(
                    let obj = match obj.downcast::<$ty>() {
                        ::std::result::Result::Ok(v) => {
                            return ::std::result::Result::Ok(Self::$variant(*v));
                        }
                        ::std::result::Result::Err(obj) => obj,
                    };
                )+
                ::std::mem::drop(obj);
                ::std::result::Result::Err($crate::error::DecodeError::UnexpectedVariant {
                    abstract_type: $tl_name,
                    got,
                })
            }
        }

        impl $crate::types::AbstractType for $name {
            const TL_NAME: &'static str = $tl_name;
            const VARIANT_IDS: &'static [$crate::serde::ConstructorId] = $name::VARIANT_IDS;
        }

        impl $crate::types::Object for $name {
            fn constructor_id(&self) -> $crate::serde::ConstructorId {
                match self {
                    $(Self::$variant(v) => $crate::types::Object::constructor_id(v)),+
                }
            }
            fn qualified_name(&self) -> &'static str {
                match self {
                    $(Self::$variant(v) => $crate::types::Object::qualified_name(v)),+
                }
            }
            fn ser(&self, w: &mut $crate::serde::WireWriter) -> $crate::serde::WriteLen {
                match self {
                    $(Self::$variant(v) => $crate::types::Object::ser(v, w)),+
                }
            }
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
            fn into_any(
                self: ::std::boxed::Box<Self>,
            ) -> ::std::boxed::Box<dyn ::std::any::Any> {
                self
            }
        }

        impl $crate::types::Deser for $name {
            fn deser(
                r: &mut $crate::serde::ByteCursor<'_>,
            ) -> ::std::result::Result<Self, $crate::error::DecodeError> {
                let obj = r.decode_variant::<Self>()?;
                Self::from_object(obj)
            }
        }

        $(
            impl ::std::convert::From<$ty> for $name {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )+
    };
}
