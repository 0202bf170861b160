//! Helper macro generating port error enums with snake_case constructors.
//!
//! Struct variants get one parameter per field accepting anything convertible
//! into the field type. Unit variants get a zero-argument constructor; they
//! model failures whose message is fixed and reaches callers verbatim, such
//! as `AccountServiceError::EmailTaken` ("email has already been registered").

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum LedgerPortError {
            Closed => "ledger closed",
            Unreachable { message: String } => "ledger unreachable: {message}",
            Rejected { message: String, attempts: u32 } =>
                "ledger rejected after {attempts} attempts: {message}",
        }
    }

    #[test]
    fn unit_variants_get_zero_argument_constructors() {
        assert_eq!(LedgerPortError::closed(), LedgerPortError::Closed);
        assert_eq!(LedgerPortError::closed().to_string(), "ledger closed");
    }

    #[test]
    fn string_fields_accept_str() {
        let err = LedgerPortError::unreachable("timeout");
        assert_eq!(err.to_string(), "ledger unreachable: timeout");
    }

    #[test]
    fn mixed_fields_keep_their_types() {
        let err = LedgerPortError::rejected("quota", 3_u32);
        assert_eq!(err.to_string(), "ledger rejected after 3 attempts: quota");
    }
}
