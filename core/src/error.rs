#![deny(missing_docs)]

//! # Error Handling
//!
//! Provides the unified `Error` enum used across the core crate.

use derive_more::{Display, From};

/// The core error enum.
///
/// We use `derive_more` for boilerplate.
#[derive(Debug, Display, From)]
pub enum Error {
    /// A generic type-name string violates the `«…»` grammar
    /// (unbalanced delimiters, empty argument list, trailing comma).
    #[from(ignore)]
    #[display("Malformed generic expression: {_0}")]
    MalformedGenericExpression(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
///
/// Implemented manually (instead of `derive(Error)`) because both variants
/// carry a `String`, which does not implement `std::error::Error`, so an
/// auto-derived `source()` would fail to compile.
impl std::error::Error for Error {}

/// Helper type alias for Result using the core Error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_conversion() {
        // From<String> goes to General, never to MalformedGenericExpression
        let err: Error = String::from("something wrong").into();
        match err {
            Error::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to Error::General"),
        }
    }

    #[test]
    fn test_malformed_display() {
        let err = Error::MalformedGenericExpression("Page«".into());
        assert_eq!(format!("{}", err), "Malformed generic expression: Page«");
    }
}
