use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Password hashing or verification failed for a reason other than a
    /// mismatched password.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to the client.
    #[error("Password hashing failed: {reason}")]
    PasswordHash {
        /// The underlying argon2 error rendered as a string.
        reason: String,
    },

    /// A stored enum column contains a value the application doesn't recognize.
    ///
    /// Indicates either data written outside the application or a missed
    /// migration. Results in a 500 Internal Server Error.
    #[error("Unrecognized {column} value '{value}' in database")]
    UnknownEnumValue {
        /// Column the value was read from.
        column: &'static str,
        /// The offending stored value.
        value: String,
    },
}
