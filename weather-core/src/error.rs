use thiserror::Error;

/// Invalid or incomplete invocation. Raised before any network call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "An API key is required.\n\
         Hint: pass `--api-key <KEY>` or set `api_key` in the config file."
    )]
    MissingApiKey,

    #[error("Only one degree unit may be specified (got both --farenheit and --celsius)")]
    ConflictingUnits,

    #[error("A degree unit must be specified: pass --farenheit or --celsius")]
    MissingUnit,

    #[error(
        "Precision {0} is too large (at most {max} decimal places)",
        max = crate::units::MAX_PRECISION
    )]
    PrecisionTooLarge(usize),

    #[error(
        "Could not parse time '{0}'. Expected RFC 3339, `YYYY-MM-DD HH:MM[:SS]` or `YYYY-MM-DD`."
    )]
    InvalidTime(String),
}
