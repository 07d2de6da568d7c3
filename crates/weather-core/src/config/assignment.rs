use crate::errors::ConfigError;

/// A `key=value` token from the command line, syntactically valid but not
/// yet checked against the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub key: String,
    pub value: String,
}

/// Parse `key=value`, splitting on the first `=` and trimming both sides.
///
/// The value may be empty or contain further `=` characters; the key may not
/// be empty.
pub fn parse_assignment(input: &str) -> Result<Assignment, ConfigError> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| ConfigError::BadAssignment {
            assignment: input.to_string(),
            message: "missing '='".to_string(),
        })?;

    let key = key.trim();
    if key.is_empty() {
        return Err(ConfigError::BadAssignment {
            assignment: input.to_string(),
            message: "key must not be empty".to_string(),
        });
    }

    Ok(Assignment {
        key: key.to_string(),
        value: value.trim().to_string(),
    })
}
