use thiserror::Error;

use crate::row::{COLUMN_EMAIL_SIZE, COLUMN_USERNAME_SIZE, Row};

/// Preparation failures. The `Display` strings are the exact lines the
/// REPL prints, uneven spacing included.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrepareError {
    #[error("Syntax error. Could not parse statement.")]
    Syntax,
    #[error("Unrecognized keyword at start of '{0}'.")]
    Unrecognized(String),
    #[error("Error: ID must be positive.")]
    NegativeId,
    #[error("Error : String is too long.")]
    StringTooLong,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Statement {
    Insert(Row),
    Select,
}

impl Statement {
    /// Parses one input line into a typed statement. Validation never
    /// consults the table, so an over-long string is rejected even when
    /// the table is empty.
    pub fn prepare(line: &str) -> Result<Statement, PrepareError> {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("insert") => prepare_insert(tokens),
            Some("select") => {
                if tokens.next().is_some() {
                    return Err(PrepareError::Syntax);
                }
                Ok(Statement::Select)
            }
            _ => Err(PrepareError::Unrecognized(line.to_string())),
        }
    }
}

fn prepare_insert<'a>(
    mut args: impl Iterator<Item = &'a str>,
) -> Result<Statement, PrepareError> {
    let (Some(id), Some(username), Some(email), None) =
        (args.next(), args.next(), args.next(), args.next())
    else {
        return Err(PrepareError::Syntax);
    };

    let id: i64 = id.parse().map_err(|_| PrepareError::Syntax)?;
    if id < 1 {
        return Err(PrepareError::NegativeId);
    }
    let id = u32::try_from(id).map_err(|_| PrepareError::Syntax)?;

    // Byte lengths; the fixed row slots hold at most this many bytes.
    if username.len() > COLUMN_USERNAME_SIZE {
        return Err(PrepareError::StringTooLong);
    }
    if email.len() > COLUMN_EMAIL_SIZE {
        return Err(PrepareError::StringTooLong);
    }

    Ok(Statement::Insert(Row::new(id, username, email)))
}
