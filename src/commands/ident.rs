//! Ident command - decode a token into its fields

use crate::{
    NautilusError,
    ident::{Ident, Mode},
};
use colored::Colorize;

type Result<T> = std::result::Result<T, NautilusError>;

/// Field/value pairs describing a decoded token
#[must_use]
pub fn describe(ident: &Ident) -> Vec<(&'static str, String)> {
    let Some(mode) = ident.mode else {
        return vec![("mode", "none".to_string())];
    };

    let mut fields = vec![("mode", mode.to_string())];
    if let Some(id) = &ident.modal_id {
        fields.push(("player", id.clone()));
    }
    match mode {
        Mode::Random => {
            fields.push(("documents", ident.document_ids.join(", ")));
        }
        Mode::Search => {
            fields.push(("cursor", ident.cursor.to_string()));
            fields.push(("text", ident.text.clone()));
        }
        Mode::Sequential => {
            fields.push(("cursor", ident.cursor.to_string()));
        }
    }
    fields.push(("token", ident.encode()));
    fields
}

/// Execute the ident command
///
/// # Errors
/// Returns `InvalidInput` if the token does not describe a browsing position
pub fn execute(token: &str, quiet: bool) -> Result<()> {
    let ident = Ident::decode(token);
    if !ident.is_restorable() {
        return Err(NautilusError::InvalidInput(format!(
            "'{token}' is not a valid ident"
        )));
    }

    for (field, value) in describe(&ident) {
        if quiet {
            println!("{field}={value}");
        } else {
            println!("{:>10}: {value}", field.bold());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(token: &str) -> Vec<(&'static str, String)> {
        describe(&Ident::decode(token))
    }

    #[test]
    fn test_describe_search() {
        assert_eq!(
            fields("search-00002-10_jules verne"),
            vec![
                ("mode", "search".to_string()),
                ("player", "00002".to_string()),
                ("cursor", "10".to_string()),
                ("text", "jules verne".to_string()),
                ("token", "search-00002-10_jules verne".to_string()),
            ]
        );
    }

    #[test]
    fn test_describe_random_shows_padded_ids() {
        let described = fields("random--3.12");
        assert_eq!(described[1], ("documents", "00003, 00012".to_string()));
        assert_eq!(described[2], ("token", "random--00003.00012".to_string()));
    }

    #[test]
    fn test_describe_empty() {
        assert_eq!(fields("bogus"), vec![("mode", "none".to_string())]);
    }

    #[test]
    fn test_invalid_token_is_an_error() {
        assert!(matches!(
            execute("bogus", true),
            Err(NautilusError::InvalidInput(_))
        ));
    }
}
