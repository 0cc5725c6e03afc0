use portfolio_entities::comment::NewComment;

use crate::Error;

/// Validates the input of the comment form.
///
/// A blank name is left to the server, which replaces it with "Anonymous".
pub fn new_comment(name: &str, message: &str) -> Result<NewComment, Error> {
    let message = message.trim();
    if message.is_empty() {
        return Err(Error::EmptyComment);
    }
    let name = Some(name.trim())
        .filter(|name| !name.is_empty())
        .map(ToOwned::to_owned);
    Ok(NewComment {
        name,
        message: message.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_input() {
        let comment = new_comment("  Ana ", "\tNice site!\n").unwrap();
        assert_eq!(comment.name.as_deref(), Some("Ana"));
        assert_eq!(comment.message, "Nice site!");
    }

    #[test]
    fn blank_name_is_omitted() {
        assert_eq!(new_comment("   ", "Hi").unwrap().name, None);
    }

    #[test]
    fn reject_blank_message() {
        assert_eq!(new_comment("Ana", " \n "), Err(Error::EmptyComment));
    }
}
