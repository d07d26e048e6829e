use super::error::{ExpectedKinds, ParseError};
use super::token::{Token, TokenKind};

/// Check that `token` is present and of one of the acceptable `kinds`
///
/// Absent tokens report an unexpected end of input; tokens of any other kind
/// report what was found alongside what was acceptable.
pub fn expect<'t>(token: Option<&'t Token>, kinds: &[TokenKind]) -> Result<&'t Token, ParseError> {
    let Some(token) = token else {
        return Err(ParseError::UnexpectedEnd {
            expected: ExpectedKinds::from(kinds),
        });
    };

    if kinds.contains(&token.kind) {
        return Ok(token);
    }

    Err(ParseError::UnexpectedToken {
        found: token.kind,
        expected: ExpectedKinds::from(kinds),
        offset: token.start_offset,
        line: token.line,
        column: token.column,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(kind: TokenKind) -> Token {
        Token {
            kind,
            segments: Vec::new(),
            start_offset: 6,
            end_offset: 7,
            line: 1,
            column: 7,
        }
    }

    #[test]
    fn test_accepts_listed_kind() {
        let tok = token(TokenKind::OpenGroup);
        let accepted = expect(Some(&tok), &[TokenKind::Tag, TokenKind::OpenGroup]).unwrap();
        assert_eq!(accepted, &tok);
    }

    #[test]
    fn test_missing_token_reports_end_of_input() {
        let err = expect(None, &[TokenKind::Tag]).unwrap_err();
        assert_eq!(err.to_string(), "unexpected end of input, expected tag");
    }

    #[test]
    fn test_wrong_kind_names_found_and_expected() {
        let tok = token(TokenKind::CloseGroup);
        let err = expect(
            Some(&tok),
            &[TokenKind::Tag, TokenKind::Pattern, TokenKind::OpenGroup],
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "unexpected closing parenthesis, expected tag, pattern or opening parenthesis"
        );
        match err {
            ParseError::UnexpectedToken {
                found,
                offset,
                line,
                column,
                ..
            } => {
                assert_eq!(found, TokenKind::CloseGroup);
                assert_eq!((offset, line, column), (6, 1, 7));
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }
}
