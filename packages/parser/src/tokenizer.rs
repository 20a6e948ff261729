use logos::Logos;
use std::fmt;
use std::ops::Range;

/// Token types for a single normalized source line
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token<'src> {
    // Keywords
    #[token("public")]
    Public,

    #[token("class")]
    Class,

    #[token("get")]
    Get,

    #[token("set")]
    Set,

    #[regex(r"[\p{L}_][\p{L}\p{M}\p{N}_]*", |lex| lex.slice())]
    Ident(&'src str),

    // Symbols
    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("<")]
    LAngle,

    #[token(">")]
    RAngle,

    #[token("?")]
    Question,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,

    #[token("=")]
    Equals,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,
}

impl<'src> Token<'src> {
    /// Tokens allowed inside a property type expression such as `List<Address>?`
    pub fn is_type_part(&self) -> bool {
        matches!(
            self,
            Token::Ident(_) | Token::LAngle | Token::RAngle | Token::Question
        )
    }

    /// Identifier text, treating keywords as plain words
    pub fn as_word(&self) -> Option<&'src str> {
        match self {
            Token::Ident(s) => Some(s),
            Token::Public => Some("public"),
            Token::Class => Some("class"),
            Token::Get => Some("get"),
            Token::Set => Some("set"),
            _ => None,
        }
    }
}

impl<'src> fmt::Display for Token<'src> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Public => write!(f, "public"),
            Token::Class => write!(f, "class"),
            Token::Get => write!(f, "get"),
            Token::Set => write!(f, "set"),
            Token::Ident(s) => write!(f, "{}", s),
            Token::LBrace => write!(f, "{{"),
            Token::RBrace => write!(f, "}}"),
            Token::LAngle => write!(f, "<"),
            Token::RAngle => write!(f, ">"),
            Token::Question => write!(f, "?"),
            Token::Semicolon => write!(f, ";"),
            Token::Comma => write!(f, ","),
            Token::Colon => write!(f, ":"),
            Token::Equals => write!(f, "="),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
        }
    }
}

/// A token together with its byte range in the line
pub type Spanned<'src> = (Token<'src>, Range<usize>);

/// Result of lexing one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexedLine<'src> {
    /// Tokens up to, not including, the first unrecognized character
    pub tokens: Vec<Spanned<'src>>,
    /// False when lexing stopped early at an unrecognized character
    pub complete: bool,
}

impl<'src> LexedLine<'src> {
    pub fn kinds(&self) -> impl Iterator<Item = &Token<'src>> {
        self.tokens.iter().map(|(token, _)| token)
    }
}

/// Tokenize a line, stopping at the first character the lexer cannot classify.
///
/// Comments, string literals and other constructs outside the recognized
/// grammar simply end the token stream; callers match on the prefix.
pub fn tokenize(line: &str) -> LexedLine<'_> {
    let mut tokens = Vec::new();

    for (result, span) in Token::lexer(line).spanned() {
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => {
                return LexedLine {
                    tokens,
                    complete: false,
                }
            }
        }
    }

    LexedLine {
        tokens,
        complete: true,
    }
}
