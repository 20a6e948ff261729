use crate::ast::{Declaration, Document, Field};
use crate::scanner::normalize;
use crate::tokenizer::{tokenize, LexedLine, Spanned, Token};
use tracing::{debug, instrument, trace, warn};

/// Modifiers tolerated between `public` and `class` in a declaration header
const CLASS_MODIFIERS: &[&str] = &["sealed", "partial", "abstract"];

/// What a single normalized line means to the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `public class Name ...`
    DeclarationOpen(&'a str),
    /// A line holding nothing but `}`
    DeclarationClose,
    /// `public TYPE Name { get; set; }`
    Field { name: &'a str, source_type: &'a str },
    /// Starts like a declaration header but names nothing
    MalformedHeader,
    Other,
}

/// Classify one normalized line, in rule priority order
pub fn classify(line: &str) -> LineKind<'_> {
    let lexed = tokenize(line);

    if let Some(header) = match_declaration_open(&lexed) {
        return header;
    }

    if lexed.complete && matches!(lexed.tokens.as_slice(), [(Token::RBrace, _)]) {
        return LineKind::DeclarationClose;
    }

    match_field(line, &lexed).unwrap_or(LineKind::Other)
}

fn match_declaration_open<'a>(lexed: &LexedLine<'a>) -> Option<LineKind<'a>> {
    let mut tokens = lexed.kinds().peekable();

    if !matches!(tokens.next(), Some(Token::Public)) {
        return None;
    }

    while let Some(Token::Ident(word)) = tokens.peek() {
        if !CLASS_MODIFIERS.contains(word) {
            return None;
        }
        tokens.next();
    }

    if !matches!(tokens.next(), Some(Token::Class)) {
        return None;
    }

    match tokens.next() {
        Some(Token::Public | Token::Class) | None => Some(LineKind::MalformedHeader),
        Some(token) => Some(
            token
                .as_word()
                .map_or(LineKind::MalformedHeader, LineKind::DeclarationOpen),
        ),
    }
}

fn match_field<'a>(line: &'a str, lexed: &LexedLine<'a>) -> Option<LineKind<'a>> {
    let tokens = lexed.tokens.as_slice();

    // A `class` keyword after `public` belongs to a header, never a type
    if !matches!(tokens, [(Token::Public, _), (Token::Ident(_), _), ..]) {
        return None;
    }

    // The type is one unbroken run of type tokens, e.g. `List<Address>?`
    let mut end = 1;
    while let Some((token, span)) = tokens.get(end) {
        let contiguous = end == 1 || tokens[end - 1].1.end == span.start;
        if !token.is_type_part() || !contiguous {
            break;
        }
        end += 1;
    }

    let type_start = tokens[1].1.start;
    let type_end = tokens[end - 1].1.end;

    // Contextual keywords (`get`, `set`) are legal property names
    let name = tokens.get(end).and_then(|(token, _)| token.as_word())?;

    if !is_auto_property_body(&tokens[end + 1..]) {
        return None;
    }

    Some(LineKind::Field {
        name,
        source_type: &line[type_start..type_end],
    })
}

/// `{ get; set; }`, optionally followed by anything (an initializer, a comment)
fn is_auto_property_body(tokens: &[Spanned<'_>]) -> bool {
    matches!(
        tokens,
        [
            (Token::LBrace, _),
            (Token::Get, _),
            (Token::Semicolon, _),
            (Token::Set, _),
            (Token::Semicolon, _),
            (Token::RBrace, _),
            ..
        ]
    )
}

/// Stack-driven declaration extractor
#[derive(Debug, Default)]
pub struct Parser {
    open: Vec<Declaration>,
    closed: Vec<Declaration>,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one normalized line
    pub fn feed(&mut self, line: &str) {
        match classify(line) {
            LineKind::DeclarationOpen(name) => {
                debug!(declaration = name, depth = self.open.len(), "Opening declaration");
                self.open.push(Declaration::new(name));
            }
            LineKind::DeclarationClose => match self.open.pop() {
                Some(declaration) => {
                    debug!(
                        declaration = %declaration.name,
                        fields = declaration.fields.len(),
                        "Closing declaration"
                    );
                    self.closed.push(declaration);
                }
                None => trace!("Dropping unmatched closing brace"),
            },
            LineKind::Field { name, source_type } => self.add_field(name, source_type),
            LineKind::MalformedHeader | LineKind::Other => trace!(line, "Skipping line"),
        }
    }

    fn add_field(&mut self, name: &str, source_type: &str) {
        match self.open.last_mut() {
            Some(current) => {
                debug!(
                    declaration = %current.name,
                    field = name,
                    source_type,
                    "Adding field"
                );
                current.fields.push(Field::new(name, source_type));
            }
            None => trace!(field = name, "Skipping field outside any declaration"),
        }
    }

    /// Finish scanning; outer declarations come before the ones nested in them
    pub fn finish(self) -> Document {
        for unclosed in &self.open {
            warn!(declaration = %unclosed.name, "Declaration was never closed, dropping it");
        }

        let mut declarations = self.closed;
        declarations.reverse();
        Document::new(declarations)
    }
}

/// Parse source text into its declarations
#[instrument(skip(source), fields(bytes = source.len()))]
pub fn parse(source: &str) -> Document {
    let mut parser = Parser::new();
    for line in normalize(source) {
        parser.feed(&line);
    }
    parser.finish()
}
