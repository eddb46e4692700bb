use logos::Logos;

pub const LAYOUT_TITLE_TOKEN: &str = "$LAYOUT_TITLE";
pub const CONTENT_TITLE_TOKEN: &str = "$CONTENT_TITLE";
pub const DECORATOR_TITLE_TOKEN: &str = "$DECORATOR_TITLE";

/// Lexemes of the title pattern grammar
///
/// There is no escaping mechanism: any exact occurrence of a token string
/// is a token. A `$` that does not begin a token lexes on its own and is
/// folded back into the surrounding literal text.
#[derive(Logos, Debug, Clone, PartialEq)]
enum PatternToken<'src> {
    #[token("$LAYOUT_TITLE")]
    LayoutTitle,

    #[token("$CONTENT_TITLE")]
    ContentTitle,

    #[token("$DECORATOR_TITLE")]
    DecoratorTitle,

    #[regex(r"[^$]+", |lex| lex.slice())]
    Literal(&'src str),

    #[token("$")]
    Dollar,
}

/// One segment of a tokenized pattern, in original order
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text between tokens; never empty
    Literal(String),

    /// `$LAYOUT_TITLE`
    Layout,

    /// `$CONTENT_TITLE`
    Content,

    /// `$DECORATOR_TITLE`, deprecated alias of `$LAYOUT_TITLE`
    DeprecatedLayout,
}

impl Segment {
    /// The exact pattern text this segment was lexed from.
    pub fn source_text(&self) -> &str {
        match self {
            Segment::Literal(text) => text,
            Segment::Layout => LAYOUT_TITLE_TOKEN,
            Segment::Content => CONTENT_TITLE_TOKEN,
            Segment::DeprecatedLayout => DECORATOR_TITLE_TOKEN,
        }
    }
}

/// Tokenize a title pattern in a single left-to-right pass.
///
/// Longest match wins at each position, tokens never overlap, and
/// adjacent literal lexemes are coalesced, so concatenating the segments'
/// `source_text` reconstructs the input exactly.
pub fn tokenize(pattern: &str) -> Vec<Segment> {
    fn flush(segments: &mut Vec<Segment>, literal: &mut String) {
        if !literal.is_empty() {
            segments.push(Segment::Literal(std::mem::take(literal)));
        }
    }

    let mut lexer = PatternToken::lexer(pattern);
    let mut segments = Vec::new();
    let mut literal = String::new();

    while let Some(token) = lexer.next() {
        match token {
            Ok(PatternToken::LayoutTitle) => {
                flush(&mut segments, &mut literal);
                segments.push(Segment::Layout);
            }
            Ok(PatternToken::ContentTitle) => {
                flush(&mut segments, &mut literal);
                segments.push(Segment::Content);
            }
            Ok(PatternToken::DecoratorTitle) => {
                flush(&mut segments, &mut literal);
                segments.push(Segment::DeprecatedLayout);
            }
            Ok(PatternToken::Literal(text)) => literal.push_str(text),
            Ok(PatternToken::Dollar) => literal.push('$'),
            // The grammar covers every input byte; treat a lexer stumble
            // as literal text rather than failing the pattern.
            Err(()) => literal.push_str(lexer.slice()),
        }
    }
    flush(&mut segments, &mut literal);

    segments
}
