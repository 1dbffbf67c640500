use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_DEFAULT_HANDLER, MK_ERROR, MK_TOKEN,
};

use super::{
    patterns::{IDENTIFIER_REGEX, LEADING_TOKEN_REGEX, LINE_END_REGEX},
    tokens::{is_reserved, Keyword, LineKind, Token, TokenKind, RESERVED_LOOKUP},
};

/// Whether `word` can name a variable or a method.
pub fn is_identifier(word: &str) -> bool {
    IDENTIFIER_REGEX.is_match(word) && !is_reserved(word)
}

/// Classifies a line by its leading token.
///
/// The line must end in `;`, `{` or `}` once trimmed. Reserved words that do not
/// start a construct (`true`, `false`) and anything that does not begin with a
/// word or `}` are rejected as unrecognised.
pub fn classify(line: &str, position: &Position) -> Result<LineKind, Error> {
    let trimmed = line.trim();

    if !LINE_END_REGEX.is_match(trimmed) {
        return Err(MK_ERROR!(
            ErrorImpl::InvalidLineEnding {
                line: trimmed.to_string()
            },
            position
        ));
    }

    let unrecognised = || {
        MK_ERROR!(
            ErrorImpl::UnrecognisedLine {
                line: trimmed.to_string()
            },
            position
        )
    };

    let Some(leading) = LEADING_TOKEN_REGEX.captures(trimmed).and_then(|c| c.get(1)) else {
        return Err(unrecognised());
    };

    if leading.as_str() == "}" {
        return if trimmed == "}" {
            Ok(LineKind::CloseScope)
        } else {
            Err(unrecognised())
        };
    }

    match RESERVED_LOOKUP.get(leading.as_str()) {
        Some(Keyword::Void) => Ok(LineKind::MethodDeclaration),
        Some(Keyword::While) => Ok(LineKind::While),
        Some(Keyword::If) => Ok(LineKind::If),
        Some(Keyword::Return) => Ok(LineKind::Return),
        Some(Keyword::Final) => Ok(LineKind::Declaration),
        Some(keyword) if keyword.is_type() => Ok(LineKind::Declaration),
        Some(_) => Err(unrecognised()),
        None => {
            if trimmed[leading.end()..].trim_start().starts_with('(') {
                Ok(LineKind::MethodCall)
            } else {
                Ok(LineKind::Assignment)
            }
        }
    }
}

pub type RegexHandler = fn(&mut ConditionLexer, &Regex);

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref CONDITION_PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^\|\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Or, "||") },
        RegexPattern { regex: Regex::new(r"^&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::And, "&&") },
        RegexPattern { regex: Regex::new(r"^[^\s|&]+").unwrap(), handler: atom_handler },
    ];
}

/// Splits an `if`/`while` condition into `||`, `&&` and atom tokens.
pub struct ConditionLexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
}

impl ConditionLexer {
    pub fn new(source: &str) -> ConditionLexer {
        ConditionLexer {
            tokens: vec![],
            source: source.to_string(),
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn skip_handler(lexer: &mut ConditionLexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).map_or(0, |m| m.end());
    lexer.advance_n(matched);
}

fn atom_handler(lexer: &mut ConditionLexer, regex: &Regex) {
    let Some(matched) = regex.find(lexer.remainder()).map(|m| m.as_str().to_string()) else {
        return;
    };

    let column = lexer.pos;
    let length = matched.len();
    lexer.push(MK_TOKEN!(TokenKind::Atom, matched, column));
    lexer.advance_n(length);
}

pub fn tokenize_condition(source: &str, position: &Position) -> Result<Vec<Token>, Error> {
    let mut lex = ConditionLexer::new(source);

    while !lex.at_eof() {
        let pattern = CONDITION_PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex),
            None => {
                return Err(MK_ERROR!(
                    ErrorImpl::UnrecognisedToken {
                        token: lex.at().to_string()
                    },
                    position
                ))
            }
        }
    }

    let end = lex.pos;
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), end));
    Ok(lex.tokens)
}
