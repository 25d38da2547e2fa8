use std::sync::LazyLock;

use lachs::Span;
use regex::Regex;

/// Line breaks and the `": "` field delimiter.
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n|: ").expect("separator pattern is valid"));

/// A single lexical unit of a VPF document together with its source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub value: String,
    pub position: Span,
}

impl Token {
    pub fn pos(&self) -> Span {
        self.position.clone()
    }

    /// Returns a human-readable description of the token
    pub fn describe(&self) -> String {
        format!("'{}' at line {}", self.value, self.position.start.0 + 1)
    }

    /// Splits `input` into spanned tokens, dropping every separator and every
    /// empty token left behind by blank lines.
    pub fn lex(input: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut line = 0;
        let mut line_start = 0;
        let mut token_start = 0;

        for separator in SEPARATOR.find_iter(input) {
            push_token(
                &mut tokens,
                input,
                token_start..separator.start(),
                line,
                line_start,
            );

            if separator.as_str().ends_with('\n') {
                line += 1;
                line_start = separator.end();
            }
            token_start = separator.end();
        }
        push_token(&mut tokens, input, token_start..input.len(), line, line_start);

        tokens
    }
}

fn push_token(
    tokens: &mut Vec<Token>,
    input: &str,
    range: std::ops::Range<usize>,
    line: usize,
    line_start: usize,
) {
    let value = &input[range.clone()];
    if value.is_empty() {
        return;
    }

    let line_end = input[line_start..]
        .find(['\r', '\n'])
        .map_or(input.len(), |offset| line_start + offset);
    let column = input[line_start..range.start].chars().count();
    let width = value.chars().count();

    tokens.push(Token {
        value: value.to_string(),
        position: Span {
            start: (line, column),
            end: (line, column + width),
            source: input[line_start..line_end].to_string(),
        },
    });
}

/// Splits raw VPF text into its semantic tokens (symbol keywords, names,
/// coordinate pairs and rating digits), in document order.
pub fn tokenize(input: &str) -> Vec<String> {
    Token::lex(input)
        .into_iter()
        .map(|token| token.value)
        .collect()
}
