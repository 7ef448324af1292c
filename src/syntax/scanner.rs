//! Single-pass classifier for Dabara source text
//!
//! The scanner never fails: every character of the input lands in exactly one
//! token, and malformed constructs (unterminated strings, dangling dots,
//! multi-dot numbers) degrade to a best-effort token instead of an error.

use serde::Serialize;

use super::Category;
use super::alphabet::{is_ident_char, is_ident_start, reserved_category};

/// A classified slice of the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub category: Category,
    pub text: &'a str,
    /// Byte offset of `text` within the scanned source
    pub start: usize,
}

impl Token<'_> {
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Split `source` into classified tokens that cover it exactly
pub fn scan(source: &str) -> Vec<Token<'_>> {
    let mut scanner = Scanner {
        source,
        pos: 0,
        tokens: Vec::new(),
    };
    scanner.run();
    scanner.tokens
}

struct Scanner<'a> {
    source: &'a str,
    pos: usize,
    tokens: Vec<Token<'a>>,
}

impl<'a> Scanner<'a> {
    fn run(&mut self) {
        // Each arm consumes at least one character.
        while let Some(c) = self.current() {
            match c {
                '#' => self.comment(),
                '"' => self.string(),
                c if c.is_ascii_digit() || (c == '.' && self.peek_is(|n| n.is_ascii_digit())) => {
                    self.number()
                }
                c if is_ident_start(c) => self.word(),
                '.' if self.peek_is(is_ident_start) => self.method(),
                '=' | '!' | '<' | '>' if self.peek() == Some('=') => {
                    self.push(Category::Operator, self.pos + 2)
                }
                '=' | '<' | '>' | '+' | '-' | '*' | '/' => {
                    self.push(Category::Operator, self.pos + 1)
                }
                '(' | ')' | '{' | '}' | '[' | ']' => self.push(Category::Bracket, self.pos + 1),
                c => self.push(Category::Plain, self.pos + c.len_utf8()),
            }
        }
    }

    fn current(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn peek_is(&self, pred: impl Fn(char) -> bool) -> bool {
        self.peek().is_some_and(pred)
    }

    /// Emit `source[pos..end]` and move the cursor to `end`
    fn push(&mut self, category: Category, end: usize) {
        let source = self.source;
        self.tokens.push(Token {
            category,
            text: &source[self.pos..end],
            start: self.pos,
        });
        self.pos = end;
    }

    /// First byte offset at or after `from` where `pred` stops holding
    fn run_end(&self, from: usize, pred: impl Fn(char) -> bool) -> usize {
        self.source[from..]
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(self.source.len(), |(i, _)| from + i)
    }

    fn comment(&mut self) {
        let end = self.run_end(self.pos, |c| c != '\n');
        self.push(Category::Comment, end);
    }

    fn string(&mut self) {
        let body = self.pos + 1;
        let end = self.source[body..]
            .find('"')
            .map_or(self.source.len(), |i| body + i + 1);
        self.push(Category::String, end);
    }

    fn number(&mut self) {
        let end = self.run_end(self.pos, |c| c.is_ascii_digit() || c == '.');
        self.push(Category::Number, end);
    }

    fn word(&mut self) {
        let end = self.run_end(self.pos, is_ident_char);
        let word = &self.source[self.pos..end];
        let category = reserved_category(word).unwrap_or_else(|| {
            let rest = self.source[end..].trim_start_matches(' ');
            if rest.starts_with('(') {
                Category::FunctionCall
            } else {
                Category::Plain
            }
        });
        self.push(category, end);
    }

    fn method(&mut self) {
        self.push(Category::Operator, self.pos + 1);
        let end = self.run_end(self.pos, is_ident_char);
        self.push(Category::MethodCall, end);
    }
}

#[cfg(test)]
mod tests {
    use expect_test::{Expect, expect};

    use super::*;
    use crate::samples;

    fn check(input: &str, expect: Expect) {
        let listing: String = scan(input)
            .iter()
            .map(|t| format!("{} {:?}\n", t.category, t.text))
            .collect();
        expect.assert_eq(&listing);
    }

    fn joined(tokens: &[Token<'_>]) -> String {
        tokens.iter().map(|t| t.text).collect()
    }

    /// xorshift over characters that exercise every scanner branch
    fn pseudo_random_sources(count: usize) -> Vec<String> {
        const ALPHABET: [char; 26] = [
            'a', 'k', '_', 'ƙ', 'ɓ', 'ʔ', '1', '9', '.', '.', '"', '#', '\n', ' ', ' ', '(',
            ')', '<', '>', '=', '!', '&', '+', 'é', '😀', '\t',
        ];
        let mut state: u64 = 0x2545_f491_4f6c_dd1d;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        };
        (0..count)
            .map(|_| {
                let len = (next() % 40) as usize;
                (0..len)
                    .map(|_| ALPHABET[(next() % ALPHABET.len() as u64) as usize])
                    .collect()
            })
            .collect()
    }

    #[test]
    fn comment_spans_whole_line() {
        check(
            "# hi",
            expect![[r##"
                comment "# hi"
            "##]],
        );
    }

    #[test]
    fn comment_stops_before_newline() {
        check(
            "# a\nfara",
            expect![[r##"
                comment "# a"
                plain "\n"
                keyword "fara"
            "##]],
        );
    }

    #[test]
    fn unterminated_string_runs_to_end() {
        check(
            "\"abc",
            expect![[r#"
                string "\"abc"
            "#]],
        );
    }

    #[test]
    fn string_may_span_lines() {
        check(
            "\"a\nb\" x",
            expect![[r#"
                string "\"a\nb\""
                plain " "
                plain "x"
            "#]],
        );
    }

    #[test]
    fn comparison_statement() {
        check(
            "idan x >= 5 {",
            expect![[r#"
                keyword "idan"
                plain " "
                plain "x"
                plain " "
                operator ">="
                plain " "
                number "5"
                plain " "
                bracket "{"
            "#]],
        );
    }

    #[test]
    fn call_followed_by_parens() {
        check(
            "foo()",
            expect![[r#"
                function-call "foo"
                bracket "("
                bracket ")"
            "#]],
        );
    }

    #[test]
    fn call_lookahead_skips_spaces_only() {
        check(
            "foo  (\nbar\t(",
            expect![[r#"
                function-call "foo"
                plain " "
                plain " "
                bracket "("
                plain "\n"
                plain "bar"
                plain "\t"
                bracket "("
            "#]],
        );
    }

    #[test]
    fn method_after_dot() {
        check(
            "lst.tsawo()",
            expect![[r#"
                plain "lst"
                operator "."
                method-call "tsawo"
                bracket "("
                bracket ")"
            "#]],
        );
    }

    #[test]
    fn greedy_dotted_number() {
        check(
            "1.2.3",
            expect![[r#"
                number "1.2.3"
            "#]],
        );
    }

    #[test]
    fn leading_dot_number_beats_method_rule() {
        check(
            ".5.x",
            expect![[r#"
                number ".5."
                plain "x"
            "#]],
        );
    }

    #[test]
    fn reserved_words_are_classified() {
        check(
            "var ok = gaskiya\nnaɗa k = karɓa()\nƙare",
            expect![[r#"
                declaration "var"
                plain " "
                plain "ok"
                plain " "
                operator "="
                plain " "
                boolean "gaskiya"
                plain "\n"
                declaration "naɗa"
                plain " "
                plain "k"
                plain " "
                operator "="
                plain " "
                builtin "karɓa"
                bracket "("
                bracket ")"
                plain "\n"
                keyword "ƙare"
            "#]],
        );
    }

    #[test]
    fn operators_and_lone_bang() {
        check(
            "a==b!=c<d<=e>f>=g!h+-*/",
            expect![[r#"
                plain "a"
                operator "=="
                plain "b"
                operator "!="
                plain "c"
                operator "<"
                plain "d"
                operator "<="
                plain "e"
                operator ">"
                plain "f"
                operator ">="
                plain "g"
                plain "!"
                plain "h"
                operator "+"
                operator "-"
                operator "*"
                operator "/"
            "#]],
        );
    }

    #[test]
    fn dangling_dot_is_plain() {
        check(
            "a. ,",
            expect![[r#"
                plain "a"
                plain "."
                plain " "
                plain ","
            "#]],
        );
    }

    #[test]
    fn digits_inside_identifiers_stay_in_word() {
        check(
            "x1 ci_gaba",
            expect![[r#"
                plain "x1"
                plain " "
                keyword "ci_gaba"
            "#]],
        );
    }

    #[test]
    fn degenerate_inputs_do_not_panic() {
        for input in ["", "\"", "#", ".", "ɓɗƙƴʔ", "!", "😀", "\"\"\"", "..", "((("] {
            let tokens = scan(input);
            assert_eq!(joined(&tokens), input);
        }
        assert!(scan("").is_empty());
    }

    #[test]
    fn hausa_letters_form_one_word() {
        let tokens = scan("ɓɗƙƴʔ");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].category, Category::Plain);
    }

    #[test]
    fn tokens_cover_input_exactly() {
        let mut sources = pseudo_random_sources(500);
        sources.extend(samples::names().filter_map(samples::get).map(String::from));

        for source in &sources {
            let tokens = scan(source);
            assert_eq!(&joined(&tokens), source);

            let mut offset = 0;
            for token in &tokens {
                assert_eq!(token.start, offset, "gap or overlap in {source:?}");
                assert!(!token.text.is_empty());
                offset = token.end();
            }
        }
    }

    #[test]
    fn self_delimiting_tokens_rescan_alone() {
        for source in pseudo_random_sources(300) {
            for token in scan(&source) {
                let standalone = matches!(
                    token.category,
                    Category::Comment
                        | Category::String
                        | Category::Number
                        | Category::Keyword
                        | Category::Declaration
                        | Category::Boolean
                        | Category::Builtin
                        | Category::Bracket
                );
                if !standalone {
                    continue;
                }
                let again = scan(token.text);
                assert_eq!(again.len(), 1, "{:?} split on rescan", token.text);
                assert_eq!(again[0].category, token.category);
            }
        }
    }
}
