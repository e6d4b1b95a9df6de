//! Mail address syntax check
//!
//! Accepts a single RFC 5322 address: a bare `addr-spec`, or an optional
//! display name followed by `<addr-spec>`, with surrounding whitespace. The
//! local part is a dot-atom or a non-empty quoted string. The domain is a
//! dot-atom or a domain literal, and must also pass `validator`'s domain rules.
//! No DNS or deliverability lookup is made.

use validator::ValidateEmail;

pub(super) fn is_valid_email(email: &str) -> bool {
    match parse_address(email) {
        Some(domain) => format!("user@{domain}").validate_email(),
        None => false,
    }
}

/// Parse one address and return its domain
fn parse_address(input: &str) -> Option<&str> {
    let mut bare = Cursor::new(input);
    bare.skip_space();
    if let Some(domain) = bare.addr_spec() {
        bare.skip_space();
        if bare.is_empty() {
            return Some(domain);
        }
    }

    let mut named = Cursor::new(input);
    named.skip_space();
    named.phrase();
    named.skip_space();
    if !named.eat('<') {
        return None;
    }
    let domain = named.addr_spec()?;
    if !named.eat('>') {
        return None;
    }
    named.skip_space();
    named.is_empty().then_some(domain)
}

struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn eat(&mut self, expected: char) -> bool {
        let rest = self.rest;
        match rest.strip_prefix(expected) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn skip_space(&mut self) {
        self.rest = self.rest.trim_start_matches(is_wsp);
    }

    /// `local-part "@" domain`, returning the domain
    fn addr_spec(&mut self) -> Option<&'a str> {
        if self.peek() == Some('"') {
            if self.quoted_string()?.is_empty() {
                return None;
            }
        } else {
            self.dot_atom()?;
        }

        if !self.eat('@') {
            return None;
        }
        self.skip_space();

        if self.peek() == Some('[') {
            self.domain_literal()
        } else {
            self.dot_atom()
        }
    }

    /// One or more atoms joined by single dots
    fn dot_atom(&mut self) -> Option<&'a str> {
        let start = self.rest;
        loop {
            let rest = self.rest;
            let atom_len: usize = rest
                .chars()
                .take_while(|c| is_atext(*c))
                .map(char::len_utf8)
                .sum();
            if atom_len == 0 {
                return None;
            }
            let rest = &rest[atom_len..];
            self.rest = rest;

            let after_dot = match rest.strip_prefix('.') {
                Some(after_dot) => after_dot,
                None => break,
            };
            self.rest = after_dot;
        }
        Some(&start[..start.len() - self.rest.len()])
    }

    /// `"..."` with backslash escapes, returning the unescaped content
    fn quoted_string(&mut self) -> Option<String> {
        let rest = self.rest;
        let mut chars = rest.char_indices();
        if chars.next().map(|(_, c)| c) != Some('"') {
            return None;
        }

        let mut content = String::new();
        while let Some((index, c)) = chars.next() {
            match c {
                '"' => {
                    self.rest = &rest[index + 1..];
                    return Some(content);
                }
                '\\' => match chars.next() {
                    Some((_, escaped)) if is_vchar(escaped) || is_wsp(escaped) => {
                        content.push(escaped);
                    }
                    _ => return None,
                },
                c if is_qtext(c) || is_wsp(c) => content.push(c),
                _ => return None,
            }
        }
        None
    }

    /// `[...]`, returned with its brackets
    fn domain_literal(&mut self) -> Option<&'a str> {
        let rest = self.rest;
        let end = rest.find(']')?;
        let literal = &rest[..=end];
        if !literal[1..end].chars().all(is_dtext) {
            return None;
        }
        self.rest = &rest[end + 1..];
        Some(literal)
    }

    /// Display name: words of atoms or quoted strings, with obsolete dots allowed
    fn phrase(&mut self) {
        loop {
            self.skip_space();
            if self.peek() == Some('"') {
                if self.quoted_string().is_none() {
                    return;
                }
                continue;
            }
            let rest = self.rest;
            let word_len: usize = rest
                .chars()
                .take_while(|c| is_atext(*c) || *c == '.')
                .map(char::len_utf8)
                .sum();
            if word_len == 0 {
                return;
            }
            self.rest = &rest[word_len..];
        }
    }
}

fn is_wsp(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_vchar(c: char) -> bool {
    ('!'..='~').contains(&c) || !c.is_ascii()
}

fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~".contains(c) || !c.is_ascii()
}

fn is_qtext(c: char) -> bool {
    is_vchar(c) && c != '"' && c != '\\'
}

fn is_dtext(c: char) -> bool {
    is_vchar(c) && c != '[' && c != ']' && c != '\\'
}
