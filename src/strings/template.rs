//! Parsed translation templates.
//!
//! A template is the text stored against one [`StringKind`] of a bundle. It
//! understands three conventions:
//!
//! - `{N}` is a positional placeholder filled by the `N`th variable (zero
//!   based). `{{` and `}}` produce literal braces.
//! - `_X` marks `X` as the accelerator (hotkey) character. The marker is
//!   removed from displayed text and the first marker wins. `__` is a literal
//!   underscore, as is an underscore followed by anything other than a letter
//!   or digit.
//!
//! [`StringKind`]: super::StringKind

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use super::error::{StringError, TemplateFault};

/// Character that introduces an accelerator in a template.
pub const HOTKEY_MARKER: char = '_';

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(usize),
}

/// An immutable, pre-parsed translation template.
///
/// # Examples
///
/// ```
/// use relabel::strings::TranslateableString;
///
/// let template = TranslateableString::parse("_Open {0}")?;
/// assert!(template.has_hotkey());
/// assert_eq!(template.hotkey(), Some('O'));
/// assert_eq!(template.interpret(&["report.txt"])?, "Open report.txt");
/// # Ok::<(), relabel::strings::StringError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateableString {
    source: String,
    segments: Vec<Segment>,
    hotkey: Option<char>,
    arity: usize,
}

impl TranslateableString {
    /// Parse `source` into a template.
    ///
    /// # Errors
    ///
    /// Returns [`StringError::InvalidTemplate`] when a placeholder is empty,
    /// unterminated, not a decimal index, or too large an index, or when a
    /// closing brace has no matching opening brace.
    pub fn parse(source: &str) -> Result<Self, StringError> {
        let mut parser = Parser::new(source);
        parser
            .run()
            .map_err(|fault| StringError::invalid_template(source, fault))?;
        Ok(Self {
            source: source.to_owned(),
            segments: parser.segments,
            hotkey: parser.hotkey,
            arity: parser.arity,
        })
    }

    /// The raw template text as supplied by the store.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of variables [`Self::interpret`] requires.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Returns `true` when the template carries an accelerator marker.
    #[must_use]
    pub const fn has_hotkey(&self) -> bool {
        self.hotkey.is_some()
    }

    /// The accelerator character, when the template declares one.
    #[must_use]
    pub const fn hotkey(&self) -> Option<char> {
        self.hotkey
    }

    /// Substitute `variables` into the template and return display text.
    ///
    /// Variables beyond the highest placeholder index are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`StringError::InterpolationArity`] when fewer variables are
    /// supplied than the placeholders require.
    pub fn interpret<V: AsRef<str>>(&self, variables: &[V]) -> Result<String, StringError> {
        if variables.len() < self.arity {
            return Err(StringError::interpolation_arity(
                &self.source,
                self.arity,
                variables.len(),
            ));
        }
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(index) => {
                    if let Some(value) = variables.get(*index) {
                        out.push_str(value.as_ref());
                    }
                }
            }
        }
        Ok(out)
    }
}

impl Default for TranslateableString {
    fn default() -> Self {
        Self {
            source: String::new(),
            segments: Vec::new(),
            hotkey: None,
            arity: 0,
        }
    }
}

impl FromStr for TranslateableString {
    type Err = StringError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Self::parse(source)
    }
}

impl fmt::Display for TranslateableString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl<'de> Deserialize<'de> for TranslateableString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Self::parse(&source).map_err(serde::de::Error::custom)
    }
}

struct Parser<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    literal: String,
    segments: Vec<Segment>,
    hotkey: Option<char>,
    arity: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            literal: String::new(),
            segments: Vec::new(),
            hotkey: None,
            arity: 0,
        }
    }

    fn run(&mut self) -> Result<(), TemplateFault> {
        while let Some(ch) = self.chars.next() {
            match ch {
                '{' if self.chars.next_if_eq(&'{').is_some() => self.literal.push('{'),
                '{' => {
                    let index = self.placeholder()?;
                    let needed = index.checked_add(1).ok_or(TemplateFault::IndexTooLarge)?;
                    self.arity = self.arity.max(needed);
                    self.flush();
                    self.segments.push(Segment::Placeholder(index));
                }
                '}' if self.chars.next_if_eq(&'}').is_some() => self.literal.push('}'),
                '}' => return Err(TemplateFault::UnmatchedClose),
                HOTKEY_MARKER => self.marker(),
                other => self.literal.push(other),
            }
        }
        self.flush();
        Ok(())
    }

    fn placeholder(&mut self) -> Result<usize, TemplateFault> {
        let mut digits = String::new();
        loop {
            match self.chars.next() {
                Some('}') => break,
                Some(ch) if ch.is_ascii_digit() => digits.push(ch),
                Some(_) => return Err(TemplateFault::NonNumericPlaceholder),
                None => return Err(TemplateFault::UnterminatedPlaceholder),
            }
        }
        if digits.is_empty() {
            return Err(TemplateFault::EmptyPlaceholder);
        }
        // Only digits reach here, so the parse can fail only on overflow.
        digits.parse().map_err(|_| TemplateFault::IndexTooLarge)
    }

    fn marker(&mut self) {
        if self.chars.next_if_eq(&HOTKEY_MARKER).is_some() {
            self.literal.push(HOTKEY_MARKER);
            return;
        }
        match self.chars.next_if(|ch| ch.is_alphanumeric()) {
            Some(key) => {
                if self.hotkey.is_none() {
                    self.hotkey = Some(key);
                }
                self.literal.push(key);
            }
            None => self.literal.push(HOTKEY_MARKER),
        }
    }

    fn flush(&mut self) {
        if !self.literal.is_empty() {
            self.segments
                .push(Segment::Literal(std::mem::take(&mut self.literal)));
        }
    }
}
