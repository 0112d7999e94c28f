//! Lexical normalization of raw input.

/// A line of player input split into lower-case words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    words: Vec<String>,
}

impl Tokens {
    /// All words, in input order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the input held nothing but whitespace.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The first word, if any.
    pub fn verb(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    /// Words after the verb, rejoined with single spaces.
    ///
    /// Item and exit names may contain spaces, so the argument is kept as
    /// one string rather than a list.
    pub fn argument(&self) -> String {
        self.words.get(1..).unwrap_or(&[]).join(" ")
    }

    /// The whole input, rejoined with single spaces.
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

/// Lower-case `input` and split it on runs of whitespace.
///
/// No stemming and no punctuation stripping happen here.
pub fn normalize(input: &str) -> Tokens {
    Tokens {
        words: input.split_whitespace().map(str::to_lowercase).collect(),
    }
}
