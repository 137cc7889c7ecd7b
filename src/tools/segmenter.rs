use std::cmp::Reverse;

/// Splits text into symbols using a longest-first word list.
///
/// At every position the candidate words are tried from longest to shortest (ties keep the order
/// they were given in). The first word that matches is taken whole; otherwise one character is
/// taken. Tokenizing and encoding both walk the text with this, so they always agree on where
/// each symbol starts and ends.
#[derive(Debug, Clone, Default)]
pub struct Segmenter<'w> {
    words: Vec<&'w str>,
}

impl<'w> Segmenter<'w> {
    /// Build a segmenter. Empty and repeated words are dropped.
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'w str>,
    {
        let mut list: Vec<&'w str> = Vec::new();
        for word in words {
            if !word.is_empty() && !list.contains(&word) {
                list.push(word);
            }
        }
        // sort_by_key is stable, so equal lengths stay in insertion order
        list.sort_by_key(|w| Reverse(w.chars().count()));
        Self { words: list }
    }

    /// The candidate words, longest first.
    pub fn words(&self) -> &[&'w str] {
        &self.words
    }

    /// Iterate over (byte offset, symbol) pairs covering all of `text`.
    pub fn segments<'a>(&'a self, text: &'a str) -> Segments<'a> {
        Segments {
            words: &self.words,
            text,
            cursor: 0,
        }
    }
}

/// Iterator returned by [`Segmenter::segments`].
pub struct Segments<'a> {
    words: &'a [&'a str],
    text: &'a str,
    cursor: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.text;
        let rest = &text[self.cursor..];
        let len = match self.words.iter().find(|w| rest.starts_with(**w)) {
            Some(word) => word.len(),
            None => rest.chars().next()?.len_utf8(),
        };
        let start = self.cursor;
        self.cursor += len;
        Some((start, &rest[..len]))
    }
}
