//! Input collections accepted by the columnize API.

/// The two shapes of input that can be columnized.
///
/// A sequence renders like `ls` output, filling as many columns as the
/// line width allows. A mapping renders as two columns with one
/// key/value pair per line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Items {
    /// Plain string items, rendered top to bottom per column.
    Sequence(Vec<String>),
    /// Key/value pairs, rendered as one pair per line.
    Mapping(Vec<(String, String)>),
}

impl Items {
    /// Build a sequence from anything yielding string-likes.
    ///
    /// # Example
    ///
    /// ```
    /// use pilaster::Items;
    ///
    /// let items = Items::sequence(["spam", "ham", "eggs"]);
    /// assert_eq!(items.len(), 3);
    /// ```
    pub fn sequence<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Items::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Build a mapping from anything yielding pairs of string-likes.
    pub fn mapping<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Items::Mapping(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Number of entries. A key/value pair counts as one entry.
    pub fn len(&self) -> usize {
        match self {
            Items::Sequence(items) => items.len(),
            Items::Mapping(pairs) => pairs.len(),
        }
    }

    /// Whether there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<String>> for Items {
    fn from(items: Vec<String>) -> Self {
        Items::Sequence(items)
    }
}

impl From<Vec<(String, String)>> for Items {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Items::Mapping(pairs)
    }
}
