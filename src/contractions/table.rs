use std::collections::HashMap;

use lazy_static::lazy_static;

/// Built-in English contractions, informal form to formal form, both lowercase.
/// Forms with several readings ("he'd", "it's") take a single fixed expansion.
const CONTRACTIONS: &[(&str, &str)] = &[
    // Negated auxiliaries
    ("ain't", "is not"),
    ("aren't", "are not"),
    ("can't", "cannot"),
    ("can't've", "cannot have"),
    ("couldn't", "could not"),
    ("couldn't've", "could not have"),
    ("daren't", "dare not"),
    ("didn't", "did not"),
    ("doesn't", "does not"),
    ("don't", "do not"),
    ("hadn't", "had not"),
    ("hadn't've", "had not have"),
    ("hasn't", "has not"),
    ("haven't", "have not"),
    ("isn't", "is not"),
    ("mayn't", "may not"),
    ("mightn't", "might not"),
    ("mightn't've", "might not have"),
    ("mustn't", "must not"),
    ("mustn't've", "must not have"),
    ("needn't", "need not"),
    ("needn't've", "need not have"),
    ("oughtn't", "ought not"),
    ("oughtn't've", "ought not have"),
    ("shan't", "shall not"),
    ("shouldn't", "should not"),
    ("shouldn't've", "should not have"),
    ("wasn't", "was not"),
    ("weren't", "were not"),
    ("won't", "will not"),
    ("won't've", "will not have"),
    ("wouldn't", "would not"),
    ("wouldn't've", "would not have"),
    // Modal + have
    ("could've", "could have"),
    ("might've", "might have"),
    ("must've", "must have"),
    ("should've", "should have"),
    ("would've", "would have"),
    // Pronoun + auxiliary
    ("i'd", "i would"),
    ("i'd've", "i would have"),
    ("i'll", "i will"),
    ("i'll've", "i will have"),
    ("i'm", "i am"),
    ("i've", "i have"),
    ("you'd", "you would"),
    ("you'd've", "you would have"),
    ("you'll", "you will"),
    ("you'll've", "you will have"),
    ("you're", "you are"),
    ("you've", "you have"),
    ("he'd", "he would"),
    ("he'd've", "he would have"),
    ("he'll", "he will"),
    ("he'll've", "he will have"),
    ("he's", "he is"),
    ("she'd", "she would"),
    ("she'd've", "she would have"),
    ("she'll", "she will"),
    ("she'll've", "she will have"),
    ("she's", "she is"),
    ("it'd", "it would"),
    ("it'd've", "it would have"),
    ("it'll", "it will"),
    ("it'll've", "it will have"),
    ("it's", "it is"),
    ("we'd", "we would"),
    ("we'd've", "we would have"),
    ("we'll", "we will"),
    ("we'll've", "we will have"),
    ("we're", "we are"),
    ("we've", "we have"),
    ("they'd", "they would"),
    ("they'd've", "they would have"),
    ("they'll", "they will"),
    ("they'll've", "they will have"),
    ("they're", "they are"),
    ("they've", "they have"),
    ("let's", "let us"),
    // Demonstratives and interrogatives
    ("that'd", "that would"),
    ("that'd've", "that would have"),
    ("that'll", "that will"),
    ("that's", "that is"),
    ("there'd", "there would"),
    ("there'd've", "there would have"),
    ("there'll", "there will"),
    ("there're", "there are"),
    ("there's", "there is"),
    ("here's", "here is"),
    ("this'll", "this will"),
    ("what'd", "what did"),
    ("what'll", "what will"),
    ("what'll've", "what will have"),
    ("what're", "what are"),
    ("what's", "what is"),
    ("what've", "what have"),
    ("when's", "when is"),
    ("when've", "when have"),
    ("where'd", "where did"),
    ("where'll", "where will"),
    ("where's", "where is"),
    ("where've", "where have"),
    ("who'd", "who would"),
    ("who'll", "who will"),
    ("who'll've", "who will have"),
    ("who're", "who are"),
    ("who's", "who is"),
    ("who've", "who have"),
    ("why'd", "why did"),
    ("why's", "why is"),
    ("why've", "why have"),
    ("how'd", "how did"),
    ("how'd'y", "how do you"),
    ("how'll", "how will"),
    ("how's", "how is"),
    ("so's", "so as"),
    ("so've", "so have"),
    // Colloquial and archaic forms
    ("y'all", "you all"),
    ("y'all'd", "you all would"),
    ("y'all'd've", "you all would have"),
    ("y'all're", "you all are"),
    ("y'all've", "you all have"),
    ("ma'am", "madam"),
    ("o'clock", "of the clock"),
    ("'tis", "it is"),
    ("'twas", "it was"),
    ("ne'er", "never"),
    ("e'er", "ever"),
    ("o'er", "over"),
    ("gonna", "going to"),
    ("gotta", "got to"),
    ("wanna", "want to"),
    ("gimme", "give me"),
    ("lemme", "let me"),
    ("kinda", "kind of"),
    ("sorta", "sort of"),
    ("dunno", "do not know"),
];

lazy_static! {
    static ref BUILTIN: ContractionTable =
        ContractionTable::from_pairs(CONTRACTIONS.iter().copied());
}

/// Immutable informal-to-formal mapping. Lookups are hashed; key order is
/// kept only for enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractionTable {
    entries: HashMap<String, String>,
    keys: Vec<String>,
}

impl ContractionTable {
    /// Builds a table from `(informal, formal)` pairs. A repeated key keeps
    /// its first value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries = HashMap::new();
        let mut keys = Vec::new();

        for (key, value) in pairs {
            let key = key.into();
            if entries.contains_key(&key) {
                continue;
            }
            keys.push(key.clone());
            entries.insert(key, value.into());
        }

        Self { entries, keys }
    }

    /// The built-in English table, built on first use and shared read-only.
    pub fn builtin() -> &'static ContractionTable {
        &BUILTIN
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.keys
            .iter()
            .map(move |key| (key.as_str(), self.entries[key].as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_lookup() {
        let table = ContractionTable::builtin();
        assert_eq!(table.get("won't"), Some("will not"));
        assert_eq!(table.get("y'all"), Some("you all"));
        assert_eq!(table.get("oughtn't"), Some("ought not"));
        assert_eq!(table.get("didn't"), Some("did not"));
        assert_eq!(table.get("hello"), None);
    }

    #[test]
    fn test_builtin_keys_unique() {
        let unique: HashSet<&str> = CONTRACTIONS.iter().map(|(k, _)| *k).collect();
        assert_eq!(unique.len(), CONTRACTIONS.len());
        assert_eq!(ContractionTable::builtin().len(), CONTRACTIONS.len());
    }

    #[test]
    fn test_builtin_is_lowercase() {
        for (key, value) in ContractionTable::builtin().iter() {
            assert_eq!(key, key.to_lowercase(), "key {key}");
            assert_eq!(value, value.to_lowercase(), "value {value}");
        }
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(
            ContractionTable::builtin(),
            ContractionTable::builtin()
        ));
    }

    #[test]
    fn test_duplicate_key_keeps_first() {
        let table = ContractionTable::from_pairs([("he'd", "he would"), ("he'd", "he had")]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("he'd"), Some("he would"));
    }

    #[test]
    fn test_keys_in_insertion_order() {
        let table = ContractionTable::from_pairs([("b'b", "b"), ("a'a", "a"), ("c'c", "c")]);
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["b'b", "a'a", "c'c"]);
        assert_eq!(
            table.iter().collect::<Vec<_>>(),
            vec![("b'b", "b"), ("a'a", "a"), ("c'c", "c")]
        );
    }

    #[test]
    fn test_empty_table() {
        let table = ContractionTable::from_pairs(Vec::<(String, String)>::new());
        assert!(table.is_empty());
        assert!(!table.contains_key("won't"));
    }
}
