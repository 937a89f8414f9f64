/// Prefix trie over board tokens.
use crate::token::Token;

/// One node of the dictionary trie.
///
/// The root carries no token. Children are kept in insertion order and never
/// share a token value, so `find_child` returns at most one match.
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    token: Option<Token>,
    is_word: bool,
    children: Vec<TrieNode>,
}

impl TrieNode {
    fn with_token(token: Token) -> Self {
        Self {
            token: Some(token),
            is_word: false,
            children: Vec::new(),
        }
    }

    /// The token on the edge into this node (`None` for the root).
    pub fn token(&self) -> Option<Token> {
        self.token
    }

    /// Whether the path from the root to this node spells a dictionary word.
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    /// Child nodes, in insertion order.
    pub fn children(&self) -> &[TrieNode] {
        &self.children
    }

    /// Find the child reached by `token`.
    ///
    /// Linear scan; a node has at most one child per letter plus "QU".
    ///
    /// # Example
    /// ```
    /// use boggle_core::{Token, Trie};
    ///
    /// let mut trie = Trie::new();
    /// trie.insert(&[Token::letter(b'A').unwrap(), Token::letter(b'T').unwrap()]);
    ///
    /// let a = trie.root().find_child(Token::letter(b'A').unwrap()).unwrap();
    /// assert!(!a.is_word());
    /// assert!(a.find_child(Token::letter(b'T').unwrap()).unwrap().is_word());
    /// assert!(a.find_child(Token::Qu).is_none());
    /// ```
    pub fn find_child(&self, token: Token) -> Option<&TrieNode> {
        self.children.iter().find(|c| c.token == Some(token))
    }

    fn child_index(&self, token: Token) -> Option<usize> {
        self.children.iter().position(|c| c.token == Some(token))
    }

    fn count_nodes(&self) -> usize {
        1 + self.children.iter().map(TrieNode::count_nodes).sum::<usize>()
    }

    fn count_words(&self) -> usize {
        usize::from(self.is_word) + self.children.iter().map(TrieNode::count_words).sum::<usize>()
    }
}

/// Dictionary trie: owns the whole node tree.
///
/// Built once during dictionary loading, then only read. Search holds plain
/// `&TrieNode` cursors into it, so a finished trie can be shared across
/// threads without locking.
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    /// Create a trie with a bare root.
    pub fn new() -> Self {
        Self::default()
    }

    /// The content-less root node; search starts here.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Insert a token sequence and mark its last node as a word.
    ///
    /// Missing nodes are created on the way down. Inserting the empty
    /// sequence marks the root. Re-inserting an existing word changes nothing.
    pub fn insert(&mut self, tokens: &[Token]) {
        let mut node = &mut self.root;
        for &tok in tokens {
            let idx = match node.child_index(tok) {
                Some(i) => i,
                None => {
                    node.children.push(TrieNode::with_token(tok));
                    node.children.len() - 1
                }
            };
            node = &mut node.children[idx];
        }
        node.is_word = true;
    }

    /// Follow `tokens` from the root, returning the node reached.
    pub fn walk(&self, tokens: &[Token]) -> Option<&TrieNode> {
        let mut node = &self.root;
        for &tok in tokens {
            node = node.find_child(tok)?;
        }
        Some(node)
    }

    /// Check whether the trie contains exactly the given word.
    ///
    /// A sequence that only exists as a prefix of longer words is not
    /// contained.
    pub fn contains(&self, tokens: &[Token]) -> bool {
        self.walk(tokens).is_some_and(TrieNode::is_word)
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.root.count_nodes()
    }

    /// Number of distinct words stored.
    pub fn word_count(&self) -> usize {
        self.root.count_words()
    }

    /// True when nothing, not even the empty sequence, has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty() && !self.root.is_word
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize_line;

    fn tok(s: &str) -> Vec<Token> {
        normalize_line(s)
    }

    #[test]
    fn test_basic_insert_and_contains() {
        let mut trie = Trie::new();
        trie.insert(&tok("at"));
        trie.insert(&tok("ats"));
        trie.insert(&tok("sat"));

        assert!(trie.contains(&tok("at")));
        assert!(trie.contains(&tok("ats")));
        assert!(trie.contains(&tok("sat")));
        assert!(!trie.contains(&tok("a")));
        assert!(!trie.contains(&tok("sa")));
        assert!(!trie.contains(&tok("tas")));
    }

    #[test]
    fn test_shared_prefixes_share_nodes() {
        let mut trie = Trie::new();
        trie.insert(&tok("at"));
        trie.insert(&tok("ats"));
        // root, A, T, S
        assert_eq!(trie.node_count(), 4);
        assert_eq!(trie.word_count(), 2);
    }

    #[test]
    fn test_reinsert_is_idempotent() {
        let mut trie = Trie::new();
        trie.insert(&tok("quit"));
        let nodes = trie.node_count();
        trie.insert(&tok("quit"));
        assert_eq!(trie.node_count(), nodes);
        assert_eq!(trie.word_count(), 1);
        // QU, I, T plus root
        assert_eq!(nodes, 4);
    }

    #[test]
    fn test_empty_sequence_marks_root() {
        let mut trie = Trie::new();
        assert!(trie.is_empty());
        assert!(!trie.root().is_word());
        trie.insert(&[]);
        assert!(trie.root().is_word());
        assert!(trie.contains(&[]));
        assert!(!trie.is_empty());
    }

    #[test]
    fn test_children_have_distinct_tokens() {
        let mut trie = Trie::new();
        for w in ["cat", "car", "cab", "cat", "cart"] {
            trie.insert(&tok(w));
        }
        let ca = trie.walk(&tok("ca")).unwrap();
        let mut seen: Vec<Token> = ca.children().iter().filter_map(TrieNode::token).collect();
        let before = seen.len();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), before);
        assert_eq!(before, 3);
    }

    #[test]
    fn test_walk_miss_returns_none() {
        let mut trie = Trie::new();
        trie.insert(&tok("tree"));
        assert!(trie.walk(&tok("tx")).is_none());
        assert!(trie.walk(&tok("tre")).is_some());
        assert!(trie.root().token().is_none());
    }
}
