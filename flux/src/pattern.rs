use std::collections::HashMap;
use std::sync::RwLock;

/// Thread-safe path-pattern trie, MQTT wildcard grammar.
///
/// Segments are separated by `/`. Two wildcards:
/// - `+` matches exactly one segment
/// - `#` matches all remaining segments (only valid as the last segment)
///
/// Subscriptions, request routing and i18n lookup all route through this.
///
/// # Example
///
/// ```ignore
/// let trie = PatternTrie::new();
/// trie.insert("favorites/items/+", 1);
/// trie.insert("favorites/#", 2);
///
/// // Both patterns cover a concrete favorite entry.
/// let hits = trie.matches("favorites/items/42"); // [1, 2]
/// ```
pub struct PatternTrie<T> {
    root: RwLock<Node<T>>,
}

struct Node<T> {
    /// Exact-segment children.
    children: HashMap<String, Node<T>>,
    /// `+` child, one segment.
    single: Option<Box<Node<T>>>,
    /// `#` child, everything below.
    multi: Option<Box<Node<T>>>,
    /// Values whose pattern ends at this node.
    values: Vec<T>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self {
            children: HashMap::new(),
            single: None,
            multi: None,
            values: Vec::new(),
        }
    }
}

impl<T: Clone> PatternTrie<T> {
    pub fn new() -> Self {
        Self {
            root: RwLock::new(Node::default()),
        }
    }

    /// Store a value under a pattern such as `"jobs/feed"`, `"favorites/+"`
    /// or `"#"`.
    pub fn insert(&self, pattern: &str, value: T) {
        let mut root = self.root.write().unwrap();
        root.insert(pattern, value);
    }

    /// Collect every value whose pattern covers the concrete `path`.
    ///
    /// `"favorites/items/42"` is covered by `"favorites/items/42"`,
    /// `"favorites/items/+"`, `"favorites/#"` and `"#"`.
    pub fn matches(&self, path: &str) -> Vec<T> {
        let root = self.root.read().unwrap();
        let mut out = Vec::new();
        root.collect(path, &mut out);
        out
    }

    /// Drop values under `pattern` for which the predicate holds.
    /// Returns whether anything was removed.
    pub fn remove<F>(&self, pattern: &str, predicate: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        let mut root = self.root.write().unwrap();
        root.remove(pattern, &predicate)
    }

    /// Whether any value is stored under exactly this pattern
    /// (no wildcard expansion).
    pub fn has_pattern(&self, pattern: &str) -> bool {
        let root = self.root.read().unwrap();
        root.has_pattern(pattern)
    }

    /// Total number of stored values across all patterns.
    pub fn len(&self) -> usize {
        let root = self.root.read().unwrap();
        root.count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> Default for PatternTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Node<T> {
    fn insert(&mut self, pattern: &str, value: T) {
        if pattern.is_empty() {
            self.values.push(value);
            return;
        }

        let (head, tail) = split_head(pattern);

        match head {
            "+" => {
                let child = self.single.get_or_insert_with(|| Box::new(Node::default()));
                child.insert(tail, value);
            }
            "#" => {
                // `#` terminates the pattern; the value lives on the multi child.
                let child = self.multi.get_or_insert_with(|| Box::new(Node::default()));
                child.values.push(value);
            }
            segment => {
                let child = self
                    .children
                    .entry(segment.to_string())
                    .or_insert_with(Node::default);
                child.insert(tail, value);
            }
        }
    }

    fn collect(&self, path: &str, out: &mut Vec<T>) {
        if path.is_empty() {
            out.extend(self.values.iter().cloned());
            // `#` also covers zero remaining segments.
            if let Some(ref multi) = self.multi {
                out.extend(multi.values.iter().cloned());
            }
            return;
        }

        let (head, tail) = split_head(path);

        if let Some(child) = self.children.get(head) {
            child.collect(tail, out);
        }
        if let Some(ref single) = self.single {
            single.collect(tail, out);
        }
        if let Some(ref multi) = self.multi {
            out.extend(multi.values.iter().cloned());
        }
    }

    fn remove<F>(&mut self, pattern: &str, predicate: &F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        if pattern.is_empty() {
            let before = self.values.len();
            self.values.retain(|v| !predicate(v));
            return self.values.len() < before;
        }

        let (head, tail) = split_head(pattern);

        match head {
            "+" => {
                if let Some(ref mut child) = self.single {
                    return child.remove(tail, predicate);
                }
            }
            "#" => {
                if let Some(ref mut child) = self.multi {
                    let before = child.values.len();
                    child.values.retain(|v| !predicate(v));
                    return child.values.len() < before;
                }
            }
            segment => {
                if let Some(child) = self.children.get_mut(segment) {
                    return child.remove(tail, predicate);
                }
            }
        }

        false
    }

    fn has_pattern(&self, pattern: &str) -> bool {
        if pattern.is_empty() {
            return !self.values.is_empty();
        }

        let (head, tail) = split_head(pattern);

        match head {
            "+" => self
                .single
                .as_ref()
                .map_or(false, |child| child.has_pattern(tail)),
            "#" => self
                .multi
                .as_ref()
                .map_or(false, |child| !child.values.is_empty()),
            segment => self
                .children
                .get(segment)
                .map_or(false, |child| child.has_pattern(tail)),
        }
    }

    fn count(&self) -> usize {
        let mut n = self.values.len();
        for child in self.children.values() {
            n += child.count();
        }
        if let Some(ref single) = self.single {
            n += single.count();
        }
        if let Some(ref multi) = self.multi {
            n += multi.count();
        }
        n
    }
}

/// `"favorites/items/42"` -> `("favorites", "items/42")`; no separator
/// means the tail is empty.
fn split_head(path: &str) -> (&str, &str) {
    match path.find('/') {
        Some(idx) => (&path[..idx], &path[idx + 1..]),
        None => (path, ""),
    }
}
