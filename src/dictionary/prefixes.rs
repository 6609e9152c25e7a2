use super::trievec::TrieVec;
use crate::labelset::{Label, LabelSet};
use crate::tiles::{Letter, RackCounts};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// The set of all prefixes of the dictionary words, as a flattened trie.
///
/// Every path from the root spells a prefix of some word; a node is terminal
/// when its path is a whole word. Nodes are stored in breadth-first order, so
/// the children of a node occupy a contiguous range.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrefixSet {
    /// Each node is a tuple with the index of the first child node,
    /// and a `LabelSet` with the labels of all child nodes.
    nodes: Vec<(u32, LabelSet)>,
    /// Label of the edge leading to each node.
    labels: Vec<Label>,
    /// Terminal nodes end a word
    terminal: Vec<bool>,
    word_count: usize,
}

impl fmt::Display for PrefixSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<PrefixSet: {} words, {} nodes>",
            self.word_count,
            self.nodes.len()
        )
    }
}

impl From<&TrieVec<Label>> for PrefixSet {
    fn from(trie: &TrieVec<Label>) -> Self {
        let mut nodes: Vec<(u32, LabelSet)> = Vec::new();
        let mut labels: Vec<Label> = Vec::new();
        let mut terminal: Vec<bool> = Vec::new();
        let mut word_count = 0;

        let mut i: usize = 0;
        let mut queue = VecDeque::new();
        queue.push_back((trie, 0, 0));
        while let Some((node, parent, label)) = queue.pop_front() {
            let mut ls = LabelSet::new();
            for (child_label, t) in node.children() {
                ls.insert(*child_label);
                queue.push_back((t.as_ref(), i, *child_label));
            }
            if node.terminal() {
                word_count += 1;
            }
            nodes.push((0, ls));
            terminal.push(node.terminal());
            labels.push(label);
            // the first node queued by `parent` is its first child
            if i > 0 && nodes[parent].0 == 0 {
                nodes[parent].0 = i as u32;
            }
            i += 1;
        }
        PrefixSet {
            nodes,
            labels,
            terminal,
            word_count,
        }
    }
}

pub struct IteratorChildren<'a> {
    prefixes: &'a PrefixSet,
    range: std::ops::Range<usize>,
}

impl<'a> Iterator for IteratorChildren<'a> {
    type Item = (Label, usize);
    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(|i| (self.prefixes.labels[i], i))
    }
}

impl PrefixSet {
    pub const ROOT: usize = 0;

    /// Number of complete words
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Check if node `i` ends a word.
    pub fn is_terminal(&self, i: usize) -> bool {
        self.terminal.get(i).copied().unwrap_or(false)
    }

    /// Labels of the children of node `i`.
    pub fn child_labels(&self, i: usize) -> LabelSet {
        self.nodes.get(i).map(|n| n.1).unwrap_or_default()
    }

    /// Iterate over the children of node `i`.
    pub fn iter_children(&self, i: usize) -> IteratorChildren {
        let range = match self.nodes.get(i) {
            Some(&(start, labels)) if !labels.is_empty() => {
                start as usize..start as usize + labels.len()
            }
            _ => 0..0,
        };
        IteratorChildren {
            prefixes: self,
            range,
        }
    }

    /// Get the index of child with `label` for node `i` if present.
    pub fn get(&self, i: usize, label: Label) -> Option<usize> {
        let (start, labels) = self.nodes.get(i)?;
        labels.index_of(label).map(|index| *start as usize + index)
    }

    /// Follow `word` from the root, returns the node it ends in.
    fn walk(&self, word: &str) -> Option<usize> {
        if self.nodes.is_empty() {
            return None;
        }
        word.bytes().try_fold(PrefixSet::ROOT, |node, b| {
            let letter = Letter::from_ascii(b)?;
            self.get(node, letter.label())
        })
    }

    /// Returns true if `prefix` is the start of some word (a whole word included).
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Returns true if `word` is a complete word.
    pub fn is_word(&self, word: &str) -> bool {
        self.walk(word).map_or(false, |node| self.terminal[node])
    }

    /// Iterate over the words of at least two letters that can be spelled
    /// with the tiles in `counts`.
    ///
    /// Only branches that the rack can still supply are followed, so the walk
    /// never looks at words that cannot be formed.
    pub fn formable(&self, counts: RackCounts) -> Formable {
        let mut queue = VecDeque::with_capacity(16);
        if !self.nodes.is_empty() {
            queue.push_back(Args {
                node: PrefixSet::ROOT,
                counts,
                word: String::new(),
            });
        }
        Formable {
            prefixes: self,
            queue,
        }
    }
}

#[derive(Debug)]
struct Args {
    node: usize,
    counts: RackCounts,
    word: String,
}

/// Breadth-first walk of a [`PrefixSet`] constrained by a rack;
/// yields shorter words first.
#[derive(Debug)]
pub struct Formable<'a> {
    prefixes: &'a PrefixSet,
    queue: VecDeque<Args>,
}

impl<'a> Iterator for Formable<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(args) = self.queue.pop_front() {
            let children = self.prefixes.child_labels(args.node);
            let reachable = if args.counts.blanks() > 0 {
                children
            } else {
                children & rack_labels(&args.counts)
            };
            for label in reachable.iter() {
                let mut counts = args.counts;
                let letter = Letter::from_index(label as usize - 1);
                if counts.take(letter).is_none() {
                    continue;
                }
                if let Some(child) = self.prefixes.get(args.node, label) {
                    let mut word = args.word.clone();
                    word.push(letter.as_char());
                    self.queue.push_back(Args {
                        node: child,
                        counts,
                        word,
                    });
                }
            }
            if args.word.len() > 1 && self.prefixes.terminal[args.node] {
                return Some(args.word);
            }
        }
        None
    }
}

fn rack_labels(counts: &RackCounts) -> LabelSet {
    Letter::all()
        .filter(|&letter| counts.count(letter) > 0)
        .map(Letter::label)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::{encode, Rack};
    use std::convert::TryFrom;

    const WORDS: &[&str] = &[
        "AT", "CAT", "CATS", "CAST", "ACT", "TAX", "AX", "SCAT", "TACT",
    ];

    fn prefix_set() -> PrefixSet {
        let mut trie = TrieVec::new();
        for word in WORDS {
            let labels: Vec<Label> = encode(word).unwrap().iter().map(|l| l.label()).collect();
            trie.insert(labels);
        }
        PrefixSet::from(&trie)
    }

    #[test]
    fn test_prefix_set() {
        let prefixes = prefix_set();
        assert_eq!(prefixes.word_count(), WORDS.len());
        for word in WORDS {
            assert!(prefixes.is_word(word), "{} should be a word", word);
        }
        assert!(prefixes.contains_prefix("CA"));
        assert!(!prefixes.is_word("CA"));
        assert!(!prefixes.contains_prefix("CX"));
        assert!(prefixes.contains_prefix(""));
        let root_children: Vec<Label> = prefixes
            .iter_children(PrefixSet::ROOT)
            .map(|(label, _)| label)
            .collect();
        assert_eq!(root_children, vec![1, 3, 19, 20]);
    }

    #[test]
    fn test_formable() {
        let prefixes = prefix_set();
        let counts = Rack::try_from("CAT").unwrap().counts();
        let mut words: Vec<String> = prefixes.formable(counts).collect();
        words.sort();
        assert_eq!(words, vec!["ACT", "AT", "CAT"]);
    }

    #[test]
    fn test_formable_with_blank() {
        let prefixes = prefix_set();
        let counts = Rack::try_from("CAT_").unwrap().counts();
        let words: Vec<String> = prefixes.formable(counts).collect();
        for word in &["CATS", "CAST", "SCAT", "TACT", "TAX", "AX"] {
            assert!(words.contains(&word.to_string()), "missing {}", word);
        }
        // breadth first: shorter words come first
        assert!(words.windows(2).all(|w| w[0].len() <= w[1].len()));
    }

    #[test]
    fn test_empty_set() {
        let prefixes = PrefixSet::default();
        assert!(!prefixes.is_word("A"));
        assert_eq!(prefixes.formable(RackCounts::default()).count(), 0);
    }
}
