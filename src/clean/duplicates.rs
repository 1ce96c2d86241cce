use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use blake3::Hash;

/// Files grouped by content digest, each group in first-seen order.
///
/// Groups themselves are kept in the order their first member was seen, so
/// resolving them yields deletions in walk order.
#[derive(Debug, Default)]
pub struct DuplicateGroups {
    index: HashMap<Hash, usize>,
    groups: Vec<Vec<PathBuf>>,
    seen: HashSet<PathBuf>,
}

impl DuplicateGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `path` to the group for `digest`. A path that was already
    /// inserted is ignored, so a file can never become its own duplicate.
    pub fn insert(&mut self, digest: Hash, path: PathBuf) {
        if !self.seen.insert(path.clone()) {
            return;
        }
        match self.index.get(&digest) {
            Some(&idx) => self.groups[idx].push(path),
            None => {
                self.index.insert(digest, self.groups.len());
                self.groups.push(vec![path]);
            }
        }
    }

    pub fn extend(&mut self, hashed: impl IntoIterator<Item = (PathBuf, Hash)>) {
        for (path, digest) in hashed {
            self.insert(digest, path);
        }
    }

    /// Number of distinct digests seen.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// A duplicate set: the file to keep and the copies to delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub keeper: PathBuf,
    pub duplicates: Vec<PathBuf>,
}

/// Turn digest groups into keep/delete decisions.
///
/// Groups with a single member are dropped. In every other group the first
/// path seen is kept and the rest are duplicates. Equal digests are taken as
/// equal content; there is no byte-for-byte confirmation.
pub fn resolve(groups: DuplicateGroups) -> Vec<Resolution> {
    groups
        .groups
        .into_iter()
        .filter(|group| group.len() >= 2)
        .map(|mut group| {
            let duplicates = group.split_off(1);
            Resolution {
                keeper: group.remove(0),
                duplicates,
            }
        })
        .collect()
}
