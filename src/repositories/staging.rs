//! In-memory staging set for a single unit of work.
//!
//! Changes are kept in the order they were staged and replayed in that
//! order when the owning repository commits.

use crate::entities::command;

/// A pending write against the `commands` table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StagedChange {
    Insert(command::Model),
    Update(command::Model),
    Delete(i32),
}

/// Ordered list of staged changes owned by one repository.
///
/// Every change gets a sequence number when it is staged, so a commit
/// removes exactly the entries it wrote, however the set changed meanwhile.
#[derive(Debug, Default)]
pub struct ChangeSet {
    changes: Vec<(u64, StagedChange)>,
    next_seq: u64,
}

/// The changes claimed by one commit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Batch {
    seqs: Vec<u64>,
    changes: Vec<StagedChange>,
}

impl Batch {
    pub fn changes(&self) -> &[StagedChange] {
        &self.changes
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, change: StagedChange) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.changes.push((seq, change));
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Copy of the pending changes, used as the commit batch.
    pub fn snapshot(&self) -> Batch {
        let (seqs, changes) = self.changes.iter().cloned().unzip();
        Batch { seqs, changes }
    }

    /// Remove the entries of a committed `batch`.
    ///
    /// Changes staged after the snapshot stay pending, and entries that were
    /// already discarded are simply not found.
    pub fn acknowledge(&mut self, batch: &Batch) {
        self.changes.retain(|(seq, _)| !batch.seqs.contains(seq));
    }

    pub fn clear(&mut self) {
        self.changes.clear();
    }
}

/// What a successful commit wrote to the store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SavedChanges {
    /// Inserted records, carrying their store-assigned ids.
    pub created: Vec<command::Model>,
    pub updated: Vec<command::Model>,
    /// Ids whose removal was committed. Ids that no longer existed are omitted.
    pub deleted: Vec<i32>,
}

impl SavedChanges {
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.updated.is_empty() && self.deleted.is_empty()
    }

    pub fn total(&self) -> usize {
        self.created.len() + self.updated.len() + self.deleted.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: i32) -> command::Model {
        command::Model {
            id,
            title: format!("cmd {id}"),
            description: None,
            platform: "Linux".to_string(),
        }
    }

    #[test]
    fn acknowledge_keeps_changes_staged_after_snapshot() {
        let mut set = ChangeSet::new();
        set.push(StagedChange::Insert(sample(0)));
        set.push(StagedChange::Delete(3));

        let batch = set.snapshot();
        set.push(StagedChange::Update(sample(7)));
        set.acknowledge(&batch);

        assert_eq!(set.len(), 1);
        assert_eq!(set.snapshot().changes(), &[StagedChange::Update(sample(7))]);
    }

    #[test]
    fn acknowledge_after_discard_leaves_new_changes_alone() {
        let mut set = ChangeSet::new();
        set.push(StagedChange::Delete(1));
        set.push(StagedChange::Delete(2));
        let batch = set.snapshot();

        set.clear();
        set.push(StagedChange::Delete(9));
        set.acknowledge(&batch);

        assert_eq!(set.snapshot().changes(), &[StagedChange::Delete(9)]);
    }

    #[test]
    fn acknowledging_twice_is_harmless() {
        let mut set = ChangeSet::new();
        set.push(StagedChange::Delete(1));
        let batch = set.snapshot();
        set.acknowledge(&batch);
        set.push(StagedChange::Delete(2));
        set.acknowledge(&batch);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn saved_changes_totals() {
        let saved = SavedChanges {
            created: vec![sample(1)],
            updated: vec![sample(2), sample(3)],
            deleted: vec![4],
        };
        assert_eq!(saved.total(), 4);
        assert!(!saved.is_empty());
        assert!(SavedChanges::default().is_empty());
    }
}
