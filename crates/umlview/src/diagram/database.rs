//! Class forest database
//!
//! Stores every extracted class in an arena and stitches parent names into a
//! forest of inheritance trees. Resolution is two-pass: [`ClassForest::ingest`]
//! binds a parent immediately when it is already known and queues the record
//! otherwise; [`ClassForest::finalize`] drains the queue once every file has
//! been seen.

use std::collections::{HashMap, VecDeque};
use std::fmt;

use anyhow::Result;
use tracing::{debug, trace, warn};

use crate::core::{Database, UmlError};

/// Stable index of a record inside a [`ClassForest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassId(usize);

impl ClassId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Structural summary of one declared type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRecord {
    pub name: String,
    pub is_abstract: bool,
    /// Each formatted as `"<sigil> <type> <identifier>"`
    pub fields: Vec<String>,
    /// Each formatted as `"<sigil> <return-type> <name>(<param-types>)"`
    pub methods: Vec<String>,
    parent: Option<ClassId>,
    parent_name_pending: Option<String>,
    subclasses: Vec<ClassId>,
    placeholder: bool,
}

impl ClassRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_abstract: false,
            fields: Vec::new(),
            methods: Vec::new(),
            parent: None,
            parent_name_pending: None,
            subclasses: Vec::new(),
            placeholder: false,
        }
    }

    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_methods(mut self, methods: Vec<String>) -> Self {
        self.methods = methods;
        self
    }

    /// Declare the parent by name; the forest resolves it on ingest
    pub fn with_parent_name(mut self, parent: impl Into<String>) -> Self {
        self.parent_name_pending = Some(parent.into());
        self
    }

    fn placeholder(name: &str) -> Self {
        Self {
            placeholder: true,
            ..Self::new(name)
        }
    }

    pub fn parent(&self) -> Option<ClassId> {
        self.parent
    }

    /// Parent name awaiting resolution, if any
    pub fn parent_name_pending(&self) -> Option<&str> {
        self.parent_name_pending.as_deref()
    }

    /// Direct subclasses in binding order
    pub fn subclasses(&self) -> &[ClassId] {
        &self.subclasses
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// True for a parent synthesized from a name no file declared
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }
}

impl fmt::Display for ClassRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        for field in &self.fields {
            writeln!(f, "\t{}", field)?;
        }
        for method in &self.methods {
            writeln!(f, "\t{}", method)?;
        }
        Ok(())
    }
}

/// Result of handing a record to [`ClassForest::ingest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// Stored as a new record
    Added(ClassId),
    /// Filled in an existing placeholder with the same name
    Upgraded(ClassId),
    /// Dropped because a real declaration already exists
    Duplicate(ClassId),
}

impl IngestOutcome {
    pub fn id(self) -> ClassId {
        match self {
            IngestOutcome::Added(id) | IngestOutcome::Upgraded(id) | IngestOutcome::Duplicate(id) => id,
        }
    }
}

/// Owner of every class record and of the inheritance links between them
#[derive(Debug, Default)]
pub struct ClassForest {
    all: Vec<ClassRecord>,
    by_name: HashMap<String, ClassId>,
    pending: VecDeque<ClassId>,
    refused: Vec<UmlError>,
    synthesize_placeholders: bool,
}

impl ClassForest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Synthesize placeholder parents for names no file declares
    pub fn with_placeholders(mut self, enabled: bool) -> Self {
        self.synthesize_placeholders = enabled;
        self
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn get(&self, id: ClassId) -> &ClassRecord {
        &self.all[id.0]
    }

    pub fn find(&self, name: &str) -> Option<ClassId> {
        self.by_name.get(name).copied()
    }

    /// All record ids in insertion order
    pub fn ids(&self) -> impl Iterator<Item = ClassId> + '_ {
        (0..self.all.len()).map(ClassId)
    }

    /// Records with no parent, in insertion order
    pub fn roots(&self) -> impl Iterator<Item = ClassId> + '_ {
        self.ids().filter(|id| self.get(*id).is_root())
    }

    pub fn parent(&self, id: ClassId) -> Option<ClassId> {
        self.get(id).parent
    }

    pub fn subclasses(&self, id: ClassId) -> &[ClassId] {
        &self.get(id).subclasses
    }

    /// Number of records still waiting for their parent
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Follow parent links to the root of `id`'s tree
    pub fn top_root(&self, id: ClassId) -> ClassId {
        let mut current = id;
        for _ in 0..self.all.len() {
            match self.get(current).parent {
                Some(parent) => current = parent,
                None => break,
            }
        }
        current
    }

    /// Number of parent links between `id` and its root
    pub fn depth(&self, id: ClassId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.get(current).parent {
            depth += 1;
            current = parent;
            if depth >= self.all.len() {
                break;
            }
        }
        depth
    }

    /// Pre-order walk of `id` and everything below it
    pub fn descendants(&self, id: ClassId) -> Vec<ClassId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.get(next).subclasses.iter().rev().copied());
        }
        out
    }

    /// Add one extracted record
    ///
    /// The record's declared parent name is bound right away when a record
    /// of that name exists; otherwise the record waits for [`finalize`].
    ///
    /// [`finalize`]: ClassForest::finalize
    pub fn ingest(&mut self, mut record: ClassRecord) -> IngestOutcome {
        let parent_name = record.parent_name_pending.take();

        let (id, outcome) = match self.find(&record.name) {
            Some(existing) if self.get(existing).placeholder => {
                let slot = &mut self.all[existing.0];
                slot.is_abstract = record.is_abstract;
                slot.fields = record.fields;
                slot.methods = record.methods;
                slot.placeholder = false;
                debug!(class = %slot.name, "Upgraded placeholder");
                (existing, IngestOutcome::Upgraded(existing))
            }
            Some(existing) => {
                warn!("{}", UmlError::duplicate_class(&record.name));
                return IngestOutcome::Duplicate(existing);
            }
            None => {
                record.parent = None;
                record.subclasses.clear();
                record.placeholder = false;
                let id = ClassId(self.all.len());
                self.by_name.insert(record.name.clone(), id);
                debug!(class = %record.name, id = id.0, "Ingested class");
                self.all.push(record);
                (id, IngestOutcome::Added(id))
            }
        };

        if let Some(parent_name) = parent_name {
            match self.find(&parent_name) {
                Some(parent) => {
                    if let Err(err) = self.bind(id, parent) {
                        warn!("{}", err);
                        self.refused.push(err);
                    }
                }
                None => {
                    trace!(class = %self.all[id.0].name, parent = %parent_name, "Deferred parent");
                    self.all[id.0].parent_name_pending = Some(parent_name);
                    self.pending.push_back(id);
                }
            }
        }

        outcome
    }

    /// Resolve every deferred parent name
    ///
    /// Returns one diagnostic per record whose parent could not be bound,
    /// including cycles refused during [`ingest`]; those records stay roots.
    /// With placeholders enabled, unknown parents are synthesized instead of
    /// reported.
    ///
    /// [`ingest`]: ClassForest::ingest
    pub fn finalize(&mut self) -> Vec<UmlError> {
        let mut diagnostics = std::mem::take(&mut self.refused);

        while let Some(id) = self.pending.pop_front() {
            let Some(parent_name) = self.all[id.0].parent_name_pending.take() else {
                continue;
            };

            let parent = match self.find(&parent_name) {
                Some(parent) => parent,
                None if self.synthesize_placeholders => {
                    let parent = ClassId(self.all.len());
                    self.by_name.insert(parent_name.clone(), parent);
                    self.all.push(ClassRecord::placeholder(&parent_name));
                    debug!(class = %parent_name, "Synthesized placeholder parent");
                    parent
                }
                None => {
                    let err = UmlError::unresolved_parent(&self.all[id.0].name, parent_name);
                    warn!("{}", err);
                    diagnostics.push(err);
                    continue;
                }
            };

            if let Err(err) = self.bind(id, parent) {
                warn!("{}", err);
                diagnostics.push(err);
            }
        }

        diagnostics
    }

    /// Link `child` under `parent`, refusing links that would close a cycle
    fn bind(&mut self, child: ClassId, parent: ClassId) -> Result<(), UmlError> {
        let mut cursor = Some(parent);
        let mut steps = 0;
        while let Some(current) = cursor {
            if current == child || steps > self.all.len() {
                return Err(UmlError::cyclic_parent(
                    &self.all[child.0].name,
                    &self.all[parent.0].name,
                ));
            }
            cursor = self.all[current.0].parent;
            steps += 1;
        }

        if let Some(old) = self.all[child.0].parent.take() {
            self.all[old.0].subclasses.retain(|c| *c != child);
        }
        self.all[child.0].parent = Some(parent);
        self.all[child.0].parent_name_pending = None;
        self.all[parent.0].subclasses.push(child);
        debug!(
            class = %self.all[child.0].name,
            parent = %self.all[parent.0].name,
            "Bound parent"
        );
        Ok(())
    }
}

impl Database for ClassForest {
    type Node = ClassRecord;
    type Id = ClassId;

    fn add_node(&mut self, node: Self::Node) -> Result<Self::Id> {
        Ok(self.ingest(node).id())
    }

    fn get_node(&self, name: &str) -> Option<&Self::Node> {
        self.find(name).map(|id| self.get(id))
    }

    fn nodes(&self) -> impl Iterator<Item = &Self::Node> {
        self.all.iter()
    }

    fn clear(&mut self) {
        self.all.clear();
        self.by_name.clear();
        self.pending.clear();
    }

    fn node_count(&self) -> usize {
        self.all.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(forest: &ClassForest, ids: impl IntoIterator<Item = ClassId>) -> Vec<String> {
        ids.into_iter().map(|id| forest.get(id).name.clone()).collect()
    }

    #[test]
    fn test_parent_known_binds_immediately() {
        let mut forest = ClassForest::new();
        let a = forest.ingest(ClassRecord::new("A")).id();
        let b = forest.ingest(ClassRecord::new("B").with_parent_name("A")).id();

        assert_eq!(forest.parent(b), Some(a));
        assert_eq!(forest.subclasses(a), &[b]);
        assert_eq!(forest.pending_count(), 0);
        assert!(forest.get(b).parent_name_pending().is_none());
    }

    #[test]
    fn test_parent_unknown_waits_for_finalize() {
        let mut forest = ClassForest::new();
        let b = forest.ingest(ClassRecord::new("B").with_parent_name("A")).id();
        assert_eq!(forest.get(b).parent_name_pending(), Some("A"));
        assert!(forest.get(b).parent().is_none());

        let a = forest.ingest(ClassRecord::new("A")).id();
        assert!(forest.subclasses(a).is_empty());

        let diagnostics = forest.finalize();
        assert!(diagnostics.is_empty());
        assert_eq!(forest.parent(b), Some(a));
        assert_eq!(forest.subclasses(a), &[b]);
        assert!(forest.get(b).parent_name_pending().is_none());
    }

    #[test]
    fn test_dangling_parent_becomes_root() {
        let mut forest = ClassForest::new();
        let c = forest.ingest(ClassRecord::new("C").with_parent_name("Nonexistent")).id();
        let diagnostics = forest.finalize();

        assert_eq!(diagnostics.len(), 1);
        assert!(matches!(
            &diagnostics[0],
            UmlError::UnresolvedParent { parent_name, .. } if parent_name == "Nonexistent"
        ));
        assert!(forest.get(c).is_root());
        assert!(forest.get(c).parent_name_pending().is_none());
    }

    #[test]
    fn test_duplicate_keeps_first() {
        let mut forest = ClassForest::new();
        let first = forest.ingest(ClassRecord::new("A").with_fields(vec!["- int x".into()]));
        let second = forest.ingest(ClassRecord::new("A").with_abstract(true));

        assert_eq!(second, IngestOutcome::Duplicate(first.id()));
        assert_eq!(forest.len(), 1);
        assert_eq!(forest.get(first.id()).fields, vec!["- int x"]);
        assert!(!forest.get(first.id()).is_abstract);
    }

    #[test]
    fn test_self_extension_is_refused() {
        let mut forest = ClassForest::new();
        let a = forest.ingest(ClassRecord::new("A").with_parent_name("A")).id();
        assert!(forest.get(a).is_root());
        assert!(forest.subclasses(a).is_empty());

        let diagnostics = forest.finalize();
        assert_eq!(diagnostics.len(), 1);
        assert!(matches!(diagnostics[0], UmlError::CyclicParent { .. }));
        assert!(forest.finalize().is_empty());
    }

    #[test]
    fn test_cycle_across_files_is_refused() {
        let mut forest = ClassForest::new();
        let a = forest.ingest(ClassRecord::new("A").with_parent_name("B")).id();
        let b = forest.ingest(ClassRecord::new("B").with_parent_name("A")).id();
        assert_eq!(forest.parent(b), Some(a));

        let diagnostics = forest.finalize();
        assert_eq!(diagnostics.len(), 1);
        assert!(matches!(diagnostics[0], UmlError::CyclicParent { .. }));
        assert!(forest.get(a).is_root());
        assert_eq!(names(&forest, forest.roots()), vec!["A"]);
    }

    #[test]
    fn test_placeholder_synthesized_and_upgraded() {
        let mut forest = ClassForest::new().with_placeholders(true);
        let b = forest.ingest(ClassRecord::new("B").with_parent_name("A")).id();
        assert!(forest.finalize().is_empty());

        let a = forest.find("A").unwrap();
        assert!(forest.get(a).is_placeholder());
        assert_eq!(forest.parent(b), Some(a));

        let outcome = forest.ingest(
            ClassRecord::new("A")
                .with_abstract(true)
                .with_methods(vec!["+ void run()".into()]),
        );
        assert_eq!(outcome, IngestOutcome::Upgraded(a));
        assert!(!forest.get(a).is_placeholder());
        assert!(forest.get(a).is_abstract);
        assert_eq!(forest.subclasses(a), &[b]);
        assert_eq!(forest.len(), 2);
    }

    #[test]
    fn test_roots_and_subclasses_keep_insertion_order() {
        let mut forest = ClassForest::new();
        forest.ingest(ClassRecord::new("Z"));
        forest.ingest(ClassRecord::new("Z2").with_parent_name("Z"));
        forest.ingest(ClassRecord::new("Y"));
        forest.ingest(ClassRecord::new("Z1").with_parent_name("Z"));
        forest.finalize();

        let z = forest.find("Z").unwrap();
        assert_eq!(names(&forest, forest.roots()), vec!["Z", "Y"]);
        assert_eq!(names(&forest, forest.subclasses(z).to_vec()), vec!["Z2", "Z1"]);
    }

    #[test]
    fn test_top_root_depth_and_descendants() {
        let mut forest = ClassForest::new();
        let r = forest.ingest(ClassRecord::new("R")).id();
        let s = forest.ingest(ClassRecord::new("S").with_parent_name("R")).id();
        let t = forest.ingest(ClassRecord::new("T").with_parent_name("S")).id();
        let u = forest.ingest(ClassRecord::new("U").with_parent_name("R")).id();

        assert_eq!(forest.top_root(t), r);
        assert_eq!(forest.depth(t), 2);
        assert_eq!(forest.depth(r), 0);
        assert_eq!(forest.descendants(r), vec![r, s, t, u]);
    }

    #[test]
    fn test_display_lists_members() {
        let record = ClassRecord::new("A")
            .with_fields(vec!["- int x".into()])
            .with_methods(vec!["+ void f()".into()]);
        assert_eq!(record.to_string(), "A\n\t- int x\n\t+ void f()\n");
    }

    #[test]
    fn test_database_trait() {
        let mut forest = ClassForest::new();
        forest.add_node(ClassRecord::new("A")).unwrap();
        forest.add_node(ClassRecord::new("B")).unwrap();

        assert_eq!(forest.node_count(), 2);
        assert!(forest.get_node("A").is_some());
        assert!(forest.get_node("C").is_none());
        assert_eq!(forest.nodes().count(), 2);

        forest.clear();
        assert!(forest.is_empty());
        assert!(forest.find("A").is_none());
    }
}
