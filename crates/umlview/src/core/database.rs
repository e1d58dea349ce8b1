//! Core database trait for diagram model storage
//!
//! The database owns every node of the model. Other components hold stable
//! ids into it and only read from it once it is built.

use anyhow::Result;

/// Core trait for model databases
///
/// Nodes are stored in insertion order and are looked up by their unique
/// name. Relationships between nodes live on the nodes themselves.
pub trait Database {
    /// The node data type for this database
    type Node;

    /// Stable handle to a stored node
    type Id: Copy + Eq;

    /// Add a node to the database
    fn add_node(&mut self, node: Self::Node) -> Result<Self::Id>;

    /// Get a node by name
    fn get_node(&self, name: &str) -> Option<&Self::Node>;

    /// Iterate over all nodes in insertion order
    fn nodes(&self) -> impl Iterator<Item = &Self::Node>;

    /// Clear all data from the database
    fn clear(&mut self);

    /// Get the number of nodes
    fn node_count(&self) -> usize;
}
