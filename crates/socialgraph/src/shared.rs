//! A graph shared between async tasks.
//!
//! The engine itself is single-threaded. When it is embedded in a concurrent
//! host, the whole engine sits behind one mutex: every operation takes the
//! lock once and runs to completion, so no caller ever observes a partially
//! applied mutation.
//!
//! # Example
//!
//! ```
//! use socialgraph::domain::{Role, UserId};
//! use socialgraph::graph::GraphEngine;
//! use socialgraph::shared::new_shared_graph;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let graph = new_shared_graph(GraphEngine::new());
//!     graph.lock().await.add_user("A", "Ana", Role::Student);
//!     assert_eq!(graph.lock().await.in_degree(&UserId::from("A")), 0);
//! }
//! ```

use crate::graph::GraphEngine;
use std::sync::Arc;
use tokio::sync::Mutex;

/// One engine behind one lock.
pub type SharedGraph = Arc<Mutex<GraphEngine>>;

/// Wrap an engine for shared async access.
pub fn new_shared_graph(engine: GraphEngine) -> SharedGraph {
    Arc::new(Mutex::new(engine))
}
