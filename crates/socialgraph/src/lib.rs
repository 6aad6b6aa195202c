//! Socialgraph - a directed follows graph of users.
//!
//! This crate provides both a CLI application and a library. The core is
//! [`graph::GraphEngine`], an in-memory graph of users and follows with
//! breadth-first and depth-first traversal, cycle detection, and
//! degree-based rankings.
//!
//! # Example
//!
//! ```
//! use socialgraph::domain::{Role, UserId};
//! use socialgraph::graph::GraphEngine;
//!
//! let mut graph = GraphEngine::new();
//! graph.add_user("A", "Ana", Role::Student);
//! graph.add_user("B", "Beto", Role::Teacher);
//! assert!(graph.add_follow(&UserId::from("A"), &UserId::from("B")));
//!
//! assert_eq!(graph.in_degree(&UserId::from("B")), 1);
//! assert_eq!(graph.adjacency_text(), "A -> B\nB -> -");
//! ```

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod domain;
pub mod error;
pub mod graph;
pub mod shared;

// Callers of the graph: demo data, configuration, application context
pub mod app;
pub mod config;
pub mod demo;

// Public CLI module (needed by binary)
pub mod cli;
pub mod output;
