//! Mastermind Solver
//!
//! A feedback oracle for Mastermind-style code breaking and a solver that
//! plays against it by inferring which colours the secret holds.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::config::GameConfig;
//! use mastermind_solver::oracle::Oracle;
//! use mastermind_solver::solver::Solver;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut oracle = Oracle::new(GameConfig::classic(), StdRng::seed_from_u64(7));
//! let mut solver = Solver::for_oracle(&oracle);
//!
//! let rounds = solver.solve(&mut oracle).unwrap();
//! assert_eq!(oracle.history().len(), rounds);
//! ```

// Game parameters
pub mod config;

// Core domain types
pub mod core;

// Game errors
pub mod error;

// Secret holder and scorer
pub mod oracle;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
