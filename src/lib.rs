//! devstack - local development orchestrator for a self-hosted Convex
//! backend with a Next.js client.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── client        # --init / --reset / --remove client
//! │   ├── docker        # --dev docker up|down|cleanup
//! │   ├── admin_key     # --generate-admin-key
//! │   ├── completions   # Shell completions
//! │   ├── prompt        # Terminal confirmation
//! │   └── output        # Colored status lines
//! └── core/             # Core library components
//!     ├── config        # Settings and devstack.toml
//!     ├── domain/       # EnvFile, AdminKey
//!     ├── store/        # File store trait, filesystem and memory backends
//!     ├── runner        # External process execution
//!     ├── prereq        # Tool availability checks
//!     ├── health        # HTTP health poll
//!     ├── orchestrator  # Settings plus injected collaborators
//!     ├── scaffold      # Client project lifecycle
//!     ├── stack         # Compose lifecycle
//!     └── admin_key     # Admin key generation
//! ```
//!
//! # Features
//!
//! - Idempotent client scaffolding with template copies
//! - Compose stack bring-up gated on a backend health poll
//! - Admin key generation written to a private file and the client env
//! - Confirmation before anything destructive

pub mod cli;
pub mod core;
pub mod error;
