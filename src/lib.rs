//! RuPaul - run a nais app locally with docker-compose.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── drag          # The drag pipeline
//! │   ├── output        # Terminal output helpers
//! │   └── quote         # Random RuPaul quote
//! └── core/             # Core library components
//!     ├── manifest      # nais Application parsing
//!     ├── compose       # docker-compose.yml generation
//!     ├── secret        # Secret payloads and KV v2 unwrapping
//!     ├── vault/        # Vault access
//!     │   ├── client    # HTTP client
//!     │   ├── token     # Token resolution (env, token helper)
//!     │   └── session   # Validated session
//!     └── materialize   # Secrets to files
//! ```

pub mod cli;
pub mod core;
pub mod error;
