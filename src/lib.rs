//! poker-hands: poker hand notation reader
//!
//! Reads one hand per line, where each token is either a two-character card
//! (`Ah`, `0c`, `9d`) or a future card `?N` standing for position `N` of a
//! freshly generated, unshuffled 52-card deck. Future cards are bound while
//! parsing and resolved once every hand has been read.
//!
//! Goals:
//! - Deterministic: the lookup deck is always `2s 3s .. As 2h .. Ac`
//! - Bad tokens are logged through `tracing` and skipped, never panicked on
//! - Future-card bindings are plain `(hand, slot)` indices, no shared pointers
//!
//! ## Quick start
//! ```
//! use poker_hands::reader::{load_hands, ReadOptions};
//!
//! let input = "Ah Kh Qh Jh 0h\n?0 ?1 Ah Kh Qh\n";
//! let hands = load_hands(input.as_bytes(), &ReadOptions::default()).unwrap();
//! assert_eq!(hands[0].to_string(), "Ah Kh Qh Jh 0h");
//! assert_eq!(hands[1].to_string(), "2s 3s Ah Kh Qh");
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin poker-hands -- hands.txt
//! ```

pub mod cards;
pub mod codec;
pub mod deck;
pub mod hand;
pub mod parser;
pub mod reader;
pub mod registry;
pub mod token;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
