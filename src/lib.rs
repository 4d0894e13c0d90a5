//! poker-classify: five-card poker hand classification
//!
//! Goals:
//! - Pure, stateless classification of one five-card hand into a single category
//! - Strict validation against the 52-card deck before anything is evaluated
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start
//! ```
//! use poker_classify::cards::Rank;
//! use poker_classify::evaluator::{classify, evaluate, HandCategory};
//! use poker_classify::hand::{validate, HandError};
//!
//! let hand = validate("Ah Kd 10d 5c 2h").unwrap();
//! assert_eq!(evaluate(&hand), HandCategory::HighCard(Rank::Ace));
//!
//! assert_eq!(classify("2h 2d 2c 4s 4h"), Ok(HandCategory::FullHouse));
//! assert!(matches!(classify("6h 6h 6d 6s 6c"), Err(HandError::DuplicateCard(_))));
//! ```
//!
//! ## CLI
//! Print the sample table, or classify hands given as arguments:
//! ```sh
//! cargo run --bin poker-classify
//! cargo run --bin poker-classify -- "As Ks Qs Js Ts" "2c 2d 7h 9s Kc"
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod report;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
