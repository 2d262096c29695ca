//! # Shelf Core
//!
//! Core library for the Shelf media catalog: the ordered [`catalog::Catalog`]
//! of books, movies and CDs, and the [`session::Session`] controller that an
//! input surface drives.
//!
//! ## Overview
//!
//! - **Catalog**: insertion-ordered items, indexed removal, title listing
//! - **Session**: staged ratings, songs and checked-out flag for the next
//!   item, committed together with a form
//! - **Rows**: display-ready summaries of every item
//!
//! ## Examples
//!
//! ```
//! use shelf_core::session::Session;
//! use shelf_model::ItemForm;
//!
//! let mut session = Session::with_seed(1);
//! session.stage_rating(4).unwrap();
//! session.commit(ItemForm::book("Dune", "Frank Herbert", 412)).unwrap();
//!
//! assert_eq!(session.list_items(), "Dune");
//! assert_eq!(
//!     session.rows()[0].to_string(),
//!     "Dune (Book) - Checked Out: false - Average Rating: 4"
//! );
//! ```
#![allow(missing_docs)]

pub mod catalog;
pub mod error;
pub mod row;
pub mod session;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use row::CatalogRow;
pub use session::{Draft, Session};

pub use shelf_contracts::prelude::*;
pub use shelf_model::prelude::*;
