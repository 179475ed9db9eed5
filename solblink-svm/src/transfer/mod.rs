//! The `transfer-sol` action.
//!
//! A wallet fetches the action metadata with `GET`, then `POST`s its account
//! to one of the linked hrefs and receives an unsigned transaction moving the
//! requested amount of SOL from that account to the destination.
//!
//! - [`server`] renders the metadata served on `GET`
//! - [`builder`] assembles the unsigned transaction served on `POST`

pub mod builder;
pub mod error;
pub mod server;
pub mod types;

pub use builder::{UnsignedTransfer, build_transfer_transaction, create_post_response};
pub use error::{TransactionToB64Error, TransferError};
pub use server::{DEFAULT_DESTINATION, TRANSFER_SOL_PATH, TransferSolAction};
pub use types::{LAMPORTS_PER_SOL, SOL_DECIMALS, UnsignedTransaction};
