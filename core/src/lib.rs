//! Shopping List Core
//!
//! 買い物リストの状態（ItemStore）と表示射影（project）。
//! I/Oもログも持たず、呼び出し側から逐次的に使われる。

pub mod collation;
pub mod error;
pub mod price;
pub mod projector;
pub mod sample;
pub mod store;
pub mod types;

pub use collation::compare_names;
pub use error::{Error, Result, ValidationError};
pub use price::Price;
pub use projector::{project, ViewState};
pub use store::ItemStore;
pub use types::{FilterField, Item, ItemId, Section, SectionKind};
