//! Shopping List
//!
//! 買い物リストの表示層: CLI、設定、ログイン境界チェック、対話シェル。
//! 状態と射影は `shopping_list_core` に委ねる。

pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod items_file;
pub mod render;
pub mod session;
