//! # dictowl CLI Library
//!
//! データディクショナリから OWL 公理を生成するコマンドラインインターフェース

pub mod commands;

pub use commands::*;
