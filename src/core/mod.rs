//! Core module - commands, dispatch, errors and configuration

pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;

pub use command::{Command, Field, MenuChoice};
pub use config::Config;
pub use dispatch::{Dispatcher, Outcome};
pub use error::{Access, Container, DeskError};
