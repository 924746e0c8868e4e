// src/units/mod.rs
mod lister;
mod models;

pub use lister::{ListError, UnitLister};
pub use models::{AppInfo, SkipReason, Unit, UnitAddress, STARTED_STATUS, WEB_PROCESS};
