pub mod alexa;
pub mod catalog;
pub mod config;
pub mod error;
pub mod search;
pub mod session;
pub mod skill;

pub use catalog::{Catalog, CatalogEntry};
pub use error::{CatalogError, SessionError, SkillError};
pub use skill::FoodSkill;
