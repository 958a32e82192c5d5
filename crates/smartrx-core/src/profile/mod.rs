//! Professional profile domain module.
//!
//! - `model`: `ProfessionalProfile`
//! - `repository`: `ProfileRepository` trait

mod model;
mod repository;

pub use model::ProfessionalProfile;
pub use repository::ProfileRepository;
