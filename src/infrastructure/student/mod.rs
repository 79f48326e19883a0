//! Student infrastructure module
//!
//! Repository backends and the service that applies the roster's business
//! rules in front of them.

mod factory;
mod in_memory;
mod postgres_repository;
mod service;

pub use factory::create_student_repository;
pub use in_memory::InMemoryStudentRepository;
pub use postgres_repository::PostgresStudentRepository;
pub use service::StudentService;
