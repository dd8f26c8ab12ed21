//! Repository traits defining the storage capability set.

mod student_repository;

pub use student_repository::{StudentRepository, UpdateOutcome};

#[cfg(test)]
pub use student_repository::MockStudentRepository;
