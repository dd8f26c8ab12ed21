//! HTTP request handlers.

mod students;

pub use students::{
    create_student_handler, delete_student_handler, get_student_handler, list_students_handler,
    update_student_handler,
};
