pub mod attendance;
pub mod core;
pub mod students;
pub mod subjects;
pub mod view;
