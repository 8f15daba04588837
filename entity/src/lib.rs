pub mod comments;
pub mod documents;
pub mod solicitations;
pub mod students;
