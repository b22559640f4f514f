//! Stateless input predicates.
//!
//! Every entity mutation passes its inputs through these before touching
//! state. None of them allocate or log.

/// Longest accepted course name or content item, in bytes.
pub const MAX_STRING_BYTES: usize = 100;

pub const MIN_GRADE: i32 = 0;
pub const MAX_GRADE: i32 = 100;

/// Checks the rough shape of an e-mail address.
///
/// The address must contain an `@` that isn't the first character, the last
/// `.` must come after that `@`, and the `.` can't be the final character.
pub fn is_valid_email(email: &str) -> bool {
    let (at, dot) = match (email.find('@'), email.rfind('.')) {
        (Some(at), Some(dot)) => (at, dot),
        _ => return false,
    };

    at > 0 && at < dot && dot < email.len() - 1
}

pub fn is_valid_grade(grade: i32) -> bool {
    (MIN_GRADE..=MAX_GRADE).contains(&grade)
}

pub fn is_valid_index(index: usize, size: usize) -> bool {
    index < size
}

/// Non-empty and at most [`MAX_STRING_BYTES`] bytes long.
pub fn is_valid_string(s: &str) -> bool {
    !s.is_empty() && s.len() <= MAX_STRING_BYTES
}
