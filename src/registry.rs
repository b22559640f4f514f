//! The authoritative in-memory store.
//!
//! A [`Registry`] owns every [`Course`] and [`User`] for the lifetime of the
//! session that built it. Nothing is persisted. Course positions (as shown by
//! [`Registry::list_courses`]) are re-checked on every index-addressed call,
//! so a stale position fails with an index error instead of touching the
//! wrong course.

use crate::data::course::db::CourseSummary;
use crate::data::course::{Course, CourseId};
use crate::data::seed::Seed;
use crate::data::user::db::{UserRegistryExt, UserSignupData};
use crate::data::user::User;
use crate::error::RegistryError;
use crate::validation;

#[derive(Debug, Default)]
pub struct Registry {
    pub(crate) courses: Vec<Course>,
    pub(crate) users: Vec<User>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Builds a registry from seed data. Any seed entry that fails
    /// validation aborts the whole bootstrap.
    pub fn bootstrap(seed: &Seed) -> Result<Registry, RegistryError> {
        let mut registry = Registry::new();

        for user in &seed.users {
            registry.create_user(UserSignupData::new(
                &user.email,
                &user.username,
                &user.password,
                user.role,
            ))?;
        }

        for seed_course in &seed.courses {
            let mut course = Course::new(&seed_course.name, &seed_course.teacher_email)?;
            for content in &seed_course.contents {
                course.add_content(content)?;
            }
            registry.add_course(course);
        }

        tracing::info!(
            "Registry bootstrapped with {} users and {} courses",
            registry.users.len(),
            registry.courses.len()
        );
        Ok(registry)
    }

    /// Appends a course. Duplicate names or teachers are not checked here.
    pub fn add_course(&mut self, course: Course) -> CourseId {
        let id = course.id();
        tracing::debug!("Adding course '{}' ({})", course.name(), id);
        self.courses.push(course);
        id
    }

    pub fn get_course(&self, index: usize) -> Result<&Course, RegistryError> {
        if !validation::is_valid_index(index, self.courses.len()) {
            return Err(RegistryError::course_index(index, self.courses.len()));
        }
        Ok(&self.courses[index])
    }

    pub fn get_course_mut(&mut self, index: usize) -> Result<&mut Course, RegistryError> {
        if !validation::is_valid_index(index, self.courses.len()) {
            return Err(RegistryError::course_index(index, self.courses.len()));
        }
        Ok(&mut self.courses[index])
    }

    /// Removes the course at `index`, shifting later courses down.
    pub fn remove_course(&mut self, index: usize) -> Result<Course, RegistryError> {
        if !validation::is_valid_index(index, self.courses.len()) {
            return Err(RegistryError::course_index(index, self.courses.len()));
        }

        let removed = self.courses.remove(index);
        tracing::debug!("Removed course '{}' ({})", removed.name(), removed.id());
        Ok(removed)
    }

    pub fn course(&self, id: CourseId) -> Result<&Course, RegistryError> {
        self.courses
            .iter()
            .find(|it| it.id() == id)
            .ok_or(RegistryError::CourseNotFound(id.into()))
    }

    pub fn course_mut(&mut self, id: CourseId) -> Result<&mut Course, RegistryError> {
        self.courses
            .iter_mut()
            .find(|it| it.id() == id)
            .ok_or(RegistryError::CourseNotFound(id.into()))
    }

    /// Snapshot of all courses in display order.
    pub fn list_courses(&self) -> Vec<CourseSummary> {
        self.list_courses_where(|_| true)
    }

    /// Snapshot of the courses matching `filter`, indexed from zero within
    /// the filtered list.
    pub fn list_courses_where<F: Fn(&Course) -> bool>(&self, filter: F) -> Vec<CourseSummary> {
        self.courses
            .iter()
            .filter(|it| filter(*it))
            .enumerate()
            .map(|(index, course)| CourseSummary::new(index, course))
            .collect()
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
