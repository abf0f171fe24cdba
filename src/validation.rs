//! Input validation for a scheduling run.
//!
//! Checks the integrity of the tables fetched from the project board
//! before allocation starts. Detects:
//! - Duplicate person or club IDs
//! - Assignees missing from the roster
//! - Durations that are not positive multiples of the slot width
//! - Unavailability overrides longer than the day
//! - Requests with nobody to attend them
//!
//! All problems are reported at once. Duration problems are per-request
//! (the allocator rejects those requests and carries on); everything
//! else signals an inconsistency between collaborators and aborts the
//! run before any state is mutated.

use std::collections::HashSet;

use crate::models::{RequestStatus, TimeGrid};
use crate::project::ProjectData;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A club lists an assignee that is not on the roster.
    UnknownAssignee,
    /// A club's duration is not a positive multiple of the slot width.
    InvalidDuration,
    /// A person's fixed unavailability covers more slots than the day has.
    OversizedOverride,
    /// A club has no assignees and no organizer is configured.
    NoAssignees,
}

impl ValidationErrorKind {
    /// Whether this problem must abort the run. Duration problems are
    /// handled per-request by the allocator instead.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::InvalidDuration)
    }
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the fetched tables against the grid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_input(
    data: &ProjectData,
    grid: &TimeGrid,
    organizer: Option<&str>,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut person_ids = HashSet::new();
    for person in &data.persons {
        if !person_ids.insert(person.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate person ID: {}", person.id),
            ));
        }
        if person.busy_prefix > grid.len() {
            errors.push(ValidationError::new(
                ValidationErrorKind::OversizedOverride,
                format!(
                    "person '{}' is blocked for {} slots but the day has {}",
                    person.id,
                    person.busy_prefix,
                    grid.len()
                ),
            ));
        }
    }

    if let Some(organizer) = organizer {
        if !person_ids.contains(organizer) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownAssignee,
                format!("organizer '{organizer}' is not on the roster"),
            ));
        }
    }

    let mut club_ids = HashSet::new();
    for club in &data.clubs {
        if !club_ids.insert(club.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate club ID: {}", club.id),
            ));
        }

        for assignee in &club.assignees {
            if !person_ids.contains(assignee.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownAssignee,
                    format!("club '{}' lists unknown assignee '{assignee}'", club.id),
                ));
            }
        }

        // Parked clubs are never processed; only their IDs matter
        if club.status == RequestStatus::ClosedParked {
            continue;
        }

        if club.assignees.is_empty() && organizer.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoAssignees,
                format!("club '{}' has no assignees", club.id),
            ));
        }

        if club.span_length(grid.slot_width_min()).is_err() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDuration,
                format!(
                    "club '{}' has duration {} min, not a positive multiple of {} min",
                    club.id,
                    club.duration_min,
                    grid.slot_width_min()
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Person, Request};

    fn grid() -> TimeGrid {
        TimeGrid::from_slots(["09:00", "09:15", "09:30", "09:45"], 15).unwrap()
    }

    fn sample_data() -> ProjectData {
        ProjectData {
            persons: vec![Person::new("ada"), Person::new("grace")],
            timeslots: vec!["09:00".into(), "09:15".into(), "09:30".into(), "09:45".into()],
            clubs: vec![
                Request::new("c1", "Journal Club")
                    .with_duration(30)
                    .with_assignee("ada"),
                Request::new("c2", "Seminar")
                    .with_duration(15)
                    .with_assignee("ada")
                    .with_assignee("grace"),
            ],
        }
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_data(), &grid(), Some("ada")).is_ok());
        assert!(validate_input(&sample_data(), &grid(), None).is_ok());
    }

    #[test]
    fn test_duplicate_person_id() {
        let mut data = sample_data();
        data.persons.push(Person::new("ada"));

        let errors = validate_input(&data, &grid(), None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("person")));
    }

    #[test]
    fn test_duplicate_club_id() {
        let mut data = sample_data();
        data.clubs.push(Request::new("c1", "Copy").with_assignee("ada"));

        let errors = validate_input(&data, &grid(), None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("club")));
    }

    #[test]
    fn test_unknown_assignee() {
        let mut data = sample_data();
        data.clubs
            .push(Request::new("c3", "Ghost Meeting").with_assignee("nobody"));

        let errors = validate_input(&data, &grid(), None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownAssignee));
    }

    #[test]
    fn test_unknown_organizer() {
        let errors = validate_input(&sample_data(), &grid(), Some("nobody")).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownAssignee
                && e.message.contains("organizer")));
    }

    #[test]
    fn test_invalid_duration_is_not_fatal() {
        let mut data = sample_data();
        data.clubs
            .push(Request::new("c3", "Odd").with_duration(40).with_assignee("ada"));

        let errors = validate_input(&data, &grid(), None).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidDuration);
        assert!(!errors[0].kind.is_fatal());
    }

    #[test]
    fn test_oversized_override() {
        let mut data = sample_data();
        data.persons.push(Person::new("mary").with_busy_prefix(5));

        let errors = validate_input(&data, &grid(), None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::OversizedOverride));
    }

    #[test]
    fn test_no_assignees_without_organizer() {
        let mut data = sample_data();
        data.clubs.push(Request::new("c3", "Empty").with_duration(15));

        // With an organizer the request still has an attendee
        assert!(validate_input(&data, &grid(), Some("ada")).is_ok());

        let errors = validate_input(&data, &grid(), None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NoAssignees));
    }

    #[test]
    fn test_parked_clubs_skip_processing_checks() {
        let mut data = sample_data();
        // Parked club with no assignees and a broken duration: ignored
        data.clubs.push(
            Request::new("old", "Parked")
                .with_duration(40)
                .with_status(RequestStatus::ClosedParked),
        );
        assert!(validate_input(&data, &grid(), None).is_ok());

        // Duplicate IDs are still caught on parked clubs
        data.clubs
            .push(Request::new("old", "Copy").with_status(RequestStatus::ClosedParked));
        let errors = validate_input(&data, &grid(), None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_multiple_errors_reported_together() {
        let mut data = sample_data();
        data.persons.push(Person::new("ada"));
        data.clubs
            .push(Request::new("c3", "Odd").with_duration(40).with_assignee("ghost"));

        let errors = validate_input(&data, &grid(), None).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
