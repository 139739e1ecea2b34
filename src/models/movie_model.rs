use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{CinemaError, Violation};

/// A scheduled showing with a fixed seat capacity.
///
/// `free_spaces` is the only business-mutable field and always satisfies
/// `0 <= free_spaces <= spaces`; reservation is the sole operation that
/// lowers it and nothing raises it back.
#[derive(Debug, Serialize, Clone)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub date: NaiveDateTime,
    pub spaces: u32,
    #[serde(rename = "freeSpaces")]
    pub free_spaces: u32,
}

impl Movie {
    pub fn new(id: u64, title: String, date: NaiveDateTime, spaces: u32) -> Self {
        Self {
            id,
            title,
            date,
            spaces,
            free_spaces: spaces,
        }
    }

    /// Consumes `seats` free seats, or fails without touching the counter
    /// when fewer are free. Reserving zero seats succeeds as a no-op.
    pub fn reserve(&mut self, seats: u32) -> Result<(), CinemaError> {
        if seats > self.free_spaces {
            return Err(CinemaError::InsufficientCapacity {
                requested: seats,
                available: self.free_spaces,
            });
        }
        self.free_spaces -= seats;
        Ok(())
    }

    /// Moves the showing to a new start time. Past dates are not rejected.
    pub fn reschedule(&mut self, date: NaiveDateTime) {
        self.date = date;
    }
}

/// Validated command to create a showing.
#[derive(Debug)]
pub struct CreateMovieCommand {
    pub title: String,
    pub date: NaiveDateTime,
    pub spaces: u32,
}

/// Raw body of `POST /api/cinema`. Fields are optional so that missing
/// values surface as violations instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateMovieRequest {
    pub title: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub spaces: Option<i64>,
}

impl CreateMovieRequest {
    pub fn validate(self) -> Result<CreateMovieCommand, Vec<Violation>> {
        let mut violations = Vec::new();

        let title = match self.title {
            Some(t) if !t.trim().is_empty() => Some(t),
            other => {
                violations.push(Violation::new("title", "must not be blank", json!(other)));
                None
            }
        };
        let date = match self.date {
            Some(d) => Some(d),
            None => {
                violations.push(Violation::new("date", "must not be null", Value::Null));
                None
            }
        };
        let spaces = match self.spaces.map(u32::try_from) {
            Some(Ok(s)) if s > 0 => Some(s),
            _ => {
                violations.push(Violation::new(
                    "spaces",
                    "must be positive",
                    json!(self.spaces),
                ));
                None
            }
        };

        match (title, date, spaces) {
            (Some(title), Some(date), Some(spaces)) => {
                Ok(CreateMovieCommand { title, date, spaces })
            }
            _ => Err(violations),
        }
    }
}

/// Raw body of `POST /api/cinema/{id}/reserve`.
#[derive(Debug, Deserialize)]
pub struct ReserveSeatsRequest {
    pub reserve: Option<i64>,
}

impl ReserveSeatsRequest {
    pub fn validate(self) -> Result<u32, Vec<Violation>> {
        match self.reserve.map(u32::try_from) {
            Some(Ok(seats)) => Ok(seats),
            _ => Err(vec![Violation::new(
                "reserve",
                "must be greater than or equal to 0",
                json!(self.reserve),
            )]),
        }
    }
}

/// Raw body of `PUT /api/cinema/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateDateRequest {
    pub date: Option<NaiveDateTime>,
}

impl UpdateDateRequest {
    pub fn validate(self) -> Result<NaiveDateTime, Vec<Violation>> {
        self.date
            .ok_or_else(|| vec![Violation::new("date", "must not be null", Value::Null)])
    }
}
