//! Content rows served to the portfolio sections.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;
use uuid::Uuid;

/// Which content collection a request or failure concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    About,
    Experience,
    Education,
    Projects,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Projects => "projects",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The About section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct Profile {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub headline: String,
    pub summary: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub links: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct Experience {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub location: Option<String>,
    pub started_on: NaiveDate,
    /// `None` for the current position.
    #[serde(default)]
    pub ended_on: Option<NaiveDate>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct Education {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    #[serde(default)]
    pub field_of_study: Option<String>,
    pub started_on: NaiveDate,
    #[serde(default)]
    pub ended_on: Option<NaiveDate>,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct Project {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub summary: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub started_on: Option<NaiveDate>,
    #[serde(default)]
    pub sort_order: i32,
}

/// Rows listed in display order: `sort_order` ascending, then newest first.
pub trait Ordered {
    fn sort_order(&self) -> i32;
    fn started_on(&self) -> Option<NaiveDate>;
}

impl Ordered for Experience {
    fn sort_order(&self) -> i32 {
        self.sort_order
    }

    fn started_on(&self) -> Option<NaiveDate> {
        Some(self.started_on)
    }
}

impl Ordered for Education {
    fn sort_order(&self) -> i32 {
        self.sort_order
    }

    fn started_on(&self) -> Option<NaiveDate> {
        Some(self.started_on)
    }
}

impl Ordered for Project {
    fn sort_order(&self) -> i32 {
        self.sort_order
    }

    fn started_on(&self) -> Option<NaiveDate> {
        self.started_on
    }
}

/// Sort rows the way the database query orders them.
pub fn sort_rows<T: Ordered>(rows: &mut [T]) {
    rows.sort_by_key(|row| (row.sort_order(), Reverse(row.started_on())));
}
