use chrono::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, sqlx::FromRow, Serialize, Clone)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, sqlx::FromRow, Serialize, Clone)]
pub struct Note {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Directory entry served by `/api/employees`. The drafts shipped a fixed
/// sample list; nothing here is persisted.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: u32,
    pub name: &'static str,
    pub position: &'static str,
}

pub fn sample_employees() -> Vec<Employee> {
    vec![
        Employee {
            id: 1,
            name: "John Doe",
            position: "Software Engineer",
        },
        Employee {
            id: 2,
            name: "Jane Smith",
            position: "HR Manager",
        },
        Employee {
            id: 3,
            name: "Alex Johnson",
            position: "Accountant",
        },
    ]
}
