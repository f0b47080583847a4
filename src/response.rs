use serde::Serialize;

use crate::model::Employee;

#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// 201 envelope for both record shapes.
#[derive(Serialize, Debug)]
pub struct Saved<T> {
    pub message: &'static str,
    pub record: T,
}

#[derive(Serialize, Debug)]
pub struct Listing<T> {
    pub records: Vec<T>,
}

#[derive(Serialize, Debug)]
pub struct ServiceStatus {
    pub server: &'static str,
    pub database: &'static str,
    pub status: &'static str,
}

#[derive(Serialize, Debug)]
pub struct DbStatus {
    pub message: &'static str,
}

#[derive(Serialize, Debug)]
pub struct EmployeeList {
    pub employees: Vec<Employee>,
}

#[derive(Serialize, Debug)]
pub struct UploadResponse {
    pub filename: String,
}
