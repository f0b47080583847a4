//! Self-service portal strings. The drafts rendered these as fixed sample
//! output; they stay pure string producers here, reported through the
//! activity log panel.

use crate::model::Employee;

pub fn payslip(employee: &Employee, salary: &str) -> String {
    format!(
        "Payslip\nName: {}\nPosition: {}\nSalary: {}",
        employee.name, employee.position, salary
    )
}

pub fn payslip_summary(period: &str, amount: &str) -> String {
    format!("Payslip for {period}: {amount}.")
}

pub fn attendance_report() -> &'static str {
    "Attendance Report: All employees present today."
}

pub fn leave_redirect() -> &'static str {
    "Redirecting to Leave Application..."
}
