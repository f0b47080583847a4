use serde::Deserialize;

// Required fields are `Option` so that absence reaches the validator and
// comes back as a 400 instead of a deserialization rejection.

#[derive(Debug, Deserialize)]
pub struct CreateRecord {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SaveNote {
    pub text: Option<String>,
}
