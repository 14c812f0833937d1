use std::collections::HashMap;

use thiserror::Error;

/// Keeps only the ASCII digits, so "123.456.789-00" and "12345678900" are the same id.
pub fn normalize_national_id(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub full_name: String,
    /// Free text, not validated.
    pub birth_date: String,
    pub national_id: String,
    pub address: String,
}

#[derive(Debug, Clone)]
pub struct UserRegistration {
    pub national_id: String,
    pub full_name: String,
    pub birth_date: String,
    pub address: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("A user with this national id already exists!")]
    AlreadyExists,
    #[error("User not found.")]
    NotFound,
}

#[derive(Debug, Default)]
pub struct UserRegistry {
    users: Vec<User>,
    by_national_id: HashMap<String, usize>,
}

impl UserRegistry {
    pub fn register(&mut self, registration: UserRegistration) -> Result<&User, UserError> {
        let national_id = normalize_national_id(&registration.national_id);
        if self.by_national_id.contains_key(&national_id) {
            return Err(UserError::AlreadyExists);
        }
        let idx = self.users.len();
        self.users.push(User {
            full_name: registration.full_name,
            birth_date: registration.birth_date,
            national_id: national_id.clone(),
            address: registration.address,
        });
        self.by_national_id.insert(national_id, idx);
        Ok(&self.users[idx])
    }

    pub fn find(&self, national_id: &str) -> Result<&User, UserError> {
        self.by_national_id
            .get(&normalize_national_id(national_id))
            .map(|idx| &self.users[*idx])
            .ok_or(UserError::NotFound)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
