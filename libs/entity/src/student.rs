#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Student {
    pub id: i32,
    pub name: String,
    /// Argon2 PHC string, never the plaintext.
    pub password_hash: String,
}
