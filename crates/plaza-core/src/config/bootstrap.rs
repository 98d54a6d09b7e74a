//! Default administrator bootstrap configuration.

use serde::{Deserialize, Serialize};

/// Settings for the reserved default administrator account.
///
/// The account is created at startup when no administrator exists yet.
/// Its username identifies the record that is exempt from deletion and
/// role changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// First name of the default administrator.
    #[serde(default = "default_name")]
    pub name: String,
    /// Surname of the default administrator.
    #[serde(default = "default_surname")]
    pub surname: String,
    /// Reserved username. No account with this username can be deleted
    /// or have its role changed.
    #[serde(default = "default_username")]
    pub username: String,
    /// Email address of the default administrator.
    #[serde(default = "default_email")]
    pub email: String,
    /// Initial plaintext password, hashed before storage.
    #[serde(default = "default_password")]
    pub password: String,
}

fn default_name() -> String {
    "Default".to_string()
}

fn default_surname() -> String {
    "Admin".to_string()
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_email() -> String {
    "admin@plaza.local".to_string()
}

fn default_password() -> String {
    "ChangeMe123".to_string()
}
