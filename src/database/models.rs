/*!
 * Database entity models.
 *
 * These structures map directly to database tables and provide
 * type-safe access to persisted data.
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// A row of the `prospect` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProspectRecord {
    /// Database ID (`cod_prospect`)
    pub id: i64,
    /// Full name (`nome`)
    pub name: String,
    /// Email address
    pub email: String,
    /// Mobile phone number (`celular`)
    pub phone: String,
    /// Facebook profile address
    pub facebook: String,
    /// WhatsApp number
    pub whatsapp: String,
}

impl ProspectRecord {
    /// Create a new prospect record (without database ID)
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        facebook: impl Into<String>,
        whatsapp: impl Into<String>,
    ) -> Self {
        Self {
            id: 0, // Will be assigned by database
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            facebook: facebook.into(),
            whatsapp: whatsapp.into(),
        }
    }

    /// Return the record targeting the given database ID
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Check if the record carries a database-assigned ID
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }
}

impl fmt::Display for ProspectRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} <{}> phone: {}, facebook: {}, whatsapp: {}",
            self.id, self.name, self.email, self.phone, self.facebook, self.whatsapp
        )
    }
}
