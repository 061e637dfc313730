//! Contact records and the controller the window talks to.
//!
//! The window only ever asks for the full list, adds one contact, or deletes
//! one by id. [`ContactBook`] is the in-memory implementation used by the
//! desktop binary; it can be seeded from a JSON array on startup.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

/// Payload of an add request; the controller picks the id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// The operations the main window needs from whatever owns the contacts.
pub trait ContactController {
    /// All contacts in display order
    fn list(&self) -> Result<Vec<Contact>>;

    fn add(&mut self, contact: NewContact) -> Result<Contact>;

    fn delete(&mut self, id: &str) -> Result<()>;
}

/// Insertion-ordered, in-memory contact store.
#[derive(Debug, Default, Clone)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    /// Seed a book from a JSON array of contacts
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read contacts file {}", path.display()))?;
        let contacts: Vec<Contact> = serde_json::from_str(&content)
            .with_context(|| format!("Invalid contacts JSON in {}", path.display()))?;

        let mut seen = HashSet::with_capacity(contacts.len());
        if let Some(duplicate) = contacts.iter().find(|c| !seen.insert(c.id.as_str())) {
            bail!(
                "Duplicate contact id {:?} in {}",
                duplicate.id,
                path.display()
            );
        }
        tracing::info!("Loaded {} contacts from {}", contacts.len(), path.display());
        Ok(Self { contacts })
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    fn next_id(&self) -> String {
        loop {
            let candidate = uuid::Uuid::new_v4().simple().to_string()[..8].to_string();
            if !self.contacts.iter().any(|c| c.id == candidate) {
                return candidate;
            }
        }
    }
}

impl ContactController for ContactBook {
    fn list(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.clone())
    }

    fn add(&mut self, contact: NewContact) -> Result<Contact> {
        if contact.name.trim().is_empty() {
            bail!("A contact needs a name");
        }
        let contact = Contact {
            id: self.next_id(),
            name: contact.name.trim().to_string(),
            email: contact.email.trim().to_string(),
            phone: contact.phone.trim().to_string(),
        };
        tracing::debug!("Adding contact {} ({})", contact.id, contact.name);
        self.contacts.push(contact.clone());
        Ok(contact)
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let Some(index) = self.contacts.iter().position(|c| c.id == id) else {
            bail!("No contact with id {}", id);
        };
        self.contacts.remove(index);
        tracing::debug!("Deleted contact {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_add_assigns_unique_ids_in_order() {
        let mut book = ContactBook::new();
        let a = book
            .add(NewContact {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                phone: "1".into(),
            })
            .unwrap();
        let b = book
            .add(NewContact {
                name: " Grace ".into(),
                ..Default::default()
            })
            .unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(b.name, "Grace");
        let names: Vec<String> = book.list().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Ada".to_string(), "Grace".to_string()]);
    }

    #[test]
    fn test_add_rejects_blank_name() {
        let mut book = ContactBook::new();
        assert!(book.add(NewContact::default()).is_err());
        assert!(book.is_empty());
    }

    #[test]
    fn test_delete_by_id() {
        let mut book = ContactBook::with_contacts(vec![
            Contact::new("42", "A", "a@x", "1"),
            Contact::new("7", "B", "b@x", "2"),
        ]);
        book.delete("42").unwrap();
        assert_eq!(book.list().unwrap(), vec![Contact::new("7", "B", "b@x", "2")]);
        assert!(book.delete("42").is_err());
    }

    #[test]
    fn test_seed_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"1","name":"Ada","email":"ada@example.com","phone":"555"}}]"#
        )
        .unwrap();

        let book = ContactBook::from_json_file(file.path()).unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(book.list().unwrap()[0].name, "Ada");
    }

    #[test]
    fn test_seed_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = ContactBook::from_json_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid contacts JSON"));
    }

    #[test]
    fn test_seed_rejects_duplicate_ids() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"1","name":"Ada","email":"","phone":""}},{{"id":"1","name":"Grace","email":"","phone":""}}]"#
        )
        .unwrap();

        let err = ContactBook::from_json_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Duplicate contact id \"1\""));
    }

    #[test]
    fn test_delete_removes_a_single_record() {
        let mut book = ContactBook::with_contacts(vec![
            Contact::new("1", "Ada", "", ""),
            Contact::new("1", "Grace", "", ""),
        ]);
        book.delete("1").unwrap();
        assert_eq!(book.len(), 1);
    }
}
