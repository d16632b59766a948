// logbook - core/contacts.rs
//
// In-memory contact registry and the command handlers that act on it.
// Handlers never fail: bad arity and unknown names come back as a `Reply`.

use crate::core::model::Contact;
use std::fmt;

/// Name -> phone mapping for one bot session.
///
/// Kept as a Vec so `all` lists contacts in the order they were first added.
#[derive(Debug, Clone, Default)]
pub struct ContactRegistry {
    contacts: Vec<Contact>,
}

impl ContactRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Phone for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.contacts
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.phone.as_str())
    }

    /// Insert or overwrite. Overwrites keep the contact's position.
    pub fn upsert(&mut self, name: &str, phone: &str) {
        match self.contacts.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.phone = phone.to_string(),
            None => self.contacts.push(Contact {
                name: name.to_string(),
                phone: phone.to_string(),
            }),
        }
    }

    /// Overwrite an existing contact's phone. Returns false if `name` is absent.
    pub fn update(&mut self, name: &str, phone: &str) -> bool {
        match self.contacts.iter_mut().find(|c| c.name == name) {
            Some(existing) => {
                existing.phone = phone.to_string();
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }
}

/// Which handler produced a usage error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Usage {
    Add,
    Change,
    Phone,
}

/// Outcome of a contact command, rendered by `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Added,
    Updated,
    /// `change` on a name that is not in the registry.
    ChangeNotFound { name: String },
    /// `phone` on a name that is not in the registry.
    PhoneNotFound { name: String },
    Phone { name: String, phone: String },
    /// `all`; empty means the registry had no contacts.
    Listing(Vec<Contact>),
    Usage(Usage),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added => f.write_str("Contact added."),
            Self::Updated => f.write_str("Contact updated."),
            Self::ChangeNotFound { name } => write!(f, "Contact {name} was not found."),
            Self::PhoneNotFound { name } => write!(f, "Error: Contact {name} not found."),
            Self::Phone { name, phone } => write!(f, "Phone number for {name}: {phone}"),
            Self::Listing(contacts) if contacts.is_empty() => f.write_str("No contacts found."),
            Self::Listing(contacts) => {
                for (i, contact) in contacts.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    write!(f, "{}: {}", contact.name, contact.phone)?;
                }
                Ok(())
            }
            Self::Usage(Usage::Add) => f.write_str("Invalid command. Usage: add name phone"),
            Self::Usage(Usage::Change) => {
                f.write_str("Invalid command. Usage: change username phone")
            }
            Self::Usage(Usage::Phone) => f.write_str("Invalid command. Usage: phone username."),
        }
    }
}

/// `add <name> <phone>`: store the contact, replacing any existing phone.
pub fn add_contact(args: &[String], registry: &mut ContactRegistry) -> Reply {
    let [name, phone] = args else {
        return Reply::Usage(Usage::Add);
    };
    registry.upsert(name, phone);
    tracing::debug!(contacts = registry.len(), "Contact stored");
    Reply::Added
}

/// `change <name> <phone>`: replace the phone of an existing contact.
pub fn change_contact(args: &[String], registry: &mut ContactRegistry) -> Reply {
    let [name, phone] = args else {
        return Reply::Usage(Usage::Change);
    };
    if registry.update(name, phone) {
        Reply::Updated
    } else {
        Reply::ChangeNotFound { name: name.clone() }
    }
}

/// `phone <name>`: look up one contact.
pub fn show_phone(args: &[String], registry: &ContactRegistry) -> Reply {
    let [name] = args else {
        return Reply::Usage(Usage::Phone);
    };
    match registry.get(name) {
        Some(phone) => Reply::Phone {
            name: name.clone(),
            phone: phone.to_string(),
        },
        None => Reply::PhoneNotFound { name: name.clone() },
    }
}

/// `all`: every contact in registry order.
pub fn show_all(registry: &ContactRegistry) -> Reply {
    Reply::Listing(registry.iter().cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_lookup_change_list_scenario() {
        let mut registry = ContactRegistry::new();

        let reply = add_contact(&args(&["alice", "555-1234"]), &mut registry);
        assert_eq!(reply.to_string(), "Contact added.");

        let reply = show_phone(&args(&["alice"]), &registry);
        assert!(reply.to_string().contains("555-1234"));

        let reply = change_contact(&args(&["alice", "555-9999"]), &mut registry);
        assert_eq!(reply.to_string(), "Contact updated.");

        let reply = show_phone(&args(&["bob"]), &registry);
        assert_eq!(reply, Reply::PhoneNotFound { name: "bob".to_string() });
        assert_eq!(reply.to_string(), "Error: Contact bob not found.");

        assert_eq!(show_all(&registry).to_string(), "alice: 555-9999");
    }

    #[test]
    fn test_add_overwrites_existing_name_in_place() {
        let mut registry = ContactRegistry::new();
        add_contact(&args(&["alice", "1"]), &mut registry);
        add_contact(&args(&["bob", "2"]), &mut registry);
        add_contact(&args(&["alice", "3"]), &mut registry);
        assert_eq!(registry.len(), 2);
        assert_eq!(show_all(&registry).to_string(), "alice: 3\nbob: 2");
    }

    #[test]
    fn test_add_wrong_arity_does_not_mutate() {
        let mut registry = ContactRegistry::new();
        for bad in [args(&[]), args(&["alice"]), args(&["alice", "1", "extra"])] {
            let reply = add_contact(&bad, &mut registry);
            assert_eq!(reply.to_string(), "Invalid command. Usage: add name phone");
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_change_unknown_name_does_not_mutate() {
        let mut registry = ContactRegistry::new();
        let reply = change_contact(&args(&["carol", "1"]), &mut registry);
        assert_eq!(reply.to_string(), "Contact carol was not found.");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_change_wrong_arity() {
        let mut registry = ContactRegistry::new();
        add_contact(&args(&["alice", "1"]), &mut registry);
        let reply = change_contact(&args(&["alice"]), &mut registry);
        assert_eq!(reply, Reply::Usage(Usage::Change));
        assert_eq!(registry.get("alice"), Some("1"));
    }

    #[test]
    fn test_phone_wrong_arity() {
        let registry = ContactRegistry::new();
        assert_eq!(
            show_phone(&args(&[]), &registry).to_string(),
            "Invalid command. Usage: phone username."
        );
        assert_eq!(
            show_phone(&args(&["a", "b"]), &registry),
            Reply::Usage(Usage::Phone)
        );
    }

    #[test]
    fn test_phone_reply_format() {
        let mut registry = ContactRegistry::new();
        registry.upsert("Alice", "+1 555");
        assert_eq!(
            show_phone(&args(&["Alice"]), &registry).to_string(),
            "Phone number for Alice: +1 555"
        );
        // Names are case-sensitive.
        assert!(registry.get("alice").is_none());
    }

    #[test]
    fn test_all_on_empty_registry() {
        assert_eq!(show_all(&ContactRegistry::new()).to_string(), "No contacts found.");
    }
}
