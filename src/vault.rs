// src/vault.rs
use chrono::{DateTime, TimeZone, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{CardEntry, PasswordEntry};

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("{0}")]
    Validation(String),

    #[error("no entry with id {0}")]
    EntryNotFound(Uuid),
}

pub type Result<T> = std::result::Result<T, VaultError>;

/// In-memory store for password and card entries. Nothing is persisted;
/// the vault lives for the duration of the process.
#[derive(Debug, Default)]
pub struct Vault {
    passwords: Vec<PasswordEntry>,
    cards: Vec<CardEntry>,
}

impl Vault {
    pub fn new() -> Self {
        Self::default()
    }

    /// A vault pre-loaded with demonstration records, so lists are not
    /// empty on first run.
    pub fn with_mock_data() -> Self {
        let passwords = vec![
            PasswordEntry {
                id: Uuid::new_v4(),
                website: "https://example.com".to_string(),
                username: "john.doe@example.com".to_string(),
                password: "P@ssw0rd123!".to_string(),
                last_updated: mock_date(2023, 10, 15),
            },
            PasswordEntry {
                id: Uuid::new_v4(),
                website: "https://github.com".to_string(),
                username: "johndoe".to_string(),
                password: "GitHubSecurePass!2023".to_string(),
                last_updated: mock_date(2023, 11, 20),
            },
            PasswordEntry {
                id: Uuid::new_v4(),
                website: "https://netflix.com".to_string(),
                username: "john.entertainment".to_string(),
                password: "NetflixAndChill2023!".to_string(),
                last_updated: mock_date(2023, 12, 5),
            },
        ];

        let cards = vec![
            CardEntry {
                id: Uuid::new_v4(),
                card_name: "Main Credit Card".to_string(),
                card_number: "4111111111111111".to_string(),
                expiry_date: "12/25".to_string(),
                cvv: "123".to_string(),
            },
            CardEntry {
                id: Uuid::new_v4(),
                card_name: "Business Card".to_string(),
                card_number: "5555555555554444".to_string(),
                expiry_date: "10/24".to_string(),
                cvv: "321".to_string(),
            },
        ];

        Self { passwords, cards }
    }

    pub fn add_password(&mut self, website: &str, username: &str, password: &str) -> Result<Uuid> {
        validate_password_entry(website, username, password)?;

        let id = Uuid::new_v4();
        self.passwords.push(PasswordEntry {
            id,
            website: website.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            last_updated: Utc::now(),
        });

        log::info!("stored password entry for {}", website);
        Ok(id)
    }

    pub fn passwords(&self) -> &[PasswordEntry] {
        &self.passwords
    }

    pub fn get_password(&self, id: Uuid) -> Result<&PasswordEntry> {
        self.passwords
            .iter()
            .find(|entry| entry.id == id)
            .ok_or(VaultError::EntryNotFound(id))
    }

    pub fn delete_password(&mut self, id: Uuid) -> Result<()> {
        let before = self.passwords.len();
        self.passwords.retain(|entry| entry.id != id);
        if self.passwords.len() == before {
            return Err(VaultError::EntryNotFound(id));
        }
        log::info!("deleted password entry {}", id);
        Ok(())
    }

    pub fn add_card(
        &mut self,
        card_name: &str,
        card_number: &str,
        expiry_date: &str,
        cvv: &str,
    ) -> Result<Uuid> {
        validate_card_entry(card_name, card_number, expiry_date, cvv)?;

        let id = Uuid::new_v4();
        self.cards.push(CardEntry {
            id,
            card_name: card_name.to_string(),
            card_number: card_number.to_string(),
            expiry_date: expiry_date.to_string(),
            cvv: cvv.to_string(),
        });

        log::info!("stored card entry {}", card_name);
        Ok(id)
    }

    pub fn cards(&self) -> &[CardEntry] {
        &self.cards
    }

    pub fn get_card(&self, id: Uuid) -> Result<&CardEntry> {
        self.cards
            .iter()
            .find(|card| card.id == id)
            .ok_or(VaultError::EntryNotFound(id))
    }

    pub fn delete_card(&mut self, id: Uuid) -> Result<()> {
        let before = self.cards.len();
        self.cards.retain(|card| card.id != id);
        if self.cards.len() == before {
            return Err(VaultError::EntryNotFound(id));
        }
        log::info!("deleted card entry {}", id);
        Ok(())
    }
}

fn mock_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

fn validate_password_entry(website: &str, username: &str, password: &str) -> Result<()> {
    if website.trim().is_empty() {
        return Err(VaultError::Validation("Website is required.".to_string()));
    }
    if username.trim().is_empty() {
        return Err(VaultError::Validation("Username is required.".to_string()));
    }
    if password.chars().count() < 8 {
        return Err(VaultError::Validation(
            "Password must be at least 8 characters.".to_string(),
        ));
    }
    Ok(())
}

fn validate_card_entry(card_name: &str, card_number: &str, expiry_date: &str, cvv: &str) -> Result<()> {
    if card_name.trim().chars().count() < 2 {
        return Err(VaultError::Validation(
            "Card name must be at least 2 characters.".to_string(),
        ));
    }
    if card_number.len() != 16 || !card_number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VaultError::Validation(
            "Card number must be 16 digits.".to_string(),
        ));
    }
    if !is_valid_expiry(expiry_date) {
        return Err(VaultError::Validation(
            "Expiry date must be in MM/YY format.".to_string(),
        ));
    }
    if !(cvv.len() == 3 || cvv.len() == 4) || !cvv.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VaultError::Validation(
            "CVV must be 3 or 4 digits.".to_string(),
        ));
    }
    Ok(())
}

fn is_valid_expiry(expiry_date: &str) -> bool {
    let Some((month, year)) = expiry_date.split_once('/') else {
        return false;
    };
    if month.len() != 2 || year.len() != 2 {
        return false;
    }
    if !month.bytes().all(|b| b.is_ascii_digit()) || !year.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    matches!(month.parse::<u8>(), Ok(1..=12))
}

/// Group a card number into blocks of four: `4111 1111 1111 1111`.
pub fn format_card_number(number: &str) -> String {
    number
        .as_bytes()
        .chunks(4)
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Hide all but the last four digits: `•••• •••• •••• 1111`.
pub fn mask_card_number(number: &str) -> String {
    let tail_start = number.len().saturating_sub(4);
    format!("{}{}", "•••• ".repeat(3), &number[tail_start..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_list_delete_password_round_trip() {
        let mut vault = Vault::new();
        let id = vault
            .add_password("https://example.com", "alice", "correct-horse")
            .unwrap();

        assert_eq!(vault.passwords().len(), 1);
        assert_eq!(vault.get_password(id).unwrap().username, "alice");

        vault.delete_password(id).unwrap();
        assert!(vault.passwords().is_empty());
    }

    #[test]
    fn delete_unknown_id_errors() {
        let mut vault = Vault::new();
        let id = Uuid::new_v4();
        assert!(matches!(
            vault.delete_password(id),
            Err(VaultError::EntryNotFound(e)) if e == id
        ));
        assert!(matches!(
            vault.delete_card(id),
            Err(VaultError::EntryNotFound(_))
        ));
    }

    #[test]
    fn password_entry_validation() {
        let mut vault = Vault::new();
        assert!(vault.add_password("", "alice", "longenough").is_err());
        assert!(vault.add_password("https://a.com", "", "longenough").is_err());
        assert!(vault.add_password("https://a.com", "alice", "short").is_err());
    }

    #[test]
    fn card_entry_validation() {
        let mut vault = Vault::new();
        // 15 digits
        assert!(vault.add_card("Card", "411111111111111", "12/25", "123").is_err());
        // non-digit in number
        assert!(vault.add_card("Card", "4111x11111111111", "12/25", "123").is_err());
        // bad month
        assert!(vault.add_card("Card", "4111111111111111", "13/25", "123").is_err());
        // missing slash
        assert!(vault.add_card("Card", "4111111111111111", "1225", "123").is_err());
        // 2-digit cvv
        assert!(vault.add_card("Card", "4111111111111111", "12/25", "12").is_err());
        // 1-char name
        assert!(vault.add_card("C", "4111111111111111", "12/25", "123").is_err());

        assert!(vault.add_card("Card", "4111111111111111", "12/25", "1234").is_ok());
    }

    #[test]
    fn mock_data_is_loaded() {
        let vault = Vault::with_mock_data();
        assert_eq!(vault.passwords().len(), 3);
        assert_eq!(vault.cards().len(), 2);
    }

    #[test]
    fn card_number_display_helpers() {
        assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
        assert_eq!(mask_card_number("4111111111111111"), "•••• •••• •••• 1111");
        assert_eq!(mask_card_number("5555555555554444"), "•••• •••• •••• 4444");
    }
}
