// src/cli/menu.rs
use std::error::Error;
use std::thread;
use std::time::Duration;

use console::style;
use inquire::{Confirm, Password, PasswordDisplayMode, Select, Text};
use uuid::Uuid;

use crate::cli::handlers::strength_badge;
use crate::config::Config;
use crate::generator;
use crate::models::GenerationOptions;
use crate::strength;
use crate::vault::{self, Vault};

pub fn run_menu(vault: &mut Vault, config: &Config) -> Result<(), Box<dyn Error>> {
    println!("🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║         🔐 PASSGUARD MANAGER         ║");
    println!("╚══════════════════════════════════════╝");

    loop {
        let options = vec![
            "Generate password",
            "Analyze a password",
            "Add password",
            "List passwords",
            "Delete password",
            "Add card",
            "List cards",
            "Delete card",
            "Exit",
        ];

        let choice = Select::new("What would you like to do?", options).prompt()?;

        match choice {
            "Generate password" => generate_password_menu(config)?,
            "Analyze a password" => analyze_password_menu()?,
            "Add password" => add_password_menu(vault, config)?,
            "List passwords" => list_passwords_menu(vault)?,
            "Delete password" => delete_password_menu(vault)?,
            "Add card" => add_card_menu(vault)?,
            "List cards" => list_cards_menu(vault)?,
            "Delete card" => delete_card_menu(vault)?,
            _ => {
                println!("👋 Goodbye!");
                return Ok(());
            }
        }
    }
}

fn generate_password_menu(config: &Config) -> Result<(), Box<dyn Error>> {
    let options = prompt_generation_options(config)?;

    loop {
        let password = match generator::generate(&options) {
            Ok(password) => password,
            Err(e) => {
                println!("❌ {}", e);
                return Ok(());
            }
        };

        let strength = strength::estimate(&password);
        println!("Generated password: {}  {}", password, strength_badge(&strength));

        let again = Confirm::new("Generate another with the same options?")
            .with_default(false)
            .prompt()?;
        if !again {
            return Ok(());
        }
    }
}

fn analyze_password_menu() -> Result<(), Box<dyn Error>> {
    let password = Password::new("Password to analyze:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()?;

    let strength = strength::estimate(&password);
    println!("Score: {}/5", strength.score);
    println!("Strength: {}", strength_badge(&strength));
    Ok(())
}

fn add_password_menu(vault: &mut Vault, config: &Config) -> Result<(), Box<dyn Error>> {
    let website = Text::new("Website:").prompt()?;
    let username = Text::new("Username / Email:").prompt()?;

    let generate = Confirm::new("Generate a secure password?")
        .with_default(true)
        .prompt()?;

    let password = if generate {
        prompt_generated_password(config)?
    } else {
        Password::new("Enter the password:")
            .with_display_mode(PasswordDisplayMode::Hidden)
            .prompt()?
    };

    println!("Saving...");
    thread::sleep(Duration::from_secs(1));

    match vault.add_password(&website, &username, &password) {
        Ok(_) => {
            println!("✅ Password Added");
            println!("Your password has been successfully saved.");
        }
        Err(e) => println!("❌ {}", e),
    }
    Ok(())
}

fn prompt_generated_password(config: &Config) -> Result<String, Box<dyn Error>> {
    loop {
        let options = prompt_generation_options(config)?;

        let password = match generator::generate(&options) {
            Ok(password) => password,
            Err(e) => {
                println!("❌ {}", e);
                continue;
            }
        };

        let strength = strength::estimate(&password);
        println!("Generated password: {}  {}", password, strength_badge(&strength));

        let use_generated = Confirm::new("Use this password?")
            .with_default(true)
            .prompt()?;
        if use_generated {
            return Ok(password);
        }
    }
}

fn prompt_generation_options(config: &Config) -> Result<GenerationOptions, Box<dyn Error>> {
    let length = loop {
        let input = Text::new("Password length (8-32):")
            .with_default(&config.default_password_length.to_string())
            .prompt()?;
        match input.trim().parse::<usize>() {
            Ok(length) => break length,
            Err(_) => println!("Please enter a number."),
        }
    };

    let include_numbers = Confirm::new("Include numbers?")
        .with_default(config.default_include_numbers)
        .prompt()?;
    let include_symbols = Confirm::new("Include symbols?")
        .with_default(config.default_include_symbols)
        .prompt()?;

    Ok(GenerationOptions {
        length,
        include_numbers,
        include_symbols,
    })
}

fn list_passwords_menu(vault: &Vault) -> Result<(), Box<dyn Error>> {
    if vault.passwords().is_empty() {
        println!("No passwords saved yet");
        println!("Add your first password to see it here.");
        return Ok(());
    }

    for entry in vault.passwords() {
        let strength = strength::estimate(&entry.password);
        println!(
            "• {}  {}  ••••••••  {}  (updated {})",
            style(&entry.website).bold(),
            entry.username,
            strength_badge(&strength),
            entry.last_updated.format("%Y-%m-%d"),
        );
    }

    let reveal = Confirm::new("Reveal one of them?")
        .with_default(false)
        .prompt()?;
    if reveal {
        if let Some(id) = select_password_id(vault)? {
            let entry = vault.get_password(id)?;
            println!("Password for {}: {}", entry.website, entry.password);
        }
    }
    Ok(())
}

fn delete_password_menu(vault: &mut Vault) -> Result<(), Box<dyn Error>> {
    let Some(id) = select_password_id(vault)? else {
        return Ok(());
    };
    vault.delete_password(id)?;
    println!("Password deleted successfully");
    Ok(())
}

fn select_password_id(vault: &Vault) -> Result<Option<Uuid>, Box<dyn Error>> {
    if vault.passwords().is_empty() {
        println!("No passwords saved yet");
        return Ok(None);
    }

    let labels: Vec<String> = vault
        .passwords()
        .iter()
        .map(|entry| format!("{} ({})", entry.website, entry.username))
        .collect();

    let selection = Select::new("Which entry?", labels).raw_prompt()?;
    Ok(vault.passwords().get(selection.index).map(|entry| entry.id))
}

fn add_card_menu(vault: &mut Vault) -> Result<(), Box<dyn Error>> {
    let name = Text::new("Card name:").prompt()?;
    let number = Text::new("Card number (16 digits):").prompt()?;
    let expiry = Text::new("Expiry date (MM/YY):").prompt()?;
    let cvv = Text::new("CVV:").prompt()?;

    println!("Saving...");
    thread::sleep(Duration::from_secs(1));

    match vault.add_card(&name, &number, &expiry, &cvv) {
        Ok(_) => {
            println!("✅ Card Added");
            println!("Your card has been successfully saved.");
        }
        Err(e) => println!("❌ {}", e),
    }
    Ok(())
}

fn list_cards_menu(vault: &Vault) -> Result<(), Box<dyn Error>> {
    if vault.cards().is_empty() {
        println!("No cards saved yet");
        println!("Add your first card to see it here.");
        return Ok(());
    }

    for card in vault.cards() {
        println!(
            "• {}  {}  Expires {}  CVV •••",
            style(&card.card_name).bold(),
            vault::mask_card_number(&card.card_number),
            card.expiry_date,
        );
    }

    let reveal = Confirm::new("Show full details for one of them?")
        .with_default(false)
        .prompt()?;
    if reveal {
        if let Some(id) = select_card_id(vault)? {
            let card = vault.get_card(id)?;
            println!("Number: {}", vault::format_card_number(&card.card_number));
            println!("CVV:    {}", card.cvv);
        }
    }
    Ok(())
}

fn delete_card_menu(vault: &mut Vault) -> Result<(), Box<dyn Error>> {
    let Some(id) = select_card_id(vault)? else {
        return Ok(());
    };
    vault.delete_card(id)?;
    println!("Card deleted successfully");
    Ok(())
}

fn select_card_id(vault: &Vault) -> Result<Option<Uuid>, Box<dyn Error>> {
    if vault.cards().is_empty() {
        println!("No cards saved yet");
        return Ok(None);
    }

    let labels: Vec<String> = vault
        .cards()
        .iter()
        .map(|card| {
            format!(
                "{} ({})",
                card.card_name,
                vault::mask_card_number(&card.card_number)
            )
        })
        .collect();

    let selection = Select::new("Which card?", labels).raw_prompt()?;
    Ok(vault.cards().get(selection.index).map(|card| card.id))
}
