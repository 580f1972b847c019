// src/cli/handlers.rs
use std::error::Error;

use console::style;
use serde_json::json;
use uuid::Uuid;

use crate::cli::CliCommand;
use crate::config::Config;
use crate::generator;
use crate::models::GenerationOptions;
use crate::strength::{self, Strength, StrengthLabel};
use crate::vault::{self, Vault};

// Handlers for CLI subcommands
pub fn run_command(
    command: CliCommand,
    vault: &mut Vault,
    config: &Config,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    match command {
        CliCommand::Generate {
            length,
            no_numbers,
            no_symbols,
            count,
        } => {
            let mut options = config.generation_options();
            if let Some(length) = length {
                options.length = length;
            }
            if no_numbers {
                options.include_numbers = false;
            }
            if no_symbols {
                options.include_symbols = false;
            }
            handle_generate(&options, count, json)
        }
        CliCommand::Analyze { password } => handle_analyze(&password, json),
        CliCommand::Add {
            website,
            username,
            password,
        } => handle_add_password(vault, config, &website, &username, password.as_deref(), json),
        CliCommand::List => handle_list_passwords(vault, json),
        CliCommand::Show { id } => handle_show_password(vault, &id, json),
        CliCommand::Delete { id } => handle_delete_password(vault, &id),
        CliCommand::AddCard {
            name,
            number,
            expiry,
            cvv,
        } => handle_add_card(vault, &name, &number, &expiry, &cvv, json),
        CliCommand::ListCards => handle_list_cards(vault, json),
        CliCommand::ShowCard { id } => handle_show_card(vault, &id, json),
        CliCommand::DeleteCard { id } => handle_delete_card(vault, &id),
    }
}

pub fn handle_generate(
    options: &GenerationOptions,
    count: usize,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    for _ in 0..count {
        let password = generator::generate(options)?;
        let strength = strength::estimate(&password);

        if json {
            println!(
                "{}",
                json!({
                    "password": password,
                    "score": strength.score,
                    "label": strength.label,
                })
            );
        } else {
            println!("{}  {}", password, strength_badge(&strength));
        }
    }
    Ok(())
}

pub fn handle_analyze(password: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let strength = strength::estimate(password);

    if json {
        println!("{}", serde_json::to_string(&strength)?);
    } else {
        println!("Score: {}/5", strength.score);
        println!("Strength: {}", strength_badge(&strength));
    }
    Ok(())
}

pub fn handle_add_password(
    vault: &mut Vault,
    config: &Config,
    website: &str,
    username: &str,
    password: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let (password, generated) = match password {
        Some(password) => (password.to_string(), false),
        None => (generator::generate(&config.generation_options())?, true),
    };

    let id = vault.add_password(website, username, &password)?;

    if json {
        println!("{}", json!({ "id": id, "password": password, "generated": generated }));
    } else {
        if generated {
            println!("Generated password: {}", password);
        }
        println!("✅ Password Added");
        println!("Your password has been successfully saved.");
    }
    Ok(())
}

pub fn handle_list_passwords(vault: &Vault, json: bool) -> Result<(), Box<dyn Error>> {
    let entries = vault.passwords();

    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No passwords saved yet");
        println!("Add your first password to see it here.");
        return Ok(());
    }

    for entry in entries {
        let strength = strength::estimate(&entry.password);
        println!(
            "{}  {}  {}  {}  (updated {})",
            entry.id,
            style(&entry.website).bold(),
            entry.username,
            strength_badge(&strength),
            entry.last_updated.format("%Y-%m-%d"),
        );
    }
    Ok(())
}

pub fn handle_show_password(vault: &Vault, id: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let id = parse_id(id)?;
    let entry = vault.get_password(id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(entry)?);
        return Ok(());
    }

    let strength = strength::estimate(&entry.password);
    println!("Website:  {}", entry.website);
    println!("Username: {}", entry.username);
    println!("Password: {}", entry.password);
    println!("Strength: {}", strength_badge(&strength));
    println!("Updated:  {}", entry.last_updated.format("%Y-%m-%d"));
    Ok(())
}

pub fn handle_delete_password(vault: &mut Vault, id: &str) -> Result<(), Box<dyn Error>> {
    let id = parse_id(id)?;
    vault.delete_password(id)?;
    println!("Password deleted successfully");
    Ok(())
}

pub fn handle_add_card(
    vault: &mut Vault,
    name: &str,
    number: &str,
    expiry: &str,
    cvv: &str,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let id = vault.add_card(name, number, expiry, cvv)?;

    if json {
        println!("{}", json!({ "id": id }));
    } else {
        println!("✅ Card Added");
        println!("Your card has been successfully saved.");
    }
    Ok(())
}

pub fn handle_list_cards(vault: &Vault, json: bool) -> Result<(), Box<dyn Error>> {
    let cards = vault.cards();

    if json {
        println!("{}", serde_json::to_string_pretty(cards)?);
        return Ok(());
    }

    if cards.is_empty() {
        println!("No cards saved yet");
        println!("Add your first card to see it here.");
        return Ok(());
    }

    for card in cards {
        println!(
            "{}  {}  {}  Expires {}",
            card.id,
            style(&card.card_name).bold(),
            vault::mask_card_number(&card.card_number),
            card.expiry_date,
        );
    }
    Ok(())
}

pub fn handle_show_card(vault: &Vault, id: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let id = parse_id(id)?;
    let card = vault.get_card(id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(card)?);
        return Ok(());
    }

    println!("Name:    {}", card.card_name);
    println!("Number:  {}", vault::format_card_number(&card.card_number));
    println!("Expires: {}", card.expiry_date);
    println!("CVV:     {}", card.cvv);
    Ok(())
}

pub fn handle_delete_card(vault: &mut Vault, id: &str) -> Result<(), Box<dyn Error>> {
    let id = parse_id(id)?;
    vault.delete_card(id)?;
    println!("Card deleted successfully");
    Ok(())
}

fn parse_id(id: &str) -> Result<Uuid, Box<dyn Error>> {
    Ok(Uuid::parse_str(id)?)
}

// Render the strength label with its severity color: destructive is red,
// warning yellow, success green.
pub fn strength_badge(strength: &Strength) -> String {
    let styled = style(strength.label.to_string());
    let styled = match strength.label {
        StrengthLabel::Weak => styled.red(),
        StrengthLabel::Medium => styled.yellow(),
        StrengthLabel::Strong => styled.green(),
    };
    styled.to_string()
}
