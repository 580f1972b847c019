// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password
    Generate {
        /// Password length (8-32)
        #[arg(long, short = 'l')]
        length: Option<usize>,

        /// Leave digits out of the character pool
        #[arg(long)]
        no_numbers: bool,

        /// Leave symbols out of the character pool
        #[arg(long)]
        no_symbols: bool,

        /// How many passwords to produce
        #[arg(long, default_value_t = 1)]
        count: usize,
    },

    /// Analyze the strength of a password
    Analyze {
        /// Password to analyze
        #[arg(required = true)]
        password: String,
    },

    /// Add a password entry
    Add {
        /// Website the credentials belong to
        #[arg(required = true)]
        website: String,

        /// Username or email
        #[arg(required = true)]
        username: String,

        /// Password to store; generated when omitted
        password: Option<String>,
    },

    /// List all password entries
    List,

    /// Show a password entry by ID
    Show {
        /// Entry ID
        #[arg(required = true)]
        id: String,
    },

    /// Delete a password entry
    Delete {
        /// Entry ID
        #[arg(required = true)]
        id: String,
    },

    /// Add a card
    AddCard {
        /// Name on the card
        #[arg(required = true)]
        name: String,

        /// 16-digit card number
        #[arg(required = true)]
        number: String,

        /// Expiry date in MM/YY format
        #[arg(required = true)]
        expiry: String,

        /// 3 or 4 digit CVV
        #[arg(required = true)]
        cvv: String,
    },

    /// List all cards
    ListCards,

    /// Show full card details by ID
    ShowCard {
        /// Card ID
        #[arg(required = true)]
        id: String,
    },

    /// Delete a card
    DeleteCard {
        /// Card ID
        #[arg(required = true)]
        id: String,
    },
}
