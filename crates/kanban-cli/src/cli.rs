use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "kanban")]
#[command(about = "Edit a kanban board file from the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the board JSON file (or set KANBAN_FILE env var)
    #[arg(value_name = "FILE", env = "KANBAN_FILE")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Column operations
    Column(ColumnCommand),
    /// Card operations
    Card(CardCommand),
    /// Print the board as JSON
    Export,
    /// Replace the board with the contents of a JSON file
    Import(ImportArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// Column commands
#[derive(Args)]
pub struct ColumnCommand {
    #[command(subcommand)]
    pub action: ColumnAction,
}

#[derive(Subcommand)]
pub enum ColumnAction {
    /// Append a new column
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        color: Option<String>,
    },
    /// Remove a column and every card it lists
    Remove {
        #[arg(long)]
        id: String,
    },
    /// List columns in board order
    List,
}

// Card commands
#[derive(Args)]
pub struct CardCommand {
    #[command(subcommand)]
    pub action: CardAction,
}

#[derive(Subcommand)]
pub enum CardAction {
    /// Append a new card to a column
    Add(CardAddArgs),
    /// Edit card fields
    Update(CardUpdateArgs),
    /// Remove a card
    Remove {
        #[arg(long)]
        id: String,
    },
    /// Move a card to a position in a column
    Move {
        #[arg(long)]
        id: String,
        /// Column the card is moved from
        #[arg(long)]
        from: String,
        /// Column the card is moved to
        #[arg(long)]
        to: String,
        /// Destination position; values past the end append
        #[arg(long, default_value_t = usize::MAX)]
        index: usize,
    },
    /// Drop a card onto another card, a column, or an unclassified element
    Drop {
        #[arg(long)]
        id: String,
        /// Column the drag started from
        #[arg(long)]
        from: String,
        #[arg(long, value_enum)]
        target: DropKind,
        /// Id of the element the card was dropped on
        #[arg(long)]
        over: String,
        /// Column shown around the target card (required for card targets)
        #[arg(long, required_if_eq("target", "card"))]
        column: Option<String>,
    },
    /// Show one card
    Get {
        #[arg(long)]
        id: String,
    },
    /// List cards, optionally of one column
    List {
        #[arg(long)]
        column: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DropKind {
    Card,
    Column,
    Unknown,
}

#[derive(Args)]
pub struct CardAddArgs {
    #[arg(long)]
    pub column: String,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub image: Option<String>,
    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    pub due_date: Option<NaiveDate>,
    /// Comma-separated labels
    #[arg(long, value_delimiter = ',')]
    pub labels: Option<Vec<String>>,
}

#[derive(Args)]
pub struct CardUpdateArgs {
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long, conflicts_with = "clear_description")]
    pub description: Option<String>,
    #[arg(long)]
    pub clear_description: bool,
    #[arg(long, conflicts_with = "clear_image")]
    pub image: Option<String>,
    #[arg(long)]
    pub clear_image: bool,
    /// Due date (YYYY-MM-DD)
    #[arg(long, conflicts_with = "clear_due_date")]
    pub due_date: Option<NaiveDate>,
    #[arg(long)]
    pub clear_due_date: bool,
    /// Comma-separated labels, replacing the current ones
    #[arg(long, value_delimiter = ',', conflicts_with = "clear_labels")]
    pub labels: Option<Vec<String>>,
    #[arg(long)]
    pub clear_labels: bool,
}

#[derive(Args)]
pub struct ImportArgs {
    /// JSON file to read the board from
    #[arg(long)]
    pub input: String,
}
