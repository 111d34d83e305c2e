use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use housing_browser::SearchCriteria;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "housing-browser")]
#[command(about = "Browse, filter and shortlist property listings.")]
pub struct CommandLine {
    /// Catalogue file of the form { "properties": [...] }
    #[arg(short, long, default_value = "data/properties.json", global = true)]
    pub catalogue: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List listings matching the given filters
    #[command(alias = "s")]
    Search(SearchArgs),
    /// Show one listing in detail
    Show { id: String },
    /// Read session steps as JSON lines from stdin
    Session,
}

#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Property type, e.g. House or Flat
    #[arg(long = "type")]
    pub property_type: Option<String>,
    #[arg(long)]
    pub min_price: Option<u64>,
    #[arg(long)]
    pub max_price: Option<u64>,
    #[arg(long)]
    pub min_beds: Option<u32>,
    #[arg(long)]
    pub max_beds: Option<u32>,
    /// Added on or after (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Added on or before (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,
    /// Postcode area prefix, e.g. BR1
    #[arg(long)]
    pub postcode: Option<String>,
}

impl From<SearchArgs> for SearchCriteria {
    fn from(args: SearchArgs) -> Self {
        SearchCriteria {
            property_type: args.property_type,
            min_price: args.min_price,
            max_price: args.max_price,
            min_bedrooms: args.min_beds,
            max_bedrooms: args.max_beds,
            date_from: args.from,
            date_to: args.to,
            postcode: args.postcode,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
