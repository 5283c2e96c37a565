// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::recipes::{RecipeConfig, RecipeService};

/// Recipe Scout CLI
#[derive(Parser, Debug)]
#[command(name = "recipe-cli")]
#[command(version = "0.1.0")]
#[command(about = "Search recipes by ingredient and scrape recipe pages", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search recipes that use every given ingredient
    Search(SearchArgs),

    /// Scrape one recipe page for its ingredients and steps
    Scrape(ScrapeArgs),
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Ingredients, comma or space separated
    pub query: String,

    /// Maximum number of recipes
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Only return listing card fields, skip detail pages
    #[arg(long)]
    pub summary_only: bool,

    /// Recipe site origin
    #[arg(long, env = "RECIPE_SITE_BASE_URL")]
    pub base_url: Option<String>,
}

#[derive(Args, Debug)]
pub struct ScrapeArgs {
    /// Recipe page URL
    pub url: String,
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let mut config = RecipeConfig::from_env();

    match cli.command {
        Commands::Search(args) => {
            if let Some(base_url) = args.base_url {
                config.base_url = base_url;
            }
            if args.summary_only {
                config.fetch_details_on_search = false;
            }
            let service = RecipeService::new(config)?;
            let recipes = service.search(&args.query, args.limit).await?;
            println!("{}", serde_json::to_string_pretty(&recipes)?);
        }
        Commands::Scrape(args) => {
            let service = RecipeService::new(config)?;
            let full = service.full_ingredients(&args.url).await?;
            println!("{}", serde_json::to_string_pretty(&full)?);
        }
    }
    Ok(())
}
