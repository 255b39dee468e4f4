use clap::Parser;

#[derive(Parser)]
#[command(name = "locsuggest")]
#[command(about = "Location autocomplete suggestions from the command line.")]
#[command(version)]
pub struct Cli {
    /// Restrict results to an ISO 3166-1 alpha-2 country code
    #[arg(short = 'c', long)]
    pub country: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Show the popular-cities default list
    #[arg(long)]
    pub popular: bool,

    /// Show the regional-cities default list
    #[arg(long)]
    pub regional: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Edit configuration file
    #[arg(long)]
    pub edit_config: bool,

    /// Query text
    #[arg(num_args = 0..)]
    pub query: Vec<String>,
}
