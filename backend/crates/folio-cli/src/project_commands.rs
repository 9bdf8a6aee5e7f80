use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List projects in display order
    List {
        /// Page size (server default 10, max 100)
        #[arg(long)]
        limit: Option<i64>,
        #[arg(long)]
        offset: Option<i64>,
        /// Substring matched against title, description and category
        #[arg(long)]
        search: Option<String>,
    },

    /// Get a project by ID
    Get { id: i64 },

    /// Create a project
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        url: String,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        order_index: Option<i64>,
    },

    /// Update the supplied fields of a project
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long, conflicts_with = "clear_image_url")]
        image_url: Option<String>,
        #[arg(long, conflicts_with = "clear_category")]
        category: Option<String>,
        #[arg(long)]
        order_index: Option<i64>,
        /// Remove the image URL
        #[arg(long)]
        clear_image_url: bool,
        /// Remove the category
        #[arg(long)]
        clear_category: bool,
    },

    /// Delete a project (asks for confirmation)
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}
