mod commands;
mod support;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "anvil")]
#[command(about = "Laravel model and migration scaffolding", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate source files from compact field declarations
    Generate {
        #[command(subcommand)]
        generate_command: GenerateCommands,
    },
}

#[derive(Subcommand)]
enum GenerateCommands {
    /// Generate an Eloquent model class
    Model {
        /// The name of the desired Eloquent model
        name: String,

        /// The name of the table this model represents
        #[arg(long)]
        table: Option<String>,

        /// The relationships to stub out, e.g. "address:hasOne('Address')"
        #[arg(long)]
        relationships: Option<String>,

        /// Where the file should be created
        #[arg(long)]
        path: Option<PathBuf>,

        /// The location of the template for this generator
        #[arg(long)]
        template_path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Generate a schema migration
    Migration {
        /// The migration name, e.g. create_posts_table
        name: String,

        /// The fields for the migration, e.g. "title:string, user_id:foreign"
        #[arg(long)]
        fields: Option<String>,

        /// Where the file should be created
        #[arg(long)]
        path: Option<PathBuf>,

        /// The location of the template for this generator
        #[arg(long)]
        template_path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate { generate_command } => match generate_command {
            GenerateCommands::Model {
                name,
                table,
                relationships,
                path,
                template_path,
                force,
            } => commands::model::generate(
                &name,
                table.as_deref(),
                relationships.as_deref(),
                path,
                template_path,
                force,
            ),
            GenerateCommands::Migration {
                name,
                fields,
                path,
                template_path,
                force,
            } => commands::migration::generate(&name, fields.as_deref(), path, template_path, force),
        },
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
