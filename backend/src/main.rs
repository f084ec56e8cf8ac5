//! CLI for the fee slip backend.
//!
//! Each subcommand maps to one of the original user actions: preview, save,
//! list, view, delete, clear, export, print, download. The current slip is
//! persisted between invocations, so `preview` followed by `save` works the
//! same way generate-then-save did.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use std::fs;
use std::path::PathBuf;

use fee_slip_backend::domain::models::FACILITY_CHECKLIST;
use fee_slip_backend::Backend;
use shared::{ExportToPathRequest, GenerateSlipRequest};

#[derive(Parser)]
#[command(
    name = "fee-slip",
    version,
    about = "Fee slip generator and records keeper for The Academy of Education"
)]
struct Cli {
    /// Data directory for saved records (defaults to the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a slip preview and keep it as the current slip
    Preview {
        /// Student name (required for a valid slip)
        #[arg(long)]
        name: String,
        /// Roll / ID
        #[arg(long, default_value = "")]
        roll: String,
        /// Class / section
        #[arg(long = "class", default_value = "")]
        cls: String,
        /// Tuition fee in PKR; missing or unparseable counts as 0
        #[arg(long)]
        tuition: Option<String>,
        /// Additional charge in PKR
        #[arg(long)]
        additional: Option<String>,
        #[arg(long, default_value = "")]
        notes: String,
        /// Checklist facility to include; repeat the flag for several
        #[arg(long = "facility")]
        facilities: Vec<String>,
        /// Also print the rendered slip markup
        #[arg(long)]
        show_document: bool,
    },
    /// Save the current slip as a receipt record
    Save,
    /// List saved receipts, most recent first
    List,
    /// Reload a saved receipt's snapshot as the current slip
    View { id: String },
    /// Delete a saved receipt by id
    Delete { id: String },
    /// Remove all saved receipts
    Clear {
        /// Confirm removal of every saved record
        #[arg(long)]
        yes: bool,
    },
    /// Export saved receipts as a CSV file
    Export {
        /// Target directory (Documents or home when omitted)
        #[arg(long)]
        path: Option<String>,
        /// Print the CSV to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
    /// Write a printable page for the current slip
    Print {
        /// Output file (defaults to ./fee_slip_print.html)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Produce the downloadable slip artifact
    Download {
        /// Output directory (defaults to the current directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Show the facility checklist with costs
    Facilities,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let data_dir = cli.data_dir.unwrap_or_else(Backend::default_data_dir);
    info!("Using data directory: {:?}", data_dir);
    let backend = Backend::with_data_dir(&data_dir)?;

    match cli.command {
        Command::Preview {
            name,
            roll,
            cls,
            tuition,
            additional,
            notes,
            facilities,
            show_document,
        } => {
            let preview = backend.receipt_service.generate_slip(GenerateSlipRequest {
                name,
                roll,
                cls,
                tuition,
                additional,
                notes,
                facilities,
            })?;
            println!(
                "Slip generated for {} — total {} PKR.",
                preview.student_name, preview.total
            );
            println!("Run `fee-slip save` to keep it as a record.");
            if show_document {
                println!("{}", preview.document);
            }
        }
        Command::Save => {
            let saved = backend.receipt_service.save_current_slip()?;
            println!(
                "Record saved locally. id: {} ({} records total)",
                saved.id, saved.record_count
            );
        }
        Command::List => {
            let listing = backend.receipt_service.list_receipts()?;
            if listing.receipts.is_empty() {
                println!("No records saved yet.");
            } else {
                for receipt in listing.receipts {
                    println!(
                        "{}  {}  {} — {} PKR",
                        receipt.id, receipt.created_at, receipt.student_name, receipt.total
                    );
                }
            }
        }
        Command::View { id } => {
            let viewed = backend.receipt_service.view_receipt(&id)?;
            println!(
                "Receipt {} for {} (saved {}) is now the current slip.",
                viewed.id, viewed.student_name, viewed.created_at
            );
            println!("{}", viewed.document);
        }
        Command::Delete { id } => {
            let result = backend.receipt_service.delete_receipt(&id)?;
            if result.deleted {
                println!("Record {} deleted.", id);
            } else {
                println!("No record with id {}.", id);
            }
        }
        Command::Clear { yes } => {
            if !yes {
                println!("Pass --yes to confirm clearing all saved records.");
                return Ok(());
            }
            let cleared = backend.receipt_service.clear_receipts()?;
            println!("Cleared {} saved record(s).", cleared.removed_count);
        }
        Command::Export { path, stdout } => {
            if stdout {
                let export = backend
                    .export_service
                    .export_receipts_csv(&backend.receipt_service)?;
                print!("{}", export.csv_content);
            } else {
                let response = backend.export_service.export_to_path(
                    ExportToPathRequest { custom_path: path },
                    &backend.receipt_service,
                )?;
                println!("{}", response.message);
                if !response.success {
                    std::process::exit(1);
                }
            }
        }
        Command::Print { out } => {
            let slip = backend.receipt_service.current_slip()?;
            let page = backend.artifact_service.printable_page(&slip.document);
            let out = out.unwrap_or_else(|| PathBuf::from("fee_slip_print.html"));
            fs::write(&out, page)?;
            println!(
                "Printable page written to {:?}. Open it in a browser to print.",
                out
            );
        }
        Command::Download { out_dir } => {
            let slip = backend.receipt_service.current_slip()?;
            let artifact = backend.artifact_service.download_slip(&slip.document)?;
            let out_dir = out_dir.unwrap_or_else(|| PathBuf::from("."));
            fs::create_dir_all(&out_dir)?;
            let out_path = out_dir.join(&artifact.filename);
            fs::write(&out_path, &artifact.bytes)?;
            println!("Slip artifact written to {:?}.", out_path);
        }
        Command::Facilities => {
            println!("Available facilities:");
            for (name, cost) in FACILITY_CHECKLIST {
                println!("  {} — {} PKR", name, cost);
            }
        }
    }

    Ok(())
}
