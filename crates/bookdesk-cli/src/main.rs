mod logging;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use bookdesk_core::export::csv::write_csv;
use bookdesk_core::{
    AppConfig, BookDraft, BookRecord, BookRepository, BookStatus, BookdeskError, Database,
    DashboardView, ExitCode, FilterCriteria, JsonBookStore, Repository, SqliteBookRepository,
    StorageBackend, seed_books, unique_genres,
};

// ─── CLI Definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "bookdesk",
    about = "Book inventory dashboard for the terminal",
    version,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output in JSON format (for scripts).
    /// Also enabled by setting BOOKDESK_JSON=1.
    #[arg(long, global = true)]
    json: bool,

    /// Storage backend to use instead of `core.backend` (sqlite or json).
    #[arg(long, global = true)]
    backend: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Args, Clone, Default)]
struct FilterArgs {
    /// Case-insensitive text matched against title and author.
    #[arg(long, default_value = "")]
    search: String,
    /// Exact genre.
    #[arg(long, default_value = "")]
    genre: String,
    /// Available or Issued.
    #[arg(long)]
    status: Option<String>,
}

impl FilterArgs {
    fn criteria(&self) -> bookdesk_core::Result<FilterCriteria> {
        let status = match self.status.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(s) => Some(s.parse::<BookStatus>()?),
        };
        Ok(FilterCriteria::new()
            .with_search(self.search.clone())
            .with_genre(self.genre.clone())
            .with_status(status))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List books, filtered and paginated.
    List {
        #[command(flatten)]
        filters: FilterArgs,
        #[arg(long, default_value = "1")]
        page: usize,
        /// Defaults to `ui.page_size`.
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        page_size: Option<u64>,
    },

    /// Show analytics for the (filtered) catalog.
    Stats {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List the distinct genres in the catalog.
    Genres,

    /// Operations on a single book.
    Book {
        #[command(subcommand)]
        action: BookAction,
    },

    /// Export the (filtered) catalog as CSV.
    Export {
        #[command(flatten)]
        filters: FilterArgs,
        /// Directory to write into (default: current directory).
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// File stem (default: `export.default_filename`).
        #[arg(long)]
        name: Option<String>,
    },

    /// Load the sample catalog into the store, skipping ids already present.
    Seed,

    /// Config management.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version information.
    Version,
}

// ─── Book Actions ───────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum BookAction {
    /// Get a book by ID.
    Get { id: String },

    /// Add a book.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        genre: String,
        #[arg(long, allow_hyphen_values = true)]
        year: i32,
        #[arg(long, default_value = "Available")]
        status: String,
    },

    /// Update a book. Omitted fields keep their current value.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        genre: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        year: Option<i32>,
        #[arg(long)]
        status: Option<String>,
    },

    /// Lend out an available book.
    Issue { id: String },

    /// Take back an issued book.
    Return { id: String },

    /// Delete a book.
    Delete {
        id: String,
        #[arg(long)]
        confirm: bool,
    },
}

// ─── Config Actions ──────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum ConfigAction {
    /// Show all config values.
    List,
    /// Get a specific config key.
    Get { key: String },
}

// ─── Main ────────────────────────────────────────────────────────────────────

struct Context {
    start: Instant,
    json_output: bool,
    config: AppConfig,
}

fn main() {
    let cli = Cli::parse();
    let json_output = cli.json || std::env::var("BOOKDESK_JSON").as_deref() == Ok("1");

    if let Err(err) = run(cli, json_output) {
        let code = error_exit_code(&err);
        if json_output {
            let _ = print_json(&error_envelope(&err));
        } else {
            eprintln!("Error: {err:#}");
        }
        std::process::exit(code as i32);
    }
}

fn error_exit_code(err: &anyhow::Error) -> ExitCode {
    err.downcast_ref::<BookdeskError>()
        .map(BookdeskError::exit_code)
        .unwrap_or(ExitCode::GeneralError)
}

fn error_envelope(err: &anyhow::Error) -> serde_json::Value {
    serde_json::json!({
        "status": "error",
        "error": format!("{:?}", error_exit_code(err)),
        "message": err.to_string(),
    })
}

fn run(cli: Cli, json_output: bool) -> Result<()> {
    let start = Instant::now();
    let mut config = AppConfig::load()?;
    logging::init(&config.log.level, cli.verbose);

    if let Some(backend) = cli.backend.as_deref() {
        config.core.backend = backend.parse::<StorageBackend>()?;
    }
    debug!(
        config = %AppConfig::config_path().display(),
        backend = %config.core.backend,
        "config loaded in {:.1}ms",
        start.elapsed().as_secs_f64() * 1000.0
    );

    let ctx = Context { start, json_output, config };

    match cli.command {
        Commands::Config { action } => run_config(&ctx, action),
        Commands::Version => {
            let version = env!("CARGO_PKG_VERSION");
            if ctx.json_output {
                print_ok(&ctx, serde_json::json!({ "version": version }))
            } else {
                println!("bookdesk v{version}");
                Ok(())
            }
        }
        command => match ctx.config.core.backend {
            StorageBackend::Sqlite => {
                let repo = SqliteBookRepository::new(Database::open(&ctx.config.database_path())?);
                execute(&ctx, &repo, command)
            }
            StorageBackend::Json => {
                let repo = JsonBookStore::open(ctx.config.json_store_path())?;
                execute(&ctx, &repo, command)
            }
        },
    }
}

fn execute<R: BookRepository>(ctx: &Context, repo: &R, command: Commands) -> Result<()> {
    match command {
        // ── List ───────────────────────────────────────────────────────────

        Commands::List { filters, page, page_size } => {
            let criteria = filters.criteria()?;
            let page_size = page_size.map_or(ctx.config.ui.page_size, |n| n as usize);
            let snapshot = repo.list_all()?;
            let view = DashboardView::compute(&snapshot, &criteria, page, page_size);

            if ctx.json_output {
                print_ok(ctx, serde_json::json!({
                    "items": view.page,
                    "pagination": view.pagination,
                    "genres": view.genres,
                }))?;
            } else if view.page.is_empty() {
                if view.pagination.total_items == 0 {
                    println!("No books match. Use `bookdesk book add` or `bookdesk seed` to add books.");
                } else {
                    println!(
                        "Page {page} is empty ({} pages, {} books).",
                        view.pagination.total_pages, view.pagination.total_items
                    );
                }
            } else {
                for book in &view.page {
                    print_book_line(book);
                }
                println!(
                    "\nPage {} of {} ({} books)",
                    view.pagination.current_page,
                    view.pagination.total_pages,
                    view.pagination.total_items
                );
            }
        }

        // ── Stats ──────────────────────────────────────────────────────────

        Commands::Stats { filters } => {
            let criteria = filters.criteria()?;
            let view = DashboardView::compute(&repo.list_all()?, &criteria, 1, ctx.config.ui.page_size);
            let stats = view.stats;

            if ctx.json_output {
                print_ok(ctx, serde_json::to_value(&stats)?)?;
            } else {
                println!("Library statistics:");
                println!("  Total books:  {}", stats.total_books);
                println!("  Available:    {}", stats.available_books);
                println!("  Issued:       {}", stats.issued_books);
                println!("  Genres:       {}", stats.genre_count());
                if !stats.genre_distribution.is_empty() {
                    println!("\nBooks by genre:");
                    for entry in &stats.genre_distribution {
                        println!("  {:<24} {}", entry.genre, entry.count);
                    }
                }
                if !stats.year_distribution.is_empty() {
                    println!("\nBooks by year:");
                    for entry in &stats.year_distribution {
                        println!("  {:>6}  {}", entry.year, entry.count);
                    }
                }
            }
        }

        // ── Genres ─────────────────────────────────────────────────────────

        Commands::Genres => {
            let genres = unique_genres(&repo.list_all()?);
            if ctx.json_output {
                print_ok(ctx, serde_json::json!(genres))?;
            } else if genres.is_empty() {
                println!("No genres.");
            } else {
                for genre in &genres {
                    println!("  {genre}");
                }
            }
        }

        // ── Book ───────────────────────────────────────────────────────────

        Commands::Book { action } => run_book(ctx, repo, action)?,

        // ── Export ─────────────────────────────────────────────────────────

        Commands::Export { filters, output, name } => {
            let criteria = filters.criteria()?;
            let view = DashboardView::compute(&repo.list_all()?, &criteria, 1, ctx.config.ui.page_size);
            let filtered = view.filtered;
            let dir = output.unwrap_or_else(|| PathBuf::from("."));
            let stem = name.unwrap_or_else(|| ctx.config.export.default_filename.clone());
            let path = write_csv(&dir, &stem, &filtered)?;

            if ctx.json_output {
                print_ok(ctx, serde_json::json!({
                    "path": path.to_string_lossy(),
                    "rows": filtered.len(),
                }))?;
            } else {
                println!("Exported {} book(s) to {}", filtered.len(), path.display());
            }
        }

        // ── Seed ───────────────────────────────────────────────────────────

        Commands::Seed => {
            let added = repo.import(&seed_books())?;
            let total = repo.count()?;
            if ctx.json_output {
                print_ok(ctx, serde_json::json!({ "added": added, "total": total }))?;
            } else {
                println!("Added {added} sample book(s); {total} in store.");
            }
        }

        Commands::Config { .. } | Commands::Version => unreachable!("handled before opening storage"),
    }

    Ok(())
}

fn run_book<R: BookRepository>(ctx: &Context, repo: &R, action: BookAction) -> Result<()> {
    match action {
        BookAction::Get { id } => {
            let book = repo
                .find_by_id(&id)?
                .ok_or_else(|| BookdeskError::BookNotFound(id.clone()))?;
            if ctx.json_output {
                print_ok(ctx, serde_json::to_value(&book)?)?;
            } else {
                println!("{}", serde_json::to_string_pretty(&book)?);
            }
        }

        BookAction::Add { title, author, genre, year, status } => {
            let book = repo.create(BookDraft {
                title,
                author,
                genre,
                published_year: year,
                status: status.parse()?,
            })?;
            if ctx.json_output {
                print_ok(ctx, serde_json::to_value(&book)?)?;
            } else {
                println!("Added: {} ({})", book.title, book.id);
            }
        }

        BookAction::Update { id, title, author, genre, year, status } => {
            let current = repo
                .find_by_id(&id)?
                .ok_or_else(|| BookdeskError::BookNotFound(id.clone()))?;
            let mut draft = BookDraft::from(&current);
            if let Some(t) = title { draft.title = t; }
            if let Some(a) = author { draft.author = a; }
            if let Some(g) = genre { draft.genre = g; }
            if let Some(y) = year { draft.published_year = y; }
            if let Some(s) = status { draft.status = s.parse()?; }

            let book = repo.update(&id, draft)?;
            if ctx.json_output {
                print_ok(ctx, serde_json::to_value(&book)?)?;
            } else {
                println!("Updated: {}", book.title);
            }
        }

        BookAction::Issue { id } => {
            let book = repo.issue(&id)?;
            if ctx.json_output {
                print_ok(ctx, serde_json::to_value(&book)?)?;
            } else {
                println!("Issued: {} ({})", book.title, book.id);
            }
        }

        BookAction::Return { id } => {
            let book = repo.return_book(&id)?;
            if ctx.json_output {
                print_ok(ctx, serde_json::to_value(&book)?)?;
            } else {
                println!("Returned: {} ({})", book.title, book.id);
            }
        }

        BookAction::Delete { id, confirm } => {
            if !confirm {
                return Err(BookdeskError::ConfirmRequired(format!(
                    "add --confirm to delete book {id}"
                ))
                .into());
            }
            repo.remove(&id)?;
            if ctx.json_output {
                print_ok(ctx, serde_json::json!({ "deleted": id }))?;
            } else {
                println!("Deleted book: {id}");
            }
        }
    }
    Ok(())
}

fn run_config(ctx: &Context, action: ConfigAction) -> Result<()> {
    let kv = ctx.config.key_values();
    match action {
        ConfigAction::List => {
            if ctx.json_output {
                let map: serde_json::Map<String, serde_json::Value> = kv
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), serde_json::Value::String(v)))
                    .collect();
                print_ok(ctx, serde_json::Value::Object(map))?;
            } else {
                for (k, v) in &kv {
                    println!("{k} = {v}");
                }
            }
        }
        ConfigAction::Get { key } => match kv.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => {
                if ctx.json_output {
                    print_ok(ctx, serde_json::json!({ "key": key, "value": value }))?;
                } else {
                    println!("{value}");
                }
            }
            None => return Err(BookdeskError::UnknownConfigKey(key).into()),
        },
    }
    Ok(())
}

// ─── Helpers ────────────────────────────────────────────────────────────────

fn print_book_line(book: &BookRecord) {
    println!(
        "{id:<10}  {title:<36}  {author:<24}  {genre:<22}  {year:>5}  {status}",
        id = short_id(&book.id),
        title = book.title,
        author = book.author,
        genre = book.genre,
        year = book.published_year,
        status = book.status,
    );
}

/// First 8 characters of long (UUID) ids; short ids are shown whole.
fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((cut, _)) => &id[..cut],
        None => id,
    }
}

fn print_ok(ctx: &Context, data: serde_json::Value) -> Result<()> {
    print_json(&serde_json::json!({
        "status": "ok",
        "data": data,
        "meta": { "duration_ms": ctx.start.elapsed().as_millis() as u64 }
    }))
}

fn print_json(val: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(val)?);
    Ok(())
}
