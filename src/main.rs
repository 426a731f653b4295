use azblog::application::{count_posts, create_post, list_posts, show_post};
use azblog::cli::{format_post_detail, format_post_list, Cli, Commands, Session};
use azblog::domain::{PostForm, PostId};
use azblog::error::BlogError;
use azblog::infrastructure::{init_logging, Config, InMemoryRepository};
use clap::Parser;
use std::path::{Path, PathBuf};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), BlogError> {
    let config_path = Config::locate(cli.config.as_deref());

    match cli.command {
        // Config management works on the file itself, not the loaded session
        Some(Commands::Config { key, value, list }) => manage_config(config_path, key, value, list),
        Some(Commands::List) => {
            let (config, repository) = open_blog(config_path)?;
            print!("{}", format_post_list(&list_posts(&repository), &config));
            Ok(())
        }
        Some(Commands::Show { id }) => {
            let (config, repository) = open_blog(config_path)?;
            let post = show_post(&repository, &PostId::new(id))?;
            print!("{}", format_post_detail(&post, &config));
            Ok(())
        }
        Some(Commands::Count) => {
            let (_, repository) = open_blog(config_path)?;
            println!("{}", count_posts(&repository));
            Ok(())
        }
        Some(Commands::New {
            title,
            author,
            content,
        }) => {
            let (config, mut repository) = open_blog(config_path)?;
            let post = create_post(&mut repository, &PostForm::new(title, author, content))?;
            println!("id: {}", post.id());
            print!("{}", format_post_detail(&post, &config));
            Ok(())
        }
        Some(Commands::Shell) | None => {
            let (config, mut repository) = open_blog(config_path)?;
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            Session::new(&mut repository, &config).run(&mut stdin.lock(), &mut stdout.lock())
        }
    }
}

/// Load config, start logging and build the repository the command works on.
/// The repository lives for the whole process and is lent to each view.
fn open_blog(config_path: Option<PathBuf>) -> Result<(Config, InMemoryRepository), BlogError> {
    let config = Config::load(config_path.as_deref())?;
    init_logging(&config);
    tracing::debug!(?config_path, seed = config.seed_samples, "starting");

    let repository = if config.seed_samples {
        InMemoryRepository::seeded()
    } else {
        InMemoryRepository::new()
    };

    Ok((config, repository))
}

fn manage_config(
    path: Option<PathBuf>,
    key: Option<String>,
    value: Option<String>,
    list: bool,
) -> Result<(), BlogError> {
    match (key, value) {
        (Some(k), Some(v)) => {
            let path = path.ok_or_else(|| {
                BlogError::Config(format!("No config file to write '{}' to", k))
            })?;
            let mut config = load_or_default(&path)?;
            config.set(&k, &v)?;
            config.save_to_file(&path)?;
            println!("Set {} = {}", k, v);
            Ok(())
        }
        (Some(k), None) if !list => {
            let config = Config::load(path.as_deref())?;
            println!("{}", config.get(&k)?);
            Ok(())
        }
        _ if list => {
            let config = Config::load(path.as_deref())?;
            for (key, value) in config.entries() {
                println!("{} = {}", key, value);
            }
            Ok(())
        }
        _ => {
            println!("Usage: azblog config [--list | <key> [<value>]]");
            println!(
                "Valid keys: seed_samples, confirm_delete, list_date_format, \
                detail_date_format, log_filter"
            );
            Ok(())
        }
    }
}

fn load_or_default(path: &Path) -> Result<Config, BlogError> {
    if path.exists() {
        Config::load_from_file(path)
    } else {
        Ok(Config::default())
    }
}
