//! Interactive channel sync client.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin roji-client -- --username anna
//! ```

use std::{
    path::PathBuf,
    sync::{Arc, mpsc as std_mpsc},
};

use clap::Parser;
use roji_client::{
    Client, ClientConfig, ClientError, Command, CommandError, Database, JsonFileDatabase,
    WsConnection, command::HELP, config::CLIENT_CONFIG_FILE_NAME,
};
use roji_shared::{Name, logger::setup_logger};
use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::mpsc;

#[derive(Debug, Parser)]
#[command(version, about = "Roji channel sync client")]
struct Args {
    /// Configuration file (JSON)
    #[arg(short, long, default_value = CLIENT_CONFIG_FILE_NAME)]
    config: PathBuf,

    /// Username to log in with
    #[arg(short, long)]
    username: Option<String>,

    /// Server host
    #[arg(long)]
    host: Option<String>,

    /// Server port
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory holding the local channel database
    #[arg(long, default_value = ".roji")]
    data_dir: PathBuf,

    /// Write a new configuration file from the defaults and the flags above, then exit
    #[arg(long)]
    init: bool,
}

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "warn");

    if let Err(e) = run(args).await {
        tracing::error!("Client error: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn resolve_config(args: &Args) -> Result<ClientConfig, BoxError> {
    let config = match ClientConfig::load(&args.config)? {
        Some(config) => config,
        None => {
            tracing::debug!("{} not found, using defaults", args.config.display());
            ClientConfig::defaults()
        }
    };
    apply_overrides(config, args)
}

fn apply_overrides(mut config: ClientConfig, args: &Args) -> Result<ClientConfig, BoxError> {
    if let Some(username) = &args.username {
        config.username = Name::new(username.as_str())?;
    }
    if let Some(host) = &args.host {
        config.server_host = host.clone();
    }
    if let Some(port) = args.port {
        config.server_port = port;
    }
    Ok(config)
}

async fn run(args: Args) -> Result<(), BoxError> {
    if args.init {
        let config = apply_overrides(ClientConfig::defaults(), &args)?;
        config.init(&args.config)?;
        println!("Wrote {}", args.config.display());
        return Ok(());
    }

    let config = resolve_config(&args)?;
    let database = JsonFileDatabase::in_directory(&args.data_dir);
    tracing::info!("Channel database: {}", database.path().display());
    let database: Arc<dyn Database> = Arc::new(database);

    let connection = WsConnection::connect(&config.server_url()).await?;
    let mut client = Client::new(Box::new(connection), database, &config);

    println!(
        "Connected to {} as {}. Type /help for commands.",
        config.server_url(),
        config.username
    );
    let applied = client.sync().await?;
    println!("{} channel update(s) received.", applied);

    let (mut lines, ready) = spawn_prompt();
    while let Some(line) = lines.recv().await {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => {
                let _ = ready.send(());
                continue;
            }
            Err(e) => {
                println!("{}", e);
                let _ = ready.send(());
                continue;
            }
        };

        match execute(&mut client, command).await {
            Ok(true) => {}
            Ok(false) => break,
            Err(e @ (ClientError::Validation(_) | ClientError::InvalidArgument(_))) => {
                println!("{}", e);
            }
            Err(e) => return Err(e.into()),
        }
        let _ = ready.send(());
    }

    println!("Bye.");
    Ok(())
}

/// Read lines on a dedicated thread. The next prompt is shown only after the
/// previous line was handled and a `()` arrives on the returned sender.
fn spawn_prompt() -> (mpsc::Receiver<String>, std_mpsc::Sender<()>) {
    let (line_tx, line_rx) = mpsc::channel::<String>(1);
    let (ready_tx, ready_rx) = std_mpsc::channel::<()>();

    std::thread::spawn(move || {
        let mut editor = match DefaultEditor::new() {
            Ok(editor) => editor,
            Err(e) => {
                tracing::error!("Failed to open the terminal: {}", e);
                return;
            }
        };
        loop {
            let line = match editor.readline("roji> ") {
                Ok(line) => line,
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(e) => {
                    tracing::error!("Failed to read input: {}", e);
                    break;
                }
            };
            if !line.trim().is_empty() {
                let _ = editor.add_history_entry(line.as_str());
            }
            if line_tx.blocking_send(line).is_err() || ready_rx.recv().is_err() {
                break;
            }
        }
    });

    (line_rx, ready_tx)
}

/// Run one command. Returns `false` when the REPL should stop.
async fn execute(client: &mut Client, command: Command) -> Result<bool, ClientError> {
    match command {
        Command::Sync => {
            let applied = client.sync().await?;
            println!("{} channel update(s) received.", applied);
        }
        Command::Private(user) => {
            client.create_private_channel(user).await?;
            let applied = client.sync().await?;
            println!("Private channel declared, {} update(s) received.", applied);
        }
        Command::Group { name, members } => {
            client.create_group_channel(name, members).await?;
            let applied = client.sync().await?;
            println!("Group channel declared, {} update(s) received.", applied);
        }
        Command::Rename {
            channel_id,
            name,
            members,
        } => {
            client.rename_channel(channel_id, name, members).await?;
            let applied = client.sync().await?;
            println!("Channel redeclared, {} update(s) received.", applied);
        }
        Command::Channels => {
            let channels = client.database().list_channels().await?;
            if channels.is_empty() {
                println!("No channels yet. Try /sync.");
            }
            for (name, config) in channels {
                println!("  {}  {}", config.id, name);
            }
        }
        Command::Help => println!("{}", HELP),
        Command::Quit => return Ok(false),
    }
    Ok(true)
}
