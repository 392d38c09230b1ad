use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use notes_crud::{
    Consistency, DynamoStore, Error, Mapper, Note, NoteField, NoteKey, Record, config,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Save, load, update and delete notes in a DynamoDB table.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Table holding the notes.
    #[arg(
        long,
        env = config::TABLE_NAME_VAR,
        default_value = notes_crud::note::TABLE_NAME,
        global = true
    )]
    table: String,

    /// AWS region, resolved through the default provider chain when omitted.
    #[arg(long, env = config::REGION_VAR, global = true)]
    region: Option<String>,

    /// DynamoDB endpoint, e.g. http://localhost:8000 for DynamoDB Local.
    #[arg(long, env = config::ENDPOINT_URL_VAR, global = true)]
    endpoint_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct KeyArgs {
    /// Owning user.
    #[arg(long)]
    user_id: String,

    /// Note number within the user.
    #[arg(long)]
    note_id: i32,
}

impl KeyArgs {
    fn key(&self) -> NoteKey {
        NoteKey::new(self.user_id.clone(), self.note_id)
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create or overwrite a note.
    Save {
        #[command(flatten)]
        key: KeyArgs,
        /// Note body.
        #[arg(long, default_value = "")]
        text: String,
    },
    /// Print a note.
    Load {
        #[command(flatten)]
        key: KeyArgs,
        /// Use a strongly consistent read.
        #[arg(long)]
        strong: bool,
    },
    /// Delete a note; succeeds when it does not exist.
    Delete {
        #[command(flatten)]
        key: KeyArgs,
    },
    /// Replace a note's text only if it still holds the expected text.
    ConditionalUpdate {
        #[command(flatten)]
        key: KeyArgs,
        /// New note body.
        #[arg(long)]
        text: String,
        /// Text the stored note must currently hold.
        #[arg(long)]
        expected: String,
    },
    /// Run save, load, update, delete and a conditional update on one note.
    Walkthrough {
        /// Owning user of the sample note.
        #[arg(long, default_value = "leoTest222")]
        user_id: String,
        /// Note number of the sample note.
        #[arg(long, default_value_t = 222)]
        note_id: i32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notes_crud=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = config::Config {
        table_name: cli.table,
        region: cli.region,
        endpoint_url: cli.endpoint_url,
    };
    let store = DynamoStore::new(config.client().await, config.table_name);
    let mapper = Mapper::new(store);

    match cli.command {
        Command::Save { key, text } => {
            let note = Note::new(key.user_id, key.note_id, text);
            mapper.save(&note).await.context("save failed")?;
            println!("saved {note}");
        }
        Command::Load { key, strong } => {
            let consistency = if strong {
                Consistency::Strong
            } else {
                Consistency::Eventual
            };
            match mapper
                .load::<Note>(&key.key(), consistency)
                .await
                .context("load failed")?
            {
                Some(note) => println!("{note}"),
                None => println!("not found: {}/{}", key.user_id, key.note_id),
            }
        }
        Command::Delete { key } => {
            mapper
                .delete::<Note>(&key.key())
                .await
                .context("delete failed")?;
            println!("deleted {}/{}", key.user_id, key.note_id);
        }
        Command::ConditionalUpdate {
            key,
            text,
            expected,
        } => {
            let note = Note::new(key.user_id, key.note_id, text);
            match mapper
                .conditional_update(&note, NoteField::Text, expected.as_str())
                .await
            {
                Ok(()) => println!("updated {note}"),
                Err(err @ Error::PreconditionFailed { .. }) => {
                    println!("not updated: {err}; reload the note and decide again");
                }
                Err(err) => return Err(err).context("conditional update failed"),
            }
        }
        Command::Walkthrough { user_id, note_id } => {
            walkthrough(&mapper, NoteKey::new(user_id, note_id)).await?;
        }
    }
    Ok(())
}

async fn walkthrough(mapper: &Mapper<DynamoStore>, key: NoteKey) -> anyhow::Result<()> {
    let mut note = Note::new(
        key.user_id.clone(),
        key.note_id,
        "Insertion of element via java",
    );
    mapper.save(&note).await.context("save failed")?;
    let loaded = mapper
        .load::<Note>(&key, Consistency::Eventual)
        .await
        .context("load failed")?;
    match loaded {
        Some(loaded) => println!("retrieved {loaded}"),
        None => println!("not visible yet to an eventually consistent read"),
    }

    note.text = "updated notes".to_string();
    mapper.update(&note).await.context("update failed")?;
    println!("updated {note}");

    let updated = mapper
        .load::<Note>(&key, Consistency::Strong)
        .await
        .context("strong load failed")?
        .context("updated note is missing")?;
    println!("retrieved the updated note {updated}");

    mapper
        .delete::<Note>(&updated.key())
        .await
        .context("delete failed")?;
    println!("deleted {updated}");
    match mapper
        .load::<Note>(&key, Consistency::Strong)
        .await
        .context("load after delete failed")?
    {
        None => println!("done, the sample note is deleted"),
        Some(still_there) => anyhow::bail!("note survived its delete: {still_there}"),
    }

    mapper.save(&note).await.context("save failed")?;
    let next = Note::new(
        key.user_id.clone(),
        key.note_id,
        format!("free swag registration code {}", std::process::id()),
    );
    mapper
        .conditional_update(&next, NoteField::Text, note.text.as_str())
        .await
        .context("conditional update failed")?;
    println!("conditionally updated {next}");

    let stale = Note::new(key.user_id.clone(), key.note_id, "lost update");
    match mapper
        .conditional_update(&stale, NoteField::Text, note.text.as_str())
        .await
    {
        Err(err @ Error::PreconditionFailed { .. }) => println!("stale write rejected: {err}"),
        Ok(()) => anyhow::bail!("stale conditional update was applied"),
        Err(err) => return Err(err).context("stale conditional update failed"),
    }

    mapper
        .delete::<Note>(&key)
        .await
        .context("cleanup failed")?;
    Ok(())
}
