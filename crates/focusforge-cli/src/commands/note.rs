use clap::Subcommand;
use focusforge_core::intent::NewNote;
use focusforge_core::{Config, Intent};

use crate::app::{self, print_json, CliResult};

#[derive(Subcommand)]
pub enum NoteAction {
    /// Add a note
    Add {
        title: String,
        #[arg(long, default_value = "")]
        content: String,
    },
    /// Edit a note's title and/or content
    Update {
        /// Note ID
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete a note
    Delete {
        /// Note ID
        id: String,
    },
    /// List notes, most recently edited first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: NoteAction, config: &Config) -> CliResult {
    let mut engine = app::open(config)?;

    match action {
        NoteAction::Add { title, content } => {
            engine.dispatch(Intent::AddNote(NewNote { title, content }));
            if let Some(note) = engine.state().notes.first() {
                print_json(note)?;
            }
        }
        NoteAction::Update { id, title, content } => {
            let Some(existing) = engine.state().note(&id) else {
                return Err(format!("note not found: {id}").into());
            };
            let mut edited = existing.clone();
            if let Some(title) = title {
                edited.title = title;
            }
            if let Some(content) = content {
                edited.content = content;
            }
            engine.dispatch(Intent::UpdateNote(edited));
            if let Some(note) = engine.state().note(&id) {
                print_json(note)?;
            }
        }
        NoteAction::Delete { id } => {
            if !engine.dispatch(Intent::DeleteNote(id.clone())) {
                return Err(format!("note not found: {id}").into());
            }
            println!("Note deleted: {id}");
        }
        NoteAction::List { json } => {
            let notes = &engine.state().notes;
            if json {
                print_json(notes)?;
            } else if notes.is_empty() {
                println!("No notes.");
            } else {
                for note in notes {
                    println!(
                        "{}  {}  ({})",
                        note.updated_at.format("%Y-%m-%d %H:%M"),
                        note.title,
                        note.id
                    );
                }
            }
        }
    }
    Ok(())
}
