use assistant::application::{
    init::init, ConfigService, ContactsService, FinanceService, NotesService, TasksService,
};
use assistant::cli::output::{
    format_contact, format_contact_list, format_export, format_finance_list,
    format_finance_record, format_note, format_note_list, format_number, format_report,
    format_task, format_task_list,
};
use assistant::cli::{
    init_tracing, Cli, Commands, ContactAction, FinanceAction, NoteAction, TaskAction,
    TracingConfig,
};
use assistant::domain::{calc, ContactPatch, EntityKind, FinancePatch, TaskPatch};
use assistant::error::Result;
use assistant::infrastructure::Workspace;
use chrono::Local;
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(&TracingConfig { debug: cli.debug }) {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => {
            let workspace = init(&path)?;
            println!("Initialized assistant workspace at {}", workspace.root().display());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let mut service = ConfigService::new(Workspace::discover()?);

            if list {
                let config = service.list();
                println!("data_dir = {}", config.data_dir);
                println!("export_dir = {}", config.export_dir);
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: assistant config [--list | <key> [<value>]]");
                println!("Valid keys: data_dir, export_dir, created");
            }
            Ok(())
        }
        Commands::Notes { action } => run_notes(action),
        Commands::Tasks { action } => run_tasks(action),
        Commands::Contacts { action } => run_contacts(action),
        Commands::Finance { action } => run_finance(action),
        Commands::Calc { expression } => {
            let value = calc::evaluate(&expression.join(" "))?;
            println!("{}", format_number(value));
            Ok(())
        }
    }
}

fn run_notes(action: NoteAction) -> Result<()> {
    let mut notes = NotesService::open(&Workspace::discover()?)?;
    let now = Local::now().naive_local();

    match action {
        NoteAction::Add { title, content } => {
            let id = notes.add(title, content, now)?.id;
            println!("Added note #{}", id);
        }
        NoteAction::List => print!("{}", with_newline(format_note_list(notes.list()))),
        NoteAction::View { id } => print!("{}", format_note(notes.view(id)?)),
        NoteAction::Edit { id, title, content } => {
            notes.edit(id, title, content, now)?;
            println!("Updated note #{}", id);
        }
        NoteAction::Delete { id } => {
            notes.delete(id)?;
            println!("Deleted note #{}", id);
        }
        NoteAction::Export { output } => {
            let outcome = notes.export(output.as_deref())?;
            println!("{}", format_export(EntityKind::Notes, &outcome));
        }
        NoteAction::Import { file } => {
            let count = notes.import(&file, now)?;
            println!("Imported {} notes from {}", count, file.display());
        }
    }
    Ok(())
}

fn run_tasks(action: TaskAction) -> Result<()> {
    let mut tasks = TasksService::open(&Workspace::discover()?)?;

    match action {
        TaskAction::Add {
            title,
            description,
            priority,
            due,
        } => {
            let id = tasks.add(title, description, priority, due)?.id;
            println!("Added task #{}", id);
        }
        TaskAction::List => print!("{}", with_newline(format_task_list(tasks.list()))),
        TaskAction::View { id } => print!("{}", format_task(tasks.view(id)?)),
        TaskAction::Done { id } => {
            tasks.mark_done(id)?;
            println!("Marked task #{} as done", id);
        }
        TaskAction::Edit {
            id,
            title,
            description,
            priority,
            due,
        } => {
            let patch = TaskPatch {
                title,
                description,
                priority,
                due_date: due,
            };
            tasks.edit(id, patch)?;
            println!("Updated task #{}", id);
        }
        TaskAction::Delete { id } => {
            tasks.delete(id)?;
            println!("Deleted task #{}", id);
        }
        TaskAction::Export { output } => {
            let outcome = tasks.export(output.as_deref())?;
            println!("{}", format_export(EntityKind::Tasks, &outcome));
        }
        TaskAction::Import { file } => {
            let count = tasks.import(&file, Local::now().naive_local())?;
            println!("Imported {} tasks from {}", count, file.display());
        }
    }
    Ok(())
}

fn run_contacts(action: ContactAction) -> Result<()> {
    let mut contacts = ContactsService::open(&Workspace::discover()?)?;

    match action {
        ContactAction::Add { name, phone, email } => {
            let id = contacts.add(name, phone, email)?.id;
            println!("Added contact #{}", id);
        }
        ContactAction::List => {
            print!("{}", with_newline(format_contact_list(contacts.list())))
        }
        ContactAction::View { id } => print!("{}", format_contact(contacts.view(id)?)),
        ContactAction::Search { query } => {
            let found = contacts.search(&query);
            print!("{}", with_newline(format_contact_list(found)));
        }
        ContactAction::Edit {
            id,
            name,
            phone,
            email,
        } => {
            contacts.edit(id, ContactPatch { name, phone, email })?;
            println!("Updated contact #{}", id);
        }
        ContactAction::Delete { id } => {
            contacts.delete(id)?;
            println!("Deleted contact #{}", id);
        }
        ContactAction::Export { output } => {
            let outcome = contacts.export(output.as_deref())?;
            println!("{}", format_export(EntityKind::Contacts, &outcome));
        }
        ContactAction::Import { file } => {
            let count = contacts.import(&file, Local::now().naive_local())?;
            println!("Imported {} contacts from {}", count, file.display());
        }
    }
    Ok(())
}

fn run_finance(action: FinanceAction) -> Result<()> {
    let mut finance = FinanceService::open(&Workspace::discover()?)?;
    let now = Local::now().naive_local();

    match action {
        FinanceAction::Add {
            amount,
            category,
            date,
            description,
        } => {
            let id = finance
                .add(amount, category, date, description, now.date())?
                .id;
            println!("Added finance record #{}", id);
        }
        FinanceAction::List => print!("{}", with_newline(format_finance_list(finance.list()))),
        FinanceAction::View { id } => print!("{}", format_finance_record(finance.view(id)?)),
        FinanceAction::Edit {
            id,
            amount,
            category,
            date,
            description,
        } => {
            let patch = FinancePatch {
                amount,
                category,
                date,
                description,
            };
            finance.edit(id, patch)?;
            println!("Updated finance record #{}", id);
        }
        FinanceAction::Report { start, end } => {
            print!("{}", format_report(&finance.report(&start, &end)?));
        }
        FinanceAction::Delete { id } => {
            finance.delete(id)?;
            println!("Deleted finance record #{}", id);
        }
        FinanceAction::Export { output } => {
            let outcome = finance.export(output.as_deref())?;
            println!("{}", format_export(EntityKind::Finance, &outcome));
        }
        FinanceAction::Import { file } => {
            let count = finance.import(&file, now)?;
            println!("Imported {} finance records from {}", count, file.display());
        }
    }
    Ok(())
}

/// Empty-list notices carry no trailing newline
fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
