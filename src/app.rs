// src/app.rs
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use codestat_infra::{
    JsonHistoryRepository, JsonSettingsRepository, WorkspaceWalker, persistence::FileWriter, resolve_state_dir,
};
use codestat_ports::{CancellationToken, NoProgress, ProgressSink};
use codestat_shared_kernel::{ApplicationError, ErrorContext, InfrastructureError, Result, path::workspace_label};
use codestat_usecase::{AnalysisOutcome, AnalyzeRequest, Commands};

use crate::{
    args::{AnalyzeArgs, Args, Command, HistoryArgs, ReportArgs, StatusArgs},
    presentation::{
        format_count, render_history, render_html, render_report, status_detail, status_line,
    },
    progress::SpinnerProgress,
};

/// Runs one subcommand, writing user-facing output to `out`.
///
/// A cancelled analysis is not an error.
pub fn run(args: &Args, cancel: &CancellationToken, out: &mut impl Write) -> Result<()> {
    let root = resolve_root(&args.command.workspace().path)?;
    let state_dir = resolve_state_dir(args.global.state_dir.as_deref());
    log::debug!("workspace {} (state in {})", root.display(), state_dir.display());

    let scanner = WorkspaceWalker::new();
    let settings = JsonSettingsRepository::for_workspace(&root);
    let history = JsonHistoryRepository::for_workspace(&state_dir, &root);
    let commands = Commands::new(&scanner, &settings, &history);

    match &args.command {
        Command::Analyze(analyze) => run_analyze(&commands, &root, analyze, cancel, out),
        Command::Report(report) => run_report(&commands, report, out),
        Command::ToggleStatus(_) => {
            let shown = commands.toggle_status_bar()?;
            writeln!(out, "Status display {}", if shown { "enabled" } else { "disabled" })?;
            Ok(())
        }
        Command::Status(status) => run_status(&commands, status, out),
        Command::History(history) => run_history(&commands, history, out),
    }
}

// Canonical form keeps `.` and the absolute path on the same history file.
fn resolve_root(path: &Path) -> Result<PathBuf> {
    if !path.is_dir() {
        return Err(ApplicationError::NoWorkspace { path: path.to_path_buf() }.into());
    }
    fs::canonicalize(path).map_err(|source| {
        InfrastructureError::FileSystemOperation {
            operation: "canonicalize".to_string(),
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

fn run_analyze(
    commands: &Commands<'_>,
    root: &Path,
    args: &AnalyzeArgs,
    cancel: &CancellationToken,
    out: &mut impl Write,
) -> Result<()> {
    let name = args.name.clone().unwrap_or_else(|| workspace_label(root));
    let mut request = AnalyzeRequest::new(root, name);
    request.extra_excludes = args.exclude.clone();
    request.extra_extensions = args.extensions.clone();

    let spinner = args.progress.then(SpinnerProgress::new);
    let progress: &dyn ProgressSink = match &spinner {
        Some(spinner) => spinner,
        None => &NoProgress,
    };

    let outcome = commands.analyze_now(&request, cancel, progress);
    drop(spinner);

    match outcome {
        AnalysisOutcome::Completed(snapshot) => {
            writeln!(
                out,
                "Analysis complete: {} files, {} lines",
                format_count(snapshot.total_files.value()),
                format_count(snapshot.total_lines.value())
            )?;
            let view = commands.status()?;
            if view.display.show_in_status_bar {
                writeln!(out, "{}", status_line(Some(&snapshot)))?;
            }
            if let Some(path) = &args.report {
                write_file(path, render_html(&snapshot).as_bytes())?;
                writeln!(out, "Report written to {}", path.display())?;
            }
            Ok(())
        }
        AnalysisOutcome::Cancelled { files_scanned } => {
            writeln!(out, "Analysis cancelled after {files_scanned} files; nothing was recorded")?;
            Ok(())
        }
        AnalysisOutcome::Failed(err) => Err(err),
    }
}

fn run_report(commands: &Commands<'_>, args: &ReportArgs, out: &mut impl Write) -> Result<()> {
    let Some(snapshot) = commands.show_last_report()? else {
        writeln!(out, "No statistics for this workspace yet. Run `codestat analyze` first.")?;
        return Ok(());
    };
    let rendered = render_report(&snapshot, args.format)?;
    match &args.output {
        Some(path) => {
            write_file(path, rendered.as_bytes())?;
            writeln!(out, "Report written to {}", path.display())?;
        }
        None => out.write_all(rendered.as_bytes())?,
    }
    Ok(())
}

fn run_status(commands: &Commands<'_>, args: &StatusArgs, out: &mut impl Write) -> Result<()> {
    let view = commands.status()?;
    if !view.display.show_in_status_bar {
        return Ok(());
    }
    let text = if args.detail { status_detail(view.latest.as_ref()) } else { status_line(view.latest.as_ref()) };
    writeln!(out, "{text}")?;
    Ok(())
}

fn run_history(commands: &Commands<'_>, args: &HistoryArgs, out: &mut impl Write) -> Result<()> {
    if args.clear {
        commands.clear_history()?;
        writeln!(out, "History cleared")?;
        return Ok(());
    }
    let log = commands.history()?;
    if log.is_empty() {
        writeln!(out, "No snapshots recorded")?;
    } else {
        write!(out, "{}", render_history(log.entries()))?;
    }
    Ok(())
}

fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    FileWriter::atomic_write(path, data)
        .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })
        .context("could not save the report")
}
