use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::intake::{format_size, CandidateFile, IntakeController, TokioTimer, UploadStatus};
use crate::ui::notification::Notifier;
use crate::ui::particles::ParticleField;

fn to_candidates(files: Vec<FileData>) -> Vec<CandidateFile> {
    files
        .into_iter()
        .map(|f| CandidateFile::new(f.name(), f.size()))
        .collect()
}

/// Toast text for files the filter turned away, `None` when nothing was.
fn rejection_message(rejected: &[String], accepted: &str) -> Option<String> {
    match rejected {
        [] => None,
        [one] => Some(format!("Skipped {one}: only {accepted} files are accepted")),
        many => Some(format!(
            "Skipped {} files ({}): only {accepted} files are accepted",
            many.len(),
            many.join(", ")
        )),
    }
}

#[component]
pub fn Upload() -> Element {
    let config = use_context::<AppConfig>();
    let mut notifier = use_context::<Notifier>();
    let mut controller =
        use_signal(|| IntakeController::new(config.intake.filter(), config.intake.policy()));
    let mut drag_active = use_signal(|| false);

    // Resolutions still waiting when the view goes away are dropped
    let session = use_hook(CancellationToken::new);
    use_drop({
        let session = session.clone();
        move || {
            debug!("upload view dropped, cancelling pending resolutions");
            session.cancel();
        }
    });

    let submit = use_callback(move |files: Vec<CandidateFile>| {
        if files.is_empty() {
            return;
        }

        let submission = controller.write().submit_batch(files);
        let accepted = controller.read().filter().accept_attr();
        if let Some(message) = rejection_message(&submission.rejected, &accepted) {
            notifier.warn(message);
        }

        for resolution in submission.resolutions {
            let cancel = session.clone();
            spawn(async move {
                let Some(resolution) = resolution.settle(&TokioTimer, &cancel).await else {
                    return;
                };
                let applied = controller
                    .write()
                    .apply(resolution)
                    .map(|record| (record.name.clone(), record.status));

                match applied {
                    Ok((name, UploadStatus::Succeeded)) => notifier.info(format!("{name} uploaded")),
                    Ok((name, UploadStatus::Failed)) => notifier.error(format!("{name} failed to upload")),
                    Ok((_, UploadStatus::Pending)) => {}
                    Err(err) => warn!(%err, "resolution not applied"),
                }
            });
        }
    });

    let accept = controller.read().filter().accept_attr();
    let records = controller.read().records().to_vec();
    let summary = controller.read().summary();
    let zone_class = if drag_active() { "drop-zone drag-active" } else { "drop-zone" };

    rsx! {
        div { class: "page page-upload",
            ParticleField {}

            div { class: "page-heading",
                h1 { "Upload FASTA Files" }
                p { "Drop your genomic sequences here for analysis" }
            }

            div {
                class: "{zone_class}",
                ondragenter: move |e: DragEvent| {
                    e.prevent_default();
                    drag_active.set(true);
                },
                ondragover: move |e: DragEvent| {
                    e.prevent_default();
                    drag_active.set(true);
                },
                ondragleave: move |e: DragEvent| {
                    e.prevent_default();
                    drag_active.set(false);
                },
                ondrop: move |e: DragEvent| {
                    e.prevent_default();
                    drag_active.set(false);
                    submit.call(to_candidates(e.files()));
                },

                div { class: "drop-icon", "\u{2601}" }
                h3 { "Drop FASTA files here" }
                p { class: "drop-hint", "Supports .fasta, .fa, and .fas file formats" }

                input {
                    id: "file-upload",
                    class: "hidden-input",
                    r#type: "file",
                    multiple: true,
                    accept: "{accept}",
                    onchange: move |e: FormEvent| submit.call(to_candidates(e.files())),
                }
                label { r#for: "file-upload", class: "btn-primary", "Choose Files" }
            }

            if !records.is_empty() {
                div { class: "upload-list",
                    div { class: "upload-list-head",
                        h3 { "Uploaded Files" }
                        span { class: "upload-summary",
                            "{summary.total()} files \u{b7} {summary.pending} processing \u{b7} {summary.succeeded} completed \u{b7} {summary.failed} failed"
                        }
                    }

                    for record in records.iter() {
                        div { key: "{record.id}", class: "upload-row",
                            div { class: "upload-file",
                                span { class: "upload-icon", "\u{1F4C4}" }
                                div {
                                    p { class: "upload-name", "{record.name}" }
                                    p { class: "upload-size", "{format_size(record.size_bytes)}" }
                                }
                            }
                            span { class: "{record.status.badge_class()}", "{record.status.label()}" }
                        }
                    }
                }
            }
        }
    }
}
