use crate::api::GenerationBackend;
use crate::logger;
use crate::models::{GenerateJob, GenerateOutcome};
use crossbeam_channel::{Receiver, Sender};
use std::thread;

/// Spawn the generation worker. It owns a tokio runtime and runs one job at
/// a time: the manual call first, and the quiz call only if the manual call
/// succeeded. Outcomes stream back over the channel in order. There is no
/// cancellation; a job runs to completion or failure.
pub fn spawn_generation_worker(
    backend: Box<dyn GenerationBackend + Send + Sync>,
    job_rx: Receiver<GenerateJob>,
    outcome_tx: Sender<GenerateOutcome>,
) -> thread::JoinHandle<()> {
    thread::Builder::new()
        .name("manualquiz::generation_worker".to_string())
        .spawn(move || {
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    let _ = outcome_tx.send(GenerateOutcome::Failed {
                        error: format!("failed to start async runtime: {}", e),
                    });
                    return;
                }
            };

            while let Ok(GenerateJob::Generate { files, prompt }) = job_rx.recv() {
                logger::log(&format!(
                    "Worker received generation job ({} files)",
                    files.len()
                ));

                let manual = match rt.block_on(backend.generate_manual(&files, &prompt)) {
                    Ok(manual) => manual,
                    Err(error) => {
                        logger::log(&format!("Manual generation failed: {}", error));
                        let _ = outcome_tx.send(GenerateOutcome::Failed { error });
                        continue;
                    }
                };

                logger::log("Manual ready, requesting quiz");
                let _ = outcome_tx.send(GenerateOutcome::ManualReady {
                    manual: manual.clone(),
                });

                match rt.block_on(backend.generate_quiz(&manual)) {
                    Ok(questions) => {
                        logger::log(&format!("Quiz ready with {} questions", questions.len()));
                        let _ = outcome_tx.send(GenerateOutcome::QuizReady { questions });
                    }
                    Err(error) => {
                        logger::log(&format!("Quiz generation failed: {}", error));
                        let _ = outcome_tx.send(GenerateOutcome::Failed { error });
                    }
                }
            }
            logger::log("Worker channel disconnected, exiting");
        })
        .expect("Failed to spawn generation worker thread")
}
