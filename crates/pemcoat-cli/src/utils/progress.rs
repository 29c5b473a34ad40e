use indicatif::{ProgressBar, ProgressStyle};
use pemcoat::collector::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Renders collection progress as a per-system progress bar on stderr.
#[derive(Clone)]
pub struct CollectProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CollectProgressHandler {
    pub fn new() -> Self {
        let pb = ProgressBar::new(0)
            .with_style(Self::bar_style())
            .with_message("Initializing...");
        pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        pb.finish_and_clear();

        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb_clone = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb_guard) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::RunStart { total_systems } => {
                    pb_guard.reset();
                    pb_guard.set_length(total_systems);
                    pb_guard.set_position(0);
                    pb_guard.set_style(Self::bar_style());
                }
                Progress::SystemStart {
                    chemical_system,
                    material_class,
                } => {
                    pb_guard.set_message(format!("{} ({})", chemical_system, material_class));
                }
                Progress::SystemFinish { found, stable } => {
                    pb_guard.inc(1);
                    pb_guard.println(format!("  Found {} materials ({} stable)", found, stable));
                }
                Progress::SystemFailed {
                    chemical_system,
                    message,
                } => {
                    pb_guard.inc(1);
                    pb_guard.println(format!("  ⚠ {} failed: {}", chemical_system, message));
                }
                Progress::RunFinish => {
                    pb_guard.finish_with_message("✓ Done");
                }
                Progress::Message(msg) => {
                    pb_guard.println(format!("  {}", msg));
                }
            }
        })
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<20} [{bar:40.cyan/blue}] {pos}/{len}")
            .expect("Failed to create bar style template")
            .progress_chars("##-")
    }
}

impl Default for CollectProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pemcoat::core::models::MaterialClass;

    #[test]
    fn handler_initializes_in_a_clean_state() {
        let handler = CollectProgressHandler::new();
        let pb = handler.pb.lock().unwrap();
        assert_eq!(pb.length(), Some(0));
        assert!(pb.is_finished());
    }

    #[test]
    fn callback_tracks_run_progress() {
        let handler = CollectProgressHandler::new();
        let callback = handler.get_callback();

        callback(Progress::RunStart { total_systems: 32 });
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.length(), Some(32));
            assert_eq!(pb.position(), 0);
        }

        callback(Progress::SystemStart {
            chemical_system: "Ti-O".to_string(),
            material_class: MaterialClass::Oxide,
        });
        callback(Progress::SystemFinish {
            found: 12,
            stable: 3,
        });
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.position(), 1);
        }

        callback(Progress::SystemFailed {
            chemical_system: "Ir-O".to_string(),
            message: "quota exceeded".to_string(),
        });
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.position(), 2);
        }

        callback(Progress::RunFinish);
        {
            let pb = handler.pb.lock().unwrap();
            assert!(pb.is_finished());
            assert_eq!(pb.message(), "✓ Done");
        }
    }
}
