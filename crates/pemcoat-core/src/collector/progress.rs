use crate::core::models::MaterialClass;

/// Events emitted while a collection run walks its search plan.
#[derive(Debug, Clone)]
pub enum Progress {
    RunStart {
        total_systems: u64,
    },
    SystemStart {
        chemical_system: String,
        material_class: MaterialClass,
    },
    SystemFinish {
        found: usize,
        stable: usize,
    },
    SystemFailed {
        chemical_system: String,
        message: String,
    },
    RunFinish,
    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
