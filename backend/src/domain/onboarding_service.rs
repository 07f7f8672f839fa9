use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

/// In-memory source for the onboarding flag.
///
/// The flag lives only in process memory; a restart starts over with an
/// un-onboarded user. The source is constructed once at the composition root
/// and handed to whoever needs it.
pub struct OnboardingSource {
    flag: Arc<watch::Sender<bool>>,
}

impl OnboardingSource {
    pub fn new() -> Self {
        let (flag, _) = watch::channel(false);
        Self { flag: Arc::new(flag) }
    }

    /// Subscribe to the onboarding flag
    pub fn user_onboarded(&self) -> watch::Receiver<bool> {
        self.flag.subscribe()
    }

    /// Mark the user as onboarded
    pub fn set_user_onboarded(&self) {
        self.flag.send_replace(true);
    }
}

impl Default for OnboardingSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Service exposing the onboarding flag to the application
#[derive(Clone)]
pub struct OnboardingService {
    source: Arc<OnboardingSource>,
}

impl OnboardingService {
    /// Create a new OnboardingService
    pub fn new(source: Arc<OnboardingSource>) -> Self {
        Self { source }
    }

    /// Subscribe to the onboarding flag
    pub fn user_onboarded(&self) -> watch::Receiver<bool> {
        self.source.user_onboarded()
    }

    /// Mark the user as onboarded
    pub fn set_user_onboarded(&self) {
        info!("Marking user as onboarded");
        self.source.set_user_onboarded();
    }
}
