use crate::config::{DOWNLOAD_SPEEDS, INSTALL_STEP_INTERVAL, INSTALL_STEP_PERCENT};
use crate::error::InstallError;
use rand::Rng;
use rand::seq::SliceRandom;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallState {
    NotInstalled,
    Installing { progress: u8, speed: &'static str },
    Installed,
}

/// Simulated client download, advanced by polling from the UI loop.
#[derive(Debug)]
pub struct InstallStepper {
    state: InstallState,
    last_step: Option<Instant>,
}

impl InstallStepper {
    pub fn new(installed: bool) -> Self {
        Self {
            state: if installed {
                InstallState::Installed
            } else {
                InstallState::NotInstalled
            },
            last_step: None,
        }
    }

    pub fn state(&self) -> &InstallState {
        &self.state
    }

    pub fn is_installed(&self) -> bool {
        self.state == InstallState::Installed
    }

    pub fn is_installing(&self) -> bool {
        matches!(self.state, InstallState::Installing { .. })
    }

    pub fn start<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> Result<(), InstallError> {
        match self.state {
            InstallState::Installing { .. } => return Err(InstallError::AlreadyInstalling),
            InstallState::Installed => return Err(InstallError::AlreadyInstalled),
            InstallState::NotInstalled => {}
        }
        self.state = InstallState::Installing {
            progress: 0,
            speed: pick_speed(rng),
        };
        self.last_step = Some(now);
        tracing::info!("client download started");
        Ok(())
    }

    /// Returns true on the tick that finishes the installation.
    pub fn tick<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> bool {
        let InstallState::Installing { progress, .. } = self.state else {
            return false;
        };
        let Some(last) = self.last_step else {
            return false;
        };
        if now.saturating_duration_since(last) < INSTALL_STEP_INTERVAL {
            return false;
        }
        self.last_step = Some(now);

        if progress >= 100 {
            self.state = InstallState::Installed;
            self.last_step = None;
            tracing::info!("client installed");
            return true;
        }
        let progress = progress.saturating_add(INSTALL_STEP_PERCENT).min(100);
        self.state = InstallState::Installing {
            progress,
            speed: pick_speed(rng),
        };
        tracing::trace!(progress, "download progress");
        false
    }

    /// Next instant at which `tick` can make progress.
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.is_installing() {
            self.last_step.map(|t| t + INSTALL_STEP_INTERVAL)
        } else {
            None
        }
    }

    pub fn uninstall(&mut self) {
        self.state = InstallState::NotInstalled;
        self.last_step = None;
        tracing::info!("client uninstalled");
    }
}

pub fn phase_label(progress: u8) -> &'static str {
    if progress < 100 {
        "Downloading..."
    } else {
        "Installing..."
    }
}

fn pick_speed<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    DOWNLOAD_SPEEDS.choose(rng).copied().unwrap_or(DOWNLOAD_SPEEDS[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn progress(stepper: &InstallStepper) -> Option<u8> {
        match stepper.state() {
            InstallState::Installing { progress, .. } => Some(*progress),
            _ => None,
        }
    }

    #[test]
    fn runs_to_completion_in_five_percent_steps() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut stepper = InstallStepper::new(false);
        let mut now = Instant::now();
        stepper.start(now, &mut rng).expect("start");
        assert_eq!(progress(&stepper), Some(0));

        let mut seen = vec![0];
        let mut finished_early = false;
        for _ in 0..20 {
            now += INSTALL_STEP_INTERVAL;
            finished_early |= stepper.tick(now, &mut rng);
            if let Some(p) = progress(&stepper) {
                seen.push(p);
            }
        }
        assert!(!finished_early);
        let expected: Vec<u8> = (0..=100).step_by(5).collect();
        assert_eq!(seen, expected);

        now += INSTALL_STEP_INTERVAL;
        assert!(stepper.tick(now, &mut rng));
        assert!(stepper.is_installed());
        assert_eq!(stepper.next_deadline(), None);
    }

    #[test]
    fn does_not_step_before_interval() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut stepper = InstallStepper::new(false);
        let now = Instant::now();
        stepper.start(now, &mut rng).expect("start");
        assert!(!stepper.tick(now + INSTALL_STEP_INTERVAL / 2, &mut rng));
        assert_eq!(progress(&stepper), Some(0));
        assert_eq!(stepper.next_deadline(), Some(now + INSTALL_STEP_INTERVAL));
    }

    #[test]
    fn start_is_rejected_while_busy_or_done() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut stepper = InstallStepper::new(false);
        let now = Instant::now();
        stepper.start(now, &mut rng).expect("start");
        assert_eq!(stepper.start(now, &mut rng), Err(InstallError::AlreadyInstalling));

        let mut done = InstallStepper::new(true);
        assert_eq!(done.start(now, &mut rng), Err(InstallError::AlreadyInstalled));
        done.uninstall();
        assert!(done.start(now, &mut rng).is_ok());
    }

    #[test]
    fn uninstall_mid_download_stops_ticking() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut stepper = InstallStepper::new(false);
        let now = Instant::now();
        stepper.start(now, &mut rng).expect("start");
        stepper.tick(now + INSTALL_STEP_INTERVAL, &mut rng);
        assert_eq!(progress(&stepper), Some(5));

        stepper.uninstall();
        assert_eq!(stepper.state(), &InstallState::NotInstalled);
        assert_eq!(stepper.next_deadline(), None);
        assert!(!stepper.tick(now + INSTALL_STEP_INTERVAL * 5, &mut rng));
        assert_eq!(stepper.state(), &InstallState::NotInstalled);
    }

    #[test]
    fn speed_labels_come_from_the_table() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut stepper = InstallStepper::new(false);
        let mut now = Instant::now();
        stepper.start(now, &mut rng).expect("start");
        for _ in 0..10 {
            now += INSTALL_STEP_INTERVAL;
            stepper.tick(now, &mut rng);
            if let InstallState::Installing { speed, .. } = stepper.state() {
                assert!(DOWNLOAD_SPEEDS.contains(speed));
            }
        }
    }

    #[test]
    fn phase_label_switches_at_full() {
        assert_eq!(phase_label(95), "Downloading...");
        assert_eq!(phase_label(100), "Installing...");
    }
}
