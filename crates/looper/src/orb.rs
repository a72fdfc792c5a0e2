use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use orbloop_domain::{DomainError, EstimationResult};
use orbloop_tempo::OnsetTempoEstimator;

use crate::take::{take_name, Take};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LoopOrbState {
    #[default]
    ReadyToRecord,
    Recording,
    Pausing,
    Playing,
    Disabled,
}

/// Allowed `(from, to)` pairs. Staying in the same state is always allowed and
/// not listed.
const TRANSITIONS: &[(LoopOrbState, LoopOrbState)] = &[
    (LoopOrbState::Disabled, LoopOrbState::ReadyToRecord),
    (LoopOrbState::ReadyToRecord, LoopOrbState::Recording),
    (LoopOrbState::Recording, LoopOrbState::Pausing),
    (LoopOrbState::Playing, LoopOrbState::Pausing),
    (LoopOrbState::Pausing, LoopOrbState::Playing),
    (LoopOrbState::ReadyToRecord, LoopOrbState::Disabled),
    (LoopOrbState::Recording, LoopOrbState::Disabled),
    (LoopOrbState::Pausing, LoopOrbState::Disabled),
    (LoopOrbState::Playing, LoopOrbState::Disabled),
];

impl LoopOrbState {
    pub fn can_transition_to(self, target: LoopOrbState) -> bool {
        self == target || TRANSITIONS.contains(&(self, target))
    }
}

/// Side effects the host must carry out after a transition.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrbEffect {
    StartRecording,
    StopRecording { take_name: String },
    StartPlayback,
    StopPlayback,
}

#[derive(Debug, Error)]
pub enum OrbError {
    #[error("invalid transition from {from:?} to {to:?}")]
    InvalidTransition {
        from: LoopOrbState,
        to: LoopOrbState,
    },
    #[error("orb {0} has no recorded take")]
    NoTake(String),
    #[error(transparent)]
    Config(#[from] DomainError),
}

/// A single loop slot: records a take, then plays it back in a loop.
#[derive(Debug, Clone)]
pub struct LoopOrb {
    label: String,
    state: LoopOrbState,
    next_take: u32,
    take: Option<Take>,
}

impl LoopOrb {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            state: LoopOrbState::default(),
            next_take: 0,
            take: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn state(&self) -> LoopOrbState {
        self.state
    }

    pub fn take(&self) -> Option<&Take> {
        self.take.as_ref()
    }

    pub fn transition(&mut self, target: LoopOrbState) -> Result<Vec<OrbEffect>, OrbError> {
        let from = self.state;
        if from == target {
            return Ok(Vec::new());
        }
        if !from.can_transition_to(target) {
            warn!(label = %self.label, ?from, to = ?target, "rejected orb transition");
            return Err(OrbError::InvalidTransition { from, to: target });
        }

        let effects = match (from, target) {
            (LoopOrbState::ReadyToRecord, LoopOrbState::Recording) => {
                vec![OrbEffect::StartRecording]
            }
            (LoopOrbState::Recording, _) => vec![OrbEffect::StopRecording {
                take_name: self.allocate_take_name(),
            }],
            (LoopOrbState::Playing, _) => vec![OrbEffect::StopPlayback],
            (LoopOrbState::Pausing, LoopOrbState::Playing) => vec![OrbEffect::StartPlayback],
            _ => Vec::new(),
        };
        debug!(label = %self.label, ?from, to = ?target, "orb transition");
        self.state = target;
        Ok(effects)
    }

    /// Starts recording when ready, stops it while recording, otherwise does
    /// nothing.
    pub fn tap(&mut self) -> Result<Vec<OrbEffect>, OrbError> {
        match self.state {
            LoopOrbState::ReadyToRecord => self.transition(LoopOrbState::Recording),
            LoopOrbState::Recording => self.transition(LoopOrbState::Pausing),
            _ => Ok(Vec::new()),
        }
    }

    pub fn toggle_playback(&mut self) -> Result<Vec<OrbEffect>, OrbError> {
        match self.state {
            LoopOrbState::Pausing => self.transition(LoopOrbState::Playing),
            LoopOrbState::Playing => self.transition(LoopOrbState::Pausing),
            _ => Ok(Vec::new()),
        }
    }

    pub fn attach_take(&mut self, take: Take) {
        self.take = Some(take);
    }

    /// Estimates the tempo of the attached take at the take's own sample rate.
    pub fn tempo(&self, estimator: &OnsetTempoEstimator) -> Result<EstimationResult, OrbError> {
        let take = self
            .take
            .as_ref()
            .ok_or_else(|| OrbError::NoTake(self.label.clone()))?;
        let config = estimator
            .config()
            .with_sample_rate(take.sample_rate as f32);
        let result = OnsetTempoEstimator::new(config)?.estimate(&take.samples);
        debug!(label = %self.label, take = %take.name, %result, "estimated take tempo");
        Ok(result)
    }

    fn allocate_take_name(&mut self) -> String {
        let name = take_name(&self.label, self.next_take);
        self.next_take += 1;
        name
    }
}
