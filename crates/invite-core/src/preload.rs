//! Bookkeeping for the asset preloader.
//!
//! The browser side performs the actual loads; this module decides the order,
//! counts settled assets and rejects callbacks that arrive after the load run
//! they belong to has been cancelled.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Audio,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Asset {
    pub url: String,
    pub kind: AssetKind,
    /// Loaded serially before everything else.
    pub priority: bool,
}

impl Asset {
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            kind: AssetKind::Image,
            priority: false,
        }
    }

    pub fn audio(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            kind: AssetKind::Audio,
            priority: false,
        }
    }

    pub fn prioritized(mut self) -> Self {
        self.priority = true;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Loaded,
    Failed,
    TimedOut,
}

/// Indices of the manifest split into the serial priority batch and the
/// concurrent remainder, each in manifest order.
pub fn load_order(manifest: &[Asset]) -> (Vec<usize>, Vec<usize>) {
    manifest
        .iter()
        .enumerate()
        .map(|(i, a)| (i, a.priority))
        .fold((Vec::new(), Vec::new()), |(mut serial, mut rest), (i, p)| {
            if p {
                serial.push(i);
            } else {
                rest.push(i);
            }
            (serial, rest)
        })
}

/// Identifies one load run; callbacks carry it back so stale ones can be
/// dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Generation(u32);

#[derive(Clone, Debug)]
pub struct PreloadProgress {
    outcomes: Vec<Option<Outcome>>,
    settled: usize,
    generation: u32,
    active: bool,
}

impl PreloadProgress {
    pub fn new(total: usize) -> Self {
        Self {
            outcomes: vec![None; total],
            settled: 0,
            generation: 0,
            active: false,
        }
    }

    /// Start a load run, discarding any previous results.
    pub fn begin(&mut self) -> Generation {
        self.generation = self.generation.wrapping_add(1);
        self.outcomes.iter_mut().for_each(|o| *o = None);
        self.settled = 0;
        self.active = true;
        Generation(self.generation)
    }

    /// Stop accepting results for the current run.
    pub fn cancel(&mut self) {
        self.active = false;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.active && generation.0 == self.generation
    }

    /// Record an asset's outcome. Returns false for stale generations,
    /// unknown indices and assets that have already settled.
    pub fn settle(&mut self, generation: Generation, index: usize, outcome: Outcome) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        match self.outcomes.get_mut(index) {
            Some(slot) if slot.is_none() => {
                *slot = Some(outcome);
                self.settled += 1;
                true
            }
            _ => false,
        }
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn settled(&self) -> usize {
        self.settled
    }

    /// Fraction in `[0, 1]`; an empty manifest is complete.
    pub fn fraction(&self) -> f32 {
        if self.outcomes.is_empty() {
            return 1.0;
        }
        self.settled as f32 / self.outcomes.len() as f32
    }

    pub fn percent(&self) -> u32 {
        (self.fraction() * 100.0).round() as u32
    }

    pub fn is_complete(&self) -> bool {
        self.settled == self.outcomes.len()
    }

    pub fn failures(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, Some(Outcome::Failed | Outcome::TimedOut)))
            .count()
    }
}
