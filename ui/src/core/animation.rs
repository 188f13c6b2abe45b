//! Post-change animation window for the hero image.
//!
//! `HeroAnimation` remembers the last flavor name it saw. A different name
//! flips it to `Animating` and hands back a generation number; the caller
//! schedules a reset carrying that number. Only the reset for the latest
//! generation returns the state to `Idle`, so a reset that outlives its
//! cancellation cannot clobber a newer animation.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationPhase {
    #[default]
    Idle,
    Animating,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroAnimation {
    previous: Option<String>,
    phase: AnimationPhase,
    generation: u64,
}

impl HeroAnimation {
    /// Record the flavor being rendered. Returns the generation to reset when a
    /// change started a new animation window.
    pub fn observe(&mut self, flavor_name: &str) -> Option<u64> {
        match self.previous.as_deref() {
            None => {
                self.previous = Some(flavor_name.to_string());
                None
            }
            Some(prev) if prev == flavor_name => None,
            Some(_) => {
                self.previous = Some(flavor_name.to_string());
                self.phase = AnimationPhase::Animating;
                self.generation = self.generation.wrapping_add(1);
                Some(self.generation)
            }
        }
    }

    /// Close the animation window opened by `generation`. Returns `false` for
    /// stale generations.
    pub fn settle(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase == AnimationPhase::Idle {
            return false;
        }
        self.phase = AnimationPhase::Idle;
        true
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.phase == AnimationPhase::Animating
    }

    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }
}
