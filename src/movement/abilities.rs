//! Movement domain: the per-character ability state machine.
//!
//! Every ability acquisition goes through exactly one eligibility-gated
//! `commit_*` operation: the commit returns whether the ability was legal and
//! mutates nothing when it was not. Double jumps and double dashes are
//! unrepresentable rather than merely unlikely.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Phase of the jump grace window after walking off a ledge.
///
/// `Expired` is distinct from `Idle` so a stale countdown firing after the
/// character has already re-grounded cannot re-arm a jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CoyotePhase {
    /// Grounded, or the window was consumed by landing.
    #[default]
    Idle,
    /// Recently left the ground without jumping; a jump is still accepted.
    Armed,
    /// The grace countdown ran out; no jump until the next grounding.
    Expired,
}

/// Ground/airborne status plus per-airborne-period ability usage.
///
/// One instance per character, owned by the character entity. Tallies reset
/// exactly on the airborne-to-grounded edge in [`AbilityState::set_grounded`].
/// `dead` is absorbing: once set, every mutating operation is a guarded no-op.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityState {
    grounded: bool,
    jump_tally: u32,
    air_dash_tally: u32,
    fast_fall_tally: u32,
    coyote: CoyotePhase,
    air_dash_active: bool,
    dead: bool,
}

impl Default for AbilityState {
    fn default() -> Self {
        Self {
            grounded: true,
            jump_tally: 0,
            air_dash_tally: 0,
            fast_fall_tally: 0,
            coyote: CoyotePhase::Idle,
            air_dash_active: false,
            dead: false,
        }
    }
}

impl AbilityState {
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn coyote_phase(&self) -> CoyotePhase {
        self.coyote
    }

    pub fn is_air_dash_active(&self) -> bool {
        self.air_dash_active
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Report this tick's ground-contact result from the physics back end.
    ///
    /// Unchanged contact is a no-op. Landing (false -> true) resets all
    /// ability tallies, returns the coyote phase to `Idle`, and clears any
    /// in-progress air dash. Leaving the ground (true -> false) arms the
    /// coyote window, but only if the character has not jumped and the window
    /// was not already consumed this airborne period; the caller owns the
    /// real-time countdown and calls [`Self::expire_coyote_time`] when it
    /// runs out.
    pub fn set_grounded(&mut self, grounded: bool) {
        if self.dead || grounded == self.grounded {
            return;
        }

        self.grounded = grounded;
        if grounded {
            self.jump_tally = 0;
            self.air_dash_tally = 0;
            self.fast_fall_tally = 0;
            self.coyote = CoyotePhase::Idle;
            self.air_dash_active = false;
        } else if self.jump_tally == 0 && self.coyote == CoyotePhase::Idle {
            self.coyote = CoyotePhase::Armed;
        }

        debug_assert!(!(self.air_dash_active && self.grounded));
    }

    /// Jump is legal on the ground or inside the armed coyote window, once
    /// per airborne period.
    pub fn can_jump(&self) -> bool {
        !self.dead && (self.grounded || self.coyote == CoyotePhase::Armed) && self.jump_tally == 0
    }

    /// Commit a jump if legal. A committed jump also restores fast-fall
    /// eligibility for the remainder of the airborne period.
    pub fn commit_jump(&mut self) -> bool {
        let legal = self.can_jump();
        if legal {
            self.jump_tally += 1;
            self.fast_fall_tally = 0;
        }
        legal
    }

    /// Scripted-jump variant: bypasses the eligibility predicate but is
    /// otherwise identical in effect. Never call this for player-triggered
    /// jumps. Death still masks it.
    #[allow(dead_code)]
    pub fn force_jump(&mut self) -> bool {
        let legal = self.can_jump();
        if !self.dead {
            self.jump_tally += 1;
            self.fast_fall_tally = 0;
        }
        legal
    }

    /// Air dash is legal only while airborne, once per airborne period, and
    /// not while a dash is already in progress.
    pub fn can_air_dash(&self) -> bool {
        !self.dead && !self.grounded && self.air_dash_tally == 0 && !self.air_dash_active
    }

    pub fn commit_air_dash(&mut self) -> bool {
        let legal = self.can_air_dash();
        if legal {
            self.air_dash_tally += 1;
            self.air_dash_active = true;
        }
        debug_assert!(!(self.air_dash_active && self.grounded));
        legal
    }

    /// End an in-progress air dash. Idempotent: reports the previous active
    /// flag, so a second call is legal and returns false.
    pub fn finish_air_dash(&mut self) -> bool {
        if self.dead {
            return false;
        }
        let was_active = self.air_dash_active;
        self.air_dash_active = false;
        was_active
    }

    pub fn can_fast_fall(&self) -> bool {
        !self.dead && self.fast_fall_tally == 0
    }

    pub fn commit_fast_fall(&mut self) -> bool {
        let legal = self.can_fast_fall();
        if legal {
            self.fast_fall_tally += 1;
        }
        legal
    }

    /// Close the jump grace window until the next grounding event. Called by
    /// the countdown owner; late delivery after re-grounding is harmless
    /// because landing resets the phase to `Idle` first.
    pub fn expire_coyote_time(&mut self) {
        if self.dead {
            return;
        }
        self.coyote = CoyotePhase::Expired;
    }

    /// Mark the character dead. Returns true only on the living -> dead
    /// transition edge; `dead` never returns to false.
    pub fn mark_dead(&mut self) -> bool {
        let edge = !self.dead;
        self.dead = true;
        edge
    }
}
