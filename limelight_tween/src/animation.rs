// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::rc::Rc;

use crate::TweenTrack;

/// A shareable handle to an [`Animation`].
///
/// The [`AnimationManager`](crate::AnimationManager) and application code
/// hold clones of the same handle; animation identity is pointer identity of
/// the handle.
pub type SharedAnimation = Rc<RefCell<Animation>>;

/// The lifecycle state of an [`Animation`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnimationState {
    /// Not yet registered with a manager.
    NotQueued,
    /// Registered and waiting for its first frame.
    Queued,
    /// Advancing forward each frame.
    Playing,
    /// Advancing backward each frame.
    PlayingInReverse,
    /// Suspended while playing forward.
    Paused,
    /// Suspended while playing backward.
    PausedInReverse,
    /// Finished normally. Terminal until the animation is run again.
    Completed,
    /// Terminated before finishing. Terminal until the animation is run again.
    Cancelled,
}

/// A playable, pausable state machine around one tween track.
///
/// The animation owns the elapsed-time clock; the track it drives is pure in
/// the progress fraction. Looping restarts the clock when the track
/// completes, and reversal plays the track back down to zero before
/// completing.
pub struct Animation {
    track: Box<dyn TweenTrack>,
    state: AnimationState,
    elapsed: f64,
    looping: bool,
    reversing: bool,
}

impl Animation {
    /// Create an animation driving the given track, initially not queued.
    pub fn new(track: Box<dyn TweenTrack>) -> Self {
        Self {
            track,
            state: AnimationState::NotQueued,
            elapsed: 0.0,
            looping: false,
            reversing: false,
        }
    }

    /// Create an animation and wrap it in a [`SharedAnimation`] handle.
    pub fn shared(track: Box<dyn TweenTrack>) -> SharedAnimation {
        Rc::new(RefCell::new(Self::new(track)))
    }

    /// A new animation playing this one's track backward, with each easing
    /// curve direction-swapped.
    ///
    /// The new animation owns its own clock and state, initially not
    /// queued; this animation is unaffected.
    pub fn inverse(&self) -> Self {
        Self::new(self.track.inverse())
    }

    /// The current lifecycle state.
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Whether the animation restarts from the beginning when it completes.
    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    /// Whether the animation plays back down to the start before completing.
    pub fn set_reversing(&mut self, reversing: bool) {
        self.reversing = reversing;
    }

    /// Whether the animation has reached a terminal state, either by
    /// finishing or by being terminated.
    pub fn is_completed(&self) -> bool {
        matches!(
            self.state,
            AnimationState::Completed | AnimationState::Cancelled
        )
    }

    /// Whether the animation is advancing (or queued to advance).
    pub fn is_playing(&self) -> bool {
        matches!(
            self.state,
            AnimationState::Queued | AnimationState::Playing | AnimationState::PlayingInReverse
        )
    }

    /// Whether the animation is suspended.
    pub fn is_paused(&self) -> bool {
        matches!(
            self.state,
            AnimationState::Paused | AnimationState::PausedInReverse
        )
    }

    /// Begin or resume playback. Queues a new animation for its first frame,
    /// resumes a paused one in its prior direction, and does nothing for an
    /// animation already playing or in a terminal state.
    pub fn play(&mut self) {
        self.state = match self.state {
            AnimationState::NotQueued => AnimationState::Queued,
            AnimationState::Paused => AnimationState::Playing,
            AnimationState::PausedInReverse => AnimationState::PlayingInReverse,
            other => other,
        };
    }

    /// Suspend playback, remembering the direction. Does nothing unless the
    /// animation is playing or queued.
    pub fn pause(&mut self) {
        self.state = match self.state {
            AnimationState::Queued | AnimationState::Playing => AnimationState::Paused,
            AnimationState::PlayingInReverse => AnimationState::PausedInReverse,
            other => other,
        };
    }

    /// Terminate the animation. It will be dropped by its manager on the
    /// next frame. Does nothing if the animation never ran or already
    /// reached a terminal state.
    pub fn terminate(&mut self) {
        if !matches!(
            self.state,
            AnimationState::NotQueued | AnimationState::Completed | AnimationState::Cancelled
        ) {
            self.state = AnimationState::Cancelled;
        }
    }

    /// Rewind the clock to zero. An animation that was advancing resumes
    /// playing forward; anything else returns to the unqueued state.
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
        self.state = if self.is_playing() {
            AnimationState::Playing
        } else {
            AnimationState::NotQueued
        };
    }

    // Called by the manager when a completed animation is run again.
    pub(crate) fn requeue(&mut self) {
        self.elapsed = 0.0;
        self.state = AnimationState::NotQueued;
    }

    /// Advance by one frame of `frame_rate` seconds, delivering the track
    /// update for the current clock position first.
    pub(crate) fn update_frame(&mut self, frame_rate: f64) {
        if self.state == AnimationState::Queued {
            self.state = AnimationState::Playing;
        }
        let duration = self.track.duration();
        match self.state {
            AnimationState::Playing => {
                // A zero-duration track completes on its first frame.
                let fraction = if duration > 0.0 {
                    self.elapsed / duration
                } else {
                    1.0
                };
                self.track.update(fraction);
                if fraction >= 1.0 {
                    if self.reversing {
                        self.state = AnimationState::PlayingInReverse;
                    } else if self.looping {
                        self.elapsed = 0.0;
                    } else {
                        self.state = AnimationState::Completed;
                    }
                } else {
                    self.elapsed += frame_rate;
                }
            }
            AnimationState::PlayingInReverse => {
                let fraction = if duration > 0.0 {
                    self.elapsed / duration
                } else {
                    0.0
                };
                self.track.update(fraction);
                if fraction <= 0.0 {
                    if self.looping {
                        self.elapsed = 0.0;
                        self.state = AnimationState::Playing;
                    } else {
                        self.state = AnimationState::Completed;
                    }
                } else {
                    self.elapsed -= frame_rate;
                }
            }
            _ => {}
        }
    }
}

impl Debug for Animation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Animation")
            .field("state", &self.state)
            .field("elapsed", &self.elapsed)
            .field("duration", &self.track.duration())
            .field("looping", &self.looping)
            .field("reversing", &self.reversing)
            .finish_non_exhaustive()
    }
}
