// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::TweenTrack;

/// An ordered composition of tween tracks behind one combined duration.
///
/// Progress over the whole sequence is mapped onto exactly one child at a
/// time. The final child acts as a catch-all, so a progress fraction of
/// `1.0` always lands on it at its own fraction `1.0`; accumulated floating
/// point error in the child durations can never leave the sequence with no
/// active child.
pub struct TweenSequence {
    tracks: Vec<Box<dyn TweenTrack>>,
    duration: f64,
}

impl TweenSequence {
    /// Create a sequence from the given tracks, played in order.
    ///
    /// # Panics
    ///
    /// Panics if `tracks` is empty.
    pub fn new(tracks: Vec<Box<dyn TweenTrack>>) -> Self {
        assert!(
            !tracks.is_empty(),
            "a TweenSequence requires at least one track"
        );
        let duration = tracks.iter().map(|t| t.duration()).sum();
        Self { tracks, duration }
    }

    /// Create a sequence with a uniform pause of `delay` seconds between
    /// each pair of consecutive tracks.
    ///
    /// # Panics
    ///
    /// Panics if `tracks` is empty.
    pub fn with_delay(tracks: Vec<Box<dyn TweenTrack>>, delay: f64) -> Self {
        assert!(
            !tracks.is_empty(),
            "a TweenSequence requires at least one track"
        );
        let mut sequence = Self {
            tracks: Vec::new(),
            duration: 0.0,
        };
        for (index, track) in tracks.into_iter().enumerate() {
            if index > 0 && delay > 0.0 {
                sequence.push_delay(delay);
            }
            sequence.push(track);
        }
        sequence
    }

    /// Append a track to the end of the sequence.
    pub fn push(&mut self, track: Box<dyn TweenTrack>) {
        self.duration += track.duration();
        self.tracks.push(track);
    }

    /// Append a pause of `duration` seconds during which no value updates
    /// are delivered.
    pub fn push_delay(&mut self, duration: f64) {
        self.push(Box::new(Delay { duration }));
    }

    /// The index of the child active at `elapsed` seconds, and the child's
    /// local start time. All children before the last cover the half-open
    /// interval of their duration; the last child covers everything after.
    fn track_at(&self, elapsed: f64) -> (usize, f64) {
        let mut start = 0.0;
        for (index, track) in self.tracks.iter().enumerate() {
            let end = start + track.duration();
            if index + 1 == self.tracks.len() || elapsed < end {
                return (index, start);
            }
            start = end;
        }
        unreachable!("sequence is never empty");
    }
}

impl TweenTrack for TweenSequence {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn update(&mut self, fraction: f64) {
        let elapsed = fraction * self.duration;
        let (index, start) = self.track_at(elapsed);
        let track = &mut self.tracks[index];
        let child_duration = track.duration();
        let child_fraction = if child_duration > 0.0 {
            (elapsed - start) / child_duration
        } else {
            1.0
        };
        track.update(child_fraction);
    }

    fn inverse(&self) -> Box<dyn TweenTrack> {
        let tracks = self.tracks.iter().rev().map(|t| t.inverse()).collect();
        Box::new(Self {
            tracks,
            duration: self.duration,
        })
    }
}

impl Debug for TweenSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("TweenSequence")
            .field("tracks", &self.tracks.len())
            .field("duration", &self.duration)
            .finish_non_exhaustive()
    }
}

/// A track that consumes time without delivering any values.
struct Delay {
    duration: f64,
}

impl TweenTrack for Delay {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn update(&mut self, _fraction: f64) {}

    fn inverse(&self) -> Box<dyn TweenTrack> {
        Box::new(Self {
            duration: self.duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::{EasingStyle, Tween};

    fn two_stage() -> (TweenSequence, Rc<Cell<f64>>) {
        let value = Rc::new(Cell::new(f64::NAN));
        let first_sink = Rc::clone(&value);
        let second_sink = Rc::clone(&value);
        let sequence = TweenSequence::new(vec![
            Box::new(Tween::new(0.0, 10.0, 1.0, EasingStyle::Linear, move |v| {
                first_sink.set(v);
            })),
            Box::new(Tween::new(10.0, 50.0, 3.0, EasingStyle::Linear, move |v| {
                second_sink.set(v);
            })),
        ]);
        (sequence, value)
    }

    #[test]
    fn duration_is_the_sum_of_children() {
        let (sequence, _) = two_stage();
        assert_eq!(sequence.duration(), 4.0);
    }

    #[test]
    fn progress_maps_onto_children_in_order() {
        let (mut sequence, value) = two_stage();
        // 0.125 of 4s = 0.5s: halfway through the first child.
        sequence.update(0.125);
        assert_eq!(value.get(), 5.0);
        // 0.5 of 4s = 2s: one third through the second child.
        sequence.update(0.5);
        assert!((value.get() - (10.0 + 40.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn fraction_one_resolves_to_the_final_child() {
        let (mut sequence, value) = two_stage();
        sequence.update(1.0);
        assert_eq!(value.get(), 50.0);
    }

    #[test]
    fn delays_pass_time_without_updates() {
        let value = Rc::new(Cell::new(f64::NAN));
        let sink = Rc::clone(&value);
        let mut sequence = TweenSequence::new(vec![Box::new(Tween::new(
            0.0,
            10.0,
            1.0,
            EasingStyle::Linear,
            move |v| sink.set(v),
        ))]);
        sequence.push_delay(1.0);
        assert_eq!(sequence.duration(), 2.0);
        sequence.update(0.25);
        assert_eq!(value.get(), 5.0);
        // Inside the delay: the recorded value is untouched.
        sequence.update(0.75);
        assert_eq!(value.get(), 5.0);
    }

    #[test]
    fn with_delay_pauses_between_consecutive_tracks() {
        let value = Rc::new(Cell::new(f64::NAN));
        let first_sink = Rc::clone(&value);
        let second_sink = Rc::clone(&value);
        let mut sequence = TweenSequence::with_delay(
            vec![
                Box::new(Tween::new(0.0, 10.0, 1.0, EasingStyle::Linear, move |v| {
                    first_sink.set(v);
                })),
                Box::new(Tween::new(10.0, 20.0, 1.0, EasingStyle::Linear, move |v| {
                    second_sink.set(v);
                })),
            ],
            2.0,
        );
        assert_eq!(sequence.duration(), 4.0);
        sequence.update(0.125);
        assert_eq!(value.get(), 5.0);
        // 1.5s into the sequence falls inside the interleaved delay.
        sequence.update(0.375);
        assert_eq!(value.get(), 5.0);
        sequence.update(1.0);
        assert_eq!(value.get(), 20.0);
    }

    #[test]
    fn zero_duration_children_report_completion() {
        let value = Rc::new(Cell::new(f64::NAN));
        let sink = Rc::clone(&value);
        let mut sequence = TweenSequence::new(vec![Box::new(Tween::new(
            3.0,
            7.0,
            0.0,
            EasingStyle::Linear,
            move |v| sink.set(v),
        ))]);
        sequence.update(0.0);
        assert_eq!(value.get(), 7.0);
    }

    #[test]
    fn inverse_reverses_child_order() {
        let (sequence, value) = two_stage();
        let mut inverse = sequence.inverse();
        assert_eq!(inverse.duration(), 4.0);
        // The 3s child now comes first; its inverse runs 50 -> 10.
        inverse.update(0.0);
        assert_eq!(value.get(), 50.0);
        inverse.update(1.0);
        assert_eq!(value.get(), 0.0);
    }

    #[test]
    #[should_panic(expected = "at least one track")]
    fn empty_sequence_is_rejected() {
        let _ = TweenSequence::new(Vec::new());
    }
}
