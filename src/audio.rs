use std::io::{self, Write};

use log::debug;

/// Sound cues the game can request.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SoundCue {
    Crunch,
    LifeLost,
    LevelUp,
    GameOver,
}

/// Fire-and-forget audio output.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Rings the terminal bell for every cue.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl AudioSink for TerminalBell {
    fn play(&mut self, cue: SoundCue) {
        debug!("sound cue {cue:?}");

        let mut stdout = io::stdout();
        // A failed bell is not worth interrupting the game for.
        let _ = stdout.write_all(b"\x07").and_then(|()| stdout.flush());
    }
}

/// Drops every cue.
#[derive(Debug, Default)]
pub struct Mute;

impl AudioSink for Mute {
    fn play(&mut self, cue: SoundCue) {
        debug!("sound cue {cue:?} (muted)");
    }
}

/// Keeps every cue it receives, in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub played: Vec<SoundCue>,
}

impl AudioSink for RecordingSink {
    fn play(&mut self, cue: SoundCue) {
        self.played.push(cue);
    }
}

impl<A: AudioSink + ?Sized> AudioSink for Box<A> {
    fn play(&mut self, cue: SoundCue) {
        (**self).play(cue);
    }
}
