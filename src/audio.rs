//! Audio context
//!
//! Owns the current volume and the sound-effect clips. Anything that plays a
//! sound or changes the volume receives `&mut AudioContext` explicitly; there
//! is no global volume.
//!
//! Clips are WAV files converted once at load time to the output format
//! (signed 16-bit, stereo, 44.1 kHz). A missing clip or audio device only
//! disables playback, it never stops the game.

use sdl2::audio::{AudioCVT, AudioFormat, AudioQueue, AudioSpecDesired, AudioSpecWAV};
use sdl2::AudioSubsystem;
use std::collections::HashMap;
use std::path::Path;

const OUTPUT_FREQUENCY: i32 = 44100;
const OUTPUT_CHANNELS: u8 = 2;
const OUTPUT_SAMPLES: u16 = 512;

/// Volume used when nothing has been saved yet
pub const DEFAULT_VOLUME: f32 = 0.5;

/// Sound effects the GUI knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sfx {
    /// Short whistle, played when a widget action fires
    Click,
    /// Long whistle
    Whistle,
}

impl Sfx {
    pub fn all() -> [Sfx; 2] {
        [Sfx::Click, Sfx::Whistle]
    }

    /// Asset key relative to the assets directory
    pub fn asset_key(&self) -> &'static str {
        match self {
            Sfx::Click => "sfx/silbato_corto.wav",
            Sfx::Whistle => "sfx/silbato_largo.wav",
        }
    }
}

/// The last cue handed to the mixer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundCue {
    pub sfx: Sfx,
    pub volume: f32,
}

pub struct AudioContext {
    volume: f32,
    clips: HashMap<Sfx, Vec<i16>>,
    queue: Option<AudioQueue<i16>>,
    last_cue: Option<SoundCue>,
}

impl AudioContext {
    /// Creates a context with no output device; cues are recorded, not heard
    pub fn muted(volume: f32) -> Self {
        AudioContext {
            volume: volume.clamp(0.0, 1.0),
            clips: HashMap::new(),
            queue: None,
            last_cue: None,
        }
    }

    /// Opens the output queue and loads every clip under `assets_dir`
    pub fn open(audio: &AudioSubsystem, assets_dir: &Path, volume: f32) -> Self {
        let mut context = AudioContext::muted(volume);

        let desired = AudioSpecDesired {
            freq: Some(OUTPUT_FREQUENCY),
            channels: Some(OUTPUT_CHANNELS),
            samples: Some(OUTPUT_SAMPLES),
        };
        match audio.open_queue::<i16, _>(None, &desired) {
            Ok(queue) => {
                queue.resume();
                context.queue = Some(queue);
            }
            Err(e) => {
                log::warn!("No audio device ({}); sound disabled", e);
                return context;
            }
        }

        for sfx in Sfx::all() {
            let path = assets_dir.join(sfx.asset_key());
            match load_clip(&path) {
                Ok(samples) => {
                    context.clips.insert(sfx, samples);
                }
                Err(e) => log::warn!("Sound {:?} unavailable: {}", sfx, e),
            }
        }

        context
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    pub fn last_cue(&self) -> Option<SoundCue> {
        self.last_cue
    }

    /// Plays a clip at the current volume
    ///
    /// Returns `true` if the clip reached the output device.
    pub fn play(&mut self, sfx: Sfx) -> bool {
        self.last_cue = Some(SoundCue {
            sfx,
            volume: self.volume,
        });

        let (Some(queue), Some(clip)) = (&self.queue, self.clips.get(&sfx)) else {
            return false;
        };

        let scaled: Vec<i16> = clip
            .iter()
            .map(|&s| (s as f32 * self.volume) as i16)
            .collect();

        match queue.queue_audio(&scaled) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Failed to queue {:?}: {}", sfx, e);
                false
            }
        }
    }
}

/// Loads a WAV file and converts it to the output sample format
fn load_clip(path: &Path) -> Result<Vec<i16>, String> {
    let wav = AudioSpecWAV::load_wav(path)?;
    let cvt = AudioCVT::new(
        wav.format,
        wav.channels,
        wav.freq,
        AudioFormat::s16_sys(),
        OUTPUT_CHANNELS,
        OUTPUT_FREQUENCY,
    )?;
    let bytes = cvt.convert(wav.buffer().to_vec());

    Ok(bytes
        .chunks_exact(2)
        .map(|pair| i16::from_ne_bytes([pair[0], pair[1]]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_is_clamped() {
        let mut audio = AudioContext::muted(1.7);
        assert_eq!(audio.volume(), 1.0);

        audio.set_volume(-0.2);
        assert_eq!(audio.volume(), 0.0);

        audio.set_volume(0.3);
        assert_eq!(audio.volume(), 0.3);
    }

    #[test]
    fn test_muted_play_records_cue() {
        let mut audio = AudioContext::muted(0.4);
        assert!(audio.last_cue().is_none());

        assert!(!audio.play(Sfx::Click));
        assert_eq!(
            audio.last_cue(),
            Some(SoundCue {
                sfx: Sfx::Click,
                volume: 0.4
            })
        );
    }

    #[test]
    fn test_cue_uses_volume_at_play_time() {
        let mut audio = AudioContext::muted(0.4);
        audio.set_volume(0.9);
        audio.play(Sfx::Whistle);
        assert_eq!(audio.last_cue().unwrap().volume, 0.9);
    }
}
