use crate::constants::{MUSIC_FADE_IN_SEC, MUSIC_TOGGLE_RAMP_SEC, MUSIC_VOLUME};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("[audio] {} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

/// Looping background track: `<audio>` -> MediaElementSource -> gain -> out.
pub struct MusicPlayer {
    audio_ctx: web::AudioContext,
    element: web::HtmlAudioElement,
    gain: web::GainNode,
    playing: bool,
}

impl MusicPlayer {
    pub fn new(src: &str) -> Result<Self, ()> {
        let audio_ctx = web::AudioContext::new().map_err(|e| {
            log::error!("[audio] AudioContext error: {:?}", e);
        })?;
        let element = web::HtmlAudioElement::new_with_src(src).map_err(|e| {
            log::error!("[audio] <audio> error: {:?}", e);
        })?;
        element.set_loop(true);
        element.set_preload("auto");
        let source = audio_ctx
            .create_media_element_source(&element)
            .map_err(|e| {
                log::error!("[audio] MediaElementSource error: {:?}", e);
            })?;
        let gain = create_gain(&audio_ctx, 0.0, "music")?;
        _ = source.connect_with_audio_node(&gain);
        _ = gain.connect_with_audio_node(&audio_ctx.destination());
        Ok(Self {
            audio_ctx,
            element,
            gain,
            playing: false,
        })
    }

    fn ramp_to(&self, value: f32, seconds: f64) {
        let now = self.audio_ctx.current_time();
        let param = self.gain.gain();
        _ = param.cancel_scheduled_values(now);
        _ = param.set_value_at_time(param.value(), now);
        _ = param.linear_ramp_to_value_at_time(value, now + seconds);
    }

    /// Resume the context and start playback with a fade-in. Must run inside
    /// a user gesture for autoplay policies.
    pub fn start(&mut self) {
        _ = self.audio_ctx.resume();
        match self.element.play() {
            Ok(promise) => {
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::warn!("[audio] play rejected: {:?}", e);
                    }
                });
            }
            Err(e) => {
                log::warn!("[audio] play failed: {:?}", e);
                return;
            }
        }
        self.ramp_to(MUSIC_VOLUME, MUSIC_FADE_IN_SEC);
        self.playing = true;
    }

    /// Mute or unmute with a short ramp; returns the new state.
    pub fn toggle(&mut self) -> bool {
        if self.playing {
            self.ramp_to(0.0, MUSIC_TOGGLE_RAMP_SEC);
            self.playing = false;
        } else {
            _ = self.audio_ctx.resume();
            if self.element.paused() {
                if let Ok(promise) = self.element.play() {
                    wasm_bindgen_futures::spawn_local(async move {
                        _ = JsFuture::from(promise).await;
                    });
                }
            }
            self.ramp_to(MUSIC_VOLUME, MUSIC_TOGGLE_RAMP_SEC);
            self.playing = true;
        }
        log::info!("[audio] playing={}", self.playing);
        self.playing
    }
}
