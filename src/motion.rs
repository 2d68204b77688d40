//! Motion presets and scroll-driven hooks shared by every section.
//!
//! Presets are plain data rendered to inline styles; the hooks wrap the
//! browser primitives (scroll events, IntersectionObserver, animation
//! frames) behind signals so sections stay declarative.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Shared easing curve for entrances.
pub const EASE_OUT: &str = "cubic-bezier(0.22, 1, 0.36, 1)";

/// Entrance delay between hero blocks.
pub const HERO_STAGGER_S: f64 = 0.15;
/// Entrance delay between sibling cards inside a revealed section.
pub const CARD_STAGGER_S: f64 = 0.1;

/// Navbar switches to its compact style past this scroll offset.
pub const SCROLL_THRESHOLD_PX: f64 = 30.0;

/// A named entrance: hidden transform/opacity plus timing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionPreset {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub duration_s: f64,
    pub ease: &'static str,
}

pub const FADE_UP: MotionPreset =
    MotionPreset { x: 0.0, y: 40.0, scale: 1.0, duration_s: 0.7, ease: EASE_OUT };
pub const FADE_IN: MotionPreset =
    MotionPreset { x: 0.0, y: 0.0, scale: 1.0, duration_s: 0.6, ease: "ease" };
pub const SCALE_IN: MotionPreset =
    MotionPreset { x: 0.0, y: 0.0, scale: 0.85, duration_s: 0.7, ease: EASE_OUT };
pub const SLIDE_RIGHT: MotionPreset =
    MotionPreset { x: -60.0, y: 0.0, scale: 1.0, duration_s: 0.7, ease: EASE_OUT };
pub const SLIDE_LEFT: MotionPreset =
    MotionPreset { x: 60.0, y: 0.0, scale: 1.0, duration_s: 0.7, ease: EASE_OUT };

impl MotionPreset {
    /// Inline style for the element at either end of the entrance, with a
    /// per-item delay for staggered lists.
    pub fn style(&self, visible: bool, delay_s: f64) -> String {
        let transition = format!(
            "transition: opacity {dur}s {ease} {delay:.2}s, transform {dur}s {ease} {delay:.2}s;",
            dur = self.duration_s,
            ease = self.ease,
            delay = delay_s,
        );
        if visible {
            format!("opacity: 1; transform: none; {transition}")
        } else {
            format!(
                "opacity: 0; transform: translate({x}px, {y}px) scale({scale}); {transition}",
                x = self.x,
                y = self.y,
                scale = self.scale,
            )
        }
    }
}

/// `true` once the page has scrolled past the navbar threshold.
pub fn has_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

const PARALLAX_INPUT_END: f64 = 0.3;
const PARALLAX_OUTPUT_END: f64 = -80.0;

/// Hero parallax: maps overall scroll progress [0, 0.3] linearly onto a
/// [0, -80] px vertical offset, clamped outside that range.
pub fn parallax_offset(progress: f64) -> f64 {
    (progress / PARALLAX_INPUT_END).clamp(0.0, 1.0) * PARALLAX_OUTPUT_END
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    NotRevealed,
    /// Terminal. A section never un-reveals within a page load.
    Revealed,
}

/// One-shot gate behind every reveal-on-scroll section.
#[derive(Debug, Clone, Copy)]
pub struct RevealGate {
    threshold: f64,
    phase: RevealPhase,
}

impl RevealGate {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, phase: RevealPhase::NotRevealed }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Feed the latest visibility ratio. Returns `true` exactly once, the
    /// first time the ratio reaches the threshold. Scrolling the section out
    /// of view and back never fires again.
    pub fn observe(&mut self, ratio: f64) -> bool {
        match self.phase {
            RevealPhase::Revealed => false,
            RevealPhase::NotRevealed if ratio >= self.threshold => {
                self.phase = RevealPhase::Revealed;
                true
            }
            RevealPhase::NotRevealed => false,
        }
    }
}

fn scroll_offset() -> f64 {
    web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn scroll_progress() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let Some(root) = window.document().and_then(|d| d.document_element()) else {
        return 0.0;
    };
    let viewport = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let track = f64::from(root.scroll_height()) - viewport;
    if track <= 0.0 {
        0.0
    } else {
        (window.scroll_y().unwrap_or(0.0) / track).clamp(0.0, 1.0)
    }
}

/// Latest vertical scroll offset, in px. The window listener lives exactly
/// as long as the calling component.
pub fn use_scroll_offset() -> ReadSignal<f64> {
    let (offset, set_offset) = signal(scroll_offset());
    let handle = SendWrapper::new(window_event_listener(ev::scroll, move |_| {
        set_offset.set(scroll_offset());
    }));
    on_cleanup(move || handle.take().remove());
    offset
}

/// Overall page scroll progress in 0..=1, same listener scoping as
/// [`use_scroll_offset`].
pub fn use_scroll_progress() -> ReadSignal<f64> {
    let (progress, set_progress) = signal(scroll_progress());
    let handle = SendWrapper::new(window_event_listener(ev::scroll, move |_| {
        set_progress.set(scroll_progress());
    }));
    on_cleanup(move || handle.take().remove());
    progress
}

/// Flips to `true` one frame after mount, so mount entrances get a painted
/// hidden frame to transition from. Never flips back.
pub fn use_entrance() -> ReadSignal<bool> {
    let (entered, set_entered) = signal(false);
    Effect::new(move || {
        request_animation_frame(move || set_entered.set(true));
    });
    entered
}

/// Reveal-on-scroll wiring: attach the returned node ref to the section
/// wrapper; the signal flips once when the wrapper's intersection ratio
/// first reaches `threshold`.
pub fn use_reveal(threshold: f64) -> (NodeRef<html::Div>, ReadSignal<bool>) {
    let node_ref = NodeRef::<html::Div>::new();
    let (revealed, set_revealed) = signal(false);

    Effect::new(move || {
        if revealed.get_untracked() {
            return;
        }
        let Some(el) = node_ref.get() else {
            return;
        };

        let mut gate = RevealGate::new(threshold);
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if gate.observe(entry.intersection_ratio()) {
                        set_revealed.set(true);
                        observer.disconnect();
                    }
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            observer.observe(&el);
        }
        // The observer disconnects itself once the gate fires.
        callback.forget();
    });

    (node_ref, revealed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_threshold_is_boundary_exact() {
        assert!(!has_scrolled(0.0));
        assert!(!has_scrolled(29.9));
        assert!(!has_scrolled(30.0));
        assert!(has_scrolled(30.1));
        assert!(has_scrolled(50.0));
    }

    #[test]
    fn reveal_gate_fires_exactly_once() {
        let mut gate = RevealGate::new(0.2);
        assert!(!gate.observe(0.0));
        assert!(!gate.observe(0.19));
        assert_eq!(gate.phase(), RevealPhase::NotRevealed);
        assert!(gate.observe(0.2));
        assert_eq!(gate.phase(), RevealPhase::Revealed);
        // Out of view and back in: no second transition.
        assert!(!gate.observe(0.0));
        assert!(!gate.observe(1.0));
        assert_eq!(gate.phase(), RevealPhase::Revealed);
    }

    #[test]
    fn parallax_maps_and_clamps() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(0.15), -40.0);
        assert_eq!(parallax_offset(0.3), -80.0);
        assert_eq!(parallax_offset(0.9), -80.0);
        assert_eq!(parallax_offset(-0.1), 0.0);
    }

    #[test]
    fn hidden_style_carries_preset_transform() {
        let style = FADE_UP.style(false, 0.0);
        assert!(style.contains("opacity: 0"));
        assert!(style.contains("translate(0px, 40px)"));
        let style = SLIDE_RIGHT.style(false, 0.0);
        assert!(style.contains("translate(-60px, 0px)"));
    }

    #[test]
    fn visible_style_keeps_staggered_delay() {
        let style = FADE_UP.style(true, 2.0 * CARD_STAGGER_S);
        assert!(style.contains("opacity: 1"));
        assert!(style.contains("0.20s"));
    }
}
