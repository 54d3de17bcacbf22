//! [`Host`](crate::host::Host) implementation over the live DOM.

use std::collections::HashMap;
use std::rc::Weak;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, KeyboardEvent, Window};

use super::Runtime;
use crate::host::{
    Control, Listener, Listeners, PageFlag, PageSurface, PlayerAccess, PlayerHandle, Region,
    RegionWatcher, Scheduler, Timer,
};
use crate::player::{ClickTarget, Event, KeyPress, SurfaceKind};
use crate::selectors;

/// Poll interval and attempt count while waiting for a region to appear.
const REGION_POLL_MS: u32 = 100;
const REGION_POLL_ATTEMPTS: u32 = 50;

const SURFACES: [(&str, SurfaceKind); 3] = [
    (selectors::FULLSCREEN_OVERLAY, SurfaceKind::FullscreenOverlay),
    (selectors::PLAYER_VIDEO, SurfaceKind::Video),
    (selectors::PAUSED_OVERLAY, SurfaceKind::PausedOverlay),
];

type DomCallback = Closure<dyn FnMut(web_sys::Event)>;

/// The player object handed out by the page's accessor.
struct JsPlayer {
    player: JsValue,
    vod: bool,
}

impl JsPlayer {
    fn call(&self, method: &str, args: &Array) -> Option<JsValue> {
        let function: Function = Reflect::get(&self.player, &JsValue::from_str(method))
            .ok()?
            .dyn_into()
            .ok()?;
        function.apply(&self.player, args).ok()
    }
}

impl PlayerHandle for JsPlayer {
    fn playback_rate(&self) -> f64 {
        // NaN is never on the rate ladder
        self.call("getPlaybackRate", &Array::new())
            .and_then(|v| v.as_f64())
            .unwrap_or(f64::NAN)
    }

    fn set_playback_rate(&mut self, rate: f64) {
        let _ = self.call("setPlaybackRate", &Array::of1(&JsValue::from_f64(rate)));
    }

    fn muted(&self) -> bool {
        self.call("getMuted", &Array::new())
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }

    fn set_muted(&mut self, muted: bool) {
        let _ = self.call("setMuted", &Array::of1(&JsValue::from_bool(muted)));
    }

    fn is_vod(&self) -> bool {
        self.vod
    }
}

/// Browser page hosting the player.
pub struct WebHost {
    runtime: Weak<Runtime>,
    window: Window,
    document: Document,
    player_accessor: Function,
    player: Option<JsPlayer>,
    /// One closure per listener, kept for the page's lifetime so a listener
    /// can be unbound from inside its own callback.
    callbacks: HashMap<Listener, DomCallback>,
    bound: HashMap<Listener, (EventTarget, &'static str)>,
}

impl WebHost {
    pub(crate) fn new(
        runtime: Weak<Runtime>,
        window: Window,
        document: Document,
        player_accessor: Function,
    ) -> Self {
        Self {
            runtime,
            window,
            document,
            player_accessor,
            player: None,
            callbacks: HashMap::new(),
            bound: HashMap::new(),
        }
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn player_element(&self) -> Option<Element> {
        self.query(selectors::VIDEO_PLAYER)
    }

    fn fetch_player(&self) -> Option<JsPlayer> {
        let component = self.player_accessor.call0(&JsValue::NULL).ok()?;
        if component.is_null() || component.is_undefined() {
            return None;
        }
        let player = Reflect::get(&component, &JsValue::from_str("player")).ok()?;
        if player.is_null() || player.is_undefined() {
            return None;
        }
        let vod = Reflect::get(&component, &JsValue::from_str("props"))
            .and_then(|props| Reflect::get(&props, &JsValue::from_str("vodID")))
            .map(|id| id.is_truthy())
            .unwrap_or(false);
        Some(JsPlayer { player, vod })
    }

    fn listener_target(&self, listener: Listener) -> Option<(EventTarget, &'static str)> {
        let document: EventTarget = self.document.clone().unchecked_into();
        let window: EventTarget = self.window.clone().unchecked_into();
        match listener {
            Listener::KeyPress => Some((document, "keypress")),
            Listener::VisibilityChange => Some((document, "visibilitychange")),
            Listener::WindowBlur => Some((window, "blur")),
            Listener::WindowFocus => Some((window, "focus")),
            Listener::PlayerClick => self
                .player_element()
                .map(|e| (e.unchecked_into(), "click")),
            Listener::VolumeControlClick => self
                .query(selectors::PLAYER_VOLUME)
                .map(|e| (e.unchecked_into(), "click")),
            Listener::FullscreenMouseMove => self
                .document
                .body()
                .map(|body| (body.unchecked_into(), "mousemove")),
            Listener::PlayerEnded => self
                .fetch_player()
                .map(|p| (p.player.unchecked_into(), "ended")),
        }
    }
}

fn make_callback(runtime: Weak<Runtime>, listener: Listener) -> DomCallback {
    Closure::wrap(Box::new(move |event: web_sys::Event| {
        let Some(runtime) = runtime.upgrade() else {
            return;
        };
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(event) = translate(listener, &event, &document) {
            runtime.dispatch(event);
        }
    }) as Box<dyn FnMut(web_sys::Event)>)
}

/// Turn a DOM event into a controller event, dropping ones that do not apply.
fn translate(listener: Listener, event: &web_sys::Event, document: &Document) -> Option<Event> {
    match listener {
        Listener::KeyPress => {
            let key = event.dyn_ref::<KeyboardEvent>()?;
            let name = key.key();
            let mut chars = name.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            Some(Event::KeyPress(KeyPress {
                key: ch,
                ctrl: key.ctrl_key(),
                meta: key.meta_key(),
            }))
        }
        Listener::PlayerClick => click_target(event).map(Event::PlayerClick),
        Listener::PlayerEnded => Some(Event::PlayerEnded),
        Listener::VisibilityChange => Some(Event::VisibilityChange {
            hidden: document.hidden(),
        }),
        Listener::WindowBlur => Some(Event::WindowBlur),
        Listener::WindowFocus => Some(Event::WindowFocus),
        Listener::VolumeControlClick => Some(Event::VolumeControlClick),
        Listener::FullscreenMouseMove => {
            let target = event.target()?.dyn_into::<Element>().ok()?;
            target
                .closest(selectors::FULLSCREEN_PLAYER)
                .ok()
                .flatten()
                .map(|_| Event::FullscreenMouseMove)
        }
    }
}

/// Classify a click on the player: on a surface element itself, inside one,
/// or elsewhere (ignored).
fn click_target(event: &web_sys::Event) -> Option<ClickTarget> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    for (selector, kind) in SURFACES {
        if target.matches(selector).unwrap_or(false) {
            return Some(ClickTarget::Surface(kind));
        }
    }
    let any_surface = SURFACES.map(|(selector, _)| selector).join(",");
    target
        .closest(&any_surface)
        .ok()
        .flatten()
        .map(|_| ClickTarget::Descendant)
}

fn region_present(region: Region) -> bool {
    let selector = match region {
        Region::VodRecommendation => selectors::CANCEL_VOD_RECOMMENDATION,
    };
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(selector).ok().flatten())
        .is_some()
}

fn poll_region(runtime: Weak<Runtime>, region: Region, attempts_left: u32) {
    Timeout::new(REGION_POLL_MS, move || {
        let Some(rt) = runtime.upgrade() else {
            return;
        };
        if region_present(region) {
            rt.dispatch(Event::RegionLoaded(region));
        } else if attempts_left > 0 {
            poll_region(runtime, region, attempts_left - 1);
        }
    })
    .forget();
}

impl PlayerAccess for WebHost {
    fn current_player(&mut self) -> Option<&mut dyn PlayerHandle> {
        self.player = self.fetch_player();
        self.player.as_mut().map(|p| p as &mut dyn PlayerHandle)
    }
}

impl PageSurface for WebHost {
    fn player_present(&self) -> bool {
        self.player_element().is_some()
    }

    fn text_input_focused(&self) -> bool {
        self.document
            .active_element()
            .map(|e| e.matches(selectors::TEXT_INPUTS).unwrap_or(false))
            .unwrap_or(false)
    }

    fn is_paused(&self) -> bool {
        self.player_element()
            .and_then(|e| e.get_attribute(selectors::PAUSED_ATTRIBUTE))
            .is_some_and(|v| v == "true")
    }

    fn activate(&mut self, control: Control) {
        let element = match control {
            Control::CancelRecommendation => self.query(control.selector()),
            _ => self
                .player_element()
                .and_then(|p| p.query_selector(control.selector()).ok().flatten()),
        };
        if let Some(html) = element.and_then(|e| e.dyn_into::<HtmlElement>().ok()) {
            html.click();
        }
    }

    fn focus_player_container(&mut self) {
        if let Some(html) = self
            .query(selectors::VIDEO_PLAYER_CONTAINER)
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        {
            let _ = html.focus();
        }
    }

    fn set_page_flag(&mut self, flag: PageFlag, on: bool) {
        if let Some(body) = self.document.body() {
            let _ = body.class_list().toggle_with_force(flag.class_name(), on);
        }
    }
}

impl Listeners for WebHost {
    fn bind(&mut self, listener: Listener) {
        let Some((target, event_type)) = self.listener_target(listener) else {
            return;
        };
        let runtime = self.runtime.clone();
        let callback = self
            .callbacks
            .entry(listener)
            .or_insert_with(|| make_callback(runtime, listener));
        if target
            .add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())
            .is_ok()
        {
            self.bound.insert(listener, (target, event_type));
        }
    }

    fn unbind(&mut self, listener: Listener) {
        let Some((target, event_type)) = self.bound.remove(&listener) else {
            return;
        };
        if let Some(callback) = self.callbacks.get(&listener) {
            let _ = target
                .remove_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref());
        }
    }
}

impl Scheduler for WebHost {
    fn schedule(&mut self, timer: Timer, delay: Duration) {
        let runtime = self.runtime.clone();
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || {
            if let Some(rt) = runtime.upgrade() {
                rt.dispatch(Event::TimerFired(timer));
            }
        })
        .forget();
    }
}

impl RegionWatcher for WebHost {
    fn wait_for_region(&mut self, region: Region) {
        poll_region(self.runtime.clone(), region, REGION_POLL_ATTEMPTS);
    }
}
