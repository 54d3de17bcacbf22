//! Browser host for wasm32 builds.
//!
//! [`PlayerControls`] is exported to JavaScript. It owns the controller and a
//! [`WebHost`], and funnels every DOM callback through one queue: a handler
//! that clicks a player button synchronously triggers more DOM events, and
//! those are processed after the current handler returns instead of
//! re-entering it.

mod host;

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::{FeatureConfig, FeatureId, Settings};
use crate::host::Region;
use crate::player::{Event, PlayerControlController};

pub use host::WebHost;

enum Job {
    Event(Event),
    SetFeature(FeatureId, bool),
}

pub(crate) struct Runtime {
    controller: RefCell<PlayerControlController<Settings>>,
    host: RefCell<WebHost>,
    queue: RefCell<VecDeque<Job>>,
    draining: Cell<bool>,
}

impl Runtime {
    pub(crate) fn dispatch(&self, event: Event) {
        self.enqueue(Job::Event(event));
    }

    fn enqueue(&self, job: Job) {
        self.queue.borrow_mut().push_back(job);
        if self.draining.replace(true) {
            return;
        }
        loop {
            let next = self.queue.borrow_mut().pop_front();
            let Some(job) = next else {
                break;
            };
            let mut controller = self.controller.borrow_mut();
            let mut host = self.host.borrow_mut();
            match job {
                Job::Event(event) => controller.handle(&mut *host, event),
                Job::SetFeature(id, enabled) => controller.set_feature(&mut *host, id, enabled),
            }
        }
        self.draining.set(false);
    }
}

/// Player controls attached to the current page.
#[wasm_bindgen]
pub struct PlayerControls {
    runtime: Rc<Runtime>,
}

#[wasm_bindgen]
impl PlayerControls {
    /// `player_accessor` returns the mounted player component
    /// (`{ player, props: { vodID } }`) or `null`. `config_toml` optionally
    /// seeds feature values.
    #[wasm_bindgen(constructor)]
    pub fn new(
        player_accessor: js_sys::Function,
        config_toml: Option<String>,
    ) -> Result<PlayerControls, JsValue> {
        let config = match config_toml {
            Some(content) => FeatureConfig::from_toml_str(&content)
                .map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => FeatureConfig::default(),
        };
        let settings = Settings::from_config(&config);

        let window =
            web_sys::window().ok_or_else(|| JsValue::from_str("No window object available"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document available"))?;

        let runtime = Rc::new_cyclic(|weak| Runtime {
            controller: RefCell::new(PlayerControlController::new(settings)),
            host: RefCell::new(WebHost::new(weak.clone(), window, document, player_accessor)),
            queue: RefCell::new(VecDeque::new()),
            draining: Cell::new(false),
        });
        runtime
            .controller
            .borrow_mut()
            .attach(&mut *runtime.host.borrow_mut());

        Ok(PlayerControls { runtime })
    }

    /// Call once per player mount.
    #[wasm_bindgen(js_name = notifyPlayerLoad)]
    pub fn notify_player_load(&self) {
        self.runtime.dispatch(Event::PlayerLoad);
    }

    /// Report that a named UI region appeared (e.g. `vodRecommendation`).
    #[wasm_bindgen(js_name = notifyRegionLoaded)]
    pub fn notify_region_loaded(&self, name: &str) {
        if name == Region::VodRecommendation.name() {
            self.runtime.dispatch(Event::RegionLoaded(Region::VodRecommendation));
        }
    }

    /// Change a feature by its external id. Returns false for unknown ids.
    #[wasm_bindgen(js_name = setFeature)]
    pub fn set_feature(&self, id: &str, enabled: bool) -> bool {
        let Some(id) = FeatureId::from_id(id) else {
            return false;
        };
        self.runtime.enqueue(Job::SetFeature(id, enabled));
        true
    }
}
