// src/tests/mod.rs
use std::cell::RefCell;
use std::rc::Rc;

use crate::components::catalog::{Catalog, EpisodeRecord};
use crate::components::debounce::Schedule;
use crate::components::modal::MediaElement;

mod catalog_tests;

fn shipped_catalog() -> Catalog {
    Catalog::embedded()
}

fn small_catalog() -> Catalog {
    Catalog::new(vec![
        EpisodeRecord::new("01-02-2025", "Rust ownership", "assets/ownership.m4a"),
        EpisodeRecord::new("02-02-2025", "Python generators", "assets/generators.mp4"),
        EpisodeRecord::new("03-02-2025", "Borrowing in RUST", "assets/borrowing.m4a"),
    ])
}

/// In-memory stand-in for the page's <video> element.
#[derive(Default)]
struct FakeMedia {
    state: RefCell<FakeMediaState>,
}

#[derive(Default, Debug)]
struct FakeMediaState {
    source: Option<String>,
    position: f64,
    playing: bool,
    reject_play: bool,
    play_requests: usize,
    calls: Vec<String>,
}

impl FakeMedia {
    fn rejecting_autoplay() -> Self {
        let media = FakeMedia::default();
        media.state.borrow_mut().reject_play = true;
        media
    }

    fn source(&self) -> Option<String> {
        self.state.borrow().source.clone()
    }

    fn position(&self) -> f64 {
        self.state.borrow().position
    }

    fn playing(&self) -> bool {
        self.state.borrow().playing
    }

    fn play_requests(&self) -> usize {
        self.state.borrow().play_requests
    }

    fn calls(&self) -> Vec<String> {
        self.state.borrow().calls.clone()
    }

    /// Pretends the listener has been playing for a while.
    fn advance(&self, seconds: f64) {
        self.state.borrow_mut().position += seconds;
    }
}

impl MediaElement for FakeMedia {
    fn load_source(&self, src: &str) {
        let mut state = self.state.borrow_mut();
        state.source = Some(src.to_string());
        state.position = 0.0;
        state.playing = false;
        state.calls.push(format!("load {}", src));
    }

    fn pause(&self) {
        let mut state = self.state.borrow_mut();
        state.playing = false;
        state.calls.push("pause".to_string());
    }

    fn seek(&self, seconds: f64) {
        let mut state = self.state.borrow_mut();
        state.position = seconds;
        state.calls.push(format!("seek {}", seconds));
    }

    fn current_position(&self) -> f64 {
        self.state.borrow().position
    }

    fn request_play(&self) {
        let mut state = self.state.borrow_mut();
        state.play_requests += 1;
        state.playing = !state.reject_play;
        state.calls.push("play".to_string());
    }
}

type Slots = Rc<RefCell<Vec<Option<Box<dyn FnOnce()>>>>>;

/// Scheduler whose tasks only run when the test says so.
#[derive(Clone, Default)]
struct ManualScheduler {
    slots: Slots,
    delays: Rc<RefCell<Vec<u32>>>,
}

struct ManualHandle {
    slot: usize,
    slots: Slots,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.slots.borrow_mut()[self.slot] = None;
    }
}

impl Schedule for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, millis: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
        self.delays.borrow_mut().push(millis);
        let mut slots = self.slots.borrow_mut();
        slots.push(Some(task));
        ManualHandle {
            slot: slots.len() - 1,
            slots: Rc::clone(&self.slots),
        }
    }
}

impl ManualScheduler {
    fn live(&self) -> usize {
        self.slots.borrow().iter().filter(|slot| slot.is_some()).count()
    }

    fn delays(&self) -> Vec<u32> {
        self.delays.borrow().clone()
    }

    fn fire_all(&self) {
        let tasks: Vec<_> = self
            .slots
            .borrow_mut()
            .iter_mut()
            .filter_map(Option::take)
            .collect();
        for task in tasks {
            task();
        }
    }
}
