//! Touch interaction for event lists: long-press to arm a delete
//! confirmation, swipe left to reveal inline delete/cancel actions.
//!
//! At most one list item is in a non-normal stage at any time; starting a
//! new gesture replaces whatever was active before. Long-press timers are
//! scheduled by the caller and identified by a generation token, so a timer
//! firing after its gesture ended is a no-op.

use std::time::Duration;

/// Minimum horizontal travel for a swipe.
pub const SWIPE_DISTANCE: f32 = 50.0;
/// Maximum vertical drift for a gesture to still count as horizontal.
pub const SWIPE_DRIFT_LIMIT: f32 = 30.0;
/// Hold time before a press arms the delete confirmation.
pub const LONG_PRESS: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStage {
    Normal,
    Swiped,
    ConfirmArmed,
}

/// How a completed press resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEnd {
    /// Plain tap on a normal item; the caller opens the item for editing.
    Tap(i64),
    /// Leftward swipe; the item is now in the swiped stage.
    Swipe(i64),
}

#[derive(Debug, Clone)]
struct ActiveTouch {
    item: i64,
    origin: (f32, f32),
    last: (f32, f32),
    token: u64,
    timer_cancelled: bool,
    /// Stage of the item when the press began; only normal items tap-open.
    began_normal: bool,
}

#[derive(Debug, Default)]
pub struct SwipeTracker {
    touch: Option<ActiveTouch>,
    active: Option<(i64, ItemStage)>,
    token_seq: u64,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a press on an item at the given pointer position. Returns the
    /// token the caller must echo back in `long_press_elapsed` when its
    /// timer fires. Any previously swiped or armed item returns to normal.
    pub fn press_began(&mut self, item: i64, x: f32, y: f32) -> u64 {
        let began_normal = self.stage_of(item) == ItemStage::Normal;
        self.active = None;
        self.token_seq += 1;
        self.touch = Some(ActiveTouch {
            item,
            origin: (x, y),
            last: (x, y),
            token: self.token_seq,
            timer_cancelled: false,
            began_normal,
        });
        self.token_seq
    }

    /// Track pointer movement. A clearly horizontal drag cancels the
    /// pending long-press: the gesture is a swipe, not a hold.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if let Some(touch) = self.touch.as_mut() {
            touch.last = (x, y);
            let dx = (x - touch.origin.0).abs();
            let dy = (y - touch.origin.1).abs();
            if dx > SWIPE_DISTANCE && dy < SWIPE_DRIFT_LIMIT {
                touch.timer_cancelled = true;
            }
        }
    }

    /// End the press. A leftward swipe puts the item in the swiped stage;
    /// an unmoved press on a normal item is a tap.
    pub fn press_ended(&mut self) -> Option<GestureEnd> {
        let touch = self.touch.take()?;
        let dx = touch.last.0 - touch.origin.0;
        let dy = (touch.last.1 - touch.origin.1).abs();

        if dx < -SWIPE_DISTANCE && dy < SWIPE_DRIFT_LIMIT {
            self.active = Some((touch.item, ItemStage::Swiped));
            return Some(GestureEnd::Swipe(touch.item));
        }

        if self.active.is_none() && touch.began_normal && dx.abs() < SWIPE_DISTANCE {
            return Some(GestureEnd::Tap(touch.item));
        }

        None
    }

    /// The long-press timer fired. Arms the delete confirmation if the
    /// press is still held, unmoved, and the token is current.
    pub fn long_press_elapsed(&mut self, item: i64, token: u64) {
        let armed = matches!(
            &self.touch,
            Some(touch) if touch.item == item && touch.token == token && !touch.timer_cancelled
        );
        if armed {
            self.active = Some((item, ItemStage::ConfirmArmed));
        }
    }

    /// Confirm the pending delete. Returns the item to delete and resets
    /// the list to normal; issuing the delete call is the caller's job.
    pub fn confirm(&mut self) -> Option<i64> {
        self.active.take().map(|(item, _)| item)
    }

    /// Cancel the pending delete without deleting anything.
    pub fn dismiss(&mut self) {
        self.active = None;
    }

    pub fn stage_of(&self, item: i64) -> ItemStage {
        match self.active {
            Some((active_item, stage)) if active_item == item => stage,
            _ => ItemStage::Normal,
        }
    }

    pub fn active(&self) -> Option<(i64, ItemStage)> {
        self.active
    }
}
