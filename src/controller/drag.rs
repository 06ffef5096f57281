//! Pointer-driven card repositioning
//!
//! Cards render at their resolved geometry until the user drags them.
//! A press inside a card arms a drag; movement beyond a small threshold
//! starts it (so plain clicks never move cards); the dragged position is
//! remembered per card key for the rest of the session and takes
//! precedence over the layout resolver's output.

use std::collections::HashMap;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::model::{CardGeometry, CardKey};

/// Tuning for drag gesture detection.
#[derive(Clone, Copy, Debug)]
pub struct DragConfig {
    /// Minimum pointer movement in cells before a drag starts.
    pub threshold_cells: u16,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self { threshold_cells: 1 }
    }
}

#[derive(Clone, Copy, Debug)]
struct ActiveDrag {
    key: CardKey,
    press_column: u16,
    press_row: u16,
    origin_x: f64,
    origin_y: f64,
    started: bool,
}

/// Session-scoped drag state and position overrides.
pub struct DragLayer {
    config: DragConfig,
    active: Option<ActiveDrag>,
    overrides: HashMap<CardKey, (f64, f64)>,
}

impl DragLayer {
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            active: None,
            overrides: HashMap::new(),
        }
    }

    /// Apply this session's override, if any, to a resolved geometry.
    /// Size always comes from the resolver; only placement is overridden.
    pub fn positioned(&self, key: CardKey, resolved: CardGeometry) -> CardGeometry {
        match self.overrides.get(&key) {
            Some(&(x, y)) => resolved.moved_to(x, y),
            None => resolved,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.active.as_ref().is_some_and(|drag| drag.started)
    }

    /// Feed a mouse event. `cards` holds the currently displayed
    /// geometries in render order; the topmost (last) hit wins.
    pub fn handle_mouse(&mut self, event: MouseEvent, cards: &[(CardKey, CardGeometry)]) {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let x = f64::from(event.column);
                let y = f64::from(event.row);
                let hit = cards
                    .iter()
                    .rev()
                    .find(|(_, geometry)| geometry.contains(x, y));
                if let Some(&(key, geometry)) = hit {
                    self.active = Some(ActiveDrag {
                        key,
                        press_column: event.column,
                        press_row: event.row,
                        origin_x: geometry.x,
                        origin_y: geometry.y,
                        started: false,
                    });
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some(drag) = self.active.as_mut() else {
                    return;
                };

                let dx = i32::from(event.column) - i32::from(drag.press_column);
                let dy = i32::from(event.row) - i32::from(drag.press_row);

                if !drag.started {
                    let moved = dx.unsigned_abs().max(dy.unsigned_abs());
                    if moved < u32::from(self.config.threshold_cells) {
                        return;
                    }
                    drag.started = true;
                    tracing::debug!(card = drag.key.id(), "Drag started");
                }

                self.overrides.insert(
                    drag.key,
                    (drag.origin_x + f64::from(dx), drag.origin_y + f64::from(dy)),
                );
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(drag) = self.active.take() {
                    if drag.started {
                        tracing::debug!(card = drag.key.id(), "Drag finished");
                    }
                }
            }
            _ => {}
        }
    }
}

impl Default for DragLayer {
    fn default() -> Self {
        Self::new(DragConfig::default())
    }
}
